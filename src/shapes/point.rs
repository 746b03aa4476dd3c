use super::{ShapeCodec, geometry_name, write_end_marker, write_tags};
use crate::binary::{BinaryBuffer, BinaryParser};
use crate::error::{Result, ShapeError};
use crate::types::ShapeType;
use geo::{Geometry, Point};

/// Fixed-size record: `[shape][point][x][y][end]`, no header block.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointCodec;

impl ShapeCodec for PointCodec {
    /// Always [`ShapeType::Point`].
    fn shape_type(&self) -> ShapeType {
        ShapeType::Point
    }

    /// Write a full point record; any other geometry is a type mismatch.
    fn serialize(&self, geometry: &Geometry<f64>, buffer: &mut BinaryBuffer) -> Result<()> {
        let Geometry::Point(point) = geometry else {
            return Err(ShapeError::TypeMismatch {
                expected: "Point",
                found: geometry_name(geometry),
            });
        };

        write_tags(buffer, ShapeType::Point);
        buffer.put_double(point.x());
        buffer.put_double(point.y());
        write_end_marker(buffer);
        Ok(())
    }

    /// Read `x` then `y`. The tag bytes are not checked here.
    fn deserialize(&self, parser: &mut BinaryParser<'_>) -> Result<Geometry<f64>> {
        let x = parser.read_double()?;
        let y = parser.read_double()?;
        Ok(Geometry::Point(Point::new(x, y)))
    }
}
