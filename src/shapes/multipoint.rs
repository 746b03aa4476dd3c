use super::{
    ShapeCodec, from_count, geometry_name, read_coordinates, to_count, write_bbox_placeholder,
    write_end_marker, write_tags,
};
use crate::binary::{BinaryBuffer, BinaryParser};
use crate::error::{Result, ShapeError};
use crate::types::{BBOX_PLACEHOLDER_DOUBLES, ShapeType};
use geo::{Geometry, MultiPoint, Point};

/// MultiPoint codec.
///
/// Body: `[bbox][num_points][coords..]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiPointCodec;

impl ShapeCodec for MultiPointCodec {
    fn shape_type(&self) -> ShapeType {
        ShapeType::MultiPoint
    }

    /// Write a full multipoint record; point order is preserved.
    fn serialize(&self, geometry: &Geometry<f64>, buffer: &mut BinaryBuffer) -> Result<()> {
        let Geometry::MultiPoint(points) = geometry else {
            return Err(ShapeError::TypeMismatch {
                expected: "MultiPoint",
                found: geometry_name(geometry),
            });
        };
        let num_points = to_count(points.0.len(), "point count")?;

        write_tags(buffer, ShapeType::MultiPoint);
        write_bbox_placeholder(buffer);
        buffer.put_int(num_points);
        for point in points {
            buffer.put_double(point.x());
            buffer.put_double(point.y());
        }
        write_end_marker(buffer);
        Ok(())
    }

    /// Skip the placeholder bounding box, then read the counted points.
    fn deserialize(&self, parser: &mut BinaryParser<'_>) -> Result<Geometry<f64>> {
        parser.skip_doubles(BBOX_PLACEHOLDER_DOUBLES)?;
        let num_points = from_count(parser.read_int()?, "point count")?;

        let points = read_coordinates(parser, num_points)?
            .into_iter()
            .map(Point::from)
            .collect();
        Ok(Geometry::MultiPoint(MultiPoint::new(points)))
    }
}
