use super::{
    ShapeCodec, from_count, geometry_name, read_coordinates, to_count, write_bbox_placeholder,
    write_coordinates, write_end_marker, write_tags,
};
use crate::binary::{BinaryBuffer, BinaryParser};
use crate::error::{Result, ShapeError};
use crate::offsets::OffsetsReader;
use crate::types::{BBOX_PLACEHOLDER_DOUBLES, ShapeType};
use geo::{Geometry, LineString, MultiLineString};

/// LineString and MultiLineString, both carried as ESRI polylines.
///
/// Body: `[bbox][num_parts][num_points][offsets..][coords..]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolylineCodec;

impl PolylineCodec {
    fn write_parts(buffer: &mut BinaryBuffer, parts: &[LineString<f64>]) -> Result<()> {
        let num_parts = to_count(parts.len(), "part count")?;
        let num_points = to_count(parts.iter().map(|p| p.0.len()).sum(), "point count")?;

        write_tags(buffer, ShapeType::Polyline);
        write_bbox_placeholder(buffer);
        buffer.put_int(num_parts);
        buffer.put_int(num_points);

        let mut offset = 0;
        for part in parts {
            buffer.put_int(offset);
            offset += part.0.len() as i32;
        }

        for part in parts {
            write_coordinates(buffer, &part.0);
        }
        write_end_marker(buffer);
        Ok(())
    }
}

impl ShapeCodec for PolylineCodec {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Polyline
    }

    fn serialize(&self, geometry: &Geometry<f64>, buffer: &mut BinaryBuffer) -> Result<()> {
        match geometry {
            Geometry::LineString(line) => Self::write_parts(buffer, std::slice::from_ref(line)),
            Geometry::MultiLineString(lines) => Self::write_parts(buffer, &lines.0),
            other => Err(ShapeError::TypeMismatch {
                expected: "LineString or MultiLineString",
                found: geometry_name(other),
            }),
        }
    }

    fn deserialize(&self, parser: &mut BinaryParser<'_>) -> Result<Geometry<f64>> {
        parser.skip_doubles(BBOX_PLACEHOLDER_DOUBLES)?;
        let num_parts = parser.read_int()?;
        let num_points = parser.read_int()?;

        if num_parts <= 0 {
            return Err(ShapeError::InvalidGeometry(format!(
                "polyline needs at least one part, got {}",
                num_parts
            )));
        }
        from_count(num_points, "point count")?;

        let offsets = OffsetsReader::read_offsets(parser, num_parts, num_points)?;
        let mut lines = Vec::with_capacity(num_parts as usize);
        for i in 0..num_parts as usize {
            let coords = read_coordinates(parser, OffsetsReader::part_len(&offsets, i))?;
            lines.push(LineString::new(coords));
        }

        if lines.len() == 1 {
            Ok(Geometry::LineString(lines.remove(0)))
        } else {
            Ok(Geometry::MultiLineString(MultiLineString::new(lines)))
        }
    }
}
