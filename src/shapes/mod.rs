//! Per-kind shape codecs.
//!
//! Each codec pairs a serializer and a deserializer for one [`ShapeType`].
//! Serializers write a complete record (tags, body, end marker);
//! deserializers expect the two tag bytes to be consumed already and read
//! only the body. Codecs are stateless unit structs, so the `'static`
//! references handed out by [`codec_for`] can be shared across threads.

mod multipoint;
mod point;
mod polygon;
mod polyline;
mod undefined;

pub use multipoint::MultiPointCodec;
pub use point::PointCodec;
pub use polygon::PolygonCodec;
pub use polyline::PolylineCodec;
pub use undefined::UndefinedCodec;

use crate::binary::{BinaryBuffer, BinaryParser};
use crate::error::{Result, ShapeError};
use crate::types::{BBOX_PLACEHOLDER_DOUBLES, END_MARKER, RecordKind, ShapeType};
use bytes::Bytes;
use geo::{Coord, Geometry};

pub trait ShapeCodec: Send + Sync {
    fn shape_type(&self) -> ShapeType;

    /// Append one full record for `geometry` to `buffer`.
    ///
    /// Nothing is written when the geometry is rejected.
    fn serialize(&self, geometry: &Geometry<f64>, buffer: &mut BinaryBuffer) -> Result<()>;

    /// Decode a record body; the cursor must sit right after the tag bytes.
    fn deserialize(&self, parser: &mut BinaryParser<'_>) -> Result<Geometry<f64>>;

    fn to_bytes(&self, geometry: &Geometry<f64>) -> Result<Bytes> {
        let mut buffer = BinaryBuffer::new();
        self.serialize(geometry, &mut buffer)?;
        Ok(buffer.byte_array())
    }
}

/// Codec registered for a geometry tag.
pub fn codec_for(shape_type: ShapeType) -> &'static dyn ShapeCodec {
    match shape_type {
        ShapeType::Undefined => &UndefinedCodec,
        ShapeType::Point => &PointCodec,
        ShapeType::Polyline => &PolylineCodec,
        ShapeType::Polygon => &PolygonCodec,
        ShapeType::MultiPoint => &MultiPointCodec,
    }
}

pub(crate) fn geometry_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

pub(crate) fn write_tags(buffer: &mut BinaryBuffer, shape_type: ShapeType) {
    buffer.put_byte(RecordKind::Shape.tag() as i8);
    buffer.put_byte(shape_type.tag() as i8);
}

/// Bounding box slot of the header; the engine ignores it, so it stays zero.
pub(crate) fn write_bbox_placeholder(buffer: &mut BinaryBuffer) {
    for _ in 0..BBOX_PLACEHOLDER_DOUBLES {
        buffer.put_double(0.0);
    }
}

pub(crate) fn write_coordinates<'a>(
    buffer: &mut BinaryBuffer,
    coords: impl IntoIterator<Item = &'a Coord<f64>>,
) {
    for coord in coords {
        buffer.put_double(coord.x);
        buffer.put_double(coord.y);
    }
}

pub(crate) fn write_end_marker(buffer: &mut BinaryBuffer) {
    buffer.put_byte(END_MARKER);
}

pub(crate) fn read_coordinates(
    parser: &mut BinaryParser<'_>,
    count: usize,
) -> Result<Vec<Coord<f64>>> {
    let mut coords = Vec::with_capacity(count.min(parser.remaining() / 16));
    for _ in 0..count {
        let x = parser.read_double()?;
        let y = parser.read_double()?;
        coords.push(Coord { x, y });
    }
    Ok(coords)
}

pub(crate) fn to_count(value: usize, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        ShapeError::InvalidGeometry(format!("{} {} does not fit the record header", what, value))
    })
}

pub(crate) fn from_count(value: i32, what: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| ShapeError::InvalidGeometry(format!("negative {}: {}", what, value)))
}
