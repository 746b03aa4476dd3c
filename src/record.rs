//! Whole-record encoding and decoding.
//!
//! ```rust
//! use geospark_shape::{deserialize_geometry, serialize_geometry};
//! use geo::{Geometry, Point};
//!
//! let point = Geometry::Point(Point::new(1.0, 2.0));
//! let bytes = serialize_geometry(&point)?;
//! assert_eq!(deserialize_geometry(&bytes)?, point);
//! # Ok::<(), geospark_shape::ShapeError>(())
//! ```

use crate::binary::{BinaryBuffer, BinaryParser};
use crate::config::CodecConfig;
use crate::envelope::Envelope;
use crate::error::{Operation, Result, ShapeError};
use crate::shapes::{ShapeCodec, codec_for, geometry_name};
use crate::types::{END_MARKER, RecordKind, ShapeType};
use bytes::Bytes;
use geo::Geometry;

/// Codec chosen for writing `geometry`.
pub fn codec_for_geometry(geometry: &Geometry<f64>) -> Result<&'static dyn ShapeCodec> {
    let shape_type = match geometry {
        Geometry::Point(_) => ShapeType::Point,
        Geometry::LineString(_) | Geometry::MultiLineString(_) => ShapeType::Polyline,
        Geometry::MultiPoint(_) => ShapeType::MultiPoint,
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => {
            return Err(ShapeError::Unsupported {
                kind: ShapeType::Polygon,
                operation: Operation::Serialize,
            });
        }
        other => {
            return Err(ShapeError::TypeMismatch {
                expected: "Point, LineString, MultiLineString or MultiPoint",
                found: geometry_name(other),
            });
        }
    };
    Ok(codec_for(shape_type))
}

/// Record encoder/decoder carrying a [`CodecConfig`].
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec after validating `config`.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Serialize one geometry into a fresh record.
    pub fn serialize(&self, geometry: &Geometry<f64>) -> Result<Bytes> {
        let mut buffer = BinaryBuffer::with_capacity(self.config.initial_capacity);
        self.serialize_into(geometry, &mut buffer)?;
        Ok(buffer.byte_array())
    }

    /// Append a record to an existing buffer, e.g. to build a record stream.
    pub fn serialize_into(
        &self,
        geometry: &Geometry<f64>,
        buffer: &mut BinaryBuffer,
    ) -> Result<()> {
        codec_for_geometry(geometry)?.serialize(geometry, buffer)
    }

    /// Decode exactly one record.
    ///
    /// The end marker may be missing; bytes after it are rejected.
    pub fn deserialize(&self, data: &[u8]) -> Result<Geometry<f64>> {
        let mut parser = BinaryParser::new(data);
        let geometry = read_body(&mut parser)?;

        match parser.peek_byte() {
            None => log::debug!("Record of {} bytes has no end marker", data.len()),
            Some(END_MARKER) => {
                parser.read_byte()?;
            }
            Some(other) if self.config.require_end_marker => {
                return Err(ShapeError::InvalidGeometry(format!(
                    "expected end marker {:#04x} at byte {}, found {:#04x}",
                    END_MARKER as u8,
                    parser.position(),
                    other as u8
                )));
            }
            Some(other) => {
                log::warn!(
                    "Ignoring unexpected end marker {:#04x} at byte {}",
                    other as u8,
                    parser.position()
                );
                parser.read_byte()?;
            }
        }

        if !parser.is_empty() {
            return Err(ShapeError::InvalidGeometry(format!(
                "{} trailing bytes after record",
                parser.remaining()
            )));
        }

        Ok(geometry)
    }

    /// Iterate over back-to-back records; every record must carry its end marker.
    pub fn reader<'a>(&self, data: &'a [u8]) -> RecordReader<'a> {
        RecordReader::new(data)
    }

    /// Decode one record together with its envelope.
    ///
    /// The header's bounding box is a zero placeholder, so the envelope is
    /// computed from the decoded coordinates; `None` for empty geometries.
    pub fn deserialize_with_envelope(
        &self,
        data: &[u8],
    ) -> Result<(Geometry<f64>, Option<Envelope>)> {
        let geometry = self.deserialize(data)?;
        let envelope = Envelope::of(&geometry);
        Ok((geometry, envelope))
    }

    /// Decode a record stream, keeping geometries whose envelope intersects `window`.
    pub fn read_intersecting(&self, data: &[u8], window: &Envelope) -> Result<Vec<Geometry<f64>>> {
        let mut matches = Vec::new();
        for record in self.reader(data) {
            let geometry = record?;
            if Envelope::of(&geometry).is_some_and(|env| env.intersects(window)) {
                matches.push(geometry);
            }
        }
        Ok(matches)
    }
}

fn read_body(parser: &mut BinaryParser<'_>) -> Result<Geometry<f64>> {
    let kind = RecordKind::from_tag(parser.read_byte()? as u8)?;
    if kind != RecordKind::Shape {
        return Err(ShapeError::UnsupportedRecord(kind));
    }

    let shape_type = ShapeType::from_tag(parser.read_byte()? as u8)?;
    log::debug!("Decoding {} record at byte {}", shape_type, parser.position());
    codec_for(shape_type).deserialize(parser)
}

/// Iterator over a buffer of concatenated records.
///
/// Stops after yielding the first error.
pub struct RecordReader<'a> {
    parser: BinaryParser<'a>,
    failed: bool,
}

impl<'a> RecordReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            parser: BinaryParser::new(data),
            failed: false,
        }
    }

    fn next_record(&mut self) -> Result<Geometry<f64>> {
        let geometry = read_body(&mut self.parser)?;
        let position = self.parser.position();
        let marker = self.parser.read_byte()?;
        if marker != END_MARKER {
            return Err(ShapeError::InvalidGeometry(format!(
                "expected end marker {:#04x} at byte {}, found {:#04x}",
                END_MARKER as u8, position, marker as u8
            )));
        }
        Ok(geometry)
    }
}

impl Iterator for RecordReader<'_> {
    type Item = Result<Geometry<f64>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.parser.is_empty() {
            return None;
        }

        let result = self.next_record();
        self.failed = result.is_err();
        Some(result)
    }
}

/// Serialize with the default configuration.
pub fn serialize_geometry(geometry: &Geometry<f64>) -> Result<Bytes> {
    Codec::default().serialize(geometry)
}

/// Deserialize one record with the default configuration.
pub fn deserialize_geometry(data: &[u8]) -> Result<Geometry<f64>> {
    Codec::default().deserialize(data)
}
