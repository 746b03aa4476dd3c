//! On-wire tags of a shape record.
//!
//! Every record starts with two bytes: a [`RecordKind`] telling the engine
//! which serde family produced it, followed by a [`ShapeType`] naming the
//! geometry kind. Records are closed by [`END_MARKER`].

use crate::error::{Result, ShapeError};
use serde::{Deserialize, Serialize};

/// Terminator byte written after every serialized record (0x81).
pub const END_MARKER: i8 = -127;

/// Number of placeholder doubles standing in for the record's bounding box.
pub const BBOX_PLACEHOLDER_DOUBLES: usize = 4;

/// First byte of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Plain shape record, the only kind this crate reads and writes
    Shape,
    /// Circle: a shape plus a radius
    Circle,
    /// Generic geometry serde
    Geometry,
}

impl RecordKind {
    /// Wire value of this kind.
    pub const fn tag(self) -> u8 {
        match self {
            Self::Shape => 0,
            Self::Circle => 1,
            Self::Geometry => 2,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Shape),
            1 => Ok(Self::Circle),
            2 => Ok(Self::Geometry),
            value => Err(ShapeError::UnknownTag {
                field: "record kind",
                value,
            }),
        }
    }
}

/// Second byte of a record. Values follow the ESRI shape-type numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeType {
    Undefined,
    Point,
    Polyline,
    Polygon,
    MultiPoint,
}

impl ShapeType {
    pub const fn tag(self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Point => 1,
            Self::Polyline => 3,
            Self::Polygon => 5,
            Self::MultiPoint => 8,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Undefined),
            1 => Ok(Self::Point),
            3 => Ok(Self::Polyline),
            5 => Ok(Self::Polygon),
            8 => Ok(Self::MultiPoint),
            value => Err(ShapeError::UnknownTag {
                field: "shape type",
                value,
            }),
        }
    }

    /// Human-readable name, used in logs and errors.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Point => "Point",
            Self::Polyline => "Polyline",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
