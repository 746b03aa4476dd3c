//! Error type shared by every codec in the crate.

use crate::types::{RecordKind, ShapeType};
use thiserror::Error;

/// Direction of a codec call, used when reporting unsupported paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Geometry to bytes
    Serialize,
    /// Bytes to geometry
    Deserialize,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize => write!(f, "serialize"),
            Self::Deserialize => write!(f, "deserialize"),
        }
    }
}

/// Errors returned by the shape codecs.
///
/// Nothing is retried internally; every failure reaches the caller.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A read ran past the end of the input
    #[error(
        "Out of bounds read at byte {position}: needed {needed} bytes, {remaining} remaining"
    )]
    OutOfBounds {
        needed: usize,
        remaining: usize,
        position: usize,
    },
    /// A codec was handed a geometry kind it does not write
    #[error("Type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The shape kind has no implementation for this direction. Permanent, never retry.
    #[error("Unsupported: cannot {operation} {kind:?} shapes")]
    Unsupported {
        kind: ShapeType,
        operation: Operation,
    },
    /// The record's first byte names a serde family other than plain shapes
    #[error("Unsupported record kind: {0:?}")]
    UnsupportedRecord(RecordKind),
    /// Malformed counts, offsets or record framing
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A tag byte outside the known values
    #[error("Unknown {field} tag: {value}")]
    UnknownTag { field: &'static str, value: u8 },
    /// Rejected [`CodecConfig`](crate::config::CodecConfig) values
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShapeError {
    /// Whether the error marks a permanently unavailable codec path.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. } | Self::UnsupportedRecord(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShapeError>;
