//! Binary shape codec for exchanging geometries with a GeoSpark/Sedona engine.
//!
//! Records are little-endian: two tag bytes, a kind-specific body and a
//! trailing `0x81` end marker.
//!
//! ```rust
//! use geospark_shape::{Codec, CodecConfig, Geometry};
//! use geo::LineString;
//!
//! let codec = Codec::new(CodecConfig::default())?;
//! let line = Geometry::LineString(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]));
//! let bytes = codec.serialize(&line)?;
//! assert_eq!(codec.deserialize(&bytes)?, line);
//! # Ok::<(), geospark_shape::ShapeError>(())
//! ```

pub mod binary;
pub mod config;
pub mod envelope;
pub mod error;
pub mod offsets;
pub mod record;
pub mod shapes;
pub mod types;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use binary::{BinaryBuffer, BinaryParser};
pub use config::CodecConfig;
pub use envelope::Envelope;
pub use error::{Operation, Result, ShapeError};
pub use offsets::{Offsets, OffsetsReader};
pub use record::{
    Codec, RecordReader, codec_for_geometry, deserialize_geometry, serialize_geometry,
};
pub use shapes::{
    MultiPointCodec, PointCodec, PolygonCodec, PolylineCodec, ShapeCodec, UndefinedCodec,
    codec_for,
};
pub use types::{END_MARKER, RecordKind, ShapeType};

pub use geo::Geometry;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        Codec, CodecConfig, Envelope, Result, ShapeCodec, ShapeError, ShapeType,
        deserialize_geometry, serialize_geometry,
    };

    pub use geo::{Geometry, LineString, MultiLineString, MultiPoint, Point, Polygon};
}
