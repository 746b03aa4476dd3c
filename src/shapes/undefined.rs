use super::ShapeCodec;
use crate::binary::{BinaryBuffer, BinaryParser};
use crate::error::{Operation, Result, ShapeError};
use crate::types::ShapeType;
use geo::Geometry;

/// Placeholder for the undefined shape tag.
///
/// The format has no geometry for this tag, so both directions fail with
/// [`ShapeError::Unsupported`] instead of guessing a shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedCodec;

impl ShapeCodec for UndefinedCodec {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Undefined
    }

    fn serialize(&self, _geometry: &Geometry<f64>, _buffer: &mut BinaryBuffer) -> Result<()> {
        Err(ShapeError::Unsupported {
            kind: ShapeType::Undefined,
            operation: Operation::Serialize,
        })
    }

    fn deserialize(&self, _parser: &mut BinaryParser<'_>) -> Result<Geometry<f64>> {
        Err(ShapeError::Unsupported {
            kind: ShapeType::Undefined,
            operation: Operation::Deserialize,
        })
    }
}
