//! Part boundaries of multi-part shapes.

use crate::binary::BinaryParser;
use crate::error::{Result, ShapeError};
use smallvec::SmallVec;

/// `num_parts + 1` boundaries; part `i` covers `[offsets[i], offsets[i + 1])`.
pub type Offsets = SmallVec<[i32; 8]>;

pub struct OffsetsReader;

impl OffsetsReader {
    /// Read `num_parts` starting offsets and append `max_offset` as the final
    /// boundary, so the last part's length is a plain difference too.
    pub fn read_offsets(
        parser: &mut BinaryParser<'_>,
        num_parts: i32,
        max_offset: i32,
    ) -> Result<Offsets> {
        if num_parts < 0 {
            return Err(ShapeError::InvalidGeometry(format!(
                "negative part count: {}",
                num_parts
            )));
        }
        if max_offset < 0 {
            return Err(ShapeError::InvalidGeometry(format!(
                "negative point count: {}",
                max_offset
            )));
        }

        // Count comes off the wire; never reserve more than the input can hold.
        let capacity = (num_parts as usize).min(parser.remaining() / 4) + 1;
        let mut offsets = Offsets::with_capacity(capacity);
        for _ in 0..num_parts {
            offsets.push(parser.read_int()?);
        }
        offsets.push(max_offset);

        // With a non-negative start and non-decreasing boundaries every part
        // length fits in an i32.
        if offsets[0] < 0 {
            return Err(ShapeError::InvalidGeometry(format!(
                "negative first part offset: {}",
                offsets[0]
            )));
        }

        if let Some(i) = offsets.windows(2).position(|w| w[1] < w[0]) {
            return Err(ShapeError::InvalidGeometry(format!(
                "part offsets decrease at part {}: {} > {}",
                i,
                offsets[i],
                offsets[i + 1]
            )));
        }

        Ok(offsets)
    }

    /// Number of coordinates in part `index`.
    ///
    /// `offsets` must come from [`OffsetsReader::read_offsets`].
    #[inline]
    pub fn part_len(offsets: &[i32], index: usize) -> usize {
        (offsets[index + 1] - offsets[index]) as usize
    }
}
