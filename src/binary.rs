//! Little-endian primitives for reading and writing shape records.

use crate::error::{Result, ShapeError};
use bytes::{BufMut, Bytes, BytesMut};

const INT_SIZE: usize = 4;
const DOUBLE_SIZE: usize = 8;
const BYTE_SIZE: usize = 1;

/// Sequential read cursor over a borrowed byte slice.
///
/// A failed read leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct BinaryParser<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryParser<'a> {
    /// Create a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let remaining = self.remaining();
        if remaining < N {
            return Err(ShapeError::OutOfBounds {
                needed: N,
                remaining,
                position: self.position,
            });
        }

        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.position..self.position + N]);
        self.position += N;
        Ok(out)
    }

    /// Read a little-endian signed 32-bit integer.
    pub fn read_int(&mut self) -> Result<i32> {
        self.take::<INT_SIZE>().map(i32::from_le_bytes)
    }

    /// Read a little-endian IEEE-754 double.
    pub fn read_double(&mut self) -> Result<f64> {
        self.take::<DOUBLE_SIZE>().map(f64::from_le_bytes)
    }

    /// Read one signed byte.
    pub fn read_byte(&mut self) -> Result<i8> {
        self.take::<BYTE_SIZE>().map(i8::from_le_bytes)
    }

    /// Peek at the next byte without advancing.
    pub fn peek_byte(&self) -> Option<i8> {
        self.data.get(self.position).map(|b| *b as i8)
    }

    /// Skip `count` doubles, e.g. the unused bounding-box header.
    pub fn skip_doubles(&mut self, count: usize) -> Result<()> {
        let needed = count * DOUBLE_SIZE;
        let remaining = self.remaining();
        if remaining < needed {
            return Err(ShapeError::OutOfBounds {
                needed,
                remaining,
                position: self.position,
            });
        }
        self.position += needed;
        Ok(())
    }
}

/// Growable little-endian writer.
#[derive(Debug, Default, Clone)]
pub struct BinaryBuffer {
    buf: BytesMut,
}

impl BinaryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Append a little-endian `i32`.
    pub fn put_int(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    /// Append a little-endian `f64`.
    pub fn put_double(&mut self, value: f64) {
        self.buf.put_f64_le(value);
    }

    /// Append one signed byte.
    pub fn put_byte(&mut self, value: i8) {
        self.buf.put_i8(value);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the accumulated bytes.
    pub fn byte_array(self) -> Bytes {
        self.buf.freeze()
    }
}
