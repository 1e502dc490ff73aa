use bit_vec::BitVec;

use crate::{code::Bit, error::CodecError};

/// Where the decoder reads bits from.
pub trait BitSource {
    fn has_next_bit(&self) -> bool;

    /// Fails with [`CodecError::Truncated`] when no bit is left.
    fn next_bit(&mut self) -> Result<Bit, CodecError>;
}

/// Where the encoder writes bits to.
pub trait BitSink {
    fn write_bit(&mut self, bit: Bit) -> Result<(), CodecError>;
}

impl BitSink for BitVec {
    fn write_bit(&mut self, bit: Bit) -> Result<(), CodecError> {
        self.push(bit.into());
        Ok(())
    }
}

/// Reads the first `len` bits of a [`BitVec`] front to back.
#[derive(Debug)]
pub struct BitCursor<'a> {
    bits: &'a BitVec,
    position: usize,
    len: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(bits: &'a BitVec) -> Self {
        Self::with_len(bits, bits.len())
    }

    /// Only the first `len` bits are readable; anything after them is padding.
    /// `len` is clamped to the length of `bits`.
    pub fn with_len(bits: &'a BitVec, len: usize) -> Self {
        BitCursor {
            bits,
            position: 0,
            len: len.min(bits.len()),
        }
    }

    /// Number of bits read so far.
    pub fn position(&self) -> u64 {
        self.position as u64
    }
}

impl BitSource for BitCursor<'_> {
    fn has_next_bit(&self) -> bool {
        self.position < self.len
    }

    fn next_bit(&mut self) -> Result<Bit, CodecError> {
        if !self.has_next_bit() {
            return Err(CodecError::Truncated(self.position()));
        }
        let bit = self
            .bits
            .get(self.position)
            .ok_or(CodecError::Truncated(self.position()))?;
        self.position += 1;
        Ok(bit.into())
    }
}
