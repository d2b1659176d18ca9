//! A bounds-checked little-endian cursor over the input buffer.

use byteorder::{ByteOrder, LittleEndian};

use super::error::{FormatError, Result};

pub(crate) struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Fails unless `len` more bytes are available for `record`.
    ///
    /// Called before every fixed-size record so a short buffer is reported
    /// as a whole-record failure, never as a partially read record.
    pub(crate) fn require(&self, record: &'static str, len: usize) -> Result<()> {
        if self.remaining() < len {
            return Err(FormatError::Truncated {
                record,
                offset: self.offset,
                needed: len,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    pub(crate) fn skip(&mut self, record: &'static str, len: usize) -> Result<()> {
        self.require(record, len)?;
        self.offset += len;
        Ok(())
    }

    fn take(&mut self, record: &'static str, len: usize) -> Result<&'a [u8]> {
        self.require(record, len)?;
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    pub(crate) fn read_u32(&mut self, record: &'static str) -> Result<u32> {
        self.take(record, 4).map(LittleEndian::read_u32)
    }

    pub(crate) fn read_f32(&mut self, record: &'static str) -> Result<f32> {
        self.take(record, 4).map(LittleEndian::read_f32)
    }
}
