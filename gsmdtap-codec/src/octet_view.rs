//! `OctetView` - a bounds-checked read cursor over a DTAP frame
//!
//! Offsets reported by the view are absolute frame offsets, so a view created
//! with [`OctetView::at`] over a truncated slice of the frame still reports
//! positions that line up with the decoded field ranges.

use std::cell::Cell;

use crate::codec::{CodecError, CodecResult};

/// A read-only, forward-only view over a byte slice.
///
/// Every read is checked against the end of the slice. A failed read leaves
/// the index untouched and returns [`CodecError::BufferTooShort`].
///
/// # Example
/// ```
/// use gsmdtap_codec::OctetView;
///
/// let data = [0x12, 0x34, 0x56, 0x78];
/// let view = OctetView::new(&data);
///
/// assert_eq!(view.read().unwrap(), 0x12);
/// assert_eq!(view.read_u16().unwrap(), 0x3456);
/// assert_eq!(view.read().unwrap(), 0x78);
/// assert!(view.read().is_err());
/// ```
#[derive(Debug)]
pub struct OctetView<'a> {
    data: &'a [u8],
    index: Cell<usize>,
}

impl<'a> OctetView<'a> {
    /// Creates a view positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self::at(data, 0)
    }

    /// Creates a view positioned at `offset`. The offset is clamped to the
    /// slice length so that a view can never start out of bounds.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            index: Cell::new(offset.min(data.len())),
        }
    }

    fn short(&self, expected: usize) -> CodecError {
        CodecError::BufferTooShort {
            offset: self.index.get(),
            expected,
            actual: self.remaining(),
        }
    }

    /// Peeks at the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> CodecResult<u8> {
        self.data
            .get(self.index.get())
            .copied()
            .ok_or_else(|| self.short(1))
    }

    /// Reads a single byte.
    #[inline]
    pub fn read(&self) -> CodecResult<u8> {
        let byte = self.peek()?;
        self.index.set(self.index.get() + 1);
        Ok(byte)
    }

    /// Reads a 16-bit value in big-endian order.
    pub fn read_u16(&self) -> CodecResult<u16> {
        let b = self.read_slice(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Reads a 24-bit value in big-endian order.
    pub fn read_u24(&self) -> CodecResult<u32> {
        let b = self.read_slice(3)?;
        Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]))
    }

    /// Reads a 32-bit value in big-endian order.
    pub fn read_u32(&self) -> CodecResult<u32> {
        let b = self.read_slice(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads `length` bytes without copying.
    pub fn read_slice(&self, length: usize) -> CodecResult<&'a [u8]> {
        let idx = self.index.get();
        let end = idx.checked_add(length).ok_or_else(|| self.short(length))?;
        let slice = self.data.get(idx..end).ok_or_else(|| self.short(length))?;
        self.index.set(end);
        Ok(slice)
    }

    /// Reads at most `length` bytes, stopping at the end of the view.
    pub fn read_up_to(&self, length: usize) -> &'a [u8] {
        let idx = self.index.get();
        let end = idx.saturating_add(length).min(self.data.len());
        self.index.set(end);
        &self.data[idx..end]
    }

    /// Advances the index by `count` bytes.
    pub fn skip(&self, count: usize) -> CodecResult<()> {
        self.read_slice(count).map(|_| ())
    }

    /// Absolute offset of the next byte to be read.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    /// Returns the number of bytes left in the view.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.index.get()
    }

    /// Returns true if at least one more byte can be read.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.remaining() > 0
    }

    /// The whole underlying slice.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}
