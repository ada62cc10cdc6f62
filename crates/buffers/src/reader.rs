//! Binary buffer reader with cursor tracking.

use std::str;

use crate::BufferError;

/// A forward-only reader over a borrowed byte slice.
///
/// The cursor `x` only ever moves forward, and only after a read has been
/// checked against the remaining length. A failed read leaves the cursor
/// where it was.
///
/// # Example
///
/// ```
/// use lib0_buffers::{BufferError, Reader};
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.try_u8(), Ok(0x01));
/// assert_eq!(reader.try_array::<2>(), Ok([0x02, 0x03]));
/// assert_eq!(reader.try_u8(), Err(BufferError::EndOfBuffer));
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of bytes left to read.
    #[inline]
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Returns the current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.x
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x >= self.uint8.len()
    }

    /// Checks that `n` more bytes are available from the current cursor.
    ///
    /// Compares against the remaining size rather than computing `x + n`,
    /// so an attacker-supplied length cannot overflow the addition.
    #[inline]
    pub fn check(&self, n: usize) -> Result<(), BufferError> {
        if n > self.size() {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Reads a single byte.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads exactly `N` bytes into a fixed-size array.
    ///
    /// Byte order is left to the caller: pair this with
    /// `from_le_bytes` / `from_be_bytes` of the target width.
    #[inline]
    pub fn try_array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let bytes = self.try_buf(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Borrows the next `size` bytes and advances the cursor past them.
    pub fn try_buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let start = self.x;
        let end = start + size;
        self.x = end;
        Ok(&self.uint8[start..end])
    }

    /// Reads `size` bytes as UTF-8 text.
    ///
    /// The cursor is not moved when the bytes are missing or not valid UTF-8.
    pub fn try_utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        self.check(size)?;
        let start = self.x;
        let end = start + size;
        let text = str::from_utf8(&self.uint8[start..end]).map_err(|_| BufferError::InvalidUtf8)?;
        self.x = end;
        Ok(text)
    }
}
