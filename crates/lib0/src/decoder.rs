//! [`Decoder`]: sequential typed reads over a lib0-encoded byte slice.
//!
//! Fixed-width layouts:
//!
//! | Read                       | Bytes | Order         |
//! |----------------------------|-------|---------------|
//! | `read_uint8`               | 1     | n/a           |
//! | `read_uint16`              | 2     | little-endian |
//! | `read_uint32`              | 4     | little-endian |
//! | `read_uint32_big_endian`   | 4     | big-endian    |
//! | `read_uint64`/`read_int64` | 8     | big-endian    |
//! | `read_float32`             | 4     | big-endian    |
//! | `read_float64`             | 8     | big-endian    |
//!
//! The 16/32-bit integers really are little-endian while everything 64-bit
//! and every float is big-endian. Existing peers depend on this table.

use lib0_buffers::Reader;
use tracing::trace;

use crate::error::{Error, Result};
use crate::varint::{
    CONTINUE, FIRST_GROUP_MASK, GROUP_MASK, MAX_VAR_INT_SHIFT, MAX_VAR_UINT_SHIFT, SIGN,
};

/// Reads lib0 values left to right from an immutable byte slice.
///
/// Each read either consumes exactly the bytes of one value or fails without
/// producing one. After an error the decoder should be dropped: the cursor
/// is only guaranteed to sit somewhere inside the failed value.
///
/// # Example
///
/// ```
/// use lib0::Decoder;
///
/// let data = [0x7b, 0xff, 0x03];
/// let mut decoder = Decoder::new(&data);
/// assert_eq!(decoder.read_uint8(), Ok(123));
/// assert_eq!(decoder.read_var_int(), Ok(-255));
/// assert!(!decoder.has_content());
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    reader: Reader<'a>,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
        }
    }

    /// Byte offset of the next read.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.reader.size()
    }

    /// Whether any bytes are left to read.
    pub fn has_content(&self) -> bool {
        !self.reader.is_empty()
    }

    // ── Failure bookkeeping ────────────────────────────────────────────────

    fn fail(&self, err: Error) -> Error {
        trace!(position = self.reader.position(), error = %err, "lib0 read failed");
        err
    }

    #[inline]
    fn byte(&mut self) -> Result<u8> {
        self.reader.try_u8().map_err(|err| self.fail(err.into()))
    }

    #[inline]
    fn bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.reader.try_array::<N>().map_err(|err| self.fail(err.into()))
    }

    // ── Fixed-width values ─────────────────────────────────────────────────

    /// Reads `len` raw bytes verbatim.
    pub fn read_uint8_array(&mut self, len: usize) -> Result<&'a [u8]> {
        self.reader.try_buf(len).map_err(|err| self.fail(err.into()))
    }

    /// Reads a single byte.
    pub fn read_uint8(&mut self) -> Result<u8> {
        self.byte()
    }

    /// Reads a little-endian `u16`.
    pub fn read_uint16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.bytes::<2>()?))
    }

    /// Reads a little-endian `u32`.
    pub fn read_uint32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.bytes::<4>()?))
    }

    /// Reads a big-endian `u32`.
    pub fn read_uint32_big_endian(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.bytes::<4>()?))
    }

    /// Reads a big-endian `u64`.
    pub fn read_uint64(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.bytes::<8>()?))
    }

    /// Reads a big-endian two's-complement `i64`.
    pub fn read_int64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.bytes::<8>()?))
    }

    /// Reads a big-endian IEEE-754 single.
    pub fn read_float32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(u32::from_be_bytes(self.bytes::<4>()?)))
    }

    /// Reads a big-endian IEEE-754 double.
    pub fn read_float64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(u64::from_be_bytes(self.bytes::<8>()?)))
    }

    // ── Variable-length values ─────────────────────────────────────────────

    /// Reads an unsigned LEB128 varint.
    ///
    /// Fails with [`Error::VarintOverflow`] when the chain runs past 64 bits
    /// and with [`Error::NonCanonicalVarint`] when it ends in an empty group.
    pub fn read_var_uint(&mut self) -> Result<u64> {
        let mut num = 0u64;
        let mut shift = 0u32;
        loop {
            let byte = self.byte()?;
            let group = (byte & GROUP_MASK) as u64;
            // Only the lowest bit of the tenth group fits in a u64.
            if shift == MAX_VAR_UINT_SHIFT - 1 && group > 1 {
                return Err(self.fail(Error::VarintOverflow));
            }
            num |= group << shift;
            if byte & CONTINUE == 0 {
                if group == 0 && shift > 0 {
                    return Err(self.fail(Error::NonCanonicalVarint));
                }
                return Ok(num);
            }
            shift += 7;
            if shift >= MAX_VAR_UINT_SHIFT {
                return Err(self.fail(Error::VarintOverflow));
            }
        }
    }

    /// Reads a signed varint: `|cszzzzzz|` then LEB128 groups of magnitude.
    ///
    /// A lone `0x40` (negative zero) decodes as `0`.
    pub fn read_var_int(&mut self) -> Result<i64> {
        let first = self.byte()?;
        let negative = first & SIGN != 0;
        let mut num = (first & FIRST_GROUP_MASK) as u64;
        if first & CONTINUE != 0 {
            let mut shift = 6u32;
            loop {
                let byte = self.byte()?;
                let group = (byte & GROUP_MASK) as u64;
                let dropped = if shift >= u64::BITS {
                    group
                } else {
                    group >> (u64::BITS - shift)
                };
                if dropped != 0 {
                    return Err(self.fail(Error::VarintOverflow));
                }
                if shift < u64::BITS {
                    num |= group << shift;
                }
                if byte & CONTINUE == 0 {
                    if group == 0 {
                        return Err(self.fail(Error::NonCanonicalVarint));
                    }
                    break;
                }
                shift += 7;
                if shift > MAX_VAR_INT_SHIFT {
                    return Err(self.fail(Error::VarintOverflow));
                }
            }
        }
        if negative {
            if num > i64::MIN.unsigned_abs() {
                return Err(self.fail(Error::VarintOverflow));
            }
            Ok((num as i64).wrapping_neg())
        } else {
            i64::try_from(num).map_err(|_| self.fail(Error::VarintOverflow))
        }
    }

    /// Reads an unsigned-varint length followed by that many raw bytes.
    pub fn read_var_uint8_array(&mut self) -> Result<&'a [u8]> {
        let len = self.read_var_uint()?;
        // A length beyond the address space can never be satisfied.
        let len = usize::try_from(len).map_err(|_| self.fail(Error::EndOfStream))?;
        self.read_uint8_array(len)
    }

    /// Reads a length-prefixed UTF-8 string.
    pub fn read_var_string(&mut self) -> Result<&'a str> {
        let len = self.read_var_uint()?;
        let len = usize::try_from(len).map_err(|_| self.fail(Error::EndOfStream))?;
        self.reader.try_utf8(len).map_err(|err| self.fail(err.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_uint8_sequence() {
        let data = [0x3f, 0x4c, 0x5b, 0x2a];
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_uint8(), Ok(0x3f));
        assert_eq!(decoder.read_uint8(), Ok(0x4c));
        assert_eq!(decoder.read_uint8(), Ok(0x5b));
        assert_eq!(decoder.read_uint8(), Ok(0x2a));
        assert_eq!(decoder.read_uint8(), Err(Error::EndOfStream));
    }

    #[test]
    fn test_mixed_endianness() {
        let data = [0x01, 0x00, 0x00, 0x00, 0x00, 0x01];
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_uint16(), Ok(1));
        assert_eq!(decoder.read_uint32_big_endian(), Ok(1));
        assert_eq!(decoder.remaining(), 0);
    }

    #[test]
    fn test_position_tracks_consumed_bytes() {
        let data = [0xff, 0xff, 0xff, 0xff, 0x0f, 0x00];
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_var_uint(), Ok(u32::MAX as u64));
        assert_eq!(decoder.position(), 5);
        assert_eq!(decoder.remaining(), 1);
        assert!(decoder.has_content());
    }

    #[test]
    fn test_truncated_fixed_width_fails_without_moving() {
        let data = [0x00, 0x00, 0x00];
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_uint32(), Err(Error::EndOfStream));
        assert_eq!(decoder.position(), 0);
        assert_eq!(decoder.read_float64(), Err(Error::EndOfStream));
    }

    #[test]
    fn test_var_uint_tenth_group() {
        // 2^63: nine empty continuation groups then a final 1.
        let mut data = vec![0x80u8; 9];
        data.push(0x01);
        assert_eq!(Decoder::new(&data).read_var_uint(), Ok(1u64 << 63));

        // Anything above bit 63 in the tenth group is lost -> overflow.
        let mut data = vec![0x80u8; 9];
        data.push(0x02);
        assert_eq!(Decoder::new(&data).read_var_uint(), Err(Error::VarintOverflow));
    }

    #[test]
    fn test_var_uint_chain_too_long() {
        let data = [0xffu8; 11];
        assert_eq!(Decoder::new(&data).read_var_uint(), Err(Error::VarintOverflow));
    }

    #[test]
    fn test_var_uint_trailing_empty_group() {
        assert_eq!(Decoder::new(&[0x80, 0x00]).read_var_uint(), Err(Error::NonCanonicalVarint));
        assert_eq!(
            Decoder::new(&[0xff, 0x80, 0x00]).read_var_uint(),
            Err(Error::NonCanonicalVarint)
        );
    }

    #[test]
    fn test_var_int_negative_zero() {
        assert_eq!(Decoder::new(&[0x40]).read_var_int(), Ok(0));
    }

    #[test]
    fn test_var_int_min_and_max() {
        // |i64::MIN| = 2^63 -> first byte carries 6 empty bits, then 8 empty
        // groups, then the final group holds 2^63 >> 62 = 2.
        let mut data = vec![0xc0u8];
        data.extend_from_slice(&[0x80; 8]);
        data.push(0x02);
        assert_eq!(Decoder::new(&data).read_var_int(), Ok(i64::MIN));

        // The same magnitude without the sign flag does not fit in an i64.
        data[0] = 0x80;
        assert_eq!(Decoder::new(&data).read_var_int(), Err(Error::VarintOverflow));
    }

    #[test]
    fn test_var_int_trailing_empty_group() {
        assert_eq!(Decoder::new(&[0xc1, 0x00]).read_var_int(), Err(Error::NonCanonicalVarint));
    }

    #[test]
    fn test_var_int_chain_too_long() {
        let mut data = vec![0x80u8];
        data.extend_from_slice(&[0x80; 10]);
        data.push(0x01);
        assert_eq!(Decoder::new(&data).read_var_int(), Err(Error::VarintOverflow));
    }

    #[test]
    fn test_var_int_truncated() {
        assert_eq!(Decoder::new(&[0xff]).read_var_int(), Err(Error::EndOfStream));
    }

    #[test]
    fn test_var_uint8_array_length_exceeds_input() {
        let data = [0x05, 0x01, 0x02];
        assert_eq!(Decoder::new(&data).read_var_uint8_array(), Err(Error::EndOfStream));
    }

    #[test]
    fn test_var_uint8_array_huge_length() {
        // u64::MAX as a length prefix
        let data = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        assert_eq!(Decoder::new(&data).read_var_uint8_array(), Err(Error::EndOfStream));
    }

    #[test]
    fn test_var_string_invalid_utf8() {
        let data = [0x02, 0xc3, 0x28];
        assert_eq!(Decoder::new(&data).read_var_string(), Err(Error::InvalidEncoding));
    }
}
