//! [`Encoder`]: appends lib0-encoded values to a growable buffer.
//!
//! Every writer is the exact inverse of the matching
//! [`Decoder`](crate::Decoder) read, byte order included. Writes cannot fail.

use lib0_buffers::Writer;

use crate::varint::{var_int_len, var_uint_len, CONTINUE, FIRST_GROUP_MASK, GROUP_MASK, SIGN};

/// An append-only lib0 encoder.
///
/// # Example
///
/// ```
/// use lib0::Encoder;
///
/// let mut encoder = Encoder::new();
/// encoder.write_var_uint(4294967295);
/// encoder.write_var_string("hi");
/// assert_eq!(encoder.to_bytes(), [0xff, 0xff, 0xff, 0xff, 0x0f, 0x02, b'h', b'i']);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    writer: Writer,
}

impl Encoder {
    /// Creates an encoder with the default initial allocation.
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Creates an encoder that reserves `capacity` bytes up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writer: Writer::with_alloc_size(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.writer.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.writer.is_empty()
    }

    /// Borrows the bytes written so far without copying.
    pub fn as_slice(&self) -> &[u8] {
        self.writer.as_slice()
    }

    /// Returns a copy of everything written so far.
    ///
    /// The encoder is left untouched, so later writes never show up in a
    /// snapshot that was already taken.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.writer.to_vec()
    }

    // ── Fixed-width values ─────────────────────────────────────────────────

    /// Writes a single byte.
    pub fn write_uint8(&mut self, num: u8) {
        self.writer.u8(num);
    }

    /// Writes a `u16`, little-endian.
    pub fn write_uint16(&mut self, num: u16) {
        self.writer.buf(&num.to_le_bytes());
    }

    /// Writes a `u32`, little-endian.
    pub fn write_uint32(&mut self, num: u32) {
        self.writer.buf(&num.to_le_bytes());
    }

    /// Writes a `u32`, big-endian.
    pub fn write_uint32_big_endian(&mut self, num: u32) {
        self.writer.buf(&num.to_be_bytes());
    }

    /// Writes a `u64`, big-endian.
    pub fn write_uint64(&mut self, num: u64) {
        self.writer.buf(&num.to_be_bytes());
    }

    /// Writes an `i64` as big-endian two's complement.
    pub fn write_int64(&mut self, num: i64) {
        self.writer.buf(&num.to_be_bytes());
    }

    /// Writes the IEEE-754 bits of an `f32`, big-endian.
    pub fn write_float32(&mut self, num: f32) {
        self.writer.buf(&num.to_bits().to_be_bytes());
    }

    /// Writes the IEEE-754 bits of an `f64`, big-endian.
    pub fn write_float64(&mut self, num: f64) {
        self.writer.buf(&num.to_bits().to_be_bytes());
    }

    // ── Variable-length values ─────────────────────────────────────────────

    /// Writes an unsigned LEB128 varint in its minimal form.
    pub fn write_var_uint(&mut self, mut num: u64) {
        self.writer.ensure_capacity(var_uint_len(num));
        while num > GROUP_MASK as u64 {
            self.writer.u8(CONTINUE | (num as u8 & GROUP_MASK));
            num >>= 7;
        }
        self.writer.u8(num as u8);
    }

    /// Writes a signed varint in its minimal form.
    ///
    /// First byte `|cszzzzzz|`, then LEB128 groups of the remaining magnitude.
    pub fn write_var_int(&mut self, num: i64) {
        self.writer.ensure_capacity(var_int_len(num));
        let mut magnitude = num.unsigned_abs();
        let sign = if num < 0 { SIGN } else { 0 };
        let more = if magnitude > FIRST_GROUP_MASK as u64 { CONTINUE } else { 0 };
        self.writer.u8(more | sign | (magnitude as u8 & FIRST_GROUP_MASK));
        magnitude >>= 6;
        while magnitude > 0 {
            let more = if magnitude > GROUP_MASK as u64 { CONTINUE } else { 0 };
            self.writer.u8(more | (magnitude as u8 & GROUP_MASK));
            magnitude >>= 7;
        }
    }

    // Width-specific writers. The bytes depend on the value only, never on
    // the width it was stored in.

    /// Writes a `u8` as an unsigned varint.
    pub fn write_var_uint8(&mut self, num: u8) {
        self.write_var_uint(num.into());
    }

    /// Writes a `u16` as an unsigned varint.
    pub fn write_var_uint16(&mut self, num: u16) {
        self.write_var_uint(num.into());
    }

    /// Writes a `u32` as an unsigned varint.
    pub fn write_var_uint32(&mut self, num: u32) {
        self.write_var_uint(num.into());
    }

    /// Writes a `u64` as an unsigned varint.
    pub fn write_var_uint64(&mut self, num: u64) {
        self.write_var_uint(num);
    }

    /// Writes an `i8` as a signed varint.
    pub fn write_var_int8(&mut self, num: i8) {
        self.write_var_int(num.into());
    }

    /// Writes an `i16` as a signed varint.
    pub fn write_var_int16(&mut self, num: i16) {
        self.write_var_int(num.into());
    }

    /// Writes an `i32` as a signed varint.
    pub fn write_var_int32(&mut self, num: i32) {
        self.write_var_int(num.into());
    }

    /// Writes an `i64` as a signed varint.
    pub fn write_var_int64(&mut self, num: i64) {
        self.write_var_int(num);
    }

    // ── Length-prefixed values ─────────────────────────────────────────────

    /// Writes an unsigned-varint length followed by the raw bytes.
    pub fn write_var_uint8_array(&mut self, data: &[u8]) {
        self.write_var_uint(data.len() as u64);
        self.writer.buf(data);
    }

    /// Writes a string as a length-prefixed UTF-8 byte array.
    pub fn write_var_string(&mut self, s: &str) {
        self.write_var_uint(s.len() as u64);
        self.writer.utf8(s);
    }
}
