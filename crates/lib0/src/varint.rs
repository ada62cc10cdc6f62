//! Variable-length integer layouts.
//!
//! ## Unsigned varint (LEB128)
//!
//! Each byte carries 7 payload bits in its low bits, least-significant group
//! first. The high bit (`0x80`) is the continuation flag. A `u64` needs at
//! most 10 bytes.
//!
//! ## Signed varint
//!
//! The first byte is `|cszzzzzz|`: `c` is the continuation flag, `s` the sign
//! flag (1 = negative) and `zzzzzz` the lowest 6 bits of the magnitude. Every
//! following byte is a plain LEB128 group of 7 magnitude bits. An `i64` needs
//! at most 10 bytes (the magnitude of `i64::MIN` is 2^63).
//!
//! Both encodings are canonical: the writer emits the fewest groups that hold
//! the magnitude, and the reader rejects a trailing empty group.

/// Continuation flag, set on every byte but the last.
pub const CONTINUE: u8 = 0b1000_0000;
/// Payload mask of an LEB128 group.
pub const GROUP_MASK: u8 = 0b0111_1111;
/// Sign flag in the first byte of a signed varint.
pub const SIGN: u8 = 0b0100_0000;
/// Payload mask of the first byte of a signed varint.
pub const FIRST_GROUP_MASK: u8 = 0b0011_1111;

/// Shift at which an unsigned varint chain is rejected.
pub const MAX_VAR_UINT_SHIFT: u32 = 64;
/// Shift past which a signed varint chain is rejected.
pub const MAX_VAR_INT_SHIFT: u32 = 70;

/// Number of bytes [`Encoder::write_var_uint`](crate::Encoder::write_var_uint)
/// emits for `num`.
pub fn var_uint_len(num: u64) -> usize {
    let bits = u64::BITS - num.leading_zeros();
    if bits == 0 {
        1
    } else {
        bits.div_ceil(7) as usize
    }
}

/// Number of bytes [`Encoder::write_var_int`](crate::Encoder::write_var_int)
/// emits for `num`.
pub fn var_int_len(num: i64) -> usize {
    let bits = u64::BITS - num.unsigned_abs().leading_zeros();
    if bits <= 6 {
        1
    } else {
        1 + (bits - 6).div_ceil(7) as usize
    }
}
