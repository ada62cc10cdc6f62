use lib0_buffers::BufferError;
use thiserror::Error;

/// Failure of a single decoder read.
///
/// Every variant is terminal for the read that produced it. The decoder
/// never hands back a partial value alongside an error, and callers should
/// stop reading from that decoder afterwards.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The read needs more bytes than remain in the input.
    #[error("end of stream reached while reading")]
    EndOfStream,
    /// A varint continuation chain ran past its bit budget
    /// (64 bits unsigned, 70 bits signed) or carried bits that do not fit
    /// in 64 bits.
    #[error("variable length quantity is too long")]
    VarintOverflow,
    /// A multi-byte varint ended in an empty group.
    #[error("variable length quantity is not minimally encoded")]
    NonCanonicalVarint,
    /// String bytes are not valid UTF-8.
    #[error("invalid UTF-8 in string")]
    InvalidEncoding,
}

impl From<BufferError> for Error {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => Error::EndOfStream,
            BufferError::InvalidUtf8 => Error::InvalidEncoding,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
