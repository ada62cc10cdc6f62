//! Byte buffer primitives for the lib0 codec.
//!
//! - [`Reader`] walks an immutable byte slice with a forward-only cursor.
//!   Every read is bounds-checked before the cursor moves.
//! - [`Writer`] is an append-only, growable output buffer with snapshot
//!   extraction.
//!
//! Neither type knows anything about endianness or varints; those layouts
//! live in the `lib0` crate on top of these primitives.

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::{Writer, DEFAULT_ALLOC_SIZE};
