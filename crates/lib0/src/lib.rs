//! lib0 binary encoding, the wire format under Yjs-style CRDT document sync.
//!
//! Two independent halves connected only by the byte layout:
//!
//! - [`Decoder`] reads typed values left to right from a byte slice.
//! - [`Encoder`] appends typed values to a growable buffer and hands out
//!   snapshots with [`Encoder::to_bytes`].
//!
//! For every supported value `v`, writing it and reading it back with the
//! matching pair yields `v` bit for bit.
//!
//! ```
//! use lib0::{Decoder, Encoder};
//!
//! let mut encoder = Encoder::new();
//! encoder.write_uint16(65535);
//! encoder.write_var_int(-255);
//! encoder.write_var_string("Hello World!");
//! let bytes = encoder.to_bytes();
//!
//! let mut decoder = Decoder::new(&bytes);
//! assert_eq!(decoder.read_uint16(), Ok(65535));
//! assert_eq!(decoder.read_var_int(), Ok(-255));
//! assert_eq!(decoder.read_var_string(), Ok("Hello World!"));
//! ```

mod decoder;
mod encoder;
mod error;
pub mod varint;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use lib0_buffers::DEFAULT_ALLOC_SIZE;
