//! Positioned byte and bit stream for Kaitai Struct parsers.
//!
//! This crate is the runtime that generated (or hand-written) format parsers
//! read from. It knows nothing about any particular format:
//!
//! - [`KaitaiStream`] - seekable reader over an in-memory or mapped source
//! - Fixed-width integers and IEEE-754 floats in either byte order
//! - Bit fields of 1 to 64 bits, MSB-first or LSB-first ([`BitState`])
//! - Terminator-delimited byte runs and byte-array trimming helpers
//! - Text decoding through [`bytes_to_str`]
//!
//! Reads either return a value and advance the position, or fail with an
//! [`Error`]. After an error the position is unspecified; seek before
//! reading again.
//!
//! Every read mutates the stream, so one stream serves one parser at a
//! time. To parse the same bytes from several threads, give each thread its
//! own stream over a shared `Arc<[u8]>` or `&[u8]`.
//!
//! # Example
//!
//! ```
//! use kaitai_stream::KaitaiStream;
//!
//! let mut io = KaitaiStream::new(&b"\x89PNG\x00\x00\x00\x0dIHDR"[..]);
//!
//! assert_eq!(io.read_bytes(4)?, b"\x89PNG");
//! assert_eq!(io.read_u4be()?, 13);
//! assert_eq!(io.read_str_byte_limit(4, "ASCII")?, "IHDR");
//! assert!(io.is_eof());
//! # Ok::<(), kaitai_stream::Error>(())
//! ```

mod bits;
mod error;
mod numeric;
mod source;
mod stream;
mod terminator;
mod text;

pub mod ieee754;
pub mod scan;

pub use bits::{BitState, MAX_BITS};
pub use error::{Error, Result};
pub use numeric::Endian;
pub use stream::KaitaiStream;
pub use terminator::{bytes_strip_right, bytes_terminate, bytes_terminate_multi};
pub use text::bytes_to_str;

/// Re-export memmap2 for callers naming the mapped stream type.
pub use memmap2::Mmap;
