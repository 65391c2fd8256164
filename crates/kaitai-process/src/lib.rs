//! Byte transforms that undo simple obfuscation and compression.
//!
//! All functions are pure: they take a byte slice and return a new buffer.
//!
//! - [`process_xor_one`] / [`process_xor_many`] - XOR with a byte or a repeating key
//! - [`process_rotate_left`] - per-byte bit rotation
//! - [`process_zlib`] / [`process_deflate_raw`] - DEFLATE decompression
//!
//! # Example
//!
//! ```
//! use kaitai_process::{process_rotate_left, process_xor_many};
//!
//! let plain = process_xor_many(&[0xab, 0x48, 0xf1, 0x04], &[0x3f, 0x2d, 0xa5])?;
//! assert_eq!(plain, [0x94, 0x65, 0x54, 0x3b]);
//!
//! let rotated = process_rotate_left(&[0x17], 3, 1)?;
//! assert_eq!(rotated, [0xb8]);
//! # Ok::<(), kaitai_process::Error>(())
//! ```

mod error;
mod rotate;
mod xor;
mod zlib;

pub use error::{Error, Result};
pub use rotate::process_rotate_left;
pub use xor::{process_xor_many, process_xor_one};
pub use zlib::{process_deflate_raw, process_zlib};
