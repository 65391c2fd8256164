//! Struct-level error surface for Kaitai Struct parsers.
//!
//! Generated parsers sit on top of [`kaitai_stream`] and need two things
//! from the runtime besides reads:
//!
//! - [`StructError`] - a failure tagged with the field path that caused it,
//!   wrapping stream, transform and validation errors alike
//! - Validation checks ([`validate_eq`], [`validate_range`], ...) that
//!   record the stream position when a decoded value is rejected
//!
//! # Example
//!
//! ```
//! use kaitai_stream::KaitaiStream;
//! use kaitai_struct::{ensure_fixed_contents, validate_max, ResultExt};
//!
//! let mut io = KaitaiStream::new(b"GIF89a\x40\x01".to_vec());
//! ensure_fixed_contents(&mut io, b"GIF", "/seq/0")?;
//! let version = io.read_bytes(3).at("/seq/1")?.to_vec();
//! let width = validate_max(io.read_u2le().at("/seq/2")?, 0x4000, &io, "/seq/2")?;
//!
//! assert_eq!(version, b"89a");
//! assert_eq!(width, 320);
//! # Ok::<(), kaitai_struct::StructError>(())
//! ```

mod endian;
mod error;
mod validation;

pub use endian::decide_endian;
pub use error::{Cause, Result, ResultExt, StructError, ValidationFailed, ValidationKind};
pub use validation::{
    ensure_fixed_contents, validate_any_of, validate_eq, validate_expr, validate_in_enum,
    validate_max, validate_min, validate_range,
};
