//! Parse-time endianness selection.

use kaitai_stream::Endian;

use crate::{Cause, Result, StructError};

/// Resolve the endianness chosen by a format's switch expression.
///
/// Generated code evaluates the switch to `Some(endian)` or, when no case
/// matches, `None`, which is reported as [`Cause::UndecidedEndianness`].
pub fn decide_endian(decided: Option<Endian>, src_path: &str) -> Result<Endian> {
    decided.ok_or_else(|| StructError::new(Cause::UndecidedEndianness, src_path))
}
