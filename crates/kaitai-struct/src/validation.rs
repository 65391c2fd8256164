//! Validation checks run by generated parsers against decoded values.
//!
//! Each check returns the value on success, so it can wrap the read that
//! produced it. On failure the stream's current position is recorded.

use std::fmt::Debug;

use kaitai_stream::KaitaiStream;

use crate::error::{ResultExt, StructError, ValidationFailed, ValidationKind};
use crate::Result;

fn failed<S: AsRef<[u8]>>(kind: ValidationKind, io: &KaitaiStream<S>, src_path: &str) -> StructError {
    StructError::new(ValidationFailed { pos: io.pos(), kind }, src_path)
}

/// Require `actual == expected`.
pub fn validate_eq<A, E, S>(actual: A, expected: E, io: &KaitaiStream<S>, src_path: &str) -> Result<A>
where
    A: PartialEq<E> + Debug,
    E: Debug,
    S: AsRef<[u8]>,
{
    if actual != expected {
        return Err(failed(
            ValidationKind::NotEqual {
                expected: format!("{:?}", expected),
                actual: format!("{:?}", actual),
            },
            io,
            src_path,
        ));
    }
    Ok(actual)
}

/// Require `actual` to be one of `allowed`.
pub fn validate_any_of<T, S>(actual: T, allowed: &[T], io: &KaitaiStream<S>, src_path: &str) -> Result<T>
where
    T: PartialEq + Debug,
    S: AsRef<[u8]>,
{
    if !allowed.contains(&actual) {
        return Err(failed(
            ValidationKind::NotAnyOf {
                actual: format!("{:?}", actual),
            },
            io,
            src_path,
        ));
    }
    Ok(actual)
}

/// Require `actual >= min`.
pub fn validate_min<T, S>(actual: T, min: T, io: &KaitaiStream<S>, src_path: &str) -> Result<T>
where
    T: PartialOrd + Debug,
    S: AsRef<[u8]>,
{
    if actual < min {
        return Err(failed(
            ValidationKind::LessThan {
                min: format!("{:?}", min),
                actual: format!("{:?}", actual),
            },
            io,
            src_path,
        ));
    }
    Ok(actual)
}

/// Require `actual <= max`.
pub fn validate_max<T, S>(actual: T, max: T, io: &KaitaiStream<S>, src_path: &str) -> Result<T>
where
    T: PartialOrd + Debug,
    S: AsRef<[u8]>,
{
    if actual > max {
        return Err(failed(
            ValidationKind::GreaterThan {
                max: format!("{:?}", max),
                actual: format!("{:?}", actual),
            },
            io,
            src_path,
        ));
    }
    Ok(actual)
}

/// Require `min <= actual <= max`. The lower bound is checked first.
pub fn validate_range<T, S>(actual: T, min: T, max: T, io: &KaitaiStream<S>, src_path: &str) -> Result<T>
where
    T: PartialOrd + Debug,
    S: AsRef<[u8]>,
{
    let actual = validate_min(actual, min, io, src_path)?;
    validate_max(actual, max, io, src_path)
}

/// Require a raw value to name a known enum variant, returning the variant.
pub fn validate_in_enum<E, R, S>(raw: R, io: &KaitaiStream<S>, src_path: &str) -> Result<E>
where
    E: TryFrom<R>,
    R: Copy + Debug,
    S: AsRef<[u8]>,
{
    E::try_from(raw).map_err(|_| {
        failed(
            ValidationKind::NotInEnum {
                actual: format!("{:?}", raw),
            },
            io,
            src_path,
        )
    })
}

/// Require `check(&actual)` to hold.
pub fn validate_expr<T, S>(
    actual: T,
    check: impl FnOnce(&T) -> bool,
    io: &KaitaiStream<S>,
    src_path: &str,
) -> Result<T>
where
    T: Debug,
    S: AsRef<[u8]>,
{
    if !check(&actual) {
        return Err(failed(
            ValidationKind::Expr {
                actual: format!("{:?}", actual),
            },
            io,
            src_path,
        ));
    }
    Ok(actual)
}

/// Read `expected.len()` bytes and require them to equal `expected`.
///
/// A short stream fails with the stream's end-of-stream error; a mismatch
/// is reported at the position where the contents started.
pub fn ensure_fixed_contents<S: AsRef<[u8]>>(
    io: &mut KaitaiStream<S>,
    expected: &[u8],
    src_path: &str,
) -> Result<()> {
    let start = io.pos();
    let actual = io.read_bytes(expected.len()).at(src_path)?;
    if actual != expected {
        let kind = ValidationKind::NotEqual {
            expected: format!("{:02x?}", expected),
            actual: format!("{:02x?}", actual),
        };
        return Err(StructError::new(ValidationFailed { pos: start, kind }, src_path));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cause;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    enum Compression {
        None,
        Zlib,
    }

    impl TryFrom<u8> for Compression {
        type Error = ();

        fn try_from(raw: u8) -> std::result::Result<Self, ()> {
            match raw {
                0 => Ok(Compression::None),
                8 => Ok(Compression::Zlib),
                _ => Err(()),
            }
        }
    }

    fn kind(err: &StructError) -> &ValidationKind {
        &err.validation().expect("validation error").kind
    }

    #[test]
    fn test_ensure_fixed_contents() {
        let php = b"<?php";
        let mut io = KaitaiStream::new(&php[..]);
        ensure_fixed_contents(&mut io, php, "/seq/0").unwrap();

        let err = ensure_fixed_contents(&mut io, php, "/seq/0").unwrap_err();
        assert!(matches!(err.cause, Cause::Stream(_)));
        assert_eq!(
            err.to_string(),
            "/seq/0: requested 5 bytes, but only 0 bytes available"
        );
    }

    #[test]
    fn test_ensure_fixed_contents_mismatch() {
        let mut io = KaitaiStream::new(vec![0x00, 0x50, 0x4b, 0x05]);
        io.seek(1).unwrap();
        let err = ensure_fixed_contents(&mut io, b"PK\x03", "/seq/0").unwrap_err();
        let failure = err.validation().unwrap();
        assert_eq!(failure.pos, 1);
        assert_eq!(
            failure.kind,
            ValidationKind::NotEqual {
                expected: "[50, 4b, 03]".into(),
                actual: "[50, 4b, 05]".into(),
            }
        );
    }

    #[test]
    fn test_validate_eq_records_position() {
        let mut io = KaitaiStream::new(vec![0x01, 0x02, 0x03]);
        let magic = io.read_u2be().unwrap();
        let err = validate_eq(magic, 0xcafe, &io, "/seq/0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "/seq/0: at pos 2: validation failed: not equal, expected 51966, but got 258"
        );
        assert_eq!(validate_eq(magic, 0x0102, &io, "/seq/0").unwrap(), 0x0102);
    }

    #[test]
    fn test_validate_any_of() {
        let io = KaitaiStream::new(Vec::<u8>::new());
        assert_eq!(validate_any_of(3u8, &[1, 2, 3], &io, "/x").unwrap(), 3);
        let err = validate_any_of(4u8, &[1, 2, 3], &io, "/x").unwrap_err();
        assert_eq!(
            kind(&err),
            &ValidationKind::NotAnyOf {
                actual: "4".into()
            }
        );
    }

    #[rstest]
    #[case(5)]
    #[case(1)]
    #[case(10)]
    fn test_validate_range_accepts_bounds(#[case] value: i32) {
        let io = KaitaiStream::new(Vec::<u8>::new());
        assert_eq!(validate_range(value, 1, 10, &io, "/x").unwrap(), value);
    }

    #[test]
    fn test_validate_range_rejects() {
        let io = KaitaiStream::new(Vec::<u8>::new());
        let err = validate_range(0i32, 1, 10, &io, "/x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "/x: at pos 0: validation failed: not in range, min 1, but got 0"
        );

        let err = validate_range(11i32, 1, 10, &io, "/x").unwrap_err();
        assert!(matches!(kind(&err), ValidationKind::GreaterThan { .. }));

        let err = validate_max(2.5f64, 2.0, &io, "/x").unwrap_err();
        assert!(err.to_string().ends_with("not in range, max 2.0, but got 2.5"));
    }

    #[rstest]
    #[case(0, Some(Compression::None))]
    #[case(8, Some(Compression::Zlib))]
    #[case(3, None)]
    #[case(255, None)]
    fn test_validate_in_enum(#[case] raw: u8, #[case] expected: Option<Compression>) {
        let io = KaitaiStream::new(Vec::<u8>::new());
        match (validate_in_enum::<Compression, _, _>(raw, &io, "/x"), expected) {
            (Ok(value), Some(expected)) => assert_eq!(value, expected),
            (Err(err), None) => assert_eq!(
                kind(&err),
                &ValidationKind::NotInEnum {
                    actual: raw.to_string()
                }
            ),
            (res, expected) => panic!("got {res:?}, expected {expected:?}"),
        }
    }

    #[test]
    fn test_validate_expr() {
        let io = KaitaiStream::new(Vec::<u8>::new());
        assert_eq!(validate_expr(16u32, |v| v % 4 == 0, &io, "/x").unwrap(), 16);
        let err = validate_expr(17u32, |v| v % 4 == 0, &io, "/x").unwrap_err();
        assert!(err.to_string().ends_with("not matching the expression, got 17"));
    }
}
