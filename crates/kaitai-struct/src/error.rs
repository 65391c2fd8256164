//! Struct-level errors: any failure tagged with the field that caused it.

use thiserror::Error;

/// A failure while parsing a particular field of a format.
///
/// `src_path` identifies the field in the format description, for example
/// `/types/header/seq/0`.
#[derive(Debug, Error)]
#[error("{src_path}: {cause}")]
pub struct StructError {
    pub src_path: String,
    #[source]
    pub cause: Cause,
}

impl StructError {
    pub fn new(cause: impl Into<Cause>, src_path: impl Into<String>) -> Self {
        Self {
            src_path: src_path.into(),
            cause: cause.into(),
        }
    }

    /// The validation failure, if this error is one.
    pub fn validation(&self) -> Option<&ValidationFailed> {
        match &self.cause {
            Cause::Validation(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the field ran out of input, either mid-read or while
    /// scanning for a terminator. Repeated-until-EOF fields stop on this.
    pub fn is_eof(&self) -> bool {
        matches!(&self.cause, Cause::Stream(e) if e.is_eof())
    }
}

/// What went wrong underneath a [`StructError`].
#[derive(Debug, Error)]
pub enum Cause {
    /// Stream read, seek or text conversion error.
    #[error(transparent)]
    Stream(#[from] kaitai_stream::Error),

    /// Byte transform error.
    #[error(transparent)]
    Process(#[from] kaitai_process::Error),

    /// A decoded value failed a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationFailed),

    /// The format switches endianness at parse time and no case matched.
    #[error("unable to decide on endianness")]
    UndecidedEndianness,
}

/// A decoded value that broke a validation rule, with the stream position
/// at the moment of the check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("at pos {pos}: validation failed: {kind}")]
pub struct ValidationFailed {
    pub pos: usize,
    pub kind: ValidationKind,
}

/// The rule a value broke. Operands are kept in their `Debug` rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationKind {
    #[error("not equal, expected {expected}, but got {actual}")]
    NotEqual { expected: String, actual: String },

    #[error("not any of the list, got {actual}")]
    NotAnyOf { actual: String },

    #[error("not in the enum, got {actual}")]
    NotInEnum { actual: String },

    #[error("not in range, min {min}, but got {actual}")]
    LessThan { min: String, actual: String },

    #[error("not in range, max {max}, but got {actual}")]
    GreaterThan { max: String, actual: String },

    #[error("not matching the expression, got {actual}")]
    Expr { actual: String },
}

/// Result type for struct-level parsing.
pub type Result<T> = std::result::Result<T, StructError>;

/// Attach a field path to lower-level errors.
///
/// ```
/// use kaitai_struct::ResultExt;
/// use kaitai_stream::KaitaiStream;
///
/// let mut io = KaitaiStream::new(vec![0x01]);
/// let err = io.read_u4le().at("/seq/0").unwrap_err();
/// assert_eq!(err.to_string(), "/seq/0: requested 4 bytes, but only 1 bytes available");
/// ```
pub trait ResultExt<T> {
    fn at(self, src_path: &str) -> Result<T>;
}

impl<T, E: Into<Cause>> ResultExt<T> for std::result::Result<T, E> {
    #[inline]
    fn at(self, src_path: &str) -> Result<T> {
        self.map_err(|e| StructError::new(e, src_path))
    }
}
