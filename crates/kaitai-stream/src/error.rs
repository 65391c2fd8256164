//! Error types for kaitai-stream.

use thiserror::Error;

/// Errors raised by stream reads, seeks and text conversion.
///
/// A failed read leaves the stream position unspecified; callers must
/// [`seek`](crate::KaitaiStream::seek) before reading again.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer bytes remain than a fixed-length read requested.
    #[error("requested {requested} bytes, but only {available} bytes available")]
    EndOfStream { requested: usize, available: usize },

    /// A terminator scan reached the end of the stream without a match.
    #[error("end of stream reached, but no terminator {terminator:02x?} found")]
    NoTerminatorFound { terminator: Vec<u8> },

    /// Seek target lies past the end of the stream.
    #[error("the position ({position}) must be less than or equal to the size ({size}) of the stream")]
    OutOfRange { position: usize, size: usize },

    /// Bit-level read wider than a `u64`.
    #[error("cannot read {requested} bits at once (max 64)")]
    InvalidBitWidth { requested: u32 },

    /// Byte run could not be converted to text.
    #[error("cannot decode bytes as {encoding}: {detail}")]
    Decoding { encoding: String, detail: String },

    /// I/O error while binding a file or reader.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for failures caused by running out of data.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::EndOfStream { .. } | Error::NoTerminatorFound { .. })
    }
}

/// Result type alias using the stream Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_stream_message() {
        let err = Error::EndOfStream {
            requested: 5,
            available: 0,
        };
        assert_eq!(err.to_string(), "requested 5 bytes, but only 0 bytes available");
        assert!(err.is_eof());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = Error::OutOfRange {
            position: 603,
            size: 600,
        };
        assert_eq!(
            err.to_string(),
            "the position (603) must be less than or equal to the size (600) of the stream"
        );
        assert!(!err.is_eof());
    }

    #[test]
    fn test_no_terminator_message() {
        let err = Error::NoTerminatorFound {
            terminator: vec![0x00, 0x00],
        };
        assert_eq!(
            err.to_string(),
            "end of stream reached, but no terminator [00, 00] found"
        );
    }
}
