//! Conversion of byte runs to text.
//!
//! Encoding names are resolved with WHATWG label rules, so `"UTF-8"`,
//! `"utf8"`, `"Shift_JIS"`, `"UTF-16LE"` and friends all work. Note that
//! the label `"ASCII"` maps to windows-1252, a superset of ASCII.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::{Error, KaitaiStream, Result};

/// Decode `bytes` from the named encoding into a Rust string.
///
/// Fails with [`Error::Decoding`] for an unknown label or malformed input;
/// nothing is replaced with U+FFFD.
pub fn bytes_to_str<'a>(bytes: &'a [u8], encoding: &str) -> Result<Cow<'a, str>> {
    let enc = Encoding::for_label(encoding.as_bytes()).ok_or_else(|| Error::Decoding {
        encoding: encoding.to_string(),
        detail: "unknown encoding label".to_string(),
    })?;

    if enc == UTF_8 {
        return std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| Error::Decoding {
                encoding: encoding.to_string(),
                detail: e.to_string(),
            });
    }

    enc.decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| Error::Decoding {
            encoding: encoding.to_string(),
            detail: format!("malformed {} sequence", enc.name()),
        })
}

impl<S: AsRef<[u8]>> KaitaiStream<S> {
    /// Read the rest of the stream as text.
    pub fn read_str_eos(&mut self, encoding: &str) -> Result<String> {
        let bytes = self.read_bytes_full();
        bytes_to_str(bytes, encoding).map(Cow::into_owned)
    }

    /// Read exactly `count` bytes as text.
    pub fn read_str_byte_limit(&mut self, count: usize, encoding: &str) -> Result<String> {
        let bytes = self.read_bytes(count)?;
        bytes_to_str(bytes, encoding).map(Cow::into_owned)
    }

    /// Read a terminated string. See
    /// [`read_bytes_term`](Self::read_bytes_term) for the flags.
    pub fn read_strz(
        &mut self,
        encoding: &str,
        term: u8,
        include: bool,
        consume: bool,
        eos_error: bool,
    ) -> Result<String> {
        let bytes = self.read_bytes_term(term, include, consume, eos_error)?;
        bytes_to_str(bytes, encoding).map(Cow::into_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_borrows() {
        let text = bytes_to_str("héllo".as_bytes(), "UTF-8").unwrap();
        assert!(matches!(text, Cow::Borrowed("héllo")));
    }

    #[test]
    fn test_legacy_encodings() {
        assert_eq!(bytes_to_str(&[0x63, 0x61, 0x66, 0xe9], "windows-1252").unwrap(), "café");
        assert_eq!(bytes_to_str(&[0x82, 0xa0], "Shift_JIS").unwrap(), "あ");
        assert_eq!(bytes_to_str(&[0x41, 0x00, 0x42, 0x00], "UTF-16LE").unwrap(), "AB");
        assert_eq!(bytes_to_str(b"plain", "ASCII").unwrap(), "plain");
        // labels are matched with surrounding whitespace ignored
        assert_eq!(bytes_to_str(&[0xe9], " latin1\n").unwrap(), "é");
    }

    #[test]
    fn test_malformed_input() {
        let err = bytes_to_str(&[0x66, 0xff, 0xfe], "utf-8").unwrap_err();
        assert!(matches!(err, Error::Decoding { ref encoding, .. } if encoding == "utf-8"));

        assert!(bytes_to_str(&[0x81], "Shift_JIS").is_err());
    }

    #[test]
    fn test_unknown_label() {
        let err = bytes_to_str(b"abc", "klingon").unwrap_err();
        assert!(err.to_string().contains("unknown encoding label"));
    }

    #[test]
    fn test_read_strings() {
        let mut io = KaitaiStream::new(b"name\0value\0tail".to_vec());
        assert_eq!(io.read_strz("UTF-8", 0, false, true, true).unwrap(), "name");
        assert_eq!(io.read_str_byte_limit(5, "UTF-8").unwrap(), "value");
        assert_eq!(io.read_u1().unwrap(), 0);
        assert_eq!(io.read_str_eos("UTF-8").unwrap(), "tail");
        assert_eq!(io.read_str_eos("UTF-8").unwrap(), "");
    }

    #[test]
    fn test_read_strz_missing_terminator() {
        let mut io = KaitaiStream::new(b"abc".to_vec());
        assert!(matches!(
            io.read_strz("UTF-8", 0, false, true, true),
            Err(Error::NoTerminatorFound { .. })
        ));
        io.seek(0).unwrap();
        assert_eq!(io.read_strz("UTF-8", 0, false, true, false).unwrap(), "abc");
    }
}
