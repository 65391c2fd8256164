//! Terminator-delimited reads and post-hoc byte-array trimming.

use log::debug;

use crate::scan::{find_aligned, find_byte};
use crate::{Error, KaitaiStream, Result};

impl<S: AsRef<[u8]>> KaitaiStream<S> {
    /// Read bytes up to a single-byte terminator.
    ///
    /// - `include`: append the terminator to the result.
    /// - `consume`: advance past the terminator; otherwise the next read
    ///   starts at the terminator.
    /// - `eos_error`: fail with [`Error::NoTerminatorFound`] when the stream
    ///   ends first; otherwise return everything up to the end.
    pub fn read_bytes_term(
        &mut self,
        term: u8,
        include: bool,
        consume: bool,
        eos_error: bool,
    ) -> Result<&[u8]> {
        self.read_until(&[term], include, consume, eos_error, |rest| {
            find_byte(term, rest)
        })
    }

    /// Read bytes up to a multi-byte terminator.
    ///
    /// The terminator is only recognised at offsets that are a multiple of
    /// its length, counted from the current position. An empty terminator
    /// returns an empty result without moving. Flags behave as in
    /// [`read_bytes_term`](Self::read_bytes_term).
    pub fn read_bytes_term_multi(
        &mut self,
        term: &[u8],
        include: bool,
        consume: bool,
        eos_error: bool,
    ) -> Result<&[u8]> {
        if term.is_empty() {
            return Ok(&[]);
        }
        self.read_until(term, include, consume, eos_error, |rest| {
            find_aligned(term, rest)
        })
    }

    fn read_until(
        &mut self,
        term: &[u8],
        include: bool,
        consume: bool,
        eos_error: bool,
        find: impl FnOnce(&[u8]) -> Option<usize>,
    ) -> Result<&[u8]> {
        self.align_to_byte();
        let start = self.pos.min(self.size());

        let Some(offset) = find(&self.source.as_ref()[start..]) else {
            if eos_error {
                return Err(Error::NoTerminatorFound {
                    terminator: term.to_vec(),
                });
            }
            debug!(
                "no terminator {:02x?} before end of stream, returning {} bytes",
                term,
                self.size() - start
            );
            self.pos = self.size();
            return Ok(&self.source.as_ref()[start..]);
        };

        let end = start + offset;
        self.pos = if consume { end + term.len() } else { end };
        let end = if include { end + term.len() } else { end };
        Ok(&self.source.as_ref()[start..end])
    }
}

/// Strip every trailing `pad` byte.
pub fn bytes_strip_right(bytes: &[u8], pad: u8) -> &[u8] {
    let len = bytes
        .iter()
        .rposition(|&b| b != pad)
        .map_or(0, |i| i + 1);
    &bytes[..len]
}

/// Cut `bytes` at the first `term`, optionally keeping the terminator.
///
/// Returns `bytes` unchanged if the terminator does not occur.
pub fn bytes_terminate(bytes: &[u8], term: u8, include: bool) -> &[u8] {
    match find_byte(term, bytes) {
        Some(i) if include => &bytes[..=i],
        Some(i) => &bytes[..i],
        None => bytes,
    }
}

/// Cut `bytes` at the first aligned occurrence of a multi-byte `term`.
pub fn bytes_terminate_multi<'a>(bytes: &'a [u8], term: &[u8], include: bool) -> &'a [u8] {
    match find_aligned(term, bytes) {
        Some(i) if include => &bytes[..i + term.len()],
        Some(i) => &bytes[..i],
        None => bytes,
    }
}
