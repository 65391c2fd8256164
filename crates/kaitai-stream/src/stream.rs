//! Positioned byte stream over an in-memory or mapped byte source.
//!
//! This module provides [`KaitaiStream`], a cursor over a finite byte source
//! that every generated parser reads from. Byte-level reads live here; bit,
//! numeric, terminator and text reads are implemented in sibling modules as
//! further `impl` blocks on the same type.

use std::ops::Range;

use crate::bits::BitState;
use crate::{Error, Result};

/// A seekable reader over a finite byte source.
///
/// The source is anything that can be viewed as a byte slice: an owned
/// `Vec<u8>`, a borrowed `&[u8]`, an `Arc<[u8]>` shared between readers, or a
/// memory-mapped file (see [`KaitaiStream::from_file`]).
///
/// Byte-level reads return slices borrowed from the source without copying.
///
/// # Example
///
/// ```
/// use kaitai_stream::KaitaiStream;
///
/// let mut io = KaitaiStream::new(vec![0x01, 0x02, 0x03, 0x04, 0x05]);
///
/// assert_eq!(io.read_u2be().unwrap(), 0x0102);
/// assert_eq!(io.read_bytes(2).unwrap(), &[0x03, 0x04]);
/// assert_eq!(io.pos(), 4);
/// assert!(!io.is_eof());
/// ```
#[derive(Debug, Clone)]
pub struct KaitaiStream<S = Vec<u8>> {
    pub(crate) source: S,
    pub(crate) pos: usize,
    pub(crate) bits: BitState,
}

impl<S: AsRef<[u8]>> KaitaiStream<S> {
    /// Bind a stream to a byte source, positioned at offset 0.
    #[inline]
    pub fn new(source: S) -> Self {
        Self {
            source,
            pos: 0,
            bits: BitState::default(),
        }
    }

    /// Release the underlying byte source.
    #[inline]
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Borrow the whole underlying buffer, regardless of position.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.source.as_ref()
    }

    /// Total length of the source in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.source.as_ref().len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of whole bytes left between the position and the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.size().saturating_sub(self.pos)
    }

    /// Check whether nothing is left to read.
    ///
    /// Residual bits from a previous bit-level read count as unread data.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.bits.is_empty() && self.pos >= self.size()
    }

    /// Seek to an absolute position.
    ///
    /// `pos == size()` is valid and leaves the stream exactly at its end.
    /// Any residual bits are discarded.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        let size = self.size();
        if pos > size {
            return Err(Error::OutOfRange {
                position: pos,
                size,
            });
        }
        self.align_to_byte();
        self.pos = pos;
        Ok(())
    }

    /// Discard residual bits so the next read starts on a byte boundary.
    #[inline]
    pub fn align_to_byte(&mut self) {
        self.bits = BitState::default();
    }

    /// Read exactly `count` bytes and advance the position.
    ///
    /// A zero-length read always succeeds.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&[u8]> {
        self.align_to_byte();
        let range = self.take(count)?;
        Ok(&self.source.as_ref()[range])
    }

    /// Read every byte from the position to the end of the stream.
    #[inline]
    pub fn read_bytes_full(&mut self) -> &[u8] {
        self.align_to_byte();
        let start = self.pos.min(self.size());
        self.pos = self.size();
        &self.source.as_ref()[start..]
    }

    /// Peek at the bytes from the position to the end without advancing.
    #[inline]
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.source.as_ref()[self.pos.min(self.size())..]
    }

    /// Reserve `count` bytes starting at the position, advancing past them.
    ///
    /// Bit state is left untouched, so bit-level reads can pull bytes
    /// through this without losing their residual bits.
    pub(crate) fn take(&mut self, count: usize) -> Result<Range<usize>> {
        let available = self.remaining();
        if count > available {
            return Err(Error::EndOfStream {
                requested: count,
                available,
            });
        }
        let start = self.pos;
        self.pos += count;
        Ok(start..self.pos)
    }

    /// Read a fixed-size array of bytes.
    #[inline]
    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.align_to_byte();
        let range = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.source.as_ref()[range]);
        Ok(out)
    }
}
