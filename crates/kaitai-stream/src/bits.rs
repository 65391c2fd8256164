//! Bit-level reads spanning byte boundaries.
//!
//! Residual bits of a partially consumed byte are kept in a [`BitState`]
//! owned by the stream. The two packing conventions are separate pure
//! transitions:
//!
//! - [`BitState::pull_be`]: most significant bit first. Residual bits are
//!   the *high* bits of the result and new bytes are appended below them.
//! - [`BitState::pull_le`]: least significant bit first. Residual bits are
//!   the *low* bits of the result and new bytes are stacked above them,
//!   the first fetched byte lowest.

use crate::{Error, KaitaiStream, Result};

/// Largest bit field a single call can return.
pub const MAX_BITS: u32 = 64;

/// Unread bits left over from the last bit-level read.
///
/// Only the low `count` bits of `value` are meaningful; `count` is 0..=7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitState {
    pub value: u64,
    pub count: u32,
}

impl BitState {
    #[inline]
    pub const fn new(value: u64, count: u32) -> Self {
        Self {
            value: value & low_mask(count),
            count,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of whole bytes that must be fetched to serve an `n`-bit read.
    #[inline]
    pub const fn bytes_needed(&self, n: u32) -> usize {
        if n <= self.count {
            0
        } else {
            ((n - self.count + 7) / 8) as usize
        }
    }

    /// Take `n` bits MSB-first, using `fetched` as the next bytes of input.
    ///
    /// `fetched` must hold exactly [`bytes_needed(n)`](Self::bytes_needed)
    /// bytes. Returns the value and the residual state for the next call.
    pub fn pull_be(self, n: u32, fetched: &[u8]) -> (u64, BitState) {
        debug_assert!(n <= MAX_BITS);
        debug_assert_eq!(fetched.len(), self.bytes_needed(n));

        if n <= self.count {
            let left = self.count - n;
            let res = self.value >> left;
            return (res, BitState::new(self.value, left));
        }

        let needed = n - self.count;
        let left = (8 - needed % 8) % 8;

        // At most 8 bytes are fetched, so the fresh bits fit in a u64.
        let fresh = fetched
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

        let high = if needed < 64 { self.value << needed } else { 0 };
        let res = (fresh >> left) | high;

        (res & low_mask(n), BitState::new(fresh, left))
    }

    /// Take `n` bits LSB-first, using `fetched` as the next bytes of input.
    ///
    /// `fetched` must hold exactly [`bytes_needed(n)`](Self::bytes_needed)
    /// bytes. Returns the value and the residual state for the next call.
    pub fn pull_le(self, n: u32, fetched: &[u8]) -> (u64, BitState) {
        debug_assert!(n <= MAX_BITS);
        debug_assert_eq!(fetched.len(), self.bytes_needed(n));

        if n <= self.count {
            let res = self.value & low_mask(n);
            let rest = if n < 64 { self.value >> n } else { 0 };
            return (res, BitState::new(rest, self.count - n));
        }

        let needed = n - self.count;
        let left = (8 - needed % 8) % 8;

        let fresh = fetched
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (i * 8)));

        let rest = if needed < 64 { fresh >> needed } else { 0 };
        let res = (fresh << self.count) | self.value;

        (res & low_mask(n), BitState::new(rest, left))
    }
}

/// Mask selecting the low `n` bits; `n == 64` selects everything.
#[inline]
const fn low_mask(n: u32) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

impl<S: AsRef<[u8]>> KaitaiStream<S> {
    /// Read an `n`-bit unsigned integer, most significant bit first.
    ///
    /// Consecutive calls share a partially consumed byte. Any byte-level
    /// read or seek discards the leftover bits.
    pub fn read_bits_int_be(&mut self, n: u32) -> Result<u64> {
        let range = self.reserve_bits(n)?;
        let (res, bits) = self.bits.pull_be(n, &self.source.as_ref()[range]);
        self.bits = bits;
        Ok(res)
    }

    /// Read an `n`-bit unsigned integer, least significant bit first.
    pub fn read_bits_int_le(&mut self, n: u32) -> Result<u64> {
        let range = self.reserve_bits(n)?;
        let (res, bits) = self.bits.pull_le(n, &self.source.as_ref()[range]);
        self.bits = bits;
        Ok(res)
    }

    /// Current residual bit state.
    #[inline]
    pub fn bit_state(&self) -> BitState {
        self.bits
    }

    fn reserve_bits(&mut self, n: u32) -> Result<std::ops::Range<usize>> {
        if n > MAX_BITS {
            return Err(Error::InvalidBitWidth { requested: n });
        }
        self.take(self.bits.bytes_needed(n))
    }
}
