//! Byte and terminator searching.
//!
//! Single-byte searches go through `memchr`. Multi-byte terminators are
//! matched only on unit boundaries, so they are compared chunk by chunk.

/// Find the first occurrence of a byte in a slice.
#[inline]
pub fn find_byte(needle: u8, haystack: &[u8]) -> Option<usize> {
    memchr::memchr(needle, haystack)
}

/// Find the first occurrence of `unit` at an offset that is a multiple of
/// `unit.len()`.
///
/// Matches straddling a unit boundary are ignored. An empty `unit` never
/// matches.
#[inline]
pub fn find_aligned(unit: &[u8], haystack: &[u8]) -> Option<usize> {
    if unit.is_empty() {
        return None;
    }
    haystack
        .chunks_exact(unit.len())
        .position(|chunk| chunk == unit)
        .map(|index| index * unit.len())
}
