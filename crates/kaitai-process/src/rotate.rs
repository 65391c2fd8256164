//! Per-byte bit rotation.

use crate::{Error, Result};

/// Rotate the bits of each byte left by `amount`.
///
/// `amount` is taken modulo 8. Only `group_size == 1` is supported.
pub fn process_rotate_left(data: &[u8], amount: u32, group_size: usize) -> Result<Vec<u8>> {
    if group_size != 1 {
        return Err(Error::UnsupportedGroupSize { group_size });
    }
    Ok(data.iter().map(|b| b.rotate_left(amount)).collect())
}
