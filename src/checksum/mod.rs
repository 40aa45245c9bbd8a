//! Simple integrity checksums over the loaded buffer.
//!
//! All three values are pure functions of the bytes. The 32-bit sum wraps on
//! overflow and Fletcher-16 uses modulo-255 running sums over 8-bit words.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The three checksums reported for a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChecksumResult {
    pub simple_sum: u32,
    pub xor: u8,
    pub fletcher16: u16,
}

/// Computes all checksums for `data`.
///
/// An empty slice yields zero for every checksum.
pub fn compute_checksums(data: &[u8]) -> ChecksumResult {
    let result = ChecksumResult {
        simple_sum: simple_sum(data),
        xor: xor_checksum(data),
        fletcher16: fletcher16(data),
    };
    debug!(
        len = data.len(),
        simple_sum = result.simple_sum,
        xor = result.xor,
        fletcher16 = result.fletcher16,
        "Checksums computed"
    );
    result
}

/// Byte sum modulo 2^32.
#[inline]
pub fn simple_sum(data: &[u8]) -> u32 {
    data.iter()
        .fold(0u32, |acc, &b| acc.wrapping_add(u32::from(b)))
}

/// XOR fold of every byte.
#[inline]
pub fn xor_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Fletcher-16: `(sum2 << 8) | sum1` with both sums taken modulo 255.
#[inline]
pub fn fletcher16(data: &[u8]) -> u16 {
    let mut sum1: u16 = 0;
    let mut sum2: u16 = 0;
    for &b in data {
        sum1 = (sum1 + u16::from(b)) % 255;
        sum2 = (sum2 + sum1) % 255;
    }
    (sum2 << 8) | sum1
}
