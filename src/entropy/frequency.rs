//! Byte frequency analysis: occurrence table, ranking and entropy.

use super::core::Histogram;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Occurrence count per byte value; only values seen at least once are keys.
pub type FrequencyTable = BTreeMap<u8, u64>;

/// One entry of the ranked frequency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedByte {
    pub byte: u8,
    pub count: u64,
}

/// Frequency statistics for a whole buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyAnalysis {
    /// Number of bytes analyzed.
    pub total: u64,
    pub table: FrequencyTable,
    /// Every distinct byte, most frequent first.
    pub ranked: Vec<RankedByte>,
    /// Shannon entropy in bits per byte.
    pub entropy: f64,
}

impl FrequencyAnalysis {
    /// The `n` most frequent bytes (fewer if the buffer has fewer distinct values).
    pub fn top(&self, n: usize) -> &[RankedByte] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Share of the buffer taken by `entry`, in percent.
    pub fn percent(&self, entry: &RankedByte) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        entry.count as f64 / self.total as f64 * 100.0
    }
}

/// Builds the frequency table, ranked list and entropy for `data`.
///
/// Ties in the ranking are broken by ascending byte value; callers should
/// not rely on any particular tie order.
pub fn analyze_frequency(data: &[u8]) -> FrequencyAnalysis {
    let hist = Histogram::from_bytes(data);
    let table: FrequencyTable = hist.nonzero().collect();

    let mut ranked: Vec<RankedByte> = table
        .iter()
        .map(|(&byte, &count)| RankedByte { byte, count })
        .collect();
    // table iterates in byte order and the sort is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let entropy = hist.entropy();
    debug!(
        len = data.len(),
        distinct = ranked.len(),
        entropy = entropy,
        "Frequency analysis complete"
    );

    FrequencyAnalysis {
        total: hist.len(),
        table,
        ranked,
        entropy,
    }
}
