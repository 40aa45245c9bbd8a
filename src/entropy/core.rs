//! Core entropy calculation primitives.

/// Calculates the Shannon entropy of a byte slice in bits per byte.
///
/// Returns a value between 0.0 and 8.0, where:
/// - 0.0 represents no randomness (e.g., all bytes are the same, or no bytes)
/// - 8.0 represents maximum randomness (uniform distribution)
#[inline]
pub fn shannon_entropy(data: &[u8]) -> f64 {
    Histogram::from_bytes(data).entropy()
}

/// Occurrence counts for every byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 256],
    total: u64,
}

impl Histogram {
    /// Creates a new empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Creates a histogram from a byte slice in a single pass.
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hist = Self::new();
        for &byte in data {
            hist.add(byte);
        }
        hist
    }

    /// Adds a byte to the histogram.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    #[inline]
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Byte values that occur at least once, with their counts, in byte order.
    pub fn nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(b, &c)| (b as u8, c))
    }

    /// Calculates the entropy of the current histogram.
    ///
    /// An empty histogram has entropy 0.0.
    #[inline]
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total = self.total as f64;
        let mut entropy = 0.0;

        for &count in &self.counts {
            if count == 0 {
                continue;
            }
            let p = (count as f64) / total;
            entropy -= p * p.log2();
        }

        entropy
    }

    /// Returns the total number of bytes in the histogram.
    #[inline]
    pub fn len(&self) -> u64 {
        self.total
    }

    /// Returns true if the histogram is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}
