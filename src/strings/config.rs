//! Configuration for printable string extraction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringsConfig {
    /// Minimum length for a string candidate (in bytes), at least 1
    pub min_length: usize,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Shortest run reported when no threshold is given.
pub const DEFAULT_MIN_LENGTH: usize = 4;
