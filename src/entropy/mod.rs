//! Byte frequency statistics and Shannon entropy.
//!
//! - Core Shannon entropy calculation over a 256-bucket histogram
//! - Frequency table, ranked byte list and entropy for a whole buffer
//!
//! # Example
//!
//! ```
//! use binscope::entropy::{analyze_frequency, shannon_entropy};
//!
//! let data = b"Hello, World!";
//! let analysis = analyze_frequency(data);
//! assert_eq!(analysis.total, 13);
//! assert!((analysis.entropy - shannon_entropy(data)).abs() < 1e-12);
//! ```

pub mod core;
pub mod frequency;

pub use self::core::{shannon_entropy, Histogram};
pub use self::frequency::{analyze_frequency, FrequencyAnalysis, FrequencyTable, RankedByte};
