//! binscope: single-file binary inspection.
//!
//! The analysis engines are independent functions over one immutable
//! [`ByteBuffer`]: magic-number signatures, checksums, digests, byte
//! frequency and entropy, printable strings, pattern search and hex dumps.
//! [`analysis::analyze`] runs them all; [`cli`] adds the interactive tool.

pub mod analysis;
pub mod checksum;
pub mod cli;
pub mod config;
pub mod core;
pub mod entropy;
pub mod error;
pub mod hashing;
pub mod hexdump;
pub mod io;
pub mod logging;
pub mod report;
pub mod search;
pub mod signatures;
pub mod strings;

pub use crate::analysis::{analyze, FullAnalysis};
pub use crate::checksum::{compute_checksums, ChecksumResult};
pub use crate::config::AnalyzerConfig;
pub use crate::core::ByteBuffer;
pub use crate::entropy::{analyze_frequency, shannon_entropy, FrequencyAnalysis};
pub use crate::error::{BinscopeError, Result};
pub use crate::hexdump::{render_hex_dump, HexDumpRow};
pub use crate::search::{decode_hex_string, search_many, search_pattern};
pub use crate::signatures::{match_signatures, SignatureReport, SIGNATURES};
pub use crate::strings::{extract_strings, ExtractedString};
