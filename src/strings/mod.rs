//! Printable string extraction.
//!
//! Scans for maximal runs of printable ASCII bytes and reports every run at
//! or above a minimum length together with its starting offset. Extraction is
//! lazy: [`extract_strings`] returns an iterator that can be cloned to
//! restart from the beginning.

mod config;
mod scan;

pub use config::{StringsConfig, DEFAULT_MIN_LENGTH};
pub use scan::{extract_strings, is_printable, ExtractedString, StringScanner};
