//! File-type identification from magic numbers.
//!
//! A fixed table of format signatures is checked against the buffer. Every
//! entry that matches is reported; the table is not mutually exclusive.

mod sniff;

pub use sniff::{sniff_content, ContentHint};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A magic number and where it must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub bytes: &'static [u8],
    pub description: &'static str,
    pub offset: usize,
}

impl Signature {
    const fn at_start(bytes: &'static [u8], description: &'static str) -> Self {
        Self {
            bytes,
            description,
            offset: 0,
        }
    }

    /// Whether `data` is long enough for this signature to be tested.
    pub fn fits(&self, data: &[u8]) -> bool {
        data.len() >= self.offset + self.bytes.len()
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        self.fits(data) && &data[self.offset..self.offset + self.bytes.len()] == self.bytes
    }
}

/// Built-in signature table, checked in order.
pub const SIGNATURES: &[Signature] = &[
    Signature::at_start(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], "PNG Image"),
    Signature::at_start(&[0xFF, 0xD8, 0xFF], "JPEG Image"),
    Signature::at_start(b"GIF8", "GIF Image"),
    Signature::at_start(&[0x50, 0x4B, 0x03, 0x04], "ZIP Archive"),
    Signature::at_start(&[0x50, 0x4B, 0x05, 0x06], "ZIP Archive (empty)"),
    Signature::at_start(b"%PDF", "PDF Document"),
    Signature::at_start(b"MZ", "PE Executable"),
    Signature::at_start(&[0x7F, 0x45, 0x4C, 0x46], "ELF Executable"),
    Signature::at_start(&[0xCA, 0xFE, 0xBA, 0xBE], "Java Class File"),
    Signature::at_start(&[0x1F, 0x8B, 0x08], "GZIP Archive"),
];

/// One matched table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureMatch {
    pub description: String,
    pub offset: usize,
}

/// How signature matching turned out overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Detection {
    /// At least one signature matched.
    Matched,
    /// Some signatures could be tested but none matched.
    NoMatch,
    /// The buffer is shorter than every signature in the table.
    TooShort,
}

/// All signature matches for a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureReport {
    pub matches: Vec<SignatureMatch>,
    /// Number of table entries the buffer was long enough to test.
    pub tested: usize,
}

impl SignatureReport {
    pub fn detection(&self) -> Detection {
        if !self.matches.is_empty() {
            Detection::Matched
        } else if self.tested == 0 {
            Detection::TooShort
        } else {
            Detection::NoMatch
        }
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.description.as_str())
    }
}

/// Checks `data` against the built-in table.
pub fn match_signatures(data: &[u8]) -> SignatureReport {
    match_signatures_with(data, SIGNATURES)
}

/// Checks `data` against an arbitrary table, reporting matches in table order.
pub fn match_signatures_with(data: &[u8], table: &[Signature]) -> SignatureReport {
    let mut tested = 0;
    let mut matches = Vec::new();
    for sig in table.iter().filter(|s| s.fits(data)) {
        tested += 1;
        if sig.matches(data) {
            matches.push(SignatureMatch {
                description: sig.description.to_string(),
                offset: sig.offset,
            });
        }
    }
    debug!(
        len = data.len(),
        tested,
        matched = matches.len(),
        "Signature matching complete"
    );
    SignatureReport { matches, tested }
}
