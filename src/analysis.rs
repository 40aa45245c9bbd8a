//! Full analysis pass over one buffer.
//!
//! Runs signature matching, checksums, digests, frequency analysis and string
//! extraction in sequence and gathers the results into a [`FullAnalysis`].
//! The engines are independent; they only share the input bytes.

use crate::checksum::{compute_checksums, ChecksumResult};
use crate::config::AnalyzerConfig;
use crate::core::ByteBuffer;
use crate::entropy::{analyze_frequency, FrequencyAnalysis};
use crate::error::Result;
use crate::hashing::Digests;
use crate::signatures::{match_signatures, sniff_content, ContentHint, SignatureReport};
use crate::span_trace;
use crate::strings::{extract_strings, ExtractedString};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything the full pass computes for a buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysis {
    pub source: String,
    pub size: usize,
    pub signatures: SignatureReport,
    pub content_hint: Option<ContentHint>,
    pub checksums: ChecksumResult,
    pub digests: Option<Digests>,
    pub frequency: FrequencyAnalysis,
    /// Minimum run length used for `strings`.
    pub min_string_length: usize,
    pub strings: Vec<ExtractedString>,
}

impl FullAnalysis {
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Runs every engine over `buffer`.
///
/// An empty buffer is not an error: every statistic takes its defined
/// empty value.
pub fn analyze(buffer: &ByteBuffer, cfg: &AnalyzerConfig) -> FullAnalysis {
    let span = span_trace!("full_analysis", source = buffer.source(), size = buffer.len());
    let _guard = span.enter();

    let data = buffer.as_slice();
    let signatures = match_signatures(data);
    let content_hint = sniff_content(data);
    let checksums = compute_checksums(data);
    let digests = cfg.report.include_digests.then(|| Digests::compute(data));
    let frequency = analyze_frequency(data);
    let strings: Vec<ExtractedString> = extract_strings(data, cfg.strings.min_length).collect();

    info!(
        signatures = signatures.matches.len(),
        entropy = frequency.entropy,
        strings = strings.len(),
        "Full analysis complete"
    );

    FullAnalysis {
        source: buffer.source().to_string(),
        size: buffer.len(),
        signatures,
        content_hint,
        checksums,
        digests,
        frequency,
        min_string_length: cfg.strings.min_length.max(1),
        strings,
    }
}
