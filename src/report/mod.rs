//! Line-oriented text report.
//!
//! The report is append-only: a header, then one section per analysis step in
//! the order the steps ran. It is meant for people, not for re-parsing.

use crate::analysis::FullAnalysis;
use crate::checksum::ChecksumResult;
use crate::entropy::FrequencyAnalysis;
use crate::hashing::Digests;
use crate::search::PatternMatches;
use crate::signatures::SignatureReport;
use crate::strings::ExtractedString;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Timestamp layout used in the report header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes report sections to any sink.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl ReportWriter<BufWriter<File>> {
    /// Creates (truncating) the report file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Creating report");
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, source: &str, size: usize, at: &DateTime<Local>) -> io::Result<()> {
        writeln!(self.out, "=== BINARY ANALYSIS REPORT ===")?;
        writeln!(self.out, "File: {}", source)?;
        writeln!(self.out, "Size: {} bytes", size)?;
        writeln!(self.out, "Analysis Date: {}", at.format(TIMESTAMP_FORMAT))?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn signatures(&mut self, report: &SignatureReport) -> io::Result<()> {
        if report.matches.is_empty() {
            writeln!(self.out, "FILE TYPE: Unknown")?;
        }
        for m in &report.matches {
            writeln!(self.out, "FILE TYPE: {}", m.description)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn checksums(&mut self, c: &ChecksumResult) -> io::Result<()> {
        writeln!(self.out, "CHECKSUMS:")?;
        writeln!(self.out, "Simple Sum: {} (0x{:x})", c.simple_sum, c.simple_sum)?;
        writeln!(self.out, "XOR: {} (0x{:x})", c.xor, c.xor)?;
        writeln!(self.out, "Fletcher-16: {} (0x{:x})", c.fletcher16, c.fletcher16)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn digests(&mut self, d: &Digests) -> io::Result<()> {
        writeln!(self.out, "DIGESTS:")?;
        writeln!(self.out, "MD5: {}", d.md5)?;
        writeln!(self.out, "SHA-256: {}", d.sha256)?;
        writeln!(self.out, "BLAKE3: {}", d.blake3)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn frequency(&mut self, f: &FrequencyAnalysis, top: usize) -> io::Result<()> {
        writeln!(self.out, "FREQUENCY ANALYSIS:")?;
        writeln!(self.out, "Shannon Entropy: {:.6} bits", f.entropy)?;
        writeln!(self.out, "Top {} bytes:", top)?;
        for entry in f.top(top) {
            writeln!(self.out, "0x{:x}: {} times", entry.byte, entry.count)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn strings(&mut self, strings: &[ExtractedString], min_length: usize) -> io::Result<()> {
        writeln!(self.out, "STRING EXTRACTION:")?;
        writeln!(
            self.out,
            "Found {} strings (min {} chars)",
            strings.len(),
            min_length
        )?;
        for s in strings {
            writeln!(self.out, "0x{:x}: \"{}\"", s.offset, s.text)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn pattern_matches(&mut self, m: &PatternMatches) -> io::Result<()> {
        if m.offsets.is_empty() {
            writeln!(self.out, "{}: Not found", m.label)?;
        } else {
            writeln!(self.out, "{}: Found {} times", m.label, m.offsets.len())?;
            for off in &m.offsets {
                writeln!(self.out, "  0x{:x}", off)?;
            }
        }
        self.out.flush()
    }

    /// Writes the header and every section of a full analysis pass.
    pub fn full(
        &mut self,
        analysis: &FullAnalysis,
        report_top: usize,
        at: &DateTime<Local>,
    ) -> io::Result<()> {
        self.header(&analysis.source, analysis.size, at)?;
        self.signatures(&analysis.signatures)?;
        self.checksums(&analysis.checksums)?;
        if let Some(d) = &analysis.digests {
            self.digests(d)?;
        }
        self.frequency(&analysis.frequency, report_top)?;
        self.strings(&analysis.strings, analysis.min_string_length)
    }
}
