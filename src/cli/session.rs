//! Interactive analysis session.
//!
//! Drives the full analysis pass and then the menu loop. Input, console and
//! report sink are all injected so the session can run against in-memory
//! buffers.

use super::console;
use crate::analysis::{analyze, FullAnalysis};
use crate::config::AnalyzerConfig;
use crate::core::ByteBuffer;
use crate::error::{BinscopeError, Result};
use crate::hexdump::render_hex_dump;
use crate::report::ReportWriter;
use crate::search::{check_pattern, search_inputs, PatternInput, PatternMatches};
use crate::strings::{extract_strings, ExtractedString};
use chrono::{DateTime, Local};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SearchPatterns,
    HexDumpRange,
    ExtractStrings,
    FullHexDump,
    Exit,
}

impl MenuChoice {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(MenuChoice::SearchPatterns),
            "2" => Some(MenuChoice::HexDumpRange),
            "3" => Some(MenuChoice::ExtractStrings),
            "4" => Some(MenuChoice::FullHexDump),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n=== MENU ===\n\
1. Search patterns\n\
2. Hex dump range\n\
3. String extraction (different min length)\n\
4. Full hex dump\n\
5. Exit";

/// Parses a hex offset, with or without a `0x` prefix.
pub fn parse_hex_offset(text: &str) -> Option<usize> {
    let t = text.trim();
    let digits = t
        .strip_prefix("0x")
        .or_else(|| t.strip_prefix("0X"))
        .unwrap_or(t);
    usize::from_str_radix(digits, 16).ok()
}

pub struct Session<'a, R, O, W: Write> {
    buffer: &'a ByteBuffer,
    cfg: &'a AnalyzerConfig,
    input: R,
    out: O,
    report: ReportWriter<W>,
}

impl<'a, R: BufRead, O: Write, W: Write> Session<'a, R, O, W> {
    pub fn new(
        buffer: &'a ByteBuffer,
        cfg: &'a AnalyzerConfig,
        input: R,
        out: O,
        report: ReportWriter<W>,
    ) -> Self {
        Self {
            buffer,
            cfg,
            input,
            out,
            report,
        }
    }

    pub fn into_report(self) -> ReportWriter<W> {
        self.report
    }

    /// Runs every engine, prints the sections and writes them to the report.
    ///
    /// A non-empty buffer also gets a preview dump of its first bytes.
    pub fn full_pass(&mut self, at: &DateTime<Local>) -> Result<FullAnalysis> {
        let analysis = analyze(self.buffer, self.cfg);
        self.report
            .full(&analysis, self.cfg.frequency.report_top, at)?;

        console::signatures(
            &mut self.out,
            &analysis.signatures,
            analysis.content_hint.as_ref(),
        )?;
        console::checksums(&mut self.out, &analysis.checksums)?;
        if let Some(d) = &analysis.digests {
            console::digests(&mut self.out, d)?;
        }
        console::frequency(
            &mut self.out,
            &analysis.frequency,
            self.cfg.frequency.console_top,
        )?;
        console::strings(
            &mut self.out,
            &analysis.strings,
            analysis.min_string_length,
            self.cfg.report.console_strings,
        )?;

        if !self.buffer.is_empty() && self.cfg.hexdump.preview_bytes > 0 {
            writeln!(
                self.out,
                "\n=== FIRST {} BYTES ===",
                self.cfg.hexdump.preview_bytes
            )?;
            let dump = render_hex_dump(self.buffer, 0, self.cfg.hexdump.preview_bytes)?;
            console::hex_dump(&mut self.out, dump)?;
        }
        Ok(analysis)
    }

    /// Menu loop; returns when the user exits or input ends.
    pub fn run_menu(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "{}", MENU)?;
            let Some(line) = self.prompt("Choice: ")? else {
                debug!("Input closed, leaving menu");
                break;
            };
            let outcome = match MenuChoice::parse(&line) {
                Some(MenuChoice::SearchPatterns) => self.search_patterns(),
                Some(MenuChoice::HexDumpRange) => self.hex_dump_range(),
                Some(MenuChoice::ExtractStrings) => self.strings_again(),
                Some(MenuChoice::FullHexDump) => self.full_hex_dump(),
                Some(MenuChoice::Exit) => {
                    writeln!(self.out, "Analysis complete.")?;
                    break;
                }
                None => {
                    writeln!(self.out, "Invalid choice!")?;
                    Ok(())
                }
            };
            match outcome {
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Menu action failed");
                    writeln!(self.out, "{}", e)?;
                }
                other => other?,
            }
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn search_patterns(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== PATTERN SEARCH ===")?;
        let Some(count) = self.prompt("How many patterns? ")? else {
            return Ok(());
        };
        let count: usize = count
            .trim()
            .parse()
            .map_err(|_| BinscopeError::InvalidInput(format!("not a pattern count: {:?}", count)))?;

        let mut inputs = Vec::with_capacity(count);
        for i in 1..=count {
            writeln!(self.out, "\nPattern #{}:", i)?;
            writeln!(self.out, "1. Hex pattern (e.g. DEADBEEF)")?;
            writeln!(self.out, "2. String pattern")?;
            let Some(kind) = self.prompt("Choice (1/2): ")? else {
                break;
            };
            let text = match kind.trim() {
                "1" => self.prompt("Hex pattern: ")?.map(PatternInput::Hex),
                "2" => self.prompt("String pattern: ")?.map(PatternInput::Text),
                _ => {
                    writeln!(self.out, "Invalid choice!")?;
                    continue;
                }
            };
            match text {
                Some(input) => inputs.push(input),
                None => break,
            }
        }
        if inputs.is_empty() {
            return Ok(());
        }

        // patterns are numbered by position among the accepted inputs
        for matches in search_inputs(self.buffer, &inputs)? {
            self.show_matches(&matches)?;
        }
        Ok(())
    }

    fn show_matches(&mut self, matches: &PatternMatches) -> Result<()> {
        writeln!(self.out)?;
        for bad in &matches.malformed {
            writeln!(
                self.out,
                "Invalid hex input skipped: {:?} at digit {}",
                bad.text, bad.position
            )?;
        }
        if let Err(e) = check_pattern(&matches.pattern, self.buffer.len()) {
            warn!(label = %matches.label, error = %e, "Pattern cannot match");
            writeln!(self.out, "{}: {}", matches.label, e)?;
        }
        info!(label = %matches.label, found = matches.offsets.len(), "Pattern searched");
        console::pattern_matches(&mut self.out, matches)?;
        self.report.pattern_matches(matches)?;
        Ok(())
    }

    fn hex_dump_range(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== HEX DUMP RANGE ===")?;
        let Some(start) = self.prompt("Start offset (hex): 0x")? else {
            return Ok(());
        };
        let Some(length) = self.prompt("Length (dec): ")? else {
            return Ok(());
        };
        let Some(start) = parse_hex_offset(&start) else {
            writeln!(self.out, "Invalid offset!")?;
            return Ok(());
        };
        let length: usize = length
            .trim()
            .parse()
            .map_err(|_| BinscopeError::InvalidInput(format!("not a length: {:?}", length)))?;

        match render_hex_dump(self.buffer, start, length) {
            Ok(dump) => {
                debug!(range = ?dump.range(), "Dumping range");
                console::hex_dump(&mut self.out, dump)?
            }
            Err(e @ BinscopeError::Range { .. }) => {
                warn!(error = %e, "Hex dump range rejected");
                writeln!(self.out, "Invalid offset!")?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn strings_again(&mut self) -> Result<()> {
        let Some(text) = self.prompt("Minimum string length: ")? else {
            return Ok(());
        };
        let min_length: usize = match text.trim().parse() {
            Ok(n) if n >= 1 => n,
            _ => {
                return Err(BinscopeError::InvalidInput(format!(
                    "minimum length must be a positive integer, got {:?}",
                    text
                )))
            }
        };
        let strings: Vec<ExtractedString> = extract_strings(self.buffer, min_length).collect();
        console::strings(
            &mut self.out,
            &strings,
            min_length,
            self.cfg.report.console_strings,
        )?;
        self.report.strings(&strings, min_length)?;
        Ok(())
    }

    fn full_hex_dump(&mut self) -> Result<()> {
        match render_hex_dump(self.buffer, 0, 0) {
            Ok(dump) => console::hex_dump(&mut self.out, dump)?,
            Err(BinscopeError::Range { .. }) => writeln!(self.out, "Nothing to dump.")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }
}
