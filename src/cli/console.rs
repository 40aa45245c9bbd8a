//! Console presentation of analysis results.

use crate::checksum::ChecksumResult;
use crate::entropy::FrequencyAnalysis;
use crate::hashing::Digests;
use crate::hexdump::{HexDump, HEADER, RULE};
use crate::search::PatternMatches;
use crate::signatures::{ContentHint, Detection, SignatureReport};
use crate::strings::{is_printable, ExtractedString};
use std::io::{self, Write};

pub fn signatures<O: Write>(
    out: &mut O,
    report: &SignatureReport,
    hint: Option<&ContentHint>,
) -> io::Result<()> {
    writeln!(out, "\n=== FILE TYPE DETECTION ===")?;
    match report.detection() {
        Detection::Matched => {
            for d in report.descriptions() {
                writeln!(out, "Detected: {}", d)?;
            }
        }
        Detection::NoMatch => writeln!(out, "Unknown file type")?,
        Detection::TooShort => writeln!(out, "Unknown file type (too short for any signature)")?,
    }
    if let Some(h) = hint {
        writeln!(out, "Content hint: {} (.{})", h.mime, h.extension)?;
    }
    Ok(())
}

pub fn checksums<O: Write>(out: &mut O, c: &ChecksumResult) -> io::Result<()> {
    writeln!(out, "\n=== CHECKSUMS ===")?;
    writeln!(out, "Simple Sum: {} (0x{:x})", c.simple_sum, c.simple_sum)?;
    writeln!(out, "XOR Checksum: {} (0x{:x})", c.xor, c.xor)?;
    writeln!(out, "Fletcher-16: {} (0x{:x})", c.fletcher16, c.fletcher16)
}

pub fn digests<O: Write>(out: &mut O, d: &Digests) -> io::Result<()> {
    writeln!(out, "MD5: {}", d.md5)?;
    writeln!(out, "SHA-256: {}", d.sha256)?;
    writeln!(out, "BLAKE3: {}", d.blake3)
}

pub fn frequency<O: Write>(out: &mut O, f: &FrequencyAnalysis, top: usize) -> io::Result<()> {
    writeln!(out, "\n=== BYTE FREQUENCY ANALYSIS ===")?;
    writeln!(out, "Top {} most frequent bytes:", top)?;
    for entry in f.top(top) {
        let shown = if is_printable(entry.byte) {
            entry.byte as char
        } else {
            '.'
        };
        writeln!(
            out,
            "0x{:02x} ({}): {} times ({:.2}%)",
            entry.byte,
            shown,
            entry.count,
            f.percent(entry)
        )?;
    }
    writeln!(out, "Shannon Entropy: {:.4} bits", f.entropy)
}

pub fn strings<O: Write>(
    out: &mut O,
    strings: &[ExtractedString],
    min_length: usize,
    shown: usize,
) -> io::Result<()> {
    writeln!(out, "\n=== STRING EXTRACTION (min {} chars) ===", min_length)?;
    writeln!(out, "Found {} strings:", strings.len())?;
    for s in strings.iter().take(shown) {
        writeln!(out, "0x{:08x}: \"{}\"", s.offset, s.text)?;
    }
    if strings.len() > shown {
        writeln!(out, "... and {} more", strings.len() - shown)?;
    }
    Ok(())
}

pub fn hex_dump<O: Write>(out: &mut O, dump: HexDump<'_>) -> io::Result<()> {
    writeln!(out, "\n=== HEX + ASCII DUMP ===")?;
    writeln!(out, "{}", HEADER)?;
    writeln!(out, "{}", RULE)?;
    for row in dump {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

pub fn pattern_matches<O: Write>(out: &mut O, m: &PatternMatches) -> io::Result<()> {
    if m.offsets.is_empty() {
        writeln!(out, "{} not found.", m.label)
    } else {
        writeln!(out, "{} found {} times:", m.label, m.offsets.len())?;
        for off in &m.offsets {
            writeln!(out, "  0x{:08x}", off)?;
        }
        Ok(())
    }
}
