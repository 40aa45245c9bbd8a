//! Byte pattern search over the loaded buffer.
//!
//! Every starting position is reported, so overlapping occurrences count
//! separately: `"AA"` in `"AAAA"` matches at 0, 1 and 2.

pub mod hex;
pub mod pattern;

pub use self::hex::{decode_hex, decode_hex_string, HexDecoded, MalformedHex};
pub use self::pattern::{Pattern, PatternInput, PatternMatches};

use crate::error::{BinscopeError, Result};
use aho_corasick::AhoCorasick;
use std::collections::HashMap;
use tracing::debug;

/// Finds all (possibly overlapping) offsets of `pattern` in `data`, ascending.
///
/// An empty pattern, or one longer than `data`, yields no matches.
pub fn search_pattern(data: &[u8], pattern: &[u8]) -> Vec<usize> {
    let Some((&first, _)) = pattern.split_first() else {
        return Vec::new();
    };
    if pattern.len() > data.len() {
        return Vec::new();
    }
    let last_start = data.len() - pattern.len();

    // candidate starts are positions of the first pattern byte
    let offsets: Vec<usize> = memchr::memchr_iter(first, &data[..=last_start])
        .filter(|&i| &data[i..i + pattern.len()] == pattern)
        .collect();

    debug!(
        len = data.len(),
        pattern_len = pattern.len(),
        matches = offsets.len(),
        "Pattern search complete"
    );
    offsets
}

/// Explains why `pattern` can never match in a buffer of `buffer_len` bytes.
pub fn check_pattern(pattern: &[u8], buffer_len: usize) -> Result<()> {
    if pattern.is_empty() {
        return Err(BinscopeError::EmptyPattern);
    }
    if pattern.len() > buffer_len {
        return Err(BinscopeError::PatternTooLong {
            pattern_len: pattern.len(),
            buffer_len,
        });
    }
    Ok(())
}

/// Searches several patterns in one pass.
///
/// Returns one ascending offset list per input pattern, in input order; each
/// list equals what [`search_pattern`] returns for that pattern alone.
pub fn search_many<P: AsRef<[u8]>>(data: &[u8], patterns: &[P]) -> Result<Vec<Vec<usize>>> {
    let mut results = vec![Vec::new(); patterns.len()];

    // The automaton gets each distinct non-empty pattern once.
    let mut unique: Vec<&[u8]> = Vec::new();
    let mut owners: Vec<Vec<usize>> = Vec::new();
    let mut seen: HashMap<&[u8], usize> = HashMap::new();
    for (idx, p) in patterns.iter().enumerate() {
        let bytes = p.as_ref();
        if bytes.is_empty() {
            continue;
        }
        let slot = *seen.entry(bytes).or_insert_with(|| {
            unique.push(bytes);
            owners.push(Vec::new());
            unique.len() - 1
        });
        owners[slot].push(idx);
    }
    if unique.is_empty() {
        return Ok(results);
    }

    let ac = AhoCorasick::new(&unique)
        .map_err(|e| BinscopeError::InvalidInput(format!("cannot build pattern matcher: {}", e)))?;

    let mut found: Vec<Vec<usize>> = vec![Vec::new(); unique.len()];
    for m in ac.find_overlapping_iter(data) {
        found[m.pattern().as_usize()].push(m.start());
    }

    for (slot, mut offsets) in found.into_iter().enumerate() {
        // overlapping matches arrive in end order
        offsets.sort_unstable();
        for &idx in &owners[slot] {
            results[idx] = offsets.clone();
        }
    }

    debug!(
        len = data.len(),
        patterns = patterns.len(),
        total_matches = results.iter().map(Vec::len).sum::<usize>(),
        "Multi-pattern search complete"
    );
    Ok(results)
}

/// Resolves and searches every input in one pass, labelling the results.
///
/// Inputs are numbered from 1 in the order given.
pub fn search_inputs(data: &[u8], inputs: &[PatternInput]) -> Result<Vec<PatternMatches>> {
    let resolved: Vec<Pattern> = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| input.resolve(i + 1))
        .collect();
    let offsets = search_many(data, &resolved.iter().map(|p| &p.bytes).collect::<Vec<_>>())?;

    Ok(resolved
        .into_iter()
        .zip(offsets)
        .map(|(p, offsets)| PatternMatches {
            label: p.label,
            pattern: p.bytes,
            offsets,
            malformed: p.malformed,
        })
        .collect())
}
