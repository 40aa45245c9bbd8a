//! Property tests over the pure engines.

use binscope::checksum::{compute_checksums, fletcher16, xor_checksum};
use binscope::entropy::analyze_frequency;
use binscope::hexdump::{render_hex_dump, ROW_WIDTH};
use binscope::search::{decode_hex_string, search_many, search_pattern};
use binscope::strings::{extract_strings, is_printable};
use proptest::prelude::*;

/// Address (8) + gap (2) + hex column (49) + gap (2).
const ASCII_COLUMN: usize = 61;

fn spaced_hex(bytes: &[u8], gaps: &[bool]) -> String {
    let mut out = String::new();
    for (i, b) in bytes.iter().enumerate() {
        out.push_str(&format!("{:02x}", b));
        if gaps.get(i).copied().unwrap_or(false) {
            out.push(' ');
        }
    }
    out
}

proptest! {
    #[test]
    fn xor_is_a_fold(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let folded = data.iter().fold(0u8, |acc, &b| acc ^ b);
        prop_assert_eq!(xor_checksum(&data), folded);

        let doubled = [data.as_slice(), data.as_slice()].concat();
        prop_assert_eq!(xor_checksum(&doubled), 0);
    }

    #[test]
    fn fletcher_halves_stay_below_255(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let f = fletcher16(&data);
        prop_assert!((f & 0xFF) < 255);
        prop_assert!((f >> 8) < 255);
    }

    #[test]
    fn simple_sum_wraps(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let wide: u64 = data.iter().map(|&b| b as u64).sum();
        prop_assert_eq!(compute_checksums(&data).simple_sum as u64, wide % (1u64 << 32));
    }

    #[test]
    fn frequency_counts_cover_buffer(data in proptest::collection::vec(any::<u8>(), 1..1024)) {
        let fa = analyze_frequency(&data);
        prop_assert_eq!(fa.table.values().sum::<u64>(), data.len() as u64);
        prop_assert_eq!(fa.ranked.len(), fa.table.len());
        prop_assert!(fa.ranked.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(fa.entropy >= 0.0 && fa.entropy <= 8.0 + 1e-9);
    }

    #[test]
    fn strings_respect_minimum_and_offsets(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        min_length in 1usize..8,
    ) {
        let mut total = 0usize;
        let mut last_end = 0usize;
        for s in extract_strings(&data, min_length) {
            prop_assert!(s.text.len() >= min_length);
            prop_assert!(s.offset >= last_end);
            prop_assert_eq!(s.text.as_bytes(), &data[s.offset..s.offset + s.text.len()]);
            // runs are maximal
            prop_assert!(s.offset == 0 || !is_printable(data[s.offset - 1]));
            let end = s.offset + s.text.len();
            prop_assert!(end == data.len() || !is_printable(data[end]));
            total += s.text.len();
            last_end = end;
        }
        prop_assert!(total <= data.len());
    }

    #[test]
    fn all_printable_is_one_run(text in "[ -~]{1,200}") {
        let runs: Vec<_> = extract_strings(text.as_bytes(), 1).collect();
        prop_assert_eq!(runs.len(), 1);
        prop_assert_eq!(runs[0].offset, 0);
        prop_assert_eq!(&runs[0].text, &text);
    }

    #[test]
    fn search_finds_every_window(
        data in proptest::collection::vec(0u8..4, 0..256),
        pattern in proptest::collection::vec(0u8..4, 1..4),
    ) {
        let expected: Vec<usize> = data
            .windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == pattern.as_slice())
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(search_pattern(&data, &pattern), expected);
    }

    #[test]
    fn search_many_agrees_with_single(
        data in proptest::collection::vec(0u8..3, 0..256),
        patterns in proptest::collection::vec(proptest::collection::vec(0u8..3, 0..4), 1..6),
    ) {
        let many = search_many(&data, &patterns).unwrap();
        prop_assert_eq!(many.len(), patterns.len());
        for (p, offsets) in patterns.iter().zip(&many) {
            prop_assert_eq!(offsets, &search_pattern(&data, p));
        }
    }

    #[test]
    fn buffer_finds_itself_once(data in proptest::collection::vec(any::<u8>(), 1..64)) {
        prop_assert_eq!(search_pattern(&data, &data), vec![0]);
        let mut longer = data.clone();
        longer.push(0);
        prop_assert!(search_pattern(&data, &longer).is_empty());
    }

    #[test]
    fn hexdump_rows_align(data in proptest::collection::vec(any::<u8>(), 1..300)) {
        let rows: Vec<_> = render_hex_dump(&data, 0, 0).unwrap().collect();
        prop_assert_eq!(rows.len(), data.len().div_ceil(ROW_WIDTH));
        for row in &rows {
            let line = row.to_string();
            prop_assert_eq!(line.len(), ASCII_COLUMN + row.bytes.len());
            prop_assert_eq!(&line[ASCII_COLUMN..], row.ascii());
        }
    }

    #[test]
    fn hexdump_range_is_clamped(
        data in proptest::collection::vec(any::<u8>(), 1..200),
        start in 0usize..200,
        length in 0usize..300,
    ) {
        match render_hex_dump(&data, start, length) {
            Ok(dump) => {
                prop_assert!(start < data.len());
                let covered: usize = dump.map(|r| r.bytes.len()).sum();
                let expected = if length == 0 {
                    data.len() - start
                } else {
                    length.min(data.len() - start)
                };
                prop_assert_eq!(covered, expected);
            }
            Err(_) => prop_assert!(start >= data.len()),
        }
    }

    #[test]
    fn hex_decode_ignores_spacing(
        bytes in proptest::collection::vec(any::<u8>(), 0..32),
        gaps in proptest::collection::vec(any::<bool>(), 32),
    ) {
        let text = spaced_hex(&bytes, &gaps);
        prop_assert_eq!(decode_hex_string(&text), bytes.clone());
        prop_assert_eq!(decode_hex_string(&text.to_uppercase()), bytes);
    }
}

#[test]
fn entropy_extremes() {
    assert_eq!(analyze_frequency(&[0x41; 1000]).entropy, 0.0);
    let uniform = crate::common::test_data::uniform(4);
    assert!((analyze_frequency(&uniform).entropy - 8.0).abs() < 1e-9);
}

#[test]
fn fletcher_is_order_sensitive() {
    assert_eq!(fletcher16(&[]), 0);
    let data = b"binscope";
    let reversed: Vec<u8> = data.iter().rev().copied().collect();
    assert_ne!(fletcher16(data), fletcher16(&reversed));
}

#[test]
fn hex_decode_documented_cases() {
    let expected = vec![0xDE, 0xAD, 0xBE, 0xEF];
    assert_eq!(decode_hex_string("DE AD BE EF"), expected);
    assert_eq!(decode_hex_string("deadbeef"), expected);
    assert_eq!(decode_hex_string("DEA"), vec![0xDE]);
}
