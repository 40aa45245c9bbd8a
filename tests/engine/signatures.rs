use crate::common::test_data;
use binscope::signatures::{match_signatures, Detection, SIGNATURES};

#[test]
fn documented_magic_numbers() {
    let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
    assert_eq!(
        match_signatures(&png).descriptions().collect::<Vec<_>>(),
        vec!["PNG Image"]
    );
    let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    assert_eq!(
        match_signatures(&jpeg).descriptions().collect::<Vec<_>>(),
        vec!["JPEG Image"]
    );
    let zeros = match_signatures(&[0u8; 64]);
    assert!(zeros.matches.is_empty());
    assert_eq!(zeros.detection(), Detection::NoMatch);
}

#[test]
fn executables_detected() {
    let elf = match_signatures(&test_data::elf_like());
    assert_eq!(elf.descriptions().collect::<Vec<_>>(), vec!["ELF Executable"]);
    let pe = match_signatures(&test_data::pe_like());
    assert_eq!(pe.descriptions().collect::<Vec<_>>(), vec!["PE Executable"]);
}

#[test]
fn every_table_entry_matches_its_own_bytes() {
    for sig in SIGNATURES {
        let mut data = sig.bytes.to_vec();
        data.extend_from_slice(&[0u8; 4]);
        let report = match_signatures(&data);
        assert!(
            report.descriptions().any(|d| d == sig.description),
            "{} not detected",
            sig.description
        );
        assert!(report.matches.iter().all(|m| m.offset == 0));
    }
}

#[test]
fn short_buffers_are_distinct_from_no_match() {
    assert_eq!(match_signatures(&[]).detection(), Detection::TooShort);
    assert_eq!(match_signatures(b"M").detection(), Detection::TooShort);
    assert_eq!(match_signatures(b"QQ").detection(), Detection::NoMatch);
    // "MZ" fits even though nothing longer does
    assert_eq!(match_signatures(b"MZ").detection(), Detection::Matched);
}
