use crate::common::test_data;
use binscope::cli::Session;
use binscope::config::AnalyzerConfig;
use binscope::report::ReportWriter;
use binscope::ByteBuffer;
use chrono::Local;
use std::fs;
use std::io::Cursor;

fn run_session(data: Vec<u8>, script: &str, cfg: &AnalyzerConfig) -> (String, String) {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    let buffer = ByteBuffer::with_source("input.bin", data);
    let mut console = Vec::new();

    let report = ReportWriter::create(&report_path).unwrap();
    let mut session = Session::new(&buffer, cfg, Cursor::new(script.to_string()), &mut console, report);
    session.full_pass(&Local::now()).unwrap();
    session.run_menu().unwrap();
    drop(session);

    (
        String::from_utf8(console).unwrap(),
        fs::read_to_string(report_path).unwrap(),
    )
}

#[test]
fn full_session_against_elf() {
    let cfg = AnalyzerConfig::default();
    let script = "1\n1\n1\n7f 45 4c 46\n2\n0\n8\n3\n10\n4\n5\n";
    let (console, report) = run_session(test_data::elf_like(), script, &cfg);

    assert!(console.contains("Detected: ELF Executable"));
    assert!(console.contains("=== BYTE FREQUENCY ANALYSIS ==="));
    assert!(console.contains("Shannon Entropy: "));
    assert!(console.contains("=== FIRST 256 BYTES ==="));
    assert!(console.contains("Hex Pattern #1 found 1 times:\n  0x00000000\n"));
    assert!(console.contains("00000000  7F 45 4C 46 02 01 01 00"));
    assert!(console.contains("=== STRING EXTRACTION (min 10 chars) ==="));
    assert!(console.contains("Analysis complete."));

    assert!(report.contains("Hex Pattern #1: Found 1 times\n  0x0\n"));
    assert_eq!(report.matches("STRING EXTRACTION:").count(), 2);
    assert!(report.contains("Found 2 strings (min 10 chars)"));
}

#[test]
fn invalid_offset_keeps_session_alive() {
    let cfg = AnalyzerConfig::default();
    let (console, _) = run_session(b"tiny".to_vec(), "2\n0x40\n4\n5\n", &cfg);
    assert!(console.contains("Invalid offset!"));
    assert!(console.contains("Analysis complete."));
}

#[test]
fn preview_size_follows_config() {
    let mut cfg = AnalyzerConfig::default();
    cfg.hexdump.preview_bytes = 32;
    let data: Vec<u8> = (0u8..=255).collect();
    let (console, _) = run_session(data, "5\n", &cfg);
    assert!(console.contains("=== FIRST 32 BYTES ==="));
    assert!(console.contains("00000010  10 11"));
    assert!(!console.contains("00000020  20 21"));
}

#[test]
fn console_string_listing_truncates() {
    let mut cfg = AnalyzerConfig::default();
    cfg.report.console_strings = 2;
    let data = b"alpha\0bravo\0charlie\0delta\0".to_vec();
    let (console, report) = run_session(data, "", &cfg);
    assert!(console.contains("... and 2 more"));
    // the report always lists every string
    assert!(report.contains("\"delta\""));
}
