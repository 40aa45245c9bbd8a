use crate::common::{temp_file_with, test_data};
use binscope::analysis::{analyze, FullAnalysis};
use binscope::config::AnalyzerConfig;
use binscope::io::{load_buffer, IOLimits};
use binscope::report::ReportWriter;
use chrono::Local;
use std::fs;

#[test]
fn report_file_round_trip() {
    let input = temp_file_with(&test_data::elf_like());
    let buffer = load_buffer(input.path(), &IOLimits::default()).unwrap();
    let cfg = AnalyzerConfig::default();
    let analysis = analyze(&buffer, &cfg);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis_report.txt");
    let mut writer = ReportWriter::create(&path).unwrap();
    writer
        .full(&analysis, cfg.frequency.report_top, &Local::now())
        .unwrap();
    drop(writer);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "=== BINARY ANALYSIS REPORT ===");
    assert_eq!(lines[1], format!("File: {}", buffer.source()));
    assert_eq!(lines[2], format!("Size: {} bytes", buffer.len()));
    assert!(lines[3].starts_with("Analysis Date: "));
    assert!(text.contains("FILE TYPE: ELF Executable\n"));
    assert!(text.contains(&format!(
        "Fletcher-16: {} (0x{:x})\n",
        analysis.checksums.fletcher16, analysis.checksums.fletcher16
    )));
    assert!(text.contains("SHA-256: "));
    assert!(text.contains("Top 5 bytes:\n"));
    assert!(text.contains("\"/lib64/ld-linux-x86-64.so.2\""));

    let top_rows = text
        .lines()
        .skip_while(|l| *l != "Top 5 bytes:")
        .skip(1)
        .take_while(|l| !l.is_empty())
        .count();
    assert_eq!(top_rows, 5);
}

#[test]
fn json_output_is_stable() {
    let buffer = binscope::ByteBuffer::with_source("pe.exe", test_data::pe_like());
    let cfg = AnalyzerConfig::default();
    let json = analyze(&buffer, &cfg).to_json_string().unwrap();
    assert_eq!(json, analyze(&buffer, &cfg).to_json_string().unwrap());

    let back = FullAnalysis::from_json_str(&json).unwrap();
    assert_eq!(back.source, "pe.exe");
    assert_eq!(back.size, buffer.len());
    assert!(back
        .strings
        .iter()
        .any(|s| s.text == "This program cannot be run in DOS mode."));
}
