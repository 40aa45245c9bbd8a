//! Command line front end.
//!
//! [`run`] wires the library together: it resolves the configuration, loads
//! the file, runs the full pass and hands over to the interactive [`Session`].

pub mod args;
pub mod console;
pub mod session;

pub use self::args::Args;
pub use self::session::{parse_hex_offset, MenuChoice, Session};

use crate::analysis::analyze;
use crate::config::AnalyzerConfig;
use crate::io::load_buffer;
use crate::report::ReportWriter;
use anyhow::Context;
use chrono::Local;
use std::io::{self, Write};
use tracing::{info, warn};

/// Builds the effective configuration: file first, then flag overrides.
pub fn resolve_config(args: &Args) -> crate::error::Result<AnalyzerConfig> {
    let mut cfg = match &args.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(path) = &args.report {
        cfg.report.path = path.clone();
    }
    if let Some(n) = args.min_length {
        cfg.strings.min_length = n;
    }
    if args.no_digests {
        cfg.report.include_digests = false;
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Runs binscope against stdin/stdout.
///
/// The text report is written on every run, including `--json` runs and
/// empty inputs. The menu is skipped for an empty file.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let cfg = resolve_config(args)?;
    let buffer = load_buffer(&args.file, &cfg.io)
        .map_err(|e| crate::log_error!(crate::error::BinscopeError::from(e)))
        .with_context(|| format!("cannot load {}", args.file.display()))?;
    let mut report = ReportWriter::create(&cfg.report.path)
        .with_context(|| format!("cannot create report {}", cfg.report.path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let analysis = analyze(&buffer, &cfg);
        report.full(&analysis, cfg.frequency.report_top, &Local::now())?;
        writeln!(out, "{}", analysis.to_json_string()?)?;
        info!(report = %cfg.report.path.display(), "Report written");
        return Ok(());
    }

    writeln!(out, "Loaded {} ({} bytes)", buffer.source(), buffer.len())?;
    if buffer.is_empty() {
        warn!(source = buffer.source(), "Input file is empty");
        writeln!(out, "File is empty; every statistic takes its empty value.")?;
    }

    let stdin = io::stdin();
    let mut session = Session::new(&buffer, &cfg, stdin.lock(), &mut out, report);
    session.full_pass(&Local::now())?;
    if !args.no_interactive && !buffer.is_empty() {
        session.run_menu()?;
    }
    drop(session);

    writeln!(out, "\nReport saved to: {}", cfg.report.path.display())?;
    info!(report = %cfg.report.path.display(), "Report written");
    Ok(())
}
