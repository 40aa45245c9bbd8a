use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "binscope")]
#[command(version)]
#[command(about = "Inspect a binary file: magic numbers, checksums, entropy, strings, patterns and hex dumps", long_about = None)]
pub struct Args {
    /// File to analyze
    pub file: PathBuf,

    /// Where to write the text report
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Minimum length of extracted strings
    #[arg(short, long)]
    pub min_length: Option<usize>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the analysis as JSON instead of text sections (the text report is still written)
    #[arg(long)]
    pub json: bool,

    /// Skip the interactive menu after the full analysis
    #[arg(long)]
    pub no_interactive: bool,

    /// Leave cryptographic digests out of the analysis
    #[arg(long)]
    pub no_digests: bool,

    /// Emit diagnostics as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}
