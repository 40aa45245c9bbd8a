//! Configuration for the analyzer.
//!
//! Centralized configuration for every analysis step with defaults matching
//! the interactive tool. Can be loaded from a JSON file; missing fields take
//! their defaults.

use crate::error::{BinscopeError, Result};
use crate::io::IOLimits;
use crate::strings::StringsConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Master configuration for a binscope run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Limits applied while loading the input file.
    pub io: IOLimits,
    /// String extraction configuration.
    pub strings: StringsConfig,
    /// Frequency table presentation.
    pub frequency: FrequencyConfig,
    /// Hex dump configuration.
    pub hexdump: HexDumpConfig,
    /// Report file configuration.
    pub report: ReportConfig,
}

impl AnalyzerConfig {
    /// Parses a configuration from JSON text and validates it.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| BinscopeError::Config(format!("invalid configuration: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            BinscopeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects settings no analysis can run with.
    pub fn validate(&self) -> Result<()> {
        if self.strings.min_length == 0 {
            return Err(BinscopeError::Config(
                "strings.min_length must be at least 1".to_string(),
            ));
        }
        if self.io.max_file_size == 0 {
            return Err(BinscopeError::Config(
                "io.max_file_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// How many ranked bytes are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Rows printed on the console (default: 10).
    pub console_top: usize,
    /// Rows written to the report (default: 5).
    pub report_top: usize,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            console_top: 10,
            report_top: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexDumpConfig {
    /// Bytes previewed after the full analysis pass (default: 256).
    pub preview_bytes: usize,
}

impl Default for HexDumpConfig {
    fn default() -> Self {
        Self { preview_bytes: 256 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where the text report is written.
    pub path: PathBuf,
    /// Strings listed on the console before summarizing the rest (default: 20).
    pub console_strings: usize,
    /// Include MD5/SHA-256/BLAKE3 digests.
    pub include_digests: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("analysis_report.txt"),
            console_strings: 20,
            include_digests: true,
        }
    }
}
