//! Output configuration.

use std::fmt::Display;

use clap::ValueEnum;

/// Rendering format for a ranking report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Controls how much of the ranking is reported and in which format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Number of best options to report. Always at least 1.
    pub top_n: usize,
    pub format: OutputFormat,
}

impl ReportConfig {
    pub const DEFAULT_TOP_N: usize = 3;

    /// Builds a config, clamping `top_n` to at least one option.
    pub fn new(top_n: usize, format: OutputFormat) -> Self {
        Self {
            top_n: top_n.max(1),
            format,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOP_N, OutputFormat::default())
    }
}
