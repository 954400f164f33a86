//! Output formatting for rewrite results
//!
//! This module provides:
//! - Control output: the rewritten control file itself
//! - Diff output for showing changed fields
//! - JSON output for machine processing

mod control;
mod diff;
mod json;

pub use control::ControlFormatter;
pub use diff::DiffFormatter;
pub use json::JsonFormatter;

use crate::control::{RewriteConfig, RewriteOutcome};
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The rewritten control file
    #[default]
    Control,
    /// JSON report of changed fields
    Json,
    /// Field-level diff
    Diff,
}

impl OutputFormat {
    /// Select the format from CLI flags; JSON wins over diff
    pub fn from_cli(json: bool, diff: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if diff {
            OutputFormat::Diff
        } else {
            OutputFormat::Control
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the result of a rewrite
    fn format(
        &self,
        config: &RewriteConfig,
        outcome: &RewriteOutcome,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Create an output formatter for the given format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Control => Box::new(ControlFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Diff => Box::new(DiffFormatter),
    }
}
