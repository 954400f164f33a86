//! Control file output: the rewritten paragraphs

use crate::control::{write_paragraphs, RewriteConfig, RewriteOutcome};
use crate::output::OutputFormatter;
use std::io::Write;

/// Writes the rewritten control file
pub struct ControlFormatter;

impl OutputFormatter for ControlFormatter {
    fn format(
        &self,
        _config: &RewriteConfig,
        outcome: &RewriteOutcome,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        write_paragraphs(&outcome.paragraphs, writer)
    }
}
