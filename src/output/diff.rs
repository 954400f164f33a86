//! Diff output formatter for showing changed fields
//!
//! This module provides:
//! - One hunk per changed paragraph, headed by the package name
//! - Before/after field lines

use crate::control::{format_field, RewriteConfig, RewriteOutcome};
use crate::domain::{Field, FieldChange};
use crate::output::OutputFormatter;
use std::io::Write;

/// Diff formatter for showing field changes
pub struct DiffFormatter;

/// Writes a possibly multi-line field with a diff marker on every line
fn write_marked(writer: &mut dyn Write, marker: char, field: &str, value: &str) -> std::io::Result<()> {
    for line in format_field(&Field::new(field, value)).lines() {
        writeln!(writer, "{}{}", marker, line)?;
    }
    Ok(())
}

impl OutputFormatter for DiffFormatter {
    fn format(
        &self,
        config: &RewriteConfig,
        outcome: &RewriteOutcome,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "# {} -> {} ({})", config.old, config.new, config.mode)?;

        let mut current: Option<usize> = None;
        for change in &outcome.changes {
            if current != Some(change.paragraph) {
                writeln!(writer, "@@ {} @@", hunk_label(change))?;
                current = Some(change.paragraph);
            }
            if let Some(ref old) = change.old {
                write_marked(writer, '-', &change.field, old)?;
            }
            write_marked(writer, '+', &change.field, &change.new)?;
        }

        writeln!(
            writer,
            "# {} field(s) changed in {} paragraph(s)",
            outcome.changes.len(),
            outcome.changed_paragraphs()
        )?;

        Ok(())
    }
}

fn hunk_label(change: &FieldChange) -> String {
    if change.name.is_empty() {
        format!("paragraph {}", change.paragraph)
    } else {
        change.name.clone()
    }
}
