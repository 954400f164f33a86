//! JSON output formatter for machine processing

use crate::control::{MatchMode, RewriteConfig, RewriteOutcome};
use crate::domain::FieldChange;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

/// JSON representation of a rewrite
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Version being replaced
    old_version: String,
    /// Replacement version
    new_version: String,
    /// Match mode used for substitution
    match_mode: MatchMode,
    /// Every changed or created field, in file order
    changes: &'a [FieldChange],
}

impl OutputFormatter for JsonFormatter {
    fn format(
        &self,
        config: &RewriteConfig,
        outcome: &RewriteOutcome,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            old_version: config.old.package_version(),
            new_version: config.new.package_version(),
            match_mode: config.mode,
            changes: &outcome.changes,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
