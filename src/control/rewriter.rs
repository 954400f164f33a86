//! Version rewriting for source and binary package paragraphs
//!
//! This module provides:
//! - Field-level version substitution
//! - Conflicts bookkeeping between old and new package names
//! - The whole-file rewrite pass

use crate::control::deb822::read_control;
use crate::control::matcher::{mentions_package, MatchMode, VersionMatcher};
use crate::domain::{FieldChange, Paragraph, VersionSpec};
use crate::error::{AppError, ControlError, PatternError};
use std::path::Path;
use tracing::{debug, info};

/// Fields rewritten in every binary package paragraph, in order
const PACKAGE_RELATION_FIELDS: [&str; 3] = ["Depends", "Recommends", "Suggests"];

/// Old and new versions plus the match mode for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    pub old: VersionSpec,
    pub new: VersionSpec,
    pub mode: MatchMode,
}

impl RewriteConfig {
    pub fn new(old: VersionSpec, new: VersionSpec) -> Self {
        Self {
            old,
            new,
            mode: MatchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Rewritten paragraphs and the changes that produced them
#[derive(Debug)]
pub struct RewriteOutcome {
    pub paragraphs: Vec<Paragraph>,
    pub changes: Vec<FieldChange>,
}

impl RewriteOutcome {
    /// Number of paragraphs with at least one change
    pub fn changed_paragraphs(&self) -> usize {
        let mut indices: Vec<usize> = self.changes.iter().map(|c| c.paragraph).collect();
        indices.dedup();
        indices.len()
    }
}

/// Applies a version bump to control paragraphs
pub struct ControlRewriter {
    config: RewriteConfig,
    matcher: VersionMatcher,
}

impl ControlRewriter {
    /// Creates a rewriter; fails if the old version is not a valid pattern in legacy mode
    pub fn new(config: RewriteConfig) -> Result<Self, PatternError> {
        let matcher = VersionMatcher::new(&config.old, &config.new, config.mode)?;
        Ok(Self { config, matcher })
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    /// Replaces the old package version with the new one in `text`
    pub fn substitute(&self, text: &str) -> String {
        self.matcher.substitute(text)
    }

    /// Rewrites one field in place, returning its old and new values
    ///
    /// Absent fields are left alone and yield `None`.
    pub fn update_field(&self, paragraph: &mut Paragraph, field: &str) -> Option<(String, String)> {
        let value = paragraph.value_mut(field)?;
        let updated = self.substitute(value);
        let old = std::mem::replace(value, updated.clone());
        Some((old, updated))
    }

    /// Returns true if the paragraph's Conflicts field mentions `package_name`
    pub fn paragraph_declares_conflict_with(
        &self,
        paragraph: &Paragraph,
        package_name: &str,
    ) -> Result<bool, PatternError> {
        match paragraph.get("Conflicts") {
            Some(conflicts) => mentions_package(conflicts, package_name, self.config.mode),
            None => Ok(false),
        }
    }

    /// Makes the paragraph conflict with its pre-rewrite package name when required
    ///
    /// Development packages (`-dev` but not `-all-dev`) always need the
    /// conflict, as do packages that already conflict with a differently
    /// versioned name of themselves.
    pub fn ensure_conflict(
        &self,
        paragraph: &mut Paragraph,
        old_package_name: &str,
    ) -> Result<Option<(Option<String>, String)>, PatternError> {
        let new_package_name = paragraph.get("Package").unwrap_or_default().to_string();
        let is_dev = new_package_name.ends_with("-dev") && !new_package_name.ends_with("-all-dev");
        if !is_dev && !self.paragraph_declares_conflict_with(paragraph, &new_package_name)? {
            return Ok(None);
        }

        match paragraph.value_mut("Conflicts") {
            Some(conflicts) => {
                if conflicts.contains(old_package_name) {
                    return Ok(None);
                }
                let old = conflicts.clone();
                conflicts.push_str(", ");
                conflicts.push_str(old_package_name);
                info!("{}: added conflict with {}", new_package_name, old_package_name);
                Ok(Some((Some(old), conflicts.clone())))
            }
            None => {
                paragraph.set("Conflicts", old_package_name);
                info!("{}: added conflict with {}", new_package_name, old_package_name);
                Ok(Some((None, old_package_name.to_string())))
            }
        }
    }

    /// Rewrites the Source field of the first paragraph
    pub fn process_source_paragraph(&self, paragraph: &mut Paragraph) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        if let Some((old, new)) = self.update_field(paragraph, "Source") {
            record(&mut changes, 0, "Source", old, new);
        }
        name_changes(&mut changes, paragraph);
        changes
    }

    /// Rewrites a binary package paragraph and adds any needed conflict
    pub fn process_package_paragraph(
        &self,
        index: usize,
        paragraph: &mut Paragraph,
    ) -> Result<Vec<FieldChange>, AppError> {
        let mut changes = Vec::new();

        let (old_name, new_name) = self
            .update_field(paragraph, "Package")
            .ok_or_else(|| ControlError::missing_field(index, "Package"))?;
        record(&mut changes, index, "Package", old_name.clone(), new_name);

        for field in PACKAGE_RELATION_FIELDS {
            if let Some((old, new)) = self.update_field(paragraph, field) {
                record(&mut changes, index, field, old, new);
            }
        }

        match self.ensure_conflict(paragraph, &old_name)? {
            Some((Some(old), new)) => {
                changes.push(FieldChange::modified(index, "Conflicts", old, new))
            }
            Some((None, new)) => changes.push(FieldChange::created(index, "Conflicts", new)),
            None => {}
        }

        name_changes(&mut changes, paragraph);
        Ok(changes)
    }

    /// Rewrites all paragraphs in order; the first is the source paragraph
    pub fn rewrite(&self, paragraphs: &mut [Paragraph]) -> Result<Vec<FieldChange>, AppError> {
        let mut changes = Vec::new();
        for (index, paragraph) in paragraphs.iter_mut().enumerate() {
            if index == 0 {
                changes.extend(self.process_source_paragraph(paragraph));
            } else {
                changes.extend(self.process_package_paragraph(index, paragraph)?);
            }
        }
        Ok(changes)
    }
}

/// Records a change if the value actually differs
fn record(changes: &mut Vec<FieldChange>, index: usize, field: &str, old: String, new: String) {
    if old != new {
        debug!("paragraph {}: {}: {} -> {}", index, field, old, new);
        changes.push(FieldChange::modified(index, field, old, new));
    }
}

/// Labels changes with the paragraph's rewritten name
fn name_changes(changes: &mut [FieldChange], paragraph: &Paragraph) {
    let name = paragraph.name().unwrap_or_default();
    for change in changes.iter_mut() {
        change.name = name.to_string();
    }
}

/// Reads a control file and rewrites it with the given configuration
pub fn run(config: RewriteConfig, path: &Path) -> Result<RewriteOutcome, AppError> {
    let rewriter = ControlRewriter::new(config)?;
    let mut paragraphs = read_control(path)?;
    debug!("read {} paragraph(s) from {}", paragraphs.len(), path.display());

    let changes = rewriter.rewrite(&mut paragraphs)?;
    info!(
        "{} -> {}: {} field(s) changed",
        rewriter.config().old,
        rewriter.config().new,
        changes.len()
    );

    Ok(RewriteOutcome {
        paragraphs,
        changes,
    })
}
