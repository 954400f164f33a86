//! Version substitution and conflict-name matching
//!
//! Two match modes are supported:
//! - `Legacy`: the old version string is a regular expression, so `1.0` also
//!   matches `1x0`, and digits in package names match any digit when looking
//!   for conflicts. Existing packaging scripts rely on this.
//! - `Literal`: exact substring matching everywhere.

use crate::domain::VersionSpec;
use crate::error::PatternError;
use regex::{NoExpand, Regex};
use serde::Serialize;
use std::fmt;

/// How version strings and package names are matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Pattern matching compatible with the historical update script
    #[default]
    Legacy,
    /// Exact substring matching
    Literal,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Legacy => write!(f, "legacy"),
            MatchMode::Literal => write!(f, "literal"),
        }
    }
}

/// Replaces an old package version with a new one
#[derive(Debug, Clone)]
pub struct VersionMatcher {
    old: String,
    new: String,
    pattern: Option<Regex>,
}

impl VersionMatcher {
    /// Creates a matcher, compiling the old version as a pattern in legacy mode
    pub fn new(old: &VersionSpec, new: &VersionSpec, mode: MatchMode) -> Result<Self, PatternError> {
        let old = old.package_version();
        let pattern = match mode {
            MatchMode::Legacy => Some(Regex::new(&old).map_err(|source| PatternError::Invalid {
                pattern: old.clone(),
                source,
            })?),
            MatchMode::Literal => None,
        };

        Ok(Self {
            old,
            new: new.package_version(),
            pattern,
        })
    }

    /// Replaces every occurrence of the old version in `text`
    ///
    /// Equal old and new versions leave the text untouched in both modes.
    pub fn substitute(&self, text: &str) -> String {
        if self.old == self.new {
            return text.to_string();
        }
        match &self.pattern {
            Some(re) => re.replace_all(text, NoExpand(&self.new)).into_owned(),
            None => text.replace(&self.old, &self.new),
        }
    }
}

/// Pattern matching `package_name` with every ASCII digit as a wildcard
fn digit_wildcard_pattern(package_name: &str) -> String {
    let mut pattern = String::with_capacity(package_name.len() * 2);
    for c in package_name.chars() {
        if c.is_ascii_digit() {
            pattern.push_str(r"\d");
        } else {
            let mut buf = [0u8; 4];
            pattern.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }
    pattern
}

/// Returns true if `conflicts` mentions `package_name`
///
/// In legacy mode digits in the name match any digit, so a conflict on
/// `libfoo1.0-dev` is found for `libfoo2.0-dev`.
pub fn mentions_package(
    conflicts: &str,
    package_name: &str,
    mode: MatchMode,
) -> Result<bool, PatternError> {
    match mode {
        MatchMode::Literal => Ok(conflicts.contains(package_name)),
        MatchMode::Legacy => {
            let pattern = digit_wildcard_pattern(package_name);
            let re = Regex::new(&pattern).map_err(|source| PatternError::Invalid {
                pattern: pattern.clone(),
                source,
            })?;
            Ok(re.is_match(conflicts))
        }
    }
}
