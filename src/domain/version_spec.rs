//! Two-component library version used in versioned package names
//!
//! A control file for a library like `libfoo1.0-dev` embeds `Major.Minor`
//! in package names and dependency strings. `VersionSpec` holds one such
//! identifier; a run always has two, the old one and the new one.

use crate::error::VersionError;
use std::fmt;
use std::str::FromStr;

/// A `Major.Minor` version identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionSpec {
    major: String,
    minor: String,
}

impl VersionSpec {
    /// Creates a new VersionSpec from its components
    pub fn new(major: impl Into<String>, minor: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
        }
    }

    /// Parses `"<major>.<minor>"`, requiring exactly one period
    pub fn parse(value: &str) -> Result<Self, VersionError> {
        let mut parts = value.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), None) => Ok(Self::new(major, minor)),
            _ => Err(VersionError::invalid(value)),
        }
    }

    /// The string embedded in package names, `major.minor`
    pub fn package_version(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl FromStr for VersionSpec {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
