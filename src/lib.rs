//! control-bump - Debian control file version rewriting library
//!
//! This library rewrites a library's versioned package names when its
//! `Major.Minor` version changes:
//! - Source and Package names
//! - Depends, Recommends and Suggests relations
//! - Conflicts between the old and new package names

pub mod cli;
pub mod control;
pub mod domain;
pub mod error;
pub mod output;
