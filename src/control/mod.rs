//! Debian control file reading and rewriting
//!
//! This module provides functionality to:
//! - Parse and write deb822 paragraphs
//! - Match old version strings and conflicting package names
//! - Rewrite versioned package names and relations

mod deb822;
mod matcher;
mod rewriter;

pub use deb822::{format_field, parse_paragraphs, read_control, write_paragraph, write_paragraphs};
pub use matcher::{mentions_package, MatchMode, VersionMatcher};
pub use rewriter::{run, ControlRewriter, RewriteConfig, RewriteOutcome};
