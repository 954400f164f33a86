//! Core domain models for control-bump
//!
//! This module contains the value types used throughout the application:
//! - Version identifiers embedded in package names
//! - Control file paragraphs and their fields
//! - Records of rewritten fields

mod field_change;
mod paragraph;
mod version_spec;

pub use field_change::FieldChange;
pub use paragraph::{Field, Paragraph};
pub use version_spec::VersionSpec;
