//! CLI argument parsing module for control-bump

use crate::control::{MatchMode, RewriteConfig};
use crate::domain::VersionSpec;
use crate::error::VersionError;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Usage line printed when the versions are missing
pub fn usage(program: &str) -> String {
    format!(
        "Usage: cd debian/; {} <old version> <new version> > control_new",
        program
    )
}

/// Rewrite versioned package names in a Debian control file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "control-bump",
    version,
    about = "Rewrite versioned package names in a Debian control file"
)]
pub struct CliArgs {
    /// Version being replaced, as <major>.<minor>
    pub old_version: Option<String>,

    /// Replacement version, as <major>.<minor>
    pub new_version: Option<String>,

    /// Arguments after the two versions are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Control file to read
    #[arg(long, default_value = "control")]
    pub control: PathBuf,

    /// Match versions and package names as exact text instead of patterns
    #[arg(long)]
    pub literal: bool,

    // Output options
    /// Show changed fields in diff format instead of the rewritten file
    #[arg(long)]
    pub diff: bool,

    /// Output a JSON report of changed fields instead of the rewritten file
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Both version arguments, if given
    pub fn versions(&self) -> Option<(&str, &str)> {
        Some((self.old_version.as_deref()?, self.new_version.as_deref()?))
    }

    pub fn match_mode(&self) -> MatchMode {
        if self.literal {
            MatchMode::Literal
        } else {
            MatchMode::Legacy
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_cli(self.json, self.diff)
    }

    /// Builds the rewrite configuration, or `None` if a version is missing
    pub fn rewrite_config(&self) -> Option<Result<RewriteConfig, VersionError>> {
        let (old, new) = self.versions()?;
        Some(build_config(old, new, self.match_mode()))
    }
}

fn build_config(old: &str, new: &str, mode: MatchMode) -> Result<RewriteConfig, VersionError> {
    let config = RewriteConfig::new(VersionSpec::parse(old)?, VersionSpec::parse(new)?);
    Ok(config.with_mode(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["control-bump"]);
        assert!(args.old_version.is_none());
        assert!(args.new_version.is_none());
        assert_eq!(args.control, PathBuf::from("control"));
        assert!(!args.literal);
        assert!(!args.diff);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(args.ignored.is_empty());
        assert!(args.versions().is_none());
        assert!(args.rewrite_config().is_none());
    }

    #[test]
    fn test_single_version_is_incomplete() {
        let args = CliArgs::parse_from(["control-bump", "1.0"]);
        assert_eq!(args.old_version.as_deref(), Some("1.0"));
        assert!(args.versions().is_none());
    }

    #[test]
    fn test_versions() {
        let args = CliArgs::parse_from(["control-bump", "17.11", "18.02"]);
        assert_eq!(args.versions(), Some(("17.11", "18.02")));

        let config = args.rewrite_config().unwrap().unwrap();
        assert_eq!(config.old, VersionSpec::new("17", "11"));
        assert_eq!(config.new, VersionSpec::new("18", "02"));
        assert_eq!(config.mode, MatchMode::Legacy);
    }

    #[test]
    fn test_invalid_version() {
        let args = CliArgs::parse_from(["control-bump", "17", "18.02"]);
        assert!(args.rewrite_config().unwrap().is_err());
    }

    #[test]
    fn test_extra_positionals_are_ignored() {
        let args = CliArgs::parse_from(["control-bump", "1.0", "2.0", "extra", "more"]);
        assert_eq!(args.versions(), Some(("1.0", "2.0")));
        assert_eq!(args.ignored, vec!["extra", "more"]);
        assert!(args.rewrite_config().unwrap().is_ok());
    }

    #[test]
    fn test_control_path() {
        let args = CliArgs::parse_from(["control-bump", "--control", "debian/control", "1.0", "2.0"]);
        assert_eq!(args.control, PathBuf::from("debian/control"));
    }

    #[test]
    fn test_literal_flag() {
        let args = CliArgs::parse_from(["control-bump", "--literal", "1.0", "2.0"]);
        assert_eq!(args.match_mode(), MatchMode::Literal);
        assert_eq!(
            args.rewrite_config().unwrap().unwrap().mode,
            MatchMode::Literal
        );
    }

    #[test]
    fn test_output_flags() {
        let args = CliArgs::parse_from(["control-bump", "--diff", "1.0", "2.0"]);
        assert_eq!(args.output_format(), OutputFormat::Diff);

        let args = CliArgs::parse_from(["control-bump", "--json", "1.0", "2.0"]);
        assert_eq!(args.output_format(), OutputFormat::Json);

        let args = CliArgs::parse_from(["control-bump", "1.0", "2.0"]);
        assert_eq!(args.output_format(), OutputFormat::Control);
    }

    #[test]
    fn test_usage() {
        assert_eq!(
            usage("control-bump"),
            "Usage: cd debian/; control-bump <old version> <new version> > control_new"
        );
    }
}
