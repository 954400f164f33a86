//! control-bump - Debian control file version rewriter
//!
//! Reads `control` from the current directory, replaces the old
//! `Major.Minor` version with the new one in versioned package names and
//! relations, and prints the result:
//!
//! ```text
//! cd debian/; control-bump 17.11 18.02 > control_new
//! ```

use clap::Parser;
use control_bump::cli::{usage, CliArgs};
use control_bump::control::{self, RewriteConfig};
use control_bump::error::VersionError;
use control_bump::output::create_formatter;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_logging(args.verbose);

    // Both versions are required; anything less is a usage error
    let Some(config) = args.rewrite_config() else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "control-bump".to_string());
        println!("{}", usage(&program));
        return ExitCode::FAILURE;
    };

    if !args.ignored.is_empty() {
        debug!("ignoring extra arguments: {:?}", args.ignored);
    }

    match run(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the rewritten file
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
fn run(args: &CliArgs, config: Result<RewriteConfig, VersionError>) -> anyhow::Result<()> {
    let config = config?;
    let outcome = control::run(config.clone(), &args.control)?;

    // Nothing is printed until the whole file has been rewritten
    let formatter = create_formatter(args.output_format());
    let mut stdout = io::stdout().lock();
    formatter.format(&config, &outcome, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
