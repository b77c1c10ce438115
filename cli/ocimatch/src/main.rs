//! ocimatch CLI — check platform compatibility for multi-platform OCI artifacts.

mod commands;
mod config;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::check::CheckOptions;
use config::Config;

/// Exit status on success, including a positive match.
const EXIT_MATCH: i32 = 0;
/// Exit status when the candidate platform does not satisfy the target.
const EXIT_NO_MATCH: i32 = 1;
/// Exit status for usage, parse and configuration errors.
const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(
    name = "ocimatch",
    version,
    about = "Check platform compatibility for multi-platform OCI artifacts"
)]
struct Cli {
    /// Configuration file (default: search for ocimatch.toml upward)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a platform satisfies a required platform
    Check {
        /// Required platform (os/arch[/variant][:os_version])
        target: String,
        /// Candidate platform (default: [current] platform from config, then host)
        #[arg(long)]
        current: Option<String>,
        /// OS feature provided by the candidate (repeatable)
        #[arg(long = "current-feature", value_name = "FEATURE")]
        current_features: Vec<String>,
        /// OS feature required by the target (repeatable)
        #[arg(long = "target-feature", value_name = "FEATURE")]
        target_features: Vec<String>,
        /// Print nothing; report through the exit status only
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the host platform
    Host,
    /// Show the fields of a platform specifier
    Parse {
        /// Platform specifier (os/arch[/variant][:os_version])
        specifier: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = &result {
        eprintln!("error: {e:#}");
    }
    process::exit(exit_code(&result));
}

/// Process exit status for a command result.
fn exit_code(result: &Result<bool>) -> i32 {
    match result {
        Ok(true) => EXIT_MATCH,
        Ok(false) => EXIT_NO_MATCH,
        Err(_) => EXIT_ERROR,
    }
}

/// Dispatch a command. `Ok(false)` means the check ran and found no match.
fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose, &config);

    match cli.command {
        Commands::Check {
            target,
            current,
            current_features,
            target_features,
            quiet,
        } => commands::check::run(
            &CheckOptions {
                target: &target,
                current: current.as_deref(),
                current_features: &current_features,
                target_features: &target_features,
                quiet,
            },
            &config,
        ),

        Commands::Host => commands::host::run().map(|()| true),

        Commands::Parse { specifier } => commands::parse::run(&specifier).map(|()| true),
    }
}

/// Load the explicit config file, or search upward from the working
/// directory. A missing file is only an error when it was named explicitly.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => {
            let cwd = std::env::current_dir().context("reading working directory")?;
            discover_config(&cwd)
        }
    }
}

/// Search upward from `start_dir`, falling back to defaults.
fn discover_config(start_dir: &Path) -> Result<Config> {
    Ok(Config::find_and_load(start_dir)?
        .map(|(config, _)| config)
        .unwrap_or_default())
}

/// Filter directive used when `RUST_LOG` is unset: `--verbose`, then the
/// configured level, then `warn`.
fn log_directive(verbose: bool, config: &Config) -> &str {
    if verbose {
        "debug"
    } else {
        config.log.level.as_deref().unwrap_or("warn")
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over [`log_directive`].
fn init_logging(verbose: bool, config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose, config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}
