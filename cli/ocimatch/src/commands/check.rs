//! `ocimatch check` — test a platform against a required platform.

use anyhow::{Context, Result};
use ocimatch_platform::{matcher, Platform};

use crate::config::Config;

/// Options for a single check.
#[derive(Debug, Default)]
pub struct CheckOptions<'a> {
    /// Required platform specifier.
    pub target: &'a str,
    /// Candidate platform specifier; falls back to config, then host.
    pub current: Option<&'a str>,
    /// OS features added to the candidate.
    pub current_features: &'a [String],
    /// OS features the target requires.
    pub target_features: &'a [String],
    /// Suppress output; only the exit status reports the result.
    pub quiet: bool,
}

/// Run the check. Returns whether the candidate satisfies the target.
pub fn run(opts: &CheckOptions<'_>, config: &Config) -> Result<bool> {
    let current = resolve_current(opts.current, opts.current_features, config)?;
    let target = opts
        .target
        .parse::<Platform>()
        .context("target platform")?
        .with_os_features(opts.target_features.iter().cloned());

    tracing::debug!(%current, %target, "checking platform");

    let outcome = matcher::check(&current, &target);
    if !opts.quiet {
        match &outcome {
            Ok(()) => println!("match: {current} satisfies {target}"),
            Err(mismatch) => println!("no match: {mismatch}"),
        }
    }
    Ok(outcome.is_ok())
}

/// Pick the candidate platform: command line, then config, then host.
pub fn resolve_current(
    spec: Option<&str>,
    extra_features: &[String],
    config: &Config,
) -> Result<Platform> {
    let base = match spec {
        Some(spec) => spec.parse::<Platform>().context("current platform")?,
        None => match config.current_platform()? {
            Some(platform) => platform,
            None => {
                let host = Platform::host();
                tracing::info!(%host, "no current platform given, using host");
                host
            }
        },
    };
    Ok(base.with_os_features(extra_features.iter().cloned()))
}
