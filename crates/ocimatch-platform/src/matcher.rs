//! Platform compatibility matching.
//!
//! Decides whether a candidate platform (`current`) satisfies a required
//! platform (`target`). The relation is not symmetric: `current` may carry
//! qualifiers the target does not ask for, but must provide every qualifier
//! the target does ask for.
//!
//! Clauses, evaluated in order:
//! 1. architecture — exact, case-sensitive
//! 2. OS — exact, case-sensitive
//! 3. OS version — exact when the target specifies one, otherwise ignored
//! 4. variant — exact when the target specifies one, otherwise ignored
//! 5. OS features — the target's features must be a subset of current's

use std::collections::HashSet;

use crate::platform::Platform;

/// The first clause that prevented a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    /// Architectures differ.
    #[error("architecture '{actual}' does not match required '{expected}'")]
    Architecture {
        /// The target's architecture.
        expected: String,
        /// The current platform's architecture.
        actual: String,
    },

    /// Operating systems differ.
    #[error("os '{actual}' does not match required '{expected}'")]
    Os {
        /// The target's os.
        expected: String,
        /// The current platform's os.
        actual: String,
    },

    /// Target requires an OS version that current does not have.
    #[error("os version '{actual}' does not match required '{expected}'")]
    OsVersion {
        /// The target's os version.
        expected: String,
        /// The current platform's os version.
        actual: String,
    },

    /// Target requires a variant that current does not have.
    #[error("variant '{actual}' does not match required '{expected}'")]
    Variant {
        /// The target's variant.
        expected: String,
        /// The current platform's variant.
        actual: String,
    },

    /// Target requires OS features that current does not provide.
    #[error("missing required os features: {}", missing.join(", "))]
    OsFeatures {
        /// Missing features, in target order, without duplicates.
        missing: Vec<String>,
    },
}

impl Mismatch {
    /// Short name of the failing clause.
    pub fn clause(&self) -> &'static str {
        match self {
            Mismatch::Architecture { .. } => "architecture",
            Mismatch::Os { .. } => "os",
            Mismatch::OsVersion { .. } => "os_version",
            Mismatch::Variant { .. } => "variant",
            Mismatch::OsFeatures { .. } => "os_features",
        }
    }
}

/// Whether `current` satisfies `target`.
pub fn matches(current: &Platform, target: &Platform) -> bool {
    check(current, target).is_ok()
}

/// Check whether `current` satisfies `target`, reporting the first failing clause.
pub fn check(current: &Platform, target: &Platform) -> Result<(), Mismatch> {
    let result = evaluate(current, target);
    match &result {
        Ok(()) => tracing::trace!(
            current.os = %current.os,
            current.architecture = %current.architecture,
            target.os = %target.os,
            target.architecture = %target.architecture,
            "platform matched"
        ),
        Err(mismatch) => tracing::debug!(
            clause = mismatch.clause(),
            %mismatch,
            "platform rejected"
        ),
    }
    result
}

fn evaluate(current: &Platform, target: &Platform) -> Result<(), Mismatch> {
    if current.architecture != target.architecture {
        return Err(Mismatch::Architecture {
            expected: target.architecture.clone(),
            actual: current.architecture.clone(),
        });
    }

    if current.os != target.os {
        return Err(Mismatch::Os {
            expected: target.os.clone(),
            actual: current.os.clone(),
        });
    }

    if target.has_os_version() && current.os_version != target.os_version {
        return Err(Mismatch::OsVersion {
            expected: target.os_version.clone(),
            actual: current.os_version.clone(),
        });
    }

    if target.has_variant() && current.variant != target.variant {
        return Err(Mismatch::Variant {
            expected: target.variant.clone(),
            actual: current.variant.clone(),
        });
    }

    let missing = missing_features(&current.os_features, &target.os_features);
    if !missing.is_empty() {
        return Err(Mismatch::OsFeatures { missing });
    }

    Ok(())
}

/// Features required by `target` that `current` lacks.
fn missing_features(current: &[String], target: &[String]) -> Vec<String> {
    if target.is_empty() {
        return Vec::new();
    }

    let available: HashSet<&str> = current.iter().map(String::as_str).collect();
    let mut reported: HashSet<&str> = HashSet::new();
    let mut missing = Vec::new();
    for feature in target {
        let feature = feature.as_str();
        if !available.contains(feature) && reported.insert(feature) {
            missing.push(feature.to_string());
        }
    }
    missing
}
