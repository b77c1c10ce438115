//! Platform descriptor.
//!
//! Identifies the execution environment an artifact targets: architecture,
//! operating system and the optional qualifiers that discriminate between
//! otherwise identical architecture/OS pairs.

use crate::matcher;

/// A platform descriptor.
///
/// Optional string fields use the empty string for "unspecified", matching
/// how descriptors appear in manifest lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Platform {
    /// CPU architecture (e.g., "amd64", "arm64", "arm").
    pub architecture: String,
    /// Operating system (e.g., "linux", "windows").
    pub os: String,
    /// Operating system version (e.g., "10.0.20348.768"). Empty if unspecified.
    pub os_version: String,
    /// Optional OS capability tags (e.g., "win32k"). Order is not significant.
    pub os_features: Vec<String>,
    /// Sub-architecture qualifier (e.g., "v7"). Empty if unspecified.
    pub variant: String,
}

impl Platform {
    /// Create a descriptor with only OS and architecture set.
    pub fn new(os: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            architecture: architecture.into(),
            os: os.into(),
            ..Self::default()
        }
    }

    /// Return a copy with the variant set.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Return a copy with the OS version set.
    pub fn with_os_version(mut self, os_version: impl Into<String>) -> Self {
        self.os_version = os_version.into();
        self
    }

    /// Return a copy with one more OS feature.
    pub fn with_os_feature(mut self, feature: impl Into<String>) -> Self {
        self.os_features.push(feature.into());
        self
    }

    /// Return a copy with the given OS features appended.
    pub fn with_os_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.os_features.extend(features.into_iter().map(Into::into));
        self
    }

    /// Whether a variant is specified.
    pub fn has_variant(&self) -> bool {
        !self.variant.is_empty()
    }

    /// Whether an OS version is specified.
    pub fn has_os_version(&self) -> bool {
        !self.os_version.is_empty()
    }

    /// Whether this platform satisfies `target`.
    ///
    /// See [`matcher::matches`].
    pub fn matches(&self, target: &Platform) -> bool {
        matcher::matches(self, target)
    }
}
