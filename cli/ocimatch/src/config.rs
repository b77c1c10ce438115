//! `ocimatch.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ocimatch_platform::Platform;
use serde::{Deserialize, Serialize};

/// Configuration file name searched for from the working directory upward.
pub const CONFIG_FILE: &str = "ocimatch.toml";

/// The top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Defaults for the platform being checked.
    #[serde(default)]
    pub current: CurrentConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// `[current]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CurrentConfig {
    /// Platform specifier used when none is given on the command line.
    #[serde(default)]
    pub platform: Option<String>,
    /// OS features added to the current platform.
    #[serde(default)]
    pub os_features: Vec<String>,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset (e.g., "info").
    #[serde(default)]
    pub level: Option<String>,
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Search upward from `start_dir` for an `ocimatch.toml`, parse and return it
    /// along with the path it was found at.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Resolve the configured current platform, if any, with configured
    /// OS features attached.
    pub fn current_platform(&self) -> Result<Option<Platform>> {
        let Some(spec) = self.current.platform.as_deref() else {
            return Ok(None);
        };
        let platform: Platform = spec.parse().context("in [current] platform")?;
        Ok(Some(platform.with_os_features(self.current.os_features.iter().cloned())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
[current]
platform = "windows/amd64:10.0.20348.768"
os-features = ["win32k"]

[log]
level = "info"
"#;

    #[test]
    fn parse_full_config() {
        let config = Config::parse(FULL).unwrap();
        assert_eq!(
            config.current.platform.as_deref(),
            Some("windows/amd64:10.0.20348.768")
        );
        assert_eq!(config.current.os_features, vec!["win32k"]);
        assert_eq!(config.log.level.as_deref(), Some("info"));

        let current = config.current_platform().unwrap().unwrap();
        assert_eq!(
            current,
            Platform::new("windows", "amd64")
                .with_os_version("10.0.20348.768")
                .with_os_feature("win32k")
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.current.platform.is_none());
        assert!(config.current.os_features.is_empty());
        assert!(config.log.level.is_none());
        assert!(config.current_platform().unwrap().is_none());
    }

    #[test]
    fn bad_platform_is_an_error() {
        let config = Config::parse("[current]\nplatform = \"linux\"\n").unwrap();
        let err = config.current_platform().unwrap_err();
        assert!(format!("{err:#}").contains("missing architecture"));
    }

    #[test]
    fn unparsable_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[current\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn find_searches_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), FULL).unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Config::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILE));
        assert_eq!(config.log.level.as_deref(), Some("info"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[current]\nos_features = [\"a\"]\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));
        assert!(format!("{err:#}").contains("os_features"));

        assert!(Config::parse("[log]\nlevl = \"info\"\n").is_err());
        assert!(Config::parse("[currnet]\nplatform = \"linux/amd64\"\n").is_err());
    }

    #[test]
    fn find_without_file_returns_none() {
        // The filesystem root is the last directory searched, so starting
        // there leaves nothing above it.
        let root = std::env::temp_dir()
            .ancestors()
            .last()
            .map(Path::to_path_buf)
            .unwrap();
        let found = Config::find_and_load(&root).unwrap();
        assert_eq!(found.is_some(), root.join(CONFIG_FILE).is_file());
    }
}
