//! Platform specifier strings.
//!
//! The compact text form `os/arch[/variant][:os_version]`, e.g.
//! `linux/arm/v7` or `windows/amd64:10.0.20348.768`. OS features have no
//! place in the text form and are attached separately.

use std::fmt;
use std::str::FromStr;

use crate::error::{PlatformError, Result};
use crate::platform::Platform;

/// Parse a platform specifier.
///
/// Components are taken verbatim: nothing is trimmed, lower-cased or
/// checked against known OS or architecture names.
pub fn parse_specifier(input: &str) -> Result<Platform> {
    if input.is_empty() {
        return Err(PlatformError::invalid_specifier(input, "empty specifier"));
    }

    let (path, os_version) = match input.split_once(':') {
        Some((_, "")) => {
            return Err(PlatformError::invalid_specifier(
                input,
                "empty os version after ':'",
            ))
        }
        Some((path, version)) => (path, version),
        None => (input, ""),
    };

    let parts: Vec<&str> = path.split('/').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(PlatformError::invalid_specifier(input, "empty component"));
    }

    let platform = match parts.as_slice() {
        [_] => {
            return Err(PlatformError::invalid_specifier(
                input,
                "missing architecture (expected os/arch)",
            ))
        }
        [os, arch] => Platform::new(*os, *arch),
        [os, arch, variant] => Platform::new(*os, *arch).with_variant(*variant),
        _ => {
            return Err(PlatformError::invalid_specifier(
                input,
                format!("expected at most 3 components, found {}", parts.len()),
            ))
        }
    };

    Ok(platform.with_os_version(os_version))
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self> {
        parse_specifier(s)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.architecture)?;
        if self.has_variant() {
            write!(f, "/{}", self.variant)?;
        }
        if self.has_os_version() {
            write!(f, ":{}", self.os_version)?;
        }
        Ok(())
    }
}
