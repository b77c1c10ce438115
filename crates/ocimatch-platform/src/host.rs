//! Host platform detection.
//!
//! Rust and OCI name the same targets differently (`x86_64` vs `amd64`,
//! `macos` vs `darwin`). These helpers translate the compile-time target
//! of the running binary into OCI names.

use crate::platform::Platform;

/// Map a Rust `target_os` name to its OCI name.
///
/// Unknown names pass through unchanged.
pub fn oci_os(rust_os: &str) -> &str {
    match rust_os {
        "macos" => "darwin",
        other => other,
    }
}

/// Map a Rust `target_arch` name to its OCI name.
///
/// Unknown names pass through unchanged.
pub fn oci_architecture(rust_arch: &str) -> &str {
    match rust_arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" => "ppc64",
        "loongarch64" => "loong64",
        other => other,
    }
}

/// Default variant for an OCI architecture, if it has one.
fn default_variant(oci_arch: &str) -> Option<&'static str> {
    match oci_arch {
        "arm" => Some("v7"),
        "arm64" => Some("v8"),
        _ => None,
    }
}

/// Build a descriptor from Rust target names.
pub fn platform_for(rust_os: &str, rust_arch: &str) -> Platform {
    let arch = oci_architecture(rust_arch);
    let platform = Platform::new(oci_os(rust_os), arch);
    match default_variant(arch) {
        Some(variant) => platform.with_variant(variant),
        None => platform,
    }
}

/// Descriptor for the platform this binary was built for.
pub fn host_platform() -> Platform {
    platform_for(std::env::consts::OS, std::env::consts::ARCH)
}

impl Platform {
    /// Descriptor for the platform this binary was built for.
    pub fn host() -> Self {
        host_platform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_names() {
        assert_eq!(oci_os("macos"), "darwin");
        assert_eq!(oci_os("linux"), "linux");
        assert_eq!(oci_os("windows"), "windows");
        assert_eq!(oci_os("freebsd"), "freebsd");
    }

    #[test]
    fn architecture_names() {
        assert_eq!(oci_architecture("x86_64"), "amd64");
        assert_eq!(oci_architecture("aarch64"), "arm64");
        assert_eq!(oci_architecture("x86"), "386");
        assert_eq!(oci_architecture("powerpc64"), "ppc64");
        assert_eq!(oci_architecture("loongarch64"), "loong64");
        assert_eq!(oci_architecture("arm"), "arm");
        assert_eq!(oci_architecture("riscv64"), "riscv64");
        assert_eq!(oci_architecture("s390x"), "s390x");
    }

    #[test]
    fn arm_targets_get_variants() {
        assert_eq!(
            platform_for("linux", "arm"),
            Platform::new("linux", "arm").with_variant("v7")
        );
        assert_eq!(
            platform_for("macos", "aarch64"),
            Platform::new("darwin", "arm64").with_variant("v8")
        );
        assert!(!platform_for("linux", "x86_64").has_variant());
    }

    #[test]
    fn host_has_os_and_arch() {
        let host = Platform::host();
        assert_eq!(host, host_platform());
        assert!(!host.os.is_empty());
        assert!(!host.architecture.is_empty());
        assert!(!host.has_os_version());
        assert!(host.os_features.is_empty());
    }

    #[test]
    fn host_matches_plain_os_arch_target() {
        let host = host_platform();
        let target = Platform::new(host.os.clone(), host.architecture.clone());
        assert!(host.matches(&target));
    }
}
