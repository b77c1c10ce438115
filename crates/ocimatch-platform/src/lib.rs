//! Platform descriptors and compatibility matching for multi-platform OCI artifacts.
//!
//! A manifest list carries one entry per platform an image was built for.
//! Picking the right entry comes down to a single question: does the
//! platform we are running on satisfy the platform an entry requires?
//!
//! - **Platform** — the descriptor: architecture, OS, OS version, OS features, variant
//! - **Matcher** — the compatibility predicate and its mismatch diagnostics
//! - **Specifier** — the `os/arch[/variant][:os_version]` text form
//! - **Host** — the descriptor of the running process

pub mod error;
pub mod host;
pub mod matcher;
pub mod platform;
pub mod specifier;

// Re-exports for convenience.
pub use error::{PlatformError, Result};
pub use host::{host_platform, oci_architecture, oci_os, platform_for};
pub use matcher::{check, matches, Mismatch};
pub use platform::Platform;
pub use specifier::parse_specifier;
