//! `ocimatch host` — print the host platform.

use anyhow::Result;
use ocimatch_platform::Platform;

/// Print the specifier of the platform this binary runs on.
pub fn run() -> Result<()> {
    println!("{}", Platform::host());
    Ok(())
}
