//! `ocimatch parse` — show the fields of a platform specifier.

use anyhow::{Context, Result};
use ocimatch_platform::Platform;

/// Parse `spec` and print each descriptor field.
pub fn run(spec: &str) -> Result<()> {
    let platform: Platform = spec
        .parse()
        .with_context(|| format!("parsing '{spec}'"))?;
    print!("{}", describe(&platform));
    Ok(())
}

/// Render one `field: value` line per descriptor field.
pub fn describe(platform: &Platform) -> String {
    let or_unset = |s: &str| {
        if s.is_empty() {
            "(unspecified)".to_string()
        } else {
            s.to_string()
        }
    };
    format!(
        "os:           {}\narchitecture: {}\nvariant:      {}\nos version:   {}\n",
        platform.os,
        platform.architecture,
        or_unset(&platform.variant),
        or_unset(&platform.os_version),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_full_specifier() {
        let p: Platform = "linux/arm/v7:5.15".parse().unwrap();
        let out = describe(&p);
        assert!(out.contains("os:           linux\n"));
        assert!(out.contains("architecture: arm\n"));
        assert!(out.contains("variant:      v7\n"));
        assert!(out.contains("os version:   5.15\n"));
    }

    #[test]
    fn describe_marks_unset_fields() {
        let out = describe(&Platform::new("linux", "amd64"));
        assert!(out.contains("variant:      (unspecified)\n"));
        assert!(out.contains("os version:   (unspecified)\n"));
    }

    #[test]
    fn run_rejects_bad_specifier() {
        assert!(run("linux/amd64").is_ok());
        assert!(run("linux").is_err());
    }
}
