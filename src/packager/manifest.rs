//! Manifest field extraction.
//!
//! The manifest is scanned line by line; no TOML parsing. The first line
//! starting with the key wins, with the key token, the `=` assignment, and
//! quotes stripped.

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Extract the value of a `key = "value"` line from manifest contents.
///
/// Returns an empty string when no line starts with the key. Callers must
/// surface the empty string as an error, not pass it downstream.
pub fn extract(contents: &str, key: &str) -> String {
    for line in contents.lines() {
        if line.starts_with(key) {
            return line
                .replacen(key, "", 1)
                .replace('=', "")
                .replace('"', "")
                .trim()
                .to_string();
        }
    }
    String::new()
}

fn require(path: &Path, key: &str) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;

    let value = extract(&contents, key);
    if value.is_empty() {
        bail!("No `{key}` field in {}", path.display());
    }
    Ok(value)
}

/// Read the application version, failing when the field is absent.
pub fn require_version(path: &Path) -> Result<String> {
    require(path, "version")
}

/// Read the application name, failing when the field is absent.
pub fn require_name(path: &Path) -> Result<String> {
    require(path, "name")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const MANIFEST: &str = "[package]\n\
                            name = \"demo\"\n\
                            version = \"1.2.3\"\n\
                            edition = \"2021\"\n";

    #[test]
    fn test_extract_version() {
        assert_eq!(extract(MANIFEST, "version"), "1.2.3");
    }

    #[test]
    fn test_extract_name() {
        assert_eq!(extract(MANIFEST, "name"), "demo");
    }

    #[test]
    fn test_extract_missing_key_is_empty() {
        assert_eq!(extract("[package]\nedition = \"2021\"\n", "version"), "");
    }

    #[test]
    fn test_extract_ignores_indented_lines() {
        // Only a line *starting* with the key counts.
        let contents = "  version = \"9.9.9\"\nversion = \"1.0.0\"\n";
        assert_eq!(extract(contents, "version"), "1.0.0");
    }

    #[test]
    fn test_require_version_missing_field() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Cargo.toml");
        std::fs::write(&path, "[package]\nedition = \"2021\"\n")?;

        assert!(require_version(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_require_version_missing_file() {
        assert!(require_version(Path::new("/nonexistent/Cargo.toml")).is_err());
    }

    #[test]
    fn test_require_version_reads_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Cargo.toml");
        std::fs::write(&path, MANIFEST)?;

        assert_eq!(require_version(&path)?, "1.2.3");
        assert_eq!(require_name(&path)?, "demo");
        Ok(())
    }
}
