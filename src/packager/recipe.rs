//! AppImageBuilder recipe rewrite.
//!
//! The recipe's app-block `version:` field carries a four-space indent; the
//! top-level `version:` key (recipe schema version) must stay untouched.
//! Rewriting is line-oriented: CRLF endings are normalized to LF and the
//! output always ends with a newline.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const VERSION_FIELD: &str = "    version: ";

/// Recipe file name for the given architecture.
pub fn file_name(arch: &str) -> String {
    format!("AppImageBuilder-{arch}.yml")
}

/// Recipe path for the given architecture.
pub fn path(work_dir: &Path, arch: &str) -> PathBuf {
    work_dir.join(file_name(arch))
}

/// Replace every indented `version:` field with the given version.
pub fn rewrite(contents: &str, version: &str) -> String {
    let mut out = String::with_capacity(contents.len());
    for line in contents.lines() {
        if line.starts_with(VERSION_FIELD) {
            out.push_str(VERSION_FIELD);
            out.push_str(version);
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Rewrite the architecture-matched recipe in place.
pub fn write(work_dir: &Path, arch: &str, version: &str) -> Result<()> {
    let recipe = path(work_dir, arch);
    let contents = std::fs::read_to_string(&recipe)
        .with_context(|| format!("Failed to read recipe {}", recipe.display()))?;

    std::fs::write(&recipe, rewrite(&contents, version))
        .with_context(|| format!("Failed to write {}", recipe.display()))?;

    println!("  Wrote: {}", recipe.display());
    Ok(())
}
