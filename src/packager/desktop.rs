//! Desktop-entry rewrite.
//!
//! The template under `res/` is copied into the work directory with its
//! `Version=` line replaced. Rewriting is line-oriented: CRLF endings are
//! normalized to LF and the output always ends with a newline.

use anyhow::{Context, Result};
use std::path::Path;

/// Replace every `Version=` line with the given version.
pub fn rewrite(contents: &str, version: &str) -> String {
    let mut out = String::with_capacity(contents.len());
    for line in contents.lines() {
        if line.starts_with("Version=") {
            out.push_str("Version=");
            out.push_str(version);
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Rewrite the desktop entry from the template into the work directory.
pub fn write(res_dir: &Path, work_dir: &Path, name: &str, version: &str) -> Result<()> {
    let template = res_dir.join(format!("{name}.desktop"));
    let contents = std::fs::read_to_string(&template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;

    let dest = work_dir.join(format!("{name}.desktop"));
    std::fs::write(&dest, rewrite(&contents, version))
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    println!("  Wrote: {}", dest.display());
    Ok(())
}
