//! appimage-builder invocation.

use crate::packager::recipe;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

const BUILDER: &str = "appimage-builder";

/// Run appimage-builder against the architecture-matched recipe.
///
/// Only the exit status is observed. Success and failure are reported on
/// stdout; a failed build does not become this process's exit code.
pub fn build(work_dir: &Path, name: &str, version: &str, arch: &str) -> Result<()> {
    which::which(BUILDER).context("appimage-builder not found on PATH")?;

    println!("=== Building AppImage ===");

    let status = Command::new(BUILDER)
        .args(["--recipe", &recipe::file_name(arch), "--skip-test"])
        .current_dir(work_dir)
        .status()
        .context("Failed to run appimage-builder")?;

    // Report against the absolute work dir, matching where the artifact lands.
    let work_dir = work_dir
        .canonicalize()
        .unwrap_or_else(|_| work_dir.to_path_buf());

    println!(
        "{}",
        outcome(status.success(), &work_dir, name, version, arch)
    );

    Ok(())
}

/// Outcome message for the given exit status: success names the artifact,
/// failure does not.
fn outcome(success: bool, work_dir: &Path, name: &str, version: &str, arch: &str) -> String {
    if success {
        success_message(work_dir, name, version, arch)
    } else {
        failure_message(name)
    }
}

/// Expected artifact path, assembled but never verified to exist.
pub fn artifact_path(work_dir: &Path, name: &str, version: &str, arch: &str) -> PathBuf {
    work_dir.join(format!("{name}-{version}-{arch}.AppImage"))
}

fn success_message(work_dir: &Path, name: &str, version: &str, arch: &str) -> String {
    format!(
        "{name} AppImage build success :)\nCheck AppImage in '{}'",
        artifact_path(work_dir, name, version, arch).display()
    )
}

fn failure_message(name: &str) -> String {
    format!("{name} AppImage build failed :(")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_path() {
        let path = artifact_path(Path::new("appimage"), "demo", "1.2.3", "x86_64");
        assert_eq!(path, Path::new("appimage/demo-1.2.3-x86_64.AppImage"));
    }

    #[test]
    fn test_success_message_names_artifact() {
        let msg = success_message(Path::new("appimage"), "demo", "1.2.3", "x86_64");
        assert!(msg.contains("build success"));
        assert!(msg.contains("appimage/demo-1.2.3-x86_64.AppImage"));
    }

    #[test]
    fn test_failure_message() {
        let msg = failure_message("demo");
        assert!(msg.contains("build failed"));
        assert!(!msg.contains("success"));
    }

    #[test]
    fn test_outcome_zero_exit_is_success() {
        let msg = outcome(true, Path::new("appimage"), "demo", "1.2.3", "x86_64");
        assert!(msg.contains("build success"));
        assert!(msg.contains("appimage/demo-1.2.3-x86_64.AppImage"));
    }

    #[test]
    fn test_outcome_nonzero_exit_is_failure() {
        let msg = outcome(false, Path::new("appimage"), "demo", "1.2.3", "x86_64");
        assert!(msg.contains("build failed"));
        assert!(!msg.contains("success"));
        assert!(!msg.contains(".AppImage"));
    }
}
