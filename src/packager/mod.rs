//! AppImage packaging flow.
//!
//! Structure:
//! - `manifest` - name/version extraction from the project manifest
//! - `desktop` - desktop-entry rewrite
//! - `recipe` - AppImageBuilder recipe rewrite
//! - `platform` - host architecture detection
//! - `appimage` - appimage-builder invocation

pub mod appimage;
pub mod desktop;
pub mod manifest;
pub mod platform;
pub mod recipe;

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

/// Directory containing packaging templates.
pub const RES_DIR: &str = "res";
/// Working directory for recipes and build output.
pub const WORK_DIR: &str = "appimage";

/// Packaging commands for the CLI.
#[derive(Subcommand)]
pub enum PackageCommands {
    /// Rewrite templates and build the AppImage
    Build,
    /// Rewrite templates only
    Prepare,
    /// Print the version found in the manifest
    Version,
}

/// Full flow: rewrite both templates, then run appimage-builder.
pub fn build(manifest: &Path) -> Result<()> {
    let (name, version, arch) = prepare(manifest)?;
    appimage::build(Path::new(WORK_DIR), &name, &version, &arch)
}

/// Rewrite the desktop entry and the architecture-matched recipe.
///
/// Returns the manifest name, version, and detected architecture for the
/// build step. No rollback: a failed recipe rewrite after a successful
/// desktop rewrite leaves the desktop entry on disk.
pub fn prepare(manifest: &Path) -> Result<(String, String, String)> {
    println!("=== Preparing templates ===");

    let name = manifest::require_name(manifest)?;
    let version = manifest::require_version(manifest)?;
    let arch = platform::machine();

    println!("  {name} {version} ({arch})");

    let work = Path::new(WORK_DIR);
    desktop::write(Path::new(RES_DIR), work, &name, &version)?;
    recipe::write(work, &arch, &version)?;

    Ok((name, version, arch))
}

/// Print the version found in the manifest.
pub fn version(manifest: &Path) -> Result<()> {
    println!("{}", manifest::require_version(manifest)?);
    Ok(())
}
