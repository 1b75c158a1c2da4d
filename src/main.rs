//! # AppImage Packager
//!
//! Package a built desktop application as an AppImage.
//!
//! ## Usage
//!
//! ```bash
//! packager build      # Rewrite templates + run appimage-builder
//! packager prepare    # Rewrite templates only
//! packager version    # Print the manifest version
//! ```
//!
//! ## Layout
//!
//! - Manifest: Cargo.toml (name + version)
//! - Templates: res/<name>.desktop
//! - Work directory: appimage/ (recipes + build output)

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod packager;

#[derive(Parser)]
#[command(name = "packager", about = "AppImage packager for desktop releases")]
struct Cli {
    /// Path to the project manifest
    #[arg(long, default_value = "Cargo.toml")]
    manifest: PathBuf,

    #[command(subcommand)]
    command: packager::PackageCommands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        packager::PackageCommands::Build => packager::build(&cli.manifest)?,
        packager::PackageCommands::Prepare => {
            packager::prepare(&cli.manifest)?;
        }
        packager::PackageCommands::Version => packager::version(&cli.manifest)?,
    }

    Ok(())
}
