#![warn(clippy::pedantic)]

//! # Spin Version Manager (verman)
//!
//! The `verman` command manages locally downloaded versions of the Spin
//! CLI. It downloads platform-specific release archives on demand, caches
//! the extracted binaries per version, and switches the active binary via
//! a link in a fixed location the user puts on their PATH.
//!
//! ## Subcommands
//!
//! - `get` - Download one or more versions if not found locally
//! - `set` - Switch the active Spin binary to a version
//! - `ls` - List versions downloaded locally
//! - `rm` - Remove a version, the active override, or everything
//!
//! ## Examples
//!
//! Download two versions:
//! ```bash
//! verman get 2.1.0 2.2.0
//! ```
//!
//! Activate one of them:
//! ```bash
//! verman set 2.2.0
//! ```
//!
//! Revert to the system-wide spin:
//! ```bash
//! verman rm current
//! ```

mod commands;
mod errors;
mod spin;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{get, ls, rm, set};

/// Spin version manager.
///
/// Downloads, caches, and switches between versions of the Spin CLI.
#[derive(Parser)]
#[command(
    name = "verman",
    author,
    version,
    about = "Manage locally installed versions of the Spin CLI",
    long_about = "verman downloads Spin release binaries per version, keeps them under \
    ~/.spin_verman/versions, and switches the active one by relinking \
    ~/.spin_verman/versions/current_version/spin.",
    after_help = "\
ACTIVATION:
    'set' links the chosen version into the current_version directory and then
    runs 'spin --version' to confirm the switch took effect. Prepend that
    directory to your PATH so the link wins over any system-wide spin:
        export PATH=\"$HOME/.spin_verman/versions/current_version:$PATH\"

ENVIRONMENT VARIABLES:
    SPIN_VERMAN_HOME            Store directory (default: ~/.spin_verman)
    SPIN_VERMAN_RELEASE_HOST    Release host (default: https://github.com/fermyon/spin/releases/download)"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the verman CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Download the binary for one or more versions.
    ///
    /// Versions already present locally are skipped without any network
    /// access. Bare version numbers and v-prefixed tags are equivalent.
    Get(get::GetArgs),

    /// Switch the active Spin binary to a version.
    ///
    /// Downloads the version first if it is not found locally, then
    /// relinks the current_version directory and verifies the switch.
    Set(set::SetArgs),

    /// List Spin versions downloaded locally.
    Ls,

    /// Remove a version, the active override, or everything.
    ///
    /// "rm current" clears the active version without touching downloads;
    /// "rm all" removes every downloaded version after confirmation.
    Rm(rm::RmArgs),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get(args) => get::execute(&args).await,
        Commands::Set(args) => set::execute(&args).await,
        Commands::Ls => ls::execute(),
        Commands::Rm(args) => rm::execute(&args),
    }
}
