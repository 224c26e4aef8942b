//! Set command for the verman CLI.
//!
//! Switches the active Spin binary to the requested version, downloading
//! it first if not found locally.
//!
//! ```bash
//! verman set 2.2.0
//! ```

use anyhow::Result;
use clap::Args;

use crate::spin::{SpinCli, Store, VersionTag, installer};

/// Arguments for the set command.
#[derive(Args)]
pub struct SetArgs {
    /// Version to activate (e.g., "2.2.0" or "v2.2.0").
    pub version: String,
}

/// Executes the set command.
///
/// # Errors
///
/// Returns an error if acquisition fails, or if activation cannot create
/// the link or the activated binary does not verify (most commonly the
/// active slot is missing from PATH).
pub async fn execute(args: &SetArgs) -> Result<()> {
    let store = Store::new()?;
    let tag = VersionTag::new(&args.version);

    installer::acquire_and_activate(&store, &tag, &SpinCli).await?;

    println!("Spin has been updated to version {tag}");
    Ok(())
}
