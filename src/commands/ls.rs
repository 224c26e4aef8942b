//! Ls command for the verman CLI.
//!
//! Lists all Spin versions downloaded locally, one per line. Prints
//! nothing when the store does not exist yet.

use anyhow::Result;

use crate::spin::Store;

/// Executes the ls command.
///
/// # Errors
///
/// Returns an error if the store directory exists but cannot be read.
pub fn execute() -> Result<()> {
    let store = Store::new()?;

    for version in store.list_installed()? {
        println!("{version}");
    }

    Ok(())
}
