//! Rm command for the verman CLI.
//!
//! Removes a downloaded Spin version, the active-version override, or
//! everything at once:
//!
//! ```bash
//! verman rm 2.1.0      # Remove one version
//! verman rm current    # Clear the active version, keep downloads
//! verman rm all        # Remove every version (asks for confirmation)
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use crate::spin::{Store, VersionTag};

/// Arguments for the rm command.
#[derive(Args)]
pub struct RmArgs {
    /// Version to remove, "current" to clear the active version, or "all".
    pub target: String,
}

/// Executes the rm command.
///
/// Removing a version that is not installed is a no-op success. The "all"
/// target prompts for confirmation on stdin and cancels silently on
/// anything but `y`/`yes`.
///
/// # Errors
///
/// Returns an error if a directory cannot be removed or the confirmation
/// prompt cannot be read.
pub fn execute(args: &RmArgs) -> Result<()> {
    let store = Store::new()?;

    match args.target.as_str() {
        "all" => {
            if confirm_remove_all()? {
                store.remove_all()?;
            }
        }
        "current" => store.remove_active()?,
        raw => store.remove_version(&VersionTag::new(raw))?,
    }

    Ok(())
}

/// Asks the user to confirm deleting every downloaded version.
fn confirm_remove_all() -> Result<bool> {
    print!(
        "Are you sure you want to delete all Spin versions?\n\
         Type \"y\" or \"yes\" to confirm, anything else to cancel: "
    );
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("Failed to read confirmation")?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
