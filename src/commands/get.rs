//! Get command for the verman CLI.
//!
//! Downloads the binary for each requested version if not found locally.
//! Multiple versions can be downloaded at once:
//!
//! ```bash
//! verman get 2.1.0
//! verman get 2.1.0 2.2.0
//! ```

use anyhow::Result;
use clap::Args;

use crate::spin::{Store, VersionTag, installer};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Versions to download (e.g., "2.1.0" or "v2.1.0").
    #[clap(required = true)]
    pub versions: Vec<String>,
}

/// Executes the get command.
///
/// Versions are processed strictly in the order given; the first failure
/// aborts the remaining ones. A version that is already installed is a
/// no-op success.
///
/// # Errors
///
/// Returns an error if the platform is unsupported, a version does not
/// exist on the release host, or a download or extraction fails.
pub async fn execute(args: &GetArgs) -> Result<()> {
    let store = Store::new()?;

    for raw in &args.versions {
        let tag = VersionTag::new(raw);
        installer::acquire(&store, &tag).await?;
    }

    Ok(())
}
