//! Acquisition and activation pipeline.
//!
//! The two operations every command is built from:
//!
//! - [`acquire`]: make a version present locally (resolve platform, fetch
//!   the archive if needed, extract). Repeated calls for an installed
//!   version perform zero network I/O.
//! - [`acquire_and_activate`]: acquire, then repoint the active slot and
//!   verify.
//!
//! Errors from any stage propagate unchanged; there is no retry here or in
//! any stage below.

use anyhow::Result;

use crate::spin::activate::{self, VersionProbe};
use crate::spin::archive;
use crate::spin::download;
use crate::spin::platform::Platform;
use crate::spin::store::Store;
use crate::spin::tag::VersionTag;

/// Ensures the given version is installed in the store.
///
/// # Errors
///
/// Returns an error if the host platform is unsupported, the download
/// fails or the version does not exist, or extraction fails.
pub async fn acquire(store: &Store, tag: &VersionTag) -> Result<()> {
    let platform = Platform::detect()?;
    store.ensure_layout()?;

    match download::fetch(store, tag, platform).await? {
        None => println!("Spin version {tag} found locally."),
        Some(archive_path) => {
            archive::unpack(store, &archive_path, tag)?;
            println!("Spin version {tag} was retrieved successfully!");
        }
    }

    Ok(())
}

/// Ensures the given version is installed, then makes it the active one.
///
/// # Errors
///
/// Returns an error if acquisition fails, or if activation cannot create
/// the link or verify the activated binary.
pub async fn acquire_and_activate(
    store: &Store,
    tag: &VersionTag,
    probe: &dyn VersionProbe,
) -> Result<()> {
    acquire(store, tag).await?;
    activate::activate(store, tag, probe)
}
