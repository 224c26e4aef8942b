//! Single-entry extraction from release archives.
//!
//! A Spin release archive is a gzip-compressed tar that carries the `spin`
//! binary alongside licenses and docs. Only the binary is wanted: the
//! entry stream is scanned to end-of-archive and the one regular file
//! named exactly `spin` is extracted, with its recorded permission mode
//! (the executable bit must survive).
//!
//! Ordering matters for crash safety. The binary is first written to a
//! scratch path, and the version directory is created and populated only
//! after the full scan succeeded; the consumed archive is deleted last.
//! An interrupted extraction therefore leaves either nothing installed
//! (archive still present, the next fetch overwrites it) or a complete
//! version — never a half-populated directory that looks installed.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use tar::Archive;

use crate::errors::VermanError;
use crate::spin::store::Store;
use crate::spin::tag::VersionTag;

/// Extracts the `spin` binary from a tar.gz archive into the store.
///
/// On success the version directory exists with the binary inside and the
/// archive file is gone. If the archive has no matching entry, no version
/// directory is created and the archive is left in place.
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened or is not a valid tar.gz stream
/// - The archive has no regular-file entry named `spin`
/// - The binary cannot be written or moved into the version directory
pub fn unpack(store: &Store, archive_path: &Path, tag: &VersionTag) -> Result<()> {
    let file = std::fs::File::open(archive_path)
        .with_context(|| format!("Failed to open archive: {}", archive_path.display()))?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);

    let scratch = store.versions.join(Store::BINARY);
    let mut found = false;

    for entry in archive
        .entries()
        .with_context(|| format!("Failed to read tar entries: {}", archive_path.display()))?
    {
        let mut entry = entry
            .with_context(|| format!("Failed to read tar entry: {}", archive_path.display()))?;

        if !entry.header().entry_type().is_file() {
            continue;
        }

        let entry_path = entry
            .path()
            .with_context(|| "Failed to get entry path")?
            .into_owned();
        if entry_path.as_path() != Path::new(Store::BINARY) {
            continue;
        }

        let mode = entry
            .header()
            .mode()
            .with_context(|| "Failed to read entry permission mode")?;
        write_binary(&mut entry, &scratch, mode)?;
        found = true;
    }

    if !found {
        return Err(VermanError::binary_missing(archive_path.to_path_buf()).into());
    }

    let version_dir = store.version_dir(tag);
    std::fs::create_dir_all(&version_dir)
        .with_context(|| format!("Failed to create directory: {}", version_dir.display()))?;

    let binary = store.binary_path(tag);
    std::fs::rename(&scratch, &binary).with_context(|| {
        format!(
            "Failed to move {} to {}",
            scratch.display(),
            binary.display()
        )
    })?;

    std::fs::remove_file(archive_path)
        .with_context(|| format!("Failed to remove archive: {}", archive_path.display()))?;

    Ok(())
}

/// Writes an entry's bytes to `dest` with the recorded permission mode.
///
/// The mode is applied again after the write: open-with-mode only takes
/// effect when the file is newly created, and the process umask may have
/// masked bits off.
fn write_binary<R: Read>(entry: &mut R, dest: &Path, mode: u32) -> Result<()> {
    let mut file = open_with_mode(dest, mode)
        .with_context(|| format!("Failed to create file: {}", dest.display()))?;
    std::io::copy(entry, &mut file)
        .with_context(|| format!("Failed to write to {}", dest.display()))?;
    drop(file);
    apply_mode(dest, mode)?;
    Ok(())
}

#[cfg(unix)]
fn open_with_mode(dest: &Path, mode: u32) -> std::io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(dest)
}

#[cfg(not(unix))]
fn open_with_mode(dest: &Path, _mode: u32) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(dest)
}

/// Re-applies the recorded permission mode to the written file (Unix only).
#[cfg(unix)]
fn apply_mode(dest: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(dest, std::fs::Permissions::from_mode(mode))
        .with_context(|| format!("Failed to set permissions: {}", dest.display()))
}

/// Permission modes are not managed this way on Windows.
#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn apply_mode(_dest: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
