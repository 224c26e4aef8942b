//! On-disk store for downloaded Spin versions.
//!
//! The default root directory is `~/.spin_verman`, which can be overridden
//! by setting the `SPIN_VERMAN_HOME` environment variable.
//!
//! ## Directory Structure
//!
//! ```text
//! ~/.spin_verman/                      # Root directory (or SPIN_VERMAN_HOME)
//!   versions/
//!     v2.1.0/
//!       spin                           # Extracted binary for that version
//!     v2.2.0/
//!       spin
//!     current_version/
//!       spin                           # Link to the active version's binary
//!     spin-v2.3.0-linux-amd64.tar.gz   # Downloaded archive, pre-extraction only
//! ```
//!
//! The existence of a version subdirectory is the sole source of truth for
//! "is this version installed" — there is no manifest or index file that
//! could drift from the filesystem. A version directory is created only by
//! a completed extraction, so its presence always implies a usable binary.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::spin::tag::VersionTag;

/// Environment variable to override the default store root directory.
pub const STORE_HOME_ENV: &str = "SPIN_VERMAN_HOME";

/// Store root directory name under the user's home directory.
const STORE_DIR_NAME: &str = ".spin_verman";

/// Manages the version store layout.
///
/// All path construction goes through this struct so every command agrees
/// on where versions, archives, and the active slot live.
#[derive(Debug, Clone)]
pub struct Store {
    /// Root directory for all store data (`~/.spin_verman` or `SPIN_VERMAN_HOME`).
    pub root: PathBuf,
    /// Directory containing installed versions and the active slot.
    pub versions: PathBuf,
}

impl Store {
    /// Name of the managed binary: the tar entry, the per-version file,
    /// and the active-slot link are all called this.
    pub const BINARY: &'static str = "spin";

    /// Name of the reserved active-slot directory under `versions/`.
    pub const ACTIVE_DIR: &'static str = "current_version";

    /// Creates a new `Store` rooted at the default location.
    ///
    /// The root directory is determined by:
    /// 1. The `SPIN_VERMAN_HOME` environment variable if set
    /// 2. `~/.spin_verman` in the user's home directory
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let root = if let Ok(home) = std::env::var(STORE_HOME_ENV) {
            PathBuf::from(home)
        } else {
            dirs::home_dir()
                .context("Cannot determine home directory. Set SPIN_VERMAN_HOME environment variable.")?
                .join(STORE_DIR_NAME)
        };

        Ok(Self::with_root(root))
    }

    /// Creates a new `Store` with a specific root directory.
    ///
    /// This is useful for testing or when the root is known in advance.
    #[must_use = "returns new store instance without side effects"]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            versions: root.join("versions"),
            root,
        }
    }

    /// Returns the path to a specific version's installation directory.
    #[must_use = "returns the path without side effects"]
    pub fn version_dir(&self, tag: &VersionTag) -> PathBuf {
        self.versions.join(tag.as_str())
    }

    /// Returns the path to a specific version's extracted binary.
    #[must_use = "returns the path without side effects"]
    pub fn binary_path(&self, tag: &VersionTag) -> PathBuf {
        self.version_dir(tag).join(Self::BINARY)
    }

    /// Returns the path to the reserved active-slot directory.
    #[must_use = "returns the path without side effects"]
    pub fn active_dir(&self) -> PathBuf {
        self.versions.join(Self::ACTIVE_DIR)
    }

    /// Returns the fixed path of the active-slot link.
    #[must_use = "returns the path without side effects"]
    pub fn active_binary_path(&self) -> PathBuf {
        self.active_dir().join(Self::BINARY)
    }

    /// Returns the path for a downloaded archive file.
    #[must_use = "returns the path without side effects"]
    pub fn archive_path(&self, filename: &str) -> PathBuf {
        self.versions.join(filename)
    }

    /// Ensures the root and versions directories exist; idempotent.
    ///
    /// On Unix the root is created with owner-only permissions.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    pub fn ensure_layout(&self) -> Result<()> {
        create_private_dir(&self.root)
            .with_context(|| format!("Failed to create directory: {}", self.root.display()))?;
        std::fs::create_dir_all(&self.versions)
            .with_context(|| format!("Failed to create directory: {}", self.versions.display()))?;
        Ok(())
    }

    /// Checks if a specific version is installed.
    #[must_use = "returns installation status without side effects"]
    pub fn is_installed(&self, tag: &VersionTag) -> bool {
        self.version_dir(tag).exists()
    }

    /// Lists all installed versions.
    ///
    /// Returns every immediate child directory of `versions/` whose name
    /// carries the leading `v` marker, in directory-listing order. The
    /// reserved active slot and transient archive files never match.
    /// Returns an empty list when the store does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the versions directory cannot be read.
    pub fn list_installed(&self) -> Result<Vec<String>> {
        if !self.versions.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.versions).with_context(|| {
            format!(
                "Failed to read versions directory: {}",
                self.versions.display()
            )
        })?;

        let mut installed = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| "Failed to read directory entry")?;
            let path = entry.path();
            if path.is_dir()
                && let Some(name) = path.file_name()
                && let Some(name_str) = name.to_str()
                && name_str.starts_with('v')
            {
                installed.push(name_str.to_string());
            }
        }

        Ok(installed)
    }

    /// Removes an installed version; succeeds if it was never installed.
    ///
    /// # Errors
    ///
    /// Returns an error if the version directory exists but cannot be
    /// removed.
    pub fn remove_version(&self, tag: &VersionTag) -> Result<()> {
        remove_dir_if_present(&self.version_dir(tag))
    }

    /// Removes the active slot, reverting to no override; succeeds if absent.
    ///
    /// Installed versions are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the active slot exists but cannot be removed.
    pub fn remove_active(&self) -> Result<()> {
        remove_dir_if_present(&self.active_dir())
    }

    /// Removes every installed version, then the active slot.
    ///
    /// The first unrecoverable error aborts and is surfaced; versions
    /// already removed stay removed.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be removed.
    pub fn remove_all(&self) -> Result<()> {
        for version in self.list_installed()? {
            remove_dir_if_present(&self.versions.join(version))?;
        }
        self.remove_active()
    }
}

/// Recursively removes a directory, treating absence as success.
fn remove_dir_if_present(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to remove directory: {}", dir.display()))
        }
    }
}

/// Creates a directory readable only by the owner (Unix), including parents.
#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

/// Creates a directory, including parents (no mode handling on Windows).
#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}
