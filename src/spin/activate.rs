//! Active-version switching.
//!
//! The active slot (`versions/current_version/`) holds a single link named
//! `spin` pointing at one installed version's binary. Activation is an
//! atomic pointer swap: remove the old link, create the new one. The slot
//! directory itself is expected to be on the user's PATH ahead of any
//! system-wide spin.
//!
//! After the swap, activation is verified by invoking the binary through a
//! [`VersionProbe`] and checking the reported version string. The probe is
//! a seam: the real implementation shells out to `spin --version`, tests
//! substitute a fake with canned output.

use std::path::Path;

use anyhow::{Context, Result};

use crate::errors::VermanError;
use crate::spin::store::Store;
use crate::spin::tag::VersionTag;

/// Queries the version reported by the currently reachable spin binary.
pub trait VersionProbe {
    /// Runs the version query and returns its combined output.
    ///
    /// # Errors
    ///
    /// Returns an error if the binary could not be invoked at all.
    fn query_version(&self) -> std::io::Result<String>;
}

/// The real probe: invokes `spin --version` through the caller's PATH.
///
/// Resolution through PATH is the point — it confirms the active slot is
/// actually reachable the way the user's shell will reach it.
pub struct SpinCli;

impl VersionProbe for SpinCli {
    fn query_version(&self) -> std::io::Result<String> {
        let output = std::process::Command::new(Store::BINARY)
            .arg("--version")
            .output()?;
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined)
    }
}

/// Repoints the active slot at an installed version and verifies it.
///
/// The version must already be installed. Absence of a previous link is
/// not an error; any other failure to remove it is.
///
/// Verification is best-effort confirmation: the probe output must contain
/// the bare version number. Both failure shapes name the active-slot
/// directory, since the dominant cause is that directory missing from the
/// user's PATH.
///
/// # Errors
///
/// Returns an error if:
/// - The active slot directory or link cannot be created
/// - The activated binary cannot be invoked
/// - The activated binary reports a different version
pub fn activate(store: &Store, tag: &VersionTag, probe: &dyn VersionProbe) -> Result<()> {
    let active_dir = store.active_dir();
    std::fs::create_dir_all(&active_dir)
        .with_context(|| format!("Failed to create directory: {}", active_dir.display()))?;

    let link = store.active_binary_path();
    match std::fs::remove_file(&link) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to remove old link: {}", link.display()));
        }
    }

    create_link(&store.binary_path(tag), &link)?;

    let output = probe
        .query_version()
        .map_err(|source| VermanError::verify_invocation(active_dir.clone(), source))?;

    if !output.contains(tag.number()) {
        return Err(VermanError::verify_mismatch(tag.as_str(), active_dir).into());
    }

    Ok(())
}

/// Creates a symbolic link (Unix) or falls back through hard link and copy
/// where symlinks are unavailable (Windows).
fn create_link(source: &Path, target: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(source, target).with_context(|| {
            format!(
                "Failed to create symlink from {} to {}",
                source.display(),
                target.display()
            )
        })?;
    }

    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_file(source, target)
            .or_else(|_| std::fs::hard_link(source, target))
            .or_else(|_| std::fs::copy(source, target).map(|_| ()))
            .with_context(|| {
                format!(
                    "Failed to create link from {} to {}",
                    source.display(),
                    target.display()
                )
            })?;
    }

    Ok(())
}
