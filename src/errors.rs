//! Error types for the verman CLI.
//!
//! This module defines the `VermanError` enum which consolidates the error
//! variants a caller can act on: unsupported host platforms, a release that
//! does not exist, a malformed release archive, and activation verification
//! failures. Plumbing failures (filesystem, network transport) are carried
//! as `anyhow` errors with path or URL context attached at the call site.

use std::path::PathBuf;
use thiserror::Error;

/// Consolidated error type for verman operations.
///
/// Each variant includes the context a user needs to recover without
/// inspecting internals: the offending platform value, the requested
/// version, the archive path, or the active-slot path.
#[derive(Debug, Error)]
pub enum VermanError {
    /// Host CPU architecture has no Spin release artifacts.
    #[error("{arch} is not an architecture that Spin supports")]
    UnsupportedArch {
        /// The detected architecture identifier.
        arch: String,
    },

    /// Host operating system has no Spin release artifacts.
    #[error("{os} is not an operating system that Spin supports")]
    UnsupportedOs {
        /// The detected operating system identifier.
        os: String,
    },

    /// OS and architecture are each known, but the combination has no
    /// release artifact (Windows on ARM64).
    #[error("{os} running on {arch} is not an OS/architecture combination that Spin supports")]
    UnsupportedPlatform {
        /// The detected operating system identifier.
        os: String,
        /// The detected architecture identifier.
        arch: String,
    },

    /// The release download returned a non-success HTTP status.
    ///
    /// Almost always caused by a mistyped or nonexistent version number;
    /// no error body is parsed, the status is the only signal.
    #[error("no Spin release found for version {version} (HTTP {status}); check that the version number is valid")]
    ReleaseNotFound {
        /// The requested canonical version tag.
        version: String,
        /// The HTTP status code returned by the release host.
        status: u16,
    },

    /// The downloaded archive has no regular-file entry named `spin`.
    #[error("archive {archive} does not contain a 'spin' binary entry")]
    BinaryMissing {
        /// Path to the offending archive.
        archive: PathBuf,
    },

    /// The activated binary could not be invoked for verification.
    #[error("could not run the activated spin binary: {source}; check that {active_dir} is prepended to your PATH")]
    VerifyInvocation {
        /// The active-slot directory that should be on PATH.
        active_dir: PathBuf,
        /// The underlying invocation error.
        #[source]
        source: std::io::Error,
    },

    /// The activated binary ran but did not report the requested version.
    #[error("the current spin executable does not report version {version}; check that {active_dir} is prepended to your PATH")]
    VerifyMismatch {
        /// The canonical version tag that was activated.
        version: String,
        /// The active-slot directory that should be on PATH.
        active_dir: PathBuf,
    },
}

impl VermanError {
    /// Creates a new `UnsupportedArch` error.
    #[must_use]
    pub fn unsupported_arch(arch: impl Into<String>) -> Self {
        Self::UnsupportedArch { arch: arch.into() }
    }

    /// Creates a new `UnsupportedOs` error.
    #[must_use]
    pub fn unsupported_os(os: impl Into<String>) -> Self {
        Self::UnsupportedOs { os: os.into() }
    }

    /// Creates a new `UnsupportedPlatform` error.
    #[must_use]
    pub fn unsupported_platform(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Creates a new `ReleaseNotFound` error.
    #[must_use]
    pub fn release_not_found(version: impl Into<String>, status: u16) -> Self {
        Self::ReleaseNotFound {
            version: version.into(),
            status,
        }
    }

    /// Creates a new `BinaryMissing` error.
    #[must_use]
    pub fn binary_missing(archive: PathBuf) -> Self {
        Self::BinaryMissing { archive }
    }

    /// Creates a new `VerifyInvocation` error.
    #[must_use]
    pub fn verify_invocation(active_dir: PathBuf, source: std::io::Error) -> Self {
        Self::VerifyInvocation { active_dir, source }
    }

    /// Creates a new `VerifyMismatch` error.
    #[must_use]
    pub fn verify_mismatch(version: impl Into<String>, active_dir: PathBuf) -> Self {
        Self::VerifyMismatch {
            version: version.into(),
            active_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_arch_displays_value() {
        let err = VermanError::unsupported_arch("riscv64");
        assert_eq!(
            err.to_string(),
            "riscv64 is not an architecture that Spin supports"
        );
    }

    #[test]
    fn unsupported_os_displays_value() {
        let err = VermanError::unsupported_os("freebsd");
        assert_eq!(
            err.to_string(),
            "freebsd is not an operating system that Spin supports"
        );
    }

    #[test]
    fn unsupported_platform_displays_combination() {
        let err = VermanError::unsupported_platform("windows", "aarch64");
        assert_eq!(
            err.to_string(),
            "windows running on aarch64 is not an OS/architecture combination that Spin supports"
        );
    }

    #[test]
    fn release_not_found_displays_version_and_status() {
        let err = VermanError::release_not_found("v9.9.9", 404);
        let msg = err.to_string();
        assert!(msg.contains("v9.9.9"));
        assert!(msg.contains("404"));
        assert!(msg.contains("check that the version number is valid"));
    }

    #[test]
    fn binary_missing_displays_archive_path() {
        let err = VermanError::binary_missing(PathBuf::from("/tmp/spin-v1.0.0.tar.gz"));
        assert!(err.to_string().contains("spin-v1.0.0.tar.gz"));
        assert!(err.to_string().contains("'spin' binary entry"));
    }

    #[test]
    fn verify_invocation_points_at_active_dir() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = VermanError::verify_invocation(PathBuf::from("/store/current_version"), source);
        let msg = err.to_string();
        assert!(msg.contains("current_version"));
        assert!(msg.contains("PATH"));
    }

    #[test]
    fn verify_mismatch_names_version_and_active_dir() {
        let err = VermanError::verify_mismatch("v2.2.0", PathBuf::from("/store/current_version"));
        let msg = err.to_string();
        assert!(msg.contains("v2.2.0"));
        assert!(msg.contains("current_version"));
        assert!(msg.contains("PATH"));
    }
}
