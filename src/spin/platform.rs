//! Platform detection for release artifact selection.
//!
//! Spin publishes release archives per OS/architecture pair. This module
//! maps the host to the tags used in artifact names, failing fast on
//! combinations with no published artifact rather than attempting a
//! download that is guaranteed to 404.
//!
//! ## Support Matrix
//!
//! | | `amd64` | `aarch64` |
//! |---|---|---|
//! | Linux | yes | yes |
//! | macOS | yes | yes |
//! | Windows | yes | no |
//!
//! Windows on ARM64 is a gap in the release matrix, not a general platform
//! restriction: both values are individually known, the combination alone
//! is rejected.

use anyhow::Result;

use crate::errors::VermanError;

/// A supported OS/architecture pair, named after the release artifact tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux on `x86_64`.
    LinuxAmd64,
    /// Linux on ARM64.
    LinuxAarch64,
    /// macOS on `x86_64` (Intel).
    MacosAmd64,
    /// macOS on ARM64 (Apple Silicon).
    MacosAarch64,
    /// Windows on `x86_64`.
    WindowsAmd64,
}

impl Platform {
    /// Detects the platform of the running process.
    ///
    /// # Errors
    ///
    /// Returns an error naming the unsupported value if the host
    /// architecture, operating system, or their combination has no
    /// release artifact.
    pub fn detect() -> Result<Self> {
        Ok(classify(std::env::consts::OS, std::env::consts::ARCH)?)
    }

    /// Returns the OS tag used in artifact names.
    #[must_use = "returns the OS tag without side effects"]
    pub fn os(self) -> &'static str {
        match self {
            // TODO: decide when the static-linux artifact should be preferred
            Self::LinuxAmd64 | Self::LinuxAarch64 => "linux",
            Self::MacosAmd64 | Self::MacosAarch64 => "macos",
            Self::WindowsAmd64 => "windows",
        }
    }

    /// Returns the architecture tag used in artifact names.
    ///
    /// ARM64 is rendered as its release alias `aarch64` rather than the
    /// generic identifier.
    #[must_use = "returns the architecture tag without side effects"]
    pub fn arch(self) -> &'static str {
        match self {
            Self::LinuxAmd64 | Self::MacosAmd64 | Self::WindowsAmd64 => "amd64",
            Self::LinuxAarch64 | Self::MacosAarch64 => "aarch64",
        }
    }
}

/// Maps raw OS and architecture identifiers onto the support matrix.
///
/// The architecture is checked before the OS, so an unknown architecture
/// is reported even when the OS is also unknown.
fn classify(os: &str, arch: &str) -> Result<Platform, VermanError> {
    if !matches!(arch, "x86_64" | "aarch64") {
        return Err(VermanError::unsupported_arch(arch));
    }

    match (os, arch) {
        ("linux", "x86_64") => Ok(Platform::LinuxAmd64),
        ("linux", "aarch64") => Ok(Platform::LinuxAarch64),
        ("macos", "x86_64") => Ok(Platform::MacosAmd64),
        ("macos", "aarch64") => Ok(Platform::MacosAarch64),
        ("windows", "x86_64") => Ok(Platform::WindowsAmd64),
        ("windows", "aarch64") => Err(VermanError::unsupported_platform(os, arch)),
        _ => Err(VermanError::unsupported_os(os)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_accepts_every_supported_combination() {
        assert_eq!(classify("linux", "x86_64").unwrap(), Platform::LinuxAmd64);
        assert_eq!(classify("linux", "aarch64").unwrap(), Platform::LinuxAarch64);
        assert_eq!(classify("macos", "x86_64").unwrap(), Platform::MacosAmd64);
        assert_eq!(classify("macos", "aarch64").unwrap(), Platform::MacosAarch64);
        assert_eq!(classify("windows", "x86_64").unwrap(), Platform::WindowsAmd64);
    }

    #[test]
    fn classify_rejects_windows_on_aarch64_as_a_combination() {
        let err = classify("windows", "aarch64").unwrap_err();
        assert!(matches!(err, VermanError::UnsupportedPlatform { .. }));
        let msg = err.to_string();
        assert!(msg.contains("windows"));
        assert!(msg.contains("aarch64"));
    }

    #[test]
    fn classify_rejects_unknown_architecture() {
        let err = classify("linux", "riscv64").unwrap_err();
        assert!(matches!(err, VermanError::UnsupportedArch { .. }));
        assert!(err.to_string().contains("riscv64"));
    }

    #[test]
    fn classify_rejects_unknown_os() {
        let err = classify("freebsd", "x86_64").unwrap_err();
        assert!(matches!(err, VermanError::UnsupportedOs { .. }));
        assert!(err.to_string().contains("freebsd"));
    }

    #[test]
    fn unknown_architecture_wins_over_unknown_os() {
        let err = classify("freebsd", "riscv64").unwrap_err();
        assert!(matches!(err, VermanError::UnsupportedArch { .. }));
    }

    #[test]
    fn artifact_tags_match_release_naming() {
        assert_eq!(Platform::LinuxAmd64.os(), "linux");
        assert_eq!(Platform::LinuxAmd64.arch(), "amd64");
        assert_eq!(Platform::MacosAarch64.os(), "macos");
        assert_eq!(Platform::MacosAarch64.arch(), "aarch64");
        assert_eq!(Platform::WindowsAmd64.os(), "windows");
        assert_eq!(Platform::WindowsAmd64.arch(), "amd64");
    }

    #[test]
    fn detect_succeeds_on_supported_host() {
        #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
        assert!(matches!(Platform::detect(), Ok(Platform::LinuxAmd64)));

        #[cfg(all(target_os = "macos", target_arch = "aarch64"))]
        assert!(matches!(Platform::detect(), Ok(Platform::MacosAarch64)));

        #[cfg(all(target_os = "windows", target_arch = "x86_64"))]
        assert!(matches!(Platform::detect(), Ok(Platform::WindowsAmd64)));
    }
}
