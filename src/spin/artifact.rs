//! Release artifact naming and download URLs.
//!
//! Artifact names are a deterministic function of version tag and platform,
//! used both for the download URL and the local cache filename. The release
//! host defaults to the upstream GitHub releases endpoint and can be
//! overridden via the `SPIN_VERMAN_RELEASE_HOST` environment variable for
//! testing.

use crate::spin::platform::Platform;
use crate::spin::tag::VersionTag;

/// Environment variable to override the default release host.
pub const RELEASE_HOST_ENV: &str = "SPIN_VERMAN_RELEASE_HOST";

/// Default host serving release archives.
const DEFAULT_RELEASE_HOST: &str = "https://github.com/fermyon/spin/releases/download";

/// Returns the archive filename for a version on a platform.
///
/// Stable and reproducible: `spin-v2.1.0-linux-amd64.tar.gz`.
#[must_use = "returns the artifact name without side effects"]
pub fn artifact_name(tag: &VersionTag, platform: Platform) -> String {
    format!(
        "spin-{tag}-{}-{}.tar.gz",
        platform.os(),
        platform.arch()
    )
}

/// Returns the download URL for an artifact: `<host>/<tag>/<artifact>`.
#[must_use = "returns the URL without side effects"]
pub fn artifact_url(tag: &VersionTag, artifact: &str) -> String {
    format!("{}/{tag}/{artifact}", release_host())
}

/// Returns the release host, honoring the environment override.
fn release_host() -> String {
    std::env::var(RELEASE_HOST_ENV)
        .ok()
        .filter(|server| !server.is_empty())
        .map_or_else(
            || DEFAULT_RELEASE_HOST.to_string(),
            |server| server.trim_end_matches('/').to_string(),
        )
}
