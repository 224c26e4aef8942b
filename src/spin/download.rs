//! Idempotent release archive download.
//!
//! The fetch is gated on the store: a version whose directory already
//! exists performs zero network I/O, which is what makes repeated `get`
//! calls for the same version free. Otherwise the archive is streamed
//! chunk-by-chunk to its cache path, overwriting any stale partial file a
//! previous failed attempt may have left behind.
//!
//! There is deliberately no retry and no request timeout: a failed fetch
//! is surfaced as-is, and a non-success status means the requested version
//! does not exist on the release host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::errors::VermanError;
use crate::spin::artifact;
use crate::spin::platform::Platform;
use crate::spin::store::Store;
use crate::spin::tag::VersionTag;

/// Fetches the release archive for a version, unless already installed.
///
/// Returns `Ok(None)` when the version directory already exists (the
/// caller skips extraction entirely), or `Ok(Some(path))` with the
/// downloaded archive path. The installed-version state is never mutated
/// here; a version directory only appears once extraction completes.
///
/// # Errors
///
/// Returns an error if:
/// - The release host cannot be reached
/// - The host responds with a non-success status (unknown version)
/// - The archive file cannot be written
pub async fn fetch(
    store: &Store,
    tag: &VersionTag,
    platform: Platform,
) -> Result<Option<PathBuf>> {
    if store.is_installed(tag) {
        return Ok(None);
    }

    println!("Spin version {tag} not found locally. Retrieving from source...");

    let artifact = artifact::artifact_name(tag, platform);
    let url = artifact::artifact_url(tag, &artifact);

    let client = reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to connect to {url}"))?;

    if !response.status().is_success() {
        return Err(
            VermanError::release_not_found(tag.as_str(), response.status().as_u16()).into(),
        );
    }

    let dest = store.archive_path(&artifact);
    let mut file = tokio::fs::File::create(&dest)
        .await
        .with_context(|| format!("Failed to create file: {}", dest.display()))?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.with_context(|| format!("Failed to read chunk from {url}"))?;
        file.write_all(&chunk)
            .await
            .with_context(|| format!("Failed to write to {}", dest.display()))?;
    }

    file.flush()
        .await
        .with_context(|| format!("Failed to flush {}", dest.display()))?;

    Ok(Some(dest))
}
