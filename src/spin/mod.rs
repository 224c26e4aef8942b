//! Spin version management core.
//!
//! This module owns the acquisition-and-activation pipeline for Spin CLI
//! binaries: resolving the release artifact for the host platform,
//! downloading it at most once, extracting the binary into the
//! version-indexed store, and switching the active version.
//!
//! ## Module Structure
//!
//! - [`tag`] - Canonical version tags (`v`-prefixed)
//! - [`platform`] - OS and architecture detection
//! - [`store`] - Version store directory layout
//! - [`artifact`] - Release artifact names and URLs
//! - [`download`] - Idempotent archive download
//! - [`archive`] - Single-entry tar.gz extraction
//! - [`activate`] - Active-slot link switching and verification
//! - [`installer`] - The composed acquire / acquire-and-activate pipeline

pub mod activate;
pub mod archive;
pub mod artifact;
pub mod download;
pub mod installer;
pub mod platform;
pub mod store;
pub mod tag;

pub use activate::SpinCli;
pub use store::Store;
pub use tag::VersionTag;
