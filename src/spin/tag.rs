//! Canonical version tags.
//!
//! Release tags always carry a leading `v` marker (`v2.1.0`), but users
//! habitually type the bare number (`2.1.0`). Normalization happens exactly
//! once, here, when raw input crosses into the core: every other module
//! only ever sees a [`VersionTag`], so directory names, artifact names,
//! and comparisons all agree.

use std::fmt;

/// A canonical release tag with the leading `v` marker.
///
/// The tag is otherwise opaque: nothing parses or orders it, it only names
/// a release on the host and a directory in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag(String);

impl VersionTag {
    /// Creates a canonical tag from raw user input.
    ///
    /// `2.1.0` and `v2.1.0` both produce the tag `v2.1.0`.
    #[must_use = "returns the canonical tag without side effects"]
    pub fn new(raw: &str) -> Self {
        if raw.starts_with('v') {
            Self(raw.to_string())
        } else {
            Self(format!("v{raw}"))
        }
    }

    /// Returns the canonical tag string.
    #[must_use = "returns the tag string without side effects"]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the version number without the leading `v` marker.
    ///
    /// Used when matching against the binary's own `--version` output,
    /// which reports the bare number.
    #[must_use = "returns the bare version number without side effects"]
    pub fn number(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
