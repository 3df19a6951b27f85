//! Manifest list reference parsing.
//!
//! Parses references like `quay.io/org/image:latest` into a repository
//! plus tag. The pair names a manifest list both in the external
//! tool's local store and in the remote registry.

use crate::error::{ManifestError, Result};

/// Default tag when none is specified.
const DEFAULT_TAG: &str = "latest";

/// A manifest list name: registry repository plus tag.
///
/// Both components are opaque to this crate; they are passed through
/// to the external tool unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRef {
    /// Repository (e.g., "quay.io/org/image")
    pub repository: String,
    /// Tag (e.g., "latest", "v1.2.0")
    pub tag: String,
}

impl ManifestRef {
    /// Build a reference from an already-split repository and tag.
    pub fn new(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            tag: tag.into(),
        }
    }

    /// Parse a `REPO[:TAG]` reference string.
    ///
    /// The tag is split on the last colon after the last slash, so
    /// registry ports are kept with the repository:
    /// - `quay.io/org/image:v1` → ("quay.io/org/image", "v1")
    /// - `reg.example.com:5000/org/image` → ("reg.example.com:5000/org/image", "latest")
    pub fn parse(reference: &str) -> Result<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ManifestError::InvalidReference(
                "empty manifest reference".to_string(),
            ));
        }

        let tag_start = match reference.rfind('/') {
            Some(slash_pos) => reference[slash_pos + 1..]
                .rfind(':')
                .map(|p| slash_pos + 1 + p),
            None => reference.rfind(':'),
        };

        let (repository, tag) = match tag_start {
            Some(colon_pos) => {
                let tag = &reference[colon_pos + 1..];
                if tag.is_empty() {
                    return Err(ManifestError::InvalidReference(format!(
                        "empty tag in reference '{}'",
                        reference
                    )));
                }
                (&reference[..colon_pos], tag)
            }
            None => (reference, DEFAULT_TAG),
        };

        if repository.is_empty() {
            return Err(ManifestError::InvalidReference(format!(
                "empty repository in reference '{}'",
                reference
            )));
        }

        Ok(Self::new(repository, tag))
    }
}

impl std::fmt::Display for ManifestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}
