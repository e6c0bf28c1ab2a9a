//! Target-version resolution for upgrade steps.

use std::fmt;

use crate::error::VersionError;

/// A totally-ordered build/release identifier.
///
/// Wraps a semver version so that explicitly tagged builds and the version
/// this harness was built against compare under the same ordering. Values are
/// immutable; an upgrade step only ever replaces the one recorded on the
/// executor.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    /// Parses an explicit release or pre-release tag. A leading `v` is
    /// tolerated (`v0.27.0` and `0.27.0` are the same version).
    pub fn parse(tag: &str) -> Result<Self, VersionError> {
        let bare = tag.strip_prefix('v').unwrap_or(tag);
        semver::Version::parse(bare).map(Version).map_err(|source| {
            VersionError::Malformed {
                tag: tag.to_string(),
                source,
            }
        })
    }

    /// The version this harness itself was built against, taken from the
    /// crate manifest. Failure here means a broken build environment, not a
    /// failing test.
    pub fn from_build() -> Result<Self, VersionError> {
        semver::Version::parse(env!("CARGO_PKG_VERSION"))
            .map(Version)
            .map_err(VersionError::BuildManifest)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Resolves the target version for a step: an explicit, non-empty tag always
/// wins; otherwise the build's own version is used. Pure apart from reading
/// the build manifest baked in at compile time.
pub fn resolve(tag: Option<&str>) -> Result<Version, VersionError> {
    match tag {
        Some(tag) if !tag.is_empty() => Version::parse(tag),
        _ => Version::from_build(),
    }
}
