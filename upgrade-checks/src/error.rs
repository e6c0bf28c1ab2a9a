use thiserror::Error;

use crate::resource::ResourceKind;

#[derive(Error, Debug)]
pub enum VersionError {
    /// An explicit tag that does not match the version grammar. Surfaced
    /// immediately, never retried.
    #[error("malformed version tag '{tag}': {source}")]
    Malformed {
        tag: String,
        #[source]
        source: semver::Error,
    },

    /// The build's own manifest carries an unusable version. This is a broken
    /// environment, not a test failure.
    #[error("build manifest version is unusable: {0}")]
    BuildManifest(#[source] semver::Error),
}

/// Failure raised by the external resource layer while swapping the live
/// definition. Propagated through the step unchanged; this layer adds no
/// retry logic of its own.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ReplaceError(#[from] anyhow::Error);

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("version resolution failed: {0}")]
    Version(#[from] VersionError),

    /// The test application does not contain exactly one resource of the
    /// targeted kind. A defect in the test setup; fatal to the scenario.
    #[error("expected exactly one {kind} resource, found {count}")]
    ResourceCardinality { kind: ResourceKind, count: usize },

    #[error("replace operation failed: {0}")]
    Replace(#[from] ReplaceError),
}
