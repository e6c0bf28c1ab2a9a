use envconfig::Envconfig;

use crate::error::VersionError;
use crate::version::{self, Version};

/// Ambient harness configuration, read from the environment by the embedding
/// scenario runner.
#[derive(Envconfig, Clone, Debug)]
pub struct HarnessConfig {
    /// Default log directive when RUST_LOG is unset.
    /// Env: UPGRADE_CHECKS_LOG
    #[envconfig(from = "UPGRADE_CHECKS_LOG", default = "info")]
    pub log: String,

    /// Version tag the scenario starts from. When unset, the executor starts
    /// at the build's own version.
    /// Env: UPGRADE_CHECKS_INITIAL_VERSION
    #[envconfig(from = "UPGRADE_CHECKS_INITIAL_VERSION")]
    pub initial_version: Option<String>,
}

impl HarnessConfig {
    /// Resolves the version a fresh executor should start from.
    pub fn resolve_initial_version(&self) -> Result<Version, VersionError> {
        version::resolve(self.initial_version.as_deref())
    }
}
