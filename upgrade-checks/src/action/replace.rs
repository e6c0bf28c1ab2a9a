use async_trait::async_trait;
use tracing::info;

use super::Action;
use crate::error::ActionError;
use crate::executor::Executor;
use crate::version;

/// Rolling replacement of the primary stateful workload with a different
/// build version.
///
/// Resolves the target version (explicit tag, or the build's own version when
/// none is given), swaps the tag on the single stateful workload in the test
/// application, re-creates the live definition through the resource layer's
/// `replace`, and records the new version on the executor. The whole step is
/// synchronous: by the time `execute` returns, the replacement has been
/// durably requested of the cluster and `join` has nothing left to wait for.
pub struct ReplaceStatefulWorkload {
    new_tag: Option<String>,
}

impl ReplaceStatefulWorkload {
    /// Replace with an explicitly tagged build.
    pub fn to_tag(tag: impl Into<String>) -> Self {
        Self {
            new_tag: Some(tag.into()),
        }
    }

    /// Replace with the version this harness was built against.
    pub fn to_build_version() -> Self {
        Self { new_tag: None }
    }
}

#[async_trait]
impl Action for ReplaceStatefulWorkload {
    fn name(&self) -> &'static str {
        "replace-stateful-workload"
    }

    async fn execute(&mut self, e: &mut Executor) -> Result<(), ActionError> {
        let target = version::resolve(self.new_tag.as_deref())?;
        info!(
            from = %e.current_deployed_version(),
            to = %target,
            "replacing stateful workload"
        );

        let workload = e.application().resources().sole_stateful_workload()?;
        workload.set_tag(Some(target.to_string()));
        workload.replace().await?;

        // Only after the cluster accepted the new definition; later actions
        // must observe an already-replaced state.
        e.record_deployed_version(target);
        Ok(())
    }

    async fn join(&mut self, _e: &mut Executor) -> Result<(), ActionError> {
        // execute is blocking already
        Ok(())
    }
}
