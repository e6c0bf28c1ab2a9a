//! Per-scenario execution context.

use crate::resource::ResourceSet;
use crate::version::Version;

/// Handle to the test application under harness control.
///
/// Implemented by the embedding layer against a real or simulated cluster;
/// the harness only needs the live resource set reachable through it.
pub trait ClusterApplication: Send {
    fn resources(&mut self) -> &mut ResourceSet;
}

/// Shared context for one scenario run.
///
/// Created once per scenario and lent mutably to each action for the duration
/// of its `execute`/`join` calls. The runner drives actions from a single
/// logical thread, so mutation follows a single-writer-at-a-time discipline;
/// there is no internal locking, and parallelizing actions would require
/// adding one.
pub struct Executor {
    current_deployed_version: Version,
    application: Box<dyn ClusterApplication>,
}

impl Executor {
    pub fn new(
        initial_version: Version,
        application: Box<dyn ClusterApplication>,
    ) -> Self {
        Self {
            current_deployed_version: initial_version,
            application,
        }
    }

    /// The version last known to be running, as opposed to whatever the
    /// harness itself was built against.
    pub fn current_deployed_version(&self) -> &Version {
        &self.current_deployed_version
    }

    /// Records a successfully deployed version. Callers must only do this
    /// after the cluster has accepted the new definition, so that every later
    /// action observes an already-replaced state.
    pub fn record_deployed_version(&mut self, version: Version) {
        self.current_deployed_version = version;
    }

    pub fn application(&mut self) -> &mut dyn ClusterApplication {
        self.application.as_mut()
    }
}
