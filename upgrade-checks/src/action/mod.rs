//! The two-phase step contract driven by the scenario runner.

mod replace;
mod sleep;

pub use replace::ReplaceStatefulWorkload;
pub use sleep::Sleep;

use async_trait::async_trait;

use crate::error::ActionError;
use crate::executor::Executor;

/// One orchestration step of a scenario.
///
/// The runner calls `execute` on each action in order; `join` may be called
/// later, possibly after other actions have had their `execute` called, and
/// blocks until any background work started by `execute` has completed.
/// Fully synchronous actions implement `join` as an explicit immediate no-op
/// so the runner's calling convention is uniform across variants.
///
/// Actions borrow the executor only for the duration of each call and keep no
/// reference to it in between.
#[async_trait]
pub trait Action: Send {
    /// Stable identifier used when reporting which step a failure came from.
    fn name(&self) -> &'static str;

    async fn execute(&mut self, e: &mut Executor) -> Result<(), ActionError>;

    async fn join(&mut self, e: &mut Executor) -> Result<(), ActionError>;
}
