use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use super::Action;
use crate::error::ActionError;
use crate::executor::Executor;

/// Fixed-duration pause between steps, used to let background activity in the
/// cluster settle before the next check runs.
pub struct Sleep {
    duration: Duration,
}

impl Sleep {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait]
impl Action for Sleep {
    fn name(&self) -> &'static str {
        "sleep"
    }

    async fn execute(&mut self, _e: &mut Executor) -> Result<(), ActionError> {
        info!(duration_ms = self.duration.as_millis() as u64, "sleeping");
        tokio::time::sleep(self.duration).await;
        Ok(())
    }

    async fn join(&mut self, _e: &mut Executor) -> Result<(), ActionError> {
        Ok(())
    }
}
