use async_trait::async_trait;
use std::time::Duration;

use super::{spawn, Task, TaskError, TaskHandle, TaskId, TaskOutcome};

/// Simulated work: sleeps for a fixed delay, then succeeds or fails.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedTask {
    id: TaskId,
    delay: Duration,
    should_fail: bool,
}

impl DelayedTask {
    pub fn new(id: impl Into<TaskId>, delay: Duration, should_fail: bool) -> Self {
        Self {
            id: id.into(),
            delay,
            should_fail,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn should_fail(&self) -> bool {
        self.should_fail
    }
}

#[async_trait]
impl Task for DelayedTask {
    fn id(&self) -> &TaskId {
        &self.id
    }

    async fn execute(&self) -> TaskOutcome {
        tokio::time::sleep(self.delay).await;
        if self.should_fail {
            Err(TaskError::Failed {
                id: self.id.clone(),
            })
        } else {
            Ok(format!("Task {} succeed!", self.id))
        }
    }
}

/// Starts a delayed task right away and hands back its handle.
///
/// # Panics
///
/// Panics if called from outside of a tokio runtime.
pub fn delayed(id: impl Into<TaskId>, delay: Duration, should_fail: bool) -> TaskHandle {
    spawn(DelayedTask::new(id, delay, should_fail))
}
