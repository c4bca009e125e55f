use thiserror::Error;

use crate::task::{TaskError, TaskId};

/// The first task failure, caught by the orchestrator and handed back as a
/// value instead of being propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {source}")]
pub struct CaughtError {
    #[source]
    source: TaskError,
}

impl CaughtError {
    pub fn new(source: TaskError) -> Self {
        Self { source }
    }

    pub fn task_error(&self) -> &TaskError {
        &self.source
    }
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid scenario definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("task '{id}' has an invalid delay of {delay_secs} seconds")]
    InvalidDelay { id: TaskId, delay_secs: f64 },
}
