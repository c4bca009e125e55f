use thiserror::Error;

use super::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task {id} failed!")]
    Failed { id: TaskId },
    /// The task was dropped before it settled, e.g. it panicked or the
    /// runtime shut down underneath it.
    #[error("Task {id} was lost before it settled")]
    Lost { id: TaskId },
}

impl TaskError {
    pub fn task_id(&self) -> &TaskId {
        match self {
            TaskError::Failed { id } | TaskError::Lost { id } => id,
        }
    }
}
