use async_trait::async_trait;

pub mod delayed;
mod error;
mod handle;
mod id;
mod state;

#[cfg(test)]
mod tests;

pub use delayed::{delayed, DelayedTask};
pub use error::TaskError;
pub use handle::{spawn, Settlement, TaskHandle};
pub use id::TaskId;
pub use state::TaskState;

/// What a task settles with: its success message or the reason it failed.
pub type TaskOutcome = Result<String, TaskError>;

#[async_trait]
pub trait Task: Send + Sync {
    fn id(&self) -> &TaskId;

    async fn execute(&self) -> TaskOutcome;
}
