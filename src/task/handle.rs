use log::debug;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

use super::{Task, TaskError, TaskId, TaskOutcome, TaskState};

/// Where a launched task currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Pending,
    Settled {
        outcome: TaskOutcome,
        /// Time between launch and settlement, on the runtime clock.
        after: Duration,
    },
}

impl Settlement {
    pub fn state(&self) -> TaskState {
        match self {
            Settlement::Pending => TaskState::Pending,
            Settlement::Settled { outcome: Ok(_), .. } => TaskState::Succeeded,
            Settlement::Settled { outcome: Err(_), .. } => TaskState::Failed,
        }
    }

    pub fn outcome(&self) -> Option<&TaskOutcome> {
        match self {
            Settlement::Pending => None,
            Settlement::Settled { outcome, .. } => Some(outcome),
        }
    }
}

/// Handle to a task that is already running.
///
/// Dropping every handle does not stop the task; it keeps running until it
/// settles and its outcome is simply never observed.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    settlement: watch::Receiver<Settlement>,
}

impl TaskHandle {
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn state(&self) -> TaskState {
        self.settlement.borrow().state()
    }

    pub fn settlement(&self) -> Settlement {
        self.settlement.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        self.state().is_terminal()
    }

    /// Waits until the task settles and returns its outcome. Resolves
    /// immediately when the task has already settled.
    pub async fn settled(&self) -> TaskOutcome {
        let mut rx = self.settlement.clone();
        loop {
            let current = rx.borrow_and_update().clone();
            if let Settlement::Settled { outcome, .. } = current {
                return outcome;
            }

            if rx.changed().await.is_err() {
                // Sender is gone; it may still have published right before.
                let last = rx.borrow().clone();
                return match last {
                    Settlement::Settled { outcome, .. } => outcome,
                    Settlement::Pending => Err(TaskError::Lost {
                        id: self.id.clone(),
                    }),
                };
            }
        }
    }
}

/// Launches `task` on the current tokio runtime and returns its handle.
///
/// # Panics
///
/// Panics if called from outside of a tokio runtime.
pub fn spawn<T: Task + 'static>(task: T) -> TaskHandle {
    let id = task.id().clone();
    let (tx, rx) = watch::channel(Settlement::Pending);
    let mut publisher = Publisher {
        id: id.clone(),
        tx,
        started: Instant::now(),
        published: false,
    };

    debug!("Task '{}' launched", id);

    tokio::spawn(async move {
        let outcome = task.execute().await;
        publisher.publish(outcome);
    });

    TaskHandle { id, settlement: rx }
}

/// Owns the sending side of a task's settlement. If the task is dropped
/// before it publishes (panic, runtime shutdown), the drop settles it as lost.
struct Publisher {
    id: TaskId,
    tx: watch::Sender<Settlement>,
    started: Instant,
    published: bool,
}

impl Publisher {
    fn publish(&mut self, outcome: TaskOutcome) {
        // A task settles exactly once.
        if self.published {
            return;
        }
        self.published = true;

        let after = self.started.elapsed();
        match &outcome {
            Ok(message) => debug!(
                "Task '{}' succeeded after {:?}: {}",
                self.id, after, message
            ),
            Err(e) => debug!("Task '{}' failed after {:?}: {}", self.id, after, e),
        }

        self.tx.send_replace(Settlement::Settled { outcome, after });
    }
}

impl Drop for Publisher {
    fn drop(&mut self) {
        if !self.published {
            let id = self.id.clone();
            self.publish(Err(TaskError::Lost { id }));
        }
    }
}
