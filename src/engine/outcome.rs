use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::error::CaughtError;
use crate::task::{TaskHandle, TaskOutcome};

/// Background tasks logging results that arrive after the aggregate settled.
/// Clones share the same set; each watcher is awaited at most once.
#[derive(Debug, Clone, Default)]
pub struct LateResultWatchers(Arc<Mutex<Vec<JoinHandle<()>>>>);

impl LateResultWatchers {
    pub(crate) fn new(watchers: Vec<JoinHandle<()>>) -> Self {
        Self(Arc::new(Mutex::new(watchers)))
    }

    pub async fn count(&self) -> usize {
        self.0.lock().await.len()
    }

    async fn finish(&self) {
        let watchers = std::mem::take(&mut *self.0.lock().await);
        // A watcher only logs; a failed join has nothing to report back.
        join_all(watchers).await;
    }
}

/// What an orchestration run ended with.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Every task succeeded; messages are in launch order.
    AllSucceeded { results: Vec<String> },
    /// A task failed and the failure was caught.
    Caught {
        error: CaughtError,
        /// Tasks still running when the aggregate settled.
        detached: Vec<TaskHandle>,
        /// Empty when late-result reporting is off.
        watchers: LateResultWatchers,
    },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::AllSucceeded { .. })
    }

    pub fn results(&self) -> Option<&[String]> {
        match self {
            RunOutcome::AllSucceeded { results } => Some(results.as_slice()),
            RunOutcome::Caught { .. } => None,
        }
    }

    pub fn caught(&self) -> Option<&CaughtError> {
        match self {
            RunOutcome::AllSucceeded { .. } => None,
            RunOutcome::Caught { error, .. } => Some(error),
        }
    }

    pub fn detached(&self) -> &[TaskHandle] {
        match self {
            RunOutcome::AllSucceeded { .. } => &[],
            RunOutcome::Caught { detached, .. } => detached.as_slice(),
        }
    }

    /// Lets the detached tasks run to completion and returns their outcomes,
    /// which played no part in the run's result. Also waits for their
    /// late-result diagnostics to be logged.
    pub async fn settle_detached(&self) -> Vec<TaskOutcome> {
        let outcomes = join_all(self.detached().iter().map(|handle| handle.settled())).await;
        if let RunOutcome::Caught { watchers, .. } = self {
            watchers.finish().await;
        }
        outcomes
    }
}
