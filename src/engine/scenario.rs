use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ScenarioError;
use crate::task::{DelayedTask, TaskId};

/// One simulated task of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: TaskId,
    pub delay_secs: f64,
    #[serde(default)]
    pub should_fail: bool,
}

impl TaskSpec {
    /// Rejects negative, non-finite and out-of-range delays.
    pub fn build(&self) -> Result<DelayedTask, ScenarioError> {
        let delay = Duration::try_from_secs_f64(self.delay_secs).map_err(|_| {
            ScenarioError::InvalidDelay {
                id: self.id.clone(),
                delay_secs: self.delay_secs,
            }
        })?;
        Ok(DelayedTask::new(self.id.clone(), delay, self.should_fail))
    }
}

/// The set of tasks a single orchestration run launches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_task(
        mut self,
        id: impl Into<TaskId>,
        delay_secs: f64,
        should_fail: bool,
    ) -> Self {
        self.tasks.push(TaskSpec {
            id: id.into(),
            delay_secs,
            should_fail,
        });
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Task 1 succeeds after 3s, task 2 fails after 1s.
    pub fn failing_pair() -> Self {
        Self::new("failing_pair")
            .with_task(1, 3.0, false)
            .with_task(2, 1.0, true)
    }

    /// Tasks 1 and 2 both succeed after 1s.
    pub fn all_succeed() -> Self {
        Self::new("all_succeed")
            .with_task(1, 1.0, false)
            .with_task(2, 1.0, false)
    }

    /// Validates every task up front so nothing is launched for a bad scenario.
    pub fn build_tasks(&self) -> Result<Vec<DelayedTask>, ScenarioError> {
        self.tasks.iter().map(TaskSpec::build).collect()
    }
}
