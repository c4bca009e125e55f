use log::{debug, info, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;

use super::aggregate::{join_fail_fast, join_sequential};
use super::error::{CaughtError, ScenarioError};
use super::options::{OrchestratorOptions, WaitMode};
use super::outcome::{LateResultWatchers, RunOutcome};
use super::scenario::Scenario;
use crate::console::Console;
use crate::task::{spawn, TaskHandle};

pub struct Orchestrator {
    /// Where user-facing output goes
    console: Arc<dyn Console>,
    options: OrchestratorOptions,
}

impl Orchestrator {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self {
            console,
            options: OrchestratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: OrchestratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &OrchestratorOptions {
        &self.options
    }

    /// Launches every task of `scenario` at once and waits on them.
    ///
    /// Task failures never surface as `Err`: the first one is printed and
    /// returned inside [`RunOutcome::Caught`]. Only an invalid scenario is an
    /// error, and in that case nothing is launched.
    pub async fn run(&self, scenario: &Scenario) -> Result<RunOutcome, ScenarioError> {
        let tasks = scenario.build_tasks()?;

        info!(
            "Running scenario '{}' with {} tasks ({:?})",
            scenario.name,
            tasks.len(),
            self.options.wait_mode
        );

        let handles: Vec<TaskHandle> = tasks.into_iter().map(spawn).collect();

        let aggregate = match self.options.wait_mode {
            WaitMode::FailFast => join_fail_fast(&handles).await,
            WaitMode::Sequential => join_sequential(&handles).await,
        };

        match aggregate {
            Ok(results) => {
                debug!("Scenario '{}': all tasks succeeded", scenario.name);
                if !results.is_empty() {
                    self.console.log(&results.join(" "));
                }
                Ok(RunOutcome::AllSucceeded { results })
            }
            Err(source) => {
                let error = CaughtError::new(source);
                self.console.log(&error.to_string());

                let detached: Vec<TaskHandle> =
                    handles.into_iter().filter(|h| !h.is_settled()).collect();
                debug!(
                    "Scenario '{}': caught failure of task '{}', {} task(s) still running",
                    scenario.name,
                    error.task_error().task_id(),
                    detached.len()
                );

                let watchers = if self.options.report_late_results {
                    detached.iter().cloned().map(watch_late_result).collect()
                } else {
                    Vec::new()
                };

                Ok(RunOutcome::Caught {
                    error,
                    detached,
                    watchers: LateResultWatchers::new(watchers),
                })
            }
        }
    }
}

fn watch_late_result(handle: TaskHandle) -> JoinHandle<()> {
    tokio::spawn(async move {
        match handle.settled().await {
            Ok(message) => debug!(
                "Task '{}' settled after the aggregate; result ignored: {}",
                handle.id(),
                message
            ),
            Err(e) => warn!(
                "Task '{}' settled after the aggregate; error ignored: {}",
                handle.id(),
                e
            ),
        }
    })
}
