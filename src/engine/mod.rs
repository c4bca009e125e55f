mod aggregate;
mod error;
mod options;
mod orchestrator;
mod outcome;
mod scenario;

pub use aggregate::{join_fail_fast, join_sequential};
pub use error::{CaughtError, ScenarioError};
pub use options::{OrchestratorOptions, WaitMode};
pub use orchestrator::Orchestrator;
pub use outcome::{LateResultWatchers, RunOutcome};
pub use scenario::{Scenario, TaskSpec};
