//! # Task Fanout
//!
//! Launches simulated asynchronous tasks concurrently and contrasts two ways
//! of waiting on them: awaiting each one in turn, or fanning out and failing
//! fast on the first error.
//!
//! ## Features
//!
//! - Delayed tasks that succeed or fail after a fixed timeout
//! - Queryable handles to tasks that are already running
//! - Fail-fast and sequential aggregate waits
//! - Failures caught at the orchestrator and returned as values
//! - Scenarios defined in code or loaded from JSON
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use task_fanout::console::MemoryConsole;
//! use task_fanout::{Orchestrator, RunOutcome, Scenario};
//!
//! #[tokio::main]
//! async fn main() {
//!     let console = MemoryConsole::new();
//!     let orchestrator = Orchestrator::new(Arc::new(console.clone()));
//!
//!     let scenario = Scenario::new("quick")
//!         .with_task(1, 0.03, false)
//!         .with_task(2, 0.01, true);
//!
//!     let outcome = orchestrator.run(&scenario).await.unwrap();
//!     assert!(matches!(outcome, RunOutcome::Caught { .. }));
//!     assert_eq!(console.lines(), vec!["Error: Task 2 failed!"]);
//! }
//! ```
//!
//! ## License
//!
//! Licensed under the MIT license. See the [LICENSE](LICENSE) file for details.

pub mod console;
pub mod engine;
pub mod task;

pub use console::Console;
pub use engine::{CaughtError, Orchestrator, OrchestratorOptions, RunOutcome, Scenario, WaitMode};
pub use task::{delayed, Task, TaskError, TaskHandle, TaskId, TaskState};
