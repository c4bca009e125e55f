/// How the orchestrator waits on the tasks it launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitMode {
    /// Settle once every task succeeded, or as soon as any task fails.
    #[default]
    FailFast,
    /// Await each task in launch order, stopping at the first failure seen.
    Sequential,
}

#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    /// Aggregation strategy for the launched tasks
    pub wait_mode: WaitMode,
    /// Log a diagnostic when a task settles after the aggregate already did
    pub report_late_results: bool,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            wait_mode: WaitMode::FailFast,
            report_late_results: true,
        }
    }
}

impl OrchestratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wait_mode(mut self, value: WaitMode) -> Self {
        self.wait_mode = value;
        self
    }

    pub fn with_report_late_results(mut self, value: bool) -> Self {
        self.report_late_results = value;
        self
    }
}
