use std::sync::Arc;
use tokio::time::Instant;

use task_fanout::console::StdoutConsole;
use task_fanout::{Orchestrator, OrchestratorOptions, Scenario, WaitMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();
    println!("Task 1 succeeds after 3s, task 2 fails after 1s.");

    let scenario = Scenario::failing_pair();

    for mode in [WaitMode::Sequential, WaitMode::FailFast] {
        let orchestrator = Orchestrator::new(Arc::new(StdoutConsole::new()))
            .with_options(OrchestratorOptions::new().with_wait_mode(mode));

        let start = Instant::now();
        let outcome = orchestrator.run(&scenario).await?;
        println!("{:?} settled after {:?}", mode, start.elapsed());

        // Let the slow task finish so the next run starts clean.
        outcome.settle_detached().await;
    }

    Ok(())
}
