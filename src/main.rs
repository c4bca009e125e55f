use log::info;
use std::sync::Arc;

use task_fanout::console::{Console, StdoutConsole};
use task_fanout::{Orchestrator, Scenario};

// One thread is enough: the tasks only wait on timers.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let console: Arc<dyn Console> = Arc::new(StdoutConsole::new());
    console.log("test");

    let orchestrator = Orchestrator::new(console.clone());
    match orchestrator.run(&Scenario::failing_pair()).await {
        Ok(outcome) => {
            info!(
                "Run finished (success: {}), waiting on {} detached task(s)",
                outcome.is_success(),
                outcome.detached().len()
            );
            outcome.settle_detached().await;
        }
        Err(e) => console.log(&format!("errror {}", e)),
    }
}
