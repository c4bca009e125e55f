use futures::future::try_join_all;

use crate::task::{TaskError, TaskHandle};

/// Waits for every handle, settling early on the first failure.
///
/// Results come back in the order of `handles`. Tasks that are still running
/// when a failure short-circuits the wait keep running.
pub async fn join_fail_fast(handles: &[TaskHandle]) -> Result<Vec<String>, TaskError> {
    try_join_all(handles.iter().map(|handle| handle.settled())).await
}

/// Awaits each handle in order; a failure is only seen once every earlier
/// task has settled.
pub async fn join_sequential(handles: &[TaskHandle]) -> Result<Vec<String>, TaskError> {
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.settled().await?);
    }
    Ok(results)
}
