use crate::task::{
    delayed, spawn, Settlement, Task, TaskError, TaskId, TaskOutcome, TaskState,
};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{sleep, Instant};

#[test]
fn test_task_id_from_number_and_text() {
    assert_eq!(TaskId::from(2), TaskId::new("2"));
    assert_eq!(TaskId::from("ingest").as_str(), "ingest");
    assert_eq!(TaskId::from(String::from("x")).to_string(), "x");
}

#[test]
fn test_task_id_deserializes_from_number_or_string() {
    let ids: Vec<TaskId> = serde_json::from_str(r#"[1, "two"]"#).unwrap();
    assert_eq!(ids, vec![TaskId::from(1), TaskId::from("two")]);

    let json = serde_json::to_string(&TaskId::from(7)).unwrap();
    assert_eq!(json, r#""7""#);
}

#[test]
fn test_task_id_deserializes_negative_and_fractional_numbers() {
    let ids: Vec<TaskId> = serde_json::from_str("[-1, 1.5, 0]").unwrap();
    assert_eq!(ids[0].as_str(), "-1");
    assert_eq!(ids[1].as_str(), "1.5");
    assert_eq!(ids[2], TaskId::from(0));
    assert_eq!(ids[0], TaskId::from(-1));
}

#[test]
fn test_task_error_messages() {
    let failed = TaskError::Failed { id: 2.into() };
    assert_eq!(failed.to_string(), "Task 2 failed!");
    assert_eq!(failed.task_id(), &TaskId::from(2));

    let lost = TaskError::Lost { id: 5.into() };
    assert_eq!(lost.to_string(), "Task 5 was lost before it settled");
}

#[tokio::test(start_paused = true)]
async fn test_delayed_task_succeeds_with_message() {
    let handle = delayed(1, Duration::from_secs(3), false);
    assert_eq!(handle.settled().await, Ok("Task 1 succeed!".to_string()));
    assert_eq!(handle.state(), TaskState::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn test_delayed_task_fails_with_error() {
    let handle = delayed(2, Duration::from_secs(1), true);
    let err = handle.settled().await.unwrap_err();
    assert_eq!(err, TaskError::Failed { id: 2.into() });
    assert_eq!(err.to_string(), "Task 2 failed!");
    assert_eq!(handle.state(), TaskState::Failed);
}

#[tokio::test(start_paused = true)]
async fn test_task_does_not_settle_before_its_delay() {
    let handle = delayed(1, Duration::from_secs(2), false);

    sleep(Duration::from_millis(1999)).await;
    assert_eq!(handle.state(), TaskState::Pending);
    assert_eq!(handle.settlement(), Settlement::Pending);

    handle.settled().await.unwrap();
    assert!(handle.is_settled());
}

#[tokio::test(start_paused = true)]
async fn test_settlement_time_is_never_below_delay() {
    let delays = [
        Duration::ZERO,
        Duration::from_millis(250),
        Duration::from_secs(1),
        Duration::from_secs(3),
    ];

    for (n, delay) in delays.iter().enumerate() {
        for should_fail in [false, true] {
            let start = Instant::now();
            let handle = delayed(n as u32, *delay, should_fail);
            let outcome = handle.settled().await;

            assert!(start.elapsed() >= *delay);
            assert_eq!(outcome.is_err(), should_fail);
            match handle.settlement() {
                Settlement::Settled { after, .. } => assert!(after >= *delay),
                Settlement::Pending => panic!("task {} should have settled", n),
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_clones_observe_the_same_single_settlement() {
    let handle = delayed(1, Duration::from_secs(1), false);
    let other = handle.clone();

    let first = handle.settled().await;
    let second = other.settled().await;
    let third = handle.settled().await;

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(handle.settlement(), other.settlement());
}

#[tokio::test(start_paused = true)]
async fn test_dropped_handle_does_not_stop_task() {
    let handle = delayed(1, Duration::from_secs(1), false);
    let observer = handle.clone();
    drop(handle);

    sleep(Duration::from_secs(2)).await;
    assert_eq!(observer.state(), TaskState::Succeeded);
}

struct PanickingTask {
    id: TaskId,
}

#[async_trait]
impl Task for PanickingTask {
    fn id(&self) -> &TaskId {
        &self.id
    }

    async fn execute(&self) -> TaskOutcome {
        panic!("task {} blew up", self.id);
    }
}

#[tokio::test]
async fn test_panicking_task_is_reported_as_lost() {
    let handle = spawn(PanickingTask { id: 9.into() });
    let err = handle.settled().await.unwrap_err();
    assert_eq!(err, TaskError::Lost { id: 9.into() });
    assert_eq!(handle.state(), TaskState::Failed);
    assert!(handle.is_settled());
    assert_eq!(
        handle.settlement().outcome(),
        Some(&Err(TaskError::Lost { id: 9.into() }))
    );
}
