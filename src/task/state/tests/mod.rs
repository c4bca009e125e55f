use super::TaskState;

#[test]
fn test_task_state_as_str() {
    assert_eq!(TaskState::Pending.as_str(), "pending");
    assert_eq!(TaskState::Succeeded.as_str(), "succeeded");
    assert_eq!(TaskState::Failed.as_str(), "failed");
}

#[test]
fn test_task_state_display() {
    assert_eq!(format!("{}", TaskState::Pending), "pending");
    assert_eq!(format!("{}", TaskState::Succeeded), "succeeded");
    assert_eq!(format!("{}", TaskState::Failed), "failed");
}

#[test]
fn test_only_pending_is_not_terminal() {
    assert!(!TaskState::Pending.is_terminal());
    assert!(TaskState::Succeeded.is_terminal());
    assert!(TaskState::Failed.is_terminal());
}
