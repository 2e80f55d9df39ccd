//! Tests for `ResultSnapshot`.

use std::time::Duration;

use super::{ResultSnapshot, StepResult, StepStatus};

#[test]
fn overall_status_helpers() {
  let mut r = ResultSnapshot::default();
  assert!(!r.is_finished());
  assert!(!r.is_failed());

  r.status = Some(StepStatus::Running);
  assert!(!r.is_finished());

  r.status = Some(StepStatus::Passed);
  assert!(r.is_finished());
  assert!(r.is_passed());

  r.status = Some(StepStatus::Failed);
  assert!(r.is_failed());
  assert!(!r.is_aborted());

  r.status = Some(StepStatus::Aborted);
  assert!(r.is_aborted());
  assert!(!r.is_failed());
}

#[test]
fn step_lookup() {
  let r = ResultSnapshot::default().with_step("a", StepResult::with_status(StepStatus::Passed));
  assert_eq!(
    r.step("a").and_then(|s| s.status.clone()),
    Some(StepStatus::Passed)
  );
  assert!(r.step("b").is_none());
}

#[test]
fn deserializes_wire_shape() {
  let r: ResultSnapshot = serde_json::from_str(
    r#"{
      "status": "passed",
      "queuedAt": "2024-01-01T00:00:00Z",
      "finishedAt": "2024-01-01T00:01:00Z",
      "initialization": {"status": "passed"},
      "steps": {"a": {"status": "errored"}}
    }"#,
  )
  .unwrap();
  assert!(r.is_passed());
  assert_eq!(r.took(), Duration::from_secs(60));
  assert_eq!(r.initialization.status, Some(StepStatus::Passed));
  assert_eq!(
    r.step("a").unwrap().status,
    Some(StepStatus::Other("errored".to_string()))
  );
}

#[test]
fn missing_sections_default() {
  let r: ResultSnapshot = serde_json::from_str("{}").unwrap();
  assert_eq!(r.initialization, StepResult::default());
  assert!(r.steps.is_empty());
}
