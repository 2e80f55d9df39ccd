//! Tests for `Notification`.

use super::{LogChunk, Notification, StepStatus};

#[test]
fn parses_log_chunk() {
  let n: Notification =
    serde_json::from_str(r#"{"ts":"2024-01-01T00:00:00Z","ref":"r1","log":"hello\n"}"#).unwrap();
  assert_eq!(
    n,
    Notification::Log(LogChunk {
      step_ref: Some("r1".to_string()),
      log: "hello\n".to_string(),
    })
  );
}

#[test]
fn parses_result() {
  let n: Notification =
    serde_json::from_str(r#"{"result":{"initialization":{"status":"running"}}}"#).unwrap();
  match n {
    Notification::Result(r) => {
      assert_eq!(r.initialization.status, Some(StepStatus::Running));
    }
    other => panic!("expected result, got {:?}", other),
  }
}

#[test]
fn output_wins_over_other_fields() {
  let n: Notification =
    serde_json::from_str(r#"{"output":{"type":"event"},"log":"ignored"}"#).unwrap();
  assert!(matches!(n, Notification::Output(_)));
}

#[test]
fn result_wins_over_log() {
  let n: Notification = serde_json::from_str(r#"{"result":{},"log":"x"}"#).unwrap();
  assert!(matches!(n, Notification::Result(_)));
}

#[test]
fn empty_object_is_rejected() {
  let err = serde_json::from_str::<Notification>(r#"{"ts":"2024-01-01T00:00:00Z"}"#).unwrap_err();
  assert!(err.to_string().contains("none of output, result or log"));
}

#[test]
fn serializes_back_to_wire_shape() {
  let json = serde_json::to_value(Notification::log("x")).unwrap();
  assert_eq!(json, serde_json::json!({"log": "x"}));
}
