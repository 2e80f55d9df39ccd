//! Tests for `print_raw_log_lines`.

use crate::config::StartHint;
use crate::error::WatchError;
use crate::raw_log::print_raw_log_lines;
use crate::terminal::Terminal;
use crate::types::{ResultSnapshot, StepResult, StepSignature, StepStatus};

fn steps() -> Vec<StepSignature> {
  vec![StepSignature::leaf("A", "A"), StepSignature::leaf("B", "B")]
}

fn render(
  logs: &str,
  steps: &[StepSignature],
  results: &ResultSnapshot,
) -> Result<String, WatchError> {
  let mut t = Terminal::new(Vec::new(), false);
  print_raw_log_lines(&mut t, logs, steps, results, &StartHint::default())?;
  Ok(t.contents())
}

#[test]
fn resegments_blob_per_step() {
  let results = ResultSnapshot::default()
    .with_step("A", StepResult::with_status(StepStatus::Passed))
    .with_step("B", StepResult::with_status(StepStatus::Running));
  let logs = "2024-01-01T00:00:00.000000000Z [start:A]\nhello\n\
              2024-01-01T00:00:00.100000000Z [start:B]\nworld\n";
  let out = render(logs, &steps(), &results).unwrap();
  assert_eq!(
    out,
    "\n• Initializing\n\
     \n• (1/2) A\n\
     hello\u{7}\n\
     \n• passed in 0s\n\
     \n• (2/2) B\n\
     world\u{7}\n"
  );
}

#[test]
fn timestamps_are_stripped_from_content_lines() {
  let results = ResultSnapshot::default();
  let logs = "2024-01-01T00:00:00.000000000Z [start:A]\n\
              2024-01-01T00:00:00.000000000+00:00 compiling\n";
  let out = render(logs, &steps()[..1], &results).unwrap();
  assert_eq!(out, "\n• Initializing\n\n• (1/1) A\ncompiling\u{7}\n");
}

#[test]
fn skipped_steps_between_markers_are_closed() {
  let steps = vec![
    StepSignature::leaf("A", "A"),
    StepSignature::leaf("B", "B"),
    StepSignature::leaf("C", "C"),
  ];
  let results = ResultSnapshot::default()
    .with_step("A", StepResult::with_status(StepStatus::Passed))
    .with_step("B", StepResult::with_status(StepStatus::Skipped))
    .with_step("C", StepResult::with_status(StepStatus::Failed));
  let logs = "[start:A]\n[start:C]\n";
  let out = render(logs, &steps, &results).unwrap();
  assert_eq!(
    out,
    "\n• Initializing\n\
     \n• (1/3) A\n\
     \n• passed in 0s\n\
     \n• (2/3) B\n\
     • skipped\n\
     \n• (3/3) C\n\
     \n• failed in 0s\n"
  );
}

#[test]
fn trailing_steps_are_closed_after_last_marker() {
  let results = ResultSnapshot::default()
    .with_step("A", StepResult::with_status(StepStatus::Passed))
    .with_step("B", StepResult::with_status(StepStatus::Aborted));
  let out = render("[start:A]\n", &steps(), &results).unwrap();
  assert_eq!(
    out,
    "\n• Initializing\n\
     \n• (1/2) A\n\
     \n• passed in 0s\n\
     \n• (2/2) B\n\
     \n• aborted\n"
  );
}

#[test]
fn no_markers_walks_all_steps() {
  let results = ResultSnapshot::default()
    .with_step("A", StepResult::with_status(StepStatus::Passed))
    .with_step("B", StepResult::with_status(StepStatus::Passed));
  let out = render("setup noise\n", &steps(), &results).unwrap();
  assert_eq!(
    out,
    "\n• Initializing\n\
     setup noise\u{7}\n\
     \n• (1/2) A\n\
     \n• passed in 0s\n\
     \n• (2/2) B\n\
     \n• passed in 0s\n"
  );
}

#[test]
fn empty_steps_and_blob() {
  let out = render("", &[], &ResultSnapshot::default()).unwrap();
  assert_eq!(out, "\n• Initializing\n");
}

#[test]
fn repeated_marker_for_active_step_is_a_no_op() {
  let out = render("[start:A]\n[start:A]\nx\n", &steps()[..1], &ResultSnapshot::default()).unwrap();
  assert_eq!(out, "\n• Initializing\n\n• (1/1) A\nx\u{7}\n");
}

#[test]
fn marker_for_earlier_step_fails_fast() {
  let err = render("[start:B]\n[start:A]\n", &steps(), &ResultSnapshot::default()).unwrap_err();
  match err {
    WatchError::StepOutOfOrder {
      step_ref,
      current_ref,
    } => {
      assert_eq!(step_ref, "A");
      assert_eq!(current_ref, "B");
    }
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn marker_for_unknown_step_fails_fast() {
  let err = render("[start:Z]\n", &steps(), &ResultSnapshot::default()).unwrap_err();
  assert!(matches!(err, WatchError::UnknownStep { step_ref } if step_ref == "Z"));
}
