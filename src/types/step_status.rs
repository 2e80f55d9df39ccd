//! Status of a single step (or of the whole execution).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a step as reported by the execution.
///
/// Unknown wire values are kept in [StepStatus::Other] and rendered like failures.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepStatus {
  /// Not started yet. A missing status resolves to this.
  #[default]
  Queued,
  Running,
  Paused,
  Passed,
  Failed,
  Timeout,
  Skipped,
  Aborted,
  Other(String),
}

impl StepStatus {
  pub fn as_str(&self) -> &str {
    match self {
      StepStatus::Queued => "queued",
      StepStatus::Running => "running",
      StepStatus::Paused => "paused",
      StepStatus::Passed => "passed",
      StepStatus::Failed => "failed",
      StepStatus::Timeout => "timeout",
      StepStatus::Skipped => "skipped",
      StepStatus::Aborted => "aborted",
      StepStatus::Other(s) => s,
    }
  }

  /// True once the step will not change anymore.
  pub fn is_terminal(&self) -> bool {
    !matches!(
      self,
      StepStatus::Queued | StepStatus::Running | StepStatus::Paused
    )
  }

  /// Terminal statuses other than passed, skipped and aborted.
  pub fn is_failure_like(&self) -> bool {
    matches!(
      self,
      StepStatus::Failed | StepStatus::Timeout | StepStatus::Other(_)
    )
  }
}

impl From<String> for StepStatus {
  fn from(s: String) -> Self {
    match s.as_str() {
      "queued" => StepStatus::Queued,
      "running" => StepStatus::Running,
      "paused" => StepStatus::Paused,
      "passed" => StepStatus::Passed,
      "failed" => StepStatus::Failed,
      "timeout" => StepStatus::Timeout,
      "skipped" => StepStatus::Skipped,
      "aborted" => StepStatus::Aborted,
      _ => StepStatus::Other(s),
    }
  }
}

impl From<&str> for StepStatus {
  fn from(s: &str) -> Self {
    StepStatus::from(s.to_string())
  }
}

impl From<StepStatus> for String {
  fn from(s: StepStatus) -> Self {
    match s {
      StepStatus::Other(s) => s,
      known => known.as_str().to_string(),
    }
  }
}

impl fmt::Display for StepStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
