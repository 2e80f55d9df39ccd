//! Complete status of an execution at one point in time.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::step_result::elapsed;
use super::{StepResult, StepStatus};

/// Complete status of an execution: the initialization pseudo-step plus one result per step
/// reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSnapshot {
  /// Overall execution status.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<StepStatus>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub queued_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub finished_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub initialization: StepResult,
  #[serde(default)]
  pub steps: HashMap<String, StepResult>,
}

impl ResultSnapshot {
  /// Result for `step_ref`, if the snapshot has one.
  pub fn step(&self, step_ref: &str) -> Option<&StepResult> {
    self.steps.get(step_ref)
  }

  pub fn with_step(mut self, step_ref: impl Into<String>, result: StepResult) -> Self {
    self.steps.insert(step_ref.into(), result);
    self
  }

  pub fn is_finished(&self) -> bool {
    self.status.as_ref().is_some_and(StepStatus::is_terminal)
  }

  pub fn is_passed(&self) -> bool {
    self.status == Some(StepStatus::Passed)
  }

  pub fn is_aborted(&self) -> bool {
    self.status == Some(StepStatus::Aborted)
  }

  pub fn is_failed(&self) -> bool {
    self.status.as_ref().is_some_and(StepStatus::is_failure_like)
  }

  /// Total execution time, rounded to the millisecond.
  pub fn took(&self) -> Duration {
    elapsed(self.queued_at, self.finished_at)
  }
}
