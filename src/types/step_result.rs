//! Snapshot of one step's progress.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StepStatus;

/// Snapshot of one step's progress. Replaced wholesale by every result notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
  /// Absent until the step is picked up.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<StepStatus>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub queued_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub started_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub finished_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub error_message: String,
}

impl StepResult {
  pub fn with_status(status: StepStatus) -> Self {
    Self {
      status: Some(status),
      ..Self::default()
    }
  }

  /// Status with a missing value resolved to [StepStatus::Queued].
  pub fn resolved_status(&self) -> StepStatus {
    self.status.clone().unwrap_or_default()
  }

  /// `finished_at - queued_at` rounded to the millisecond; zero when unknown or negative.
  pub fn took(&self) -> Duration {
    elapsed(self.queued_at, self.finished_at)
  }
}

/// Elapsed time between two optional instants, rounded to the millisecond.
pub(crate) fn elapsed(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Duration {
  let (Some(from), Some(to)) = (from, to) else {
    return Duration::ZERO;
  };
  let Ok(d) = (to - from).to_std() else {
    return Duration::ZERO;
  };
  let millis = (d.as_nanos() + 500_000) / 1_000_000;
  Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
}
