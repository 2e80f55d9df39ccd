//! Errors raised while watching or rendering an execution.

use thiserror::Error;

use crate::types::ResultSnapshot;

/// Errors raised while watching or rendering an execution.
#[derive(Debug, Error)]
pub enum WatchError {
  #[error("writing output: {0}")]
  Io(#[from] std::io::Error),

  #[error("decoding notification: {0}")]
  Json(#[from] serde_json::Error),

  /// Transport failure reported by the notification source.
  #[error("notification stream: {0}")]
  Stream(String),

  /// A step marker named a reference that is not a leaf of the step tree.
  #[error("log marker references unknown step '{step_ref}'")]
  UnknownStep { step_ref: String },

  /// A step marker named a step before the one already active.
  #[error("log marker for step '{step_ref}' arrived after step '{current_ref}'")]
  StepOutOfOrder {
    step_ref: String,
    current_ref: String,
  },

  #[error("invalid start hint pattern: {0}")]
  InvalidStartHint(String),
}

/// A watch that ended with an error, keeping the last snapshot seen before it.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct WatchFailure {
  pub last_result: Option<ResultSnapshot>,
  #[source]
  pub source: WatchError,
}

impl WatchFailure {
  pub fn new(last_result: Option<ResultSnapshot>, source: WatchError) -> Self {
    Self {
      last_result,
      source,
    }
  }
}
