//! Wire types for test workflow executions: step signatures, step results, result snapshots and
//! the notifications that carry them.
//!
//! Field names follow the notification protocol (camelCase).

mod notification;
#[cfg(test)]
mod notification_test;
mod result_snapshot;
#[cfg(test)]
mod result_snapshot_test;
mod step_result;
mod step_signature;
#[cfg(test)]
mod step_signature_test;
mod step_status;

pub use notification::{LogChunk, Notification};
pub use result_snapshot::ResultSnapshot;
pub use step_result::StepResult;
pub use step_signature::StepSignature;
pub use step_status::StepStatus;
