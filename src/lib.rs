//! # testworkflow-watch
//!
//! Live terminal view of a test workflow execution: step status transitions interleaved with
//! the execution's own log output.
//!
//! ## Architecture
//!
//! - [flatten]: step signature tree → ordered leaf steps, reported as `(i/N)`.
//! - [timestamp]: per-line timestamp prefixes of the log.
//! - [structured_log]: live log chunks of the active step, timestamps removed.
//! - [result_diff]: one status line per step whose status changed between two snapshots.
//! - [raw_log]: a complete log blob re-segmented per step using inline start hints.
//! - [watch]: consumes the notification stream and drives the printers above.

pub mod config;
#[cfg(test)]
mod config_test;
pub mod error;
pub mod flatten;
pub mod raw_log;
#[cfg(test)]
mod raw_log_test;
pub mod result_diff;
pub mod source;
pub mod status_line;
pub mod structured_log;
pub mod summary;
pub mod terminal;
pub mod timestamp;
pub mod types;
pub mod watch;

pub use config::{StartHint, WatchConfig};
pub use error::{WatchError, WatchFailure};
pub use flatten::flatten_signatures;
pub use raw_log::print_raw_log_lines;
pub use result_diff::{has_result_difference, print_result_difference};
pub use source::{ChannelSource, NdjsonSource};
pub use structured_log::LineSession;
pub use summary::{print_details_hint, print_execution_summary};
pub use terminal::{Style, Terminal};
pub use types::{LogChunk, Notification, ResultSnapshot, StepResult, StepSignature, StepStatus};
pub use watch::{NotificationSource, NotificationStream, WatchSession, watch_logs};
