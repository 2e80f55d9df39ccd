//! Status headers and one-line status transitions of a step.

use std::io::{self, Write};
use std::time::Duration;

use crate::terminal::{Style, Terminal};
use crate::types::{StepSignature, StepStatus};

/// Position of a step in the flattened sequence; `None` for the initialization pseudo-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPosition {
  pub index: Option<usize>,
  pub total: usize,
}

impl StepPosition {
  pub fn initialization(total: usize) -> Self {
    Self { index: None, total }
  }

  pub fn step(index: usize, total: usize) -> Self {
    Self {
      index: Some(index),
      total,
    }
  }
}

/// Prints the section header of a step: `• (i/N) label`, or `• label` without an index.
pub fn print_status_header<W: Write>(
  term: &mut Terminal<W>,
  position: StepPosition,
  label: &str,
) -> io::Result<()> {
  let text = match position.index {
    Some(i) => format!("• ({}/{}) {}", i + 1, position.total, label),
    None => format!("• {}", label),
  };
  term.section(Style::Info, &text)
}

/// Prints the line for `step` having reached `status`.
pub fn print_status<W: Write>(
  term: &mut Terminal<W>,
  step: &StepSignature,
  status: &StepStatus,
  took: Duration,
  position: StepPosition,
) -> io::Result<()> {
  match status {
    StepStatus::Running => print_status_header(term, position, step.label()),
    StepStatus::Queued => Ok(()),
    StepStatus::Skipped => term.line(Style::Dimmed, "• skipped"),
    StepStatus::Paused => term.line(Style::Dimmed, "• paused"),
    StepStatus::Passed => term.section(
      Style::Success,
      &format!("• passed in {}", format_duration(took)),
    ),
    StepStatus::Aborted => term.section(Style::Failure, "• aborted"),
    other if step.optional => term.section(
      Style::Warning,
      &format!("• {} in {} (ignored)", other, format_duration(took)),
    ),
    other => term.section(
      Style::Failure,
      &format!("• {} in {}", other, format_duration(took)),
    ),
  }
}

/// Formats a duration as `1h2m3.5s`, `150ms` or `0s`, at millisecond precision.
pub fn format_duration(d: Duration) -> String {
  let total_ms = d.as_millis();
  if total_ms == 0 {
    return "0s".to_string();
  }
  if total_ms < 1000 {
    return format!("{}ms", total_ms);
  }
  let hours = total_ms / 3_600_000;
  let minutes = (total_ms / 60_000) % 60;
  let seconds = (total_ms / 1000) % 60;
  let millis = total_ms % 1000;

  let mut out = String::new();
  if hours > 0 {
    out.push_str(&format!("{}h", hours));
  }
  if hours > 0 || minutes > 0 {
    out.push_str(&format!("{}m", minutes));
  }
  out.push_str(&seconds.to_string());
  if millis > 0 {
    let fraction = format!("{:03}", millis);
    out.push('.');
    out.push_str(fraction.trim_end_matches('0'));
  }
  out.push('s');
  out
}
