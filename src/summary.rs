//! Final message and exit code for a watched execution.

use std::io::{self, Write};

use crate::status_line::format_duration;
use crate::terminal::{Style, Terminal};
use crate::types::ResultSnapshot;

/// Prints how the execution ended and returns the process exit code (0 or 1).
///
/// Executions still running, or without any result, print nothing and exit 0.
pub fn print_execution_summary<W: Write>(
  term: &mut Terminal<W>,
  result: Option<&ResultSnapshot>,
) -> io::Result<i32> {
  let Some(result) = result else {
    return Ok(0);
  };

  if !result.initialization.error_message.is_empty() {
    term.line(Style::Warning, "test workflow execution failed:")?;
    term.newline()?;
    term.line(Style::Failure, &result.initialization.error_message)?;
    return Ok(1);
  }
  if result.is_failed() {
    term.line(Style::Warning, "test workflow execution failed")?;
    return Ok(1);
  }
  if result.is_aborted() {
    term.line(Style::Warning, "test workflow execution aborted")?;
    return Ok(1);
  }
  if result.is_passed() {
    term.line(
      Style::Success,
      &format!(
        "test workflow execution completed with success in {}",
        format_duration(result.took())
      ),
    )?;
  }
  Ok(0)
}

/// Prints the command that shows the execution's details.
pub fn print_details_hint<W: Write>(term: &mut Terminal<W>, execution_id: &str) -> io::Result<()> {
  term.section(
    Style::Plain,
    "Use following command to get test workflow execution details",
  )?;
  term.line(
    Style::Dimmed,
    &format!("$ kubectl testkube get twe {}", execution_id),
  )
}
