//! Re-segments a complete, untagged execution log into per-step sections.
//!
//! Used when the whole log arrives as one blob after the fact. Lines carrying a start hint open
//! the step they name; every step between the active one and the named one is closed on the way.

use std::io::Write;

use tracing::{debug, instrument, warn};

use crate::config::StartHint;
use crate::error::WatchError;
use crate::status_line::{StepPosition, print_status, print_status_header};
use crate::terminal::{Style, Terminal};
use crate::timestamp::strip_timestamp;
use crate::types::{ResultSnapshot, StepSignature};

/// Appended to lines that carry no step attribution.
const BELL: char = '\u{7}';

/// Prints `logs` split into step sections, using `results` for each step's final status.
///
/// Start hints must follow the order of `steps`; a hint naming an earlier step or a step that is
/// not in `steps` fails with [WatchError::StepOutOfOrder] or [WatchError::UnknownStep].
#[instrument(level = "trace", skip_all, fields(steps = steps.len(), bytes = logs.len()))]
pub fn print_raw_log_lines<W: Write>(
  term: &mut Terminal<W>,
  logs: &str,
  steps: &[StepSignature],
  results: &ResultSnapshot,
  start_hint: &StartHint,
) -> Result<(), WatchError> {
  let total = steps.len();
  print_status_header(
    term,
    StepPosition::initialization(total),
    StepSignature::initialization().label(),
  )?;

  let mut current: Option<usize> = None;
  for line in logs.split_terminator('\n') {
    let line = strip_timestamp(line);
    let Some(next_ref) = start_hint.step_ref(line) else {
      term.line(Style::Plain, &format!("{}{}", line, BELL))?;
      continue;
    };

    let target = locate_step(steps, current, next_ref)?;
    while current != Some(target) {
      if let Some(i) = current {
        close_step(term, steps, i, results)?;
      }
      let next = current.map_or(0, |i| i + 1);
      debug!(step_ref = %steps[next].step_ref, index = next, "entering step");
      print_status_header(term, StepPosition::step(next, total), steps[next].label())?;
      current = Some(next);
    }
  }

  let start = match current {
    Some(i) => i,
    None if total == 0 => return Ok(()),
    None => {
      print_status_header(term, StepPosition::step(0, total), steps[0].label())?;
      0
    }
  };
  for i in start..total {
    close_step(term, steps, i, results)?;
    if i + 1 < total {
      print_status_header(term, StepPosition::step(i + 1, total), steps[i + 1].label())?;
    }
  }
  Ok(())
}

/// Index of `step_ref` at or after the active step.
fn locate_step(
  steps: &[StepSignature],
  current: Option<usize>,
  step_ref: &str,
) -> Result<usize, WatchError> {
  let from = current.unwrap_or(0);
  if let Some(offset) = steps[from..].iter().position(|s| s.step_ref == step_ref) {
    return Ok(from + offset);
  }
  match current {
    Some(i) if steps[..from].iter().any(|s| s.step_ref == step_ref) => {
      warn!(step_ref, current_ref = %steps[i].step_ref, "start hint out of order");
      Err(WatchError::StepOutOfOrder {
        step_ref: step_ref.to_string(),
        current_ref: steps[i].step_ref.clone(),
      })
    }
    _ => {
      warn!(step_ref, "start hint for unknown step");
      Err(WatchError::UnknownStep {
        step_ref: step_ref.to_string(),
      })
    }
  }
}

/// Prints the final status of `steps[i]` when it has one; running or queued steps stay open.
fn close_step<W: Write>(
  term: &mut Terminal<W>,
  steps: &[StepSignature],
  i: usize,
  results: &ResultSnapshot,
) -> Result<(), WatchError> {
  let step = &steps[i];
  let Some(result) = results.step(&step.step_ref) else {
    return Ok(());
  };
  match &result.status {
    Some(status) if status.is_terminal() => {
      print_status(
        term,
        step,
        status,
        result.took(),
        StepPosition::step(i, steps.len()),
      )?;
    }
    _ => {}
  }
  Ok(())
}
