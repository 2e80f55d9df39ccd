//! Prints status transitions between two consecutive result snapshots.

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::status_line::{StepPosition, print_status};
use crate::terminal::Terminal;
use crate::types::{ResultSnapshot, StepResult, StepSignature};

/// Prints one line for every step whose resolved status differs between `previous` and
/// `current`, initialization first. Returns whether anything changed.
///
/// A missing snapshot on either side means nothing changed.
#[instrument(level = "trace", skip_all)]
pub fn print_result_difference<W: Write>(
  term: &mut Terminal<W>,
  previous: Option<&ResultSnapshot>,
  current: Option<&ResultSnapshot>,
  steps: &[StepSignature],
) -> io::Result<bool> {
  let (Some(previous), Some(current)) = (previous, current) else {
    return Ok(false);
  };
  let total = steps.len();

  let mut changed = print_single_difference(
    term,
    &previous.initialization,
    &current.initialization,
    &StepSignature::initialization(),
    StepPosition::initialization(total),
  )?;

  let missing = StepResult::default();
  for (i, step) in steps.iter().enumerate() {
    let before = previous.step(&step.step_ref).unwrap_or(&missing);
    let after = current.step(&step.step_ref).unwrap_or(&missing);
    changed |= print_single_difference(term, before, after, step, StepPosition::step(i, total))?;
  }
  Ok(changed)
}

/// Reports whether [`print_result_difference`] would print anything for these snapshots.
pub fn has_result_difference(
  previous: Option<&ResultSnapshot>,
  current: Option<&ResultSnapshot>,
  steps: &[StepSignature],
) -> bool {
  let (Some(previous), Some(current)) = (previous, current) else {
    return false;
  };
  if previous.initialization.resolved_status() != current.initialization.resolved_status() {
    return true;
  }
  let missing = StepResult::default();
  steps.iter().any(|step| {
    let before = previous.step(&step.step_ref).unwrap_or(&missing);
    let after = current.step(&step.step_ref).unwrap_or(&missing);
    before.resolved_status() != after.resolved_status()
  })
}

fn print_single_difference<W: Write>(
  term: &mut Terminal<W>,
  before: &StepResult,
  after: &StepResult,
  step: &StepSignature,
  position: StepPosition,
) -> io::Result<bool> {
  let before_status = before.resolved_status();
  let after_status = after.resolved_status();
  if before_status == after_status {
    return Ok(false);
  }
  debug!(step_ref = %step.step_ref, from = %before_status, to = %after_status, "step status changed");
  print_status(term, step, &after_status, after.took(), position)?;
  Ok(true)
}
