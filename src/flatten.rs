//! Flattens the step signature tree into the ordered list of leaf steps.

use crate::types::StepSignature;

/// Returns the leaves of `signatures` in depth-first, left-to-right order.
///
/// Group nodes contribute only their descendants. Index `i` of the result is the step reported
/// as `(i+1/N)`.
pub fn flatten_signatures(signatures: &[StepSignature]) -> Vec<StepSignature> {
  let mut leaves = Vec::new();
  collect_leaves(signatures, &mut leaves);
  leaves
}

fn collect_leaves(signatures: &[StepSignature], leaves: &mut Vec<StepSignature>) {
  for s in signatures {
    if s.is_leaf() {
      leaves.push(s.clone());
    } else {
      collect_leaves(&s.children, leaves);
    }
  }
}
