//! Tests for `StepSignature`.

use super::StepSignature;

#[test]
fn label_prefers_name() {
  let s = StepSignature::leaf("a", "Run tests").with_category("Run shell command");
  assert_eq!(s.label(), "Run tests");
}

#[test]
fn label_falls_back_to_category() {
  let s = StepSignature::leaf("a", "").with_category("Clone repository");
  assert_eq!(s.label(), "Clone repository");
}

#[test]
fn leaf_and_group() {
  let g = StepSignature::group("g", vec![StepSignature::leaf("a", "A")]);
  assert!(!g.is_leaf());
  assert!(g.children[0].is_leaf());
}

#[test]
fn deserializes_wire_shape() {
  let json = r#"[
    {"ref": "r1", "category": "Clone", "children": [
      {"ref": "r2", "name": "lint", "optional": true}
    ]}
  ]"#;
  let sigs: Vec<StepSignature> = serde_json::from_str(json).unwrap();
  assert_eq!(sigs.len(), 1);
  assert_eq!(sigs[0].step_ref, "r1");
  assert_eq!(sigs[0].label(), "Clone");
  assert_eq!(sigs[0].children[0].step_ref, "r2");
  assert!(sigs[0].children[0].optional);
  assert!(sigs[0].children[0].is_leaf());
}

#[test]
fn initialization_pseudo_step() {
  let s = StepSignature::initialization();
  assert_eq!(s.label(), "Initializing");
  assert!(!s.optional);
}
