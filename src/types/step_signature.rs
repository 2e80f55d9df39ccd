//! A node in the declared step tree of a test workflow.

use serde::{Deserialize, Serialize};

/// A node in the declared step tree. Leaves are the only nodes that get a status line;
/// nodes with children only group them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSignature {
  /// Stable reference of the step within one execution.
  #[serde(rename = "ref", default)]
  pub step_ref: String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub name: String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub category: String,
  /// Failures of optional steps are reported as ignored.
  #[serde(default)]
  pub optional: bool,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub children: Vec<StepSignature>,
}

impl StepSignature {
  /// Leaf step with the given reference and name.
  pub fn leaf(step_ref: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      step_ref: step_ref.into(),
      name: name.into(),
      ..Self::default()
    }
  }

  /// Group step wrapping `children`.
  pub fn group(step_ref: impl Into<String>, children: Vec<StepSignature>) -> Self {
    Self {
      step_ref: step_ref.into(),
      children,
      ..Self::default()
    }
  }

  /// Pseudo-step used for the initialization phase; it is not part of the tree.
  pub fn initialization() -> Self {
    Self {
      name: "Initializing".to_string(),
      ..Self::default()
    }
  }

  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = category.into();
    self
  }

  pub fn optional(mut self) -> Self {
    self.optional = true;
    self
  }

  pub fn is_leaf(&self) -> bool {
    self.children.is_empty()
  }

  /// Human label: the explicit name, else the category.
  pub fn label(&self) -> &str {
    if self.name.is_empty() {
      &self.category
    } else {
      &self.name
    }
  }
}
