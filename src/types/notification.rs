//! One message of the execution notification stream.

use serde::{Deserialize, Serialize};

use super::ResultSnapshot;

/// Log text attributed out of band to the currently active step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogChunk {
  /// Reference of the step that produced the text, when the producer sent it.
  #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
  pub step_ref: Option<String>,
  pub log: String,
}

impl LogChunk {
  pub fn new(log: impl Into<String>) -> Self {
    Self {
      step_ref: None,
      log: log.into(),
    }
  }
}

/// One message of the notification stream. Exactly one kind of payload per message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNotification", into = "RawNotification")]
pub enum Notification {
  /// Structured output event; not rendered.
  Output(serde_json::Value),
  /// New result snapshot replacing the previous one.
  Result(Box<ResultSnapshot>),
  /// Chunk of log text.
  Log(LogChunk),
}

impl Notification {
  pub fn result(result: ResultSnapshot) -> Self {
    Notification::Result(Box::new(result))
  }

  pub fn log(text: impl Into<String>) -> Self {
    Notification::Log(LogChunk::new(text))
  }
}

/// Wire shape: an object with optional `output`, `result` and `log`/`ref` fields.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawNotification {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  ts: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  output: Option<serde_json::Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  result: Option<Box<ResultSnapshot>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  log: Option<String>,
  #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
  step_ref: Option<String>,
}

impl TryFrom<RawNotification> for Notification {
  type Error = String;

  fn try_from(raw: RawNotification) -> Result<Self, Self::Error> {
    if let Some(output) = raw.output {
      return Ok(Notification::Output(output));
    }
    if let Some(result) = raw.result {
      return Ok(Notification::Result(result));
    }
    match raw.log {
      Some(log) => Ok(Notification::Log(LogChunk {
        step_ref: raw.step_ref,
        log,
      })),
      None => Err("notification has none of output, result or log".to_string()),
    }
  }
}

impl From<Notification> for RawNotification {
  fn from(n: Notification) -> Self {
    match n {
      Notification::Output(output) => RawNotification {
        output: Some(output),
        ..Default::default()
      },
      Notification::Result(result) => RawNotification {
        result: Some(result),
        ..Default::default()
      },
      Notification::Log(chunk) => RawNotification {
        log: Some(chunk.log),
        step_ref: chunk.step_ref,
        ..Default::default()
      },
    }
  }
}
