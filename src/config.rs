//! Rendering options: colour and the raw-log start hint, from flags with env overrides.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::WatchError;

/// Env var overriding the start hint pattern.
pub const START_HINT_ENV: &str = "TESTWORKFLOW_START_HINT";

/// Env var that disables colour when set to any value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Default start hint: a line consisting of `[start:<ref>]`.
pub const DEFAULT_START_HINT: &str = r"^\[start:([^\]\s]+)\]";

static DEFAULT_START_HINT_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(DEFAULT_START_HINT).unwrap_or_else(|e| panic!("default start hint: {e}"))
});

/// Pattern that recognises the start of a step in a raw log line.
/// Capture group 1 is the step reference.
#[derive(Debug, Clone)]
pub struct StartHint(Regex);

impl StartHint {
  pub fn new(pattern: &str) -> Result<Self, WatchError> {
    let re = Regex::new(pattern).map_err(|e| WatchError::InvalidStartHint(e.to_string()))?;
    if re.captures_len() < 2 {
      return Err(WatchError::InvalidStartHint(format!(
        "'{}' has no capture group for the step reference",
        pattern
      )));
    }
    Ok(Self(re))
  }

  /// Step reference named by `line`, if it is a start hint.
  pub fn step_ref<'a>(&self, line: &'a str) -> Option<&'a str> {
    self
      .0
      .captures(line)
      .and_then(|c| c.get(1))
      .map(|m| m.as_str())
  }

  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }
}

impl Default for StartHint {
  fn default() -> Self {
    Self(DEFAULT_START_HINT_RE.clone())
  }
}

/// Options shared by the watch loop and the raw log printer.
#[derive(Debug, Clone)]
pub struct WatchConfig {
  pub color: bool,
  pub start_hint: StartHint,
}

impl Default for WatchConfig {
  fn default() -> Self {
    Self {
      color: true,
      start_hint: StartHint::default(),
    }
  }
}

impl WatchConfig {
  /// Builds the config from flag values, letting the environment override them.
  /// `env` looks up a variable by name.
  pub fn resolve(
    no_color_flag: bool,
    start_hint_flag: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
  ) -> Result<Self, WatchError> {
    let color = !no_color_flag && env(NO_COLOR_ENV).is_none();
    let start_hint = match env(START_HINT_ENV).or_else(|| start_hint_flag.map(String::from)) {
      Some(pattern) => StartHint::new(&pattern)?,
      None => StartHint::default(),
    };
    Ok(Self { color, start_hint })
  }

  /// [WatchConfig::resolve] against the process environment.
  pub fn from_env(no_color_flag: bool, start_hint_flag: Option<&str>) -> Result<Self, WatchError> {
    Self::resolve(no_color_flag, start_hint_flag, |k| std::env::var(k).ok())
  }
}
