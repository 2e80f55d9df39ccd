//! Tests for `WatchConfig` and `StartHint`.

use std::collections::HashMap;

use crate::config::{DEFAULT_START_HINT, NO_COLOR_ENV, START_HINT_ENV, StartHint, WatchConfig};
use crate::error::WatchError;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
  let map: HashMap<String, String> = pairs
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
  move |k: &str| map.get(k).cloned()
}

#[test]
fn default_hint_matches_marker() {
  let hint = StartHint::default();
  assert_eq!(hint.as_str(), DEFAULT_START_HINT);
  assert_eq!(hint.step_ref("[start:rk3l2]"), Some("rk3l2"));
  assert_eq!(hint.step_ref("hello [start:x]"), None);
  assert_eq!(hint.step_ref("[start:]"), None);
}

#[test]
fn custom_hint_requires_capture_group() {
  let err = StartHint::new(r"^start$").unwrap_err();
  assert!(matches!(err, WatchError::InvalidStartHint(_)));
  let hint = StartHint::new(r"^::step (\w+)$").unwrap();
  assert_eq!(hint.step_ref("::step build"), Some("build"));
}

#[test]
fn invalid_regex_is_rejected() {
  assert!(matches!(
    StartHint::new("(").unwrap_err(),
    WatchError::InvalidStartHint(_)
  ));
}

#[test]
fn defaults_without_flags_or_env() {
  let cfg = WatchConfig::resolve(false, None, env_of(&[])).unwrap();
  assert!(cfg.color);
  assert_eq!(cfg.start_hint.as_str(), DEFAULT_START_HINT);
}

#[test]
fn no_color_flag_and_env() {
  assert!(!WatchConfig::resolve(true, None, env_of(&[])).unwrap().color);
  assert!(
    !WatchConfig::resolve(false, None, env_of(&[(NO_COLOR_ENV, "1")]))
      .unwrap()
      .color
  );
}

#[test]
fn env_overrides_start_hint_flag() {
  let cfg = WatchConfig::resolve(
    false,
    Some(r"^flag:(\w+)$"),
    env_of(&[(START_HINT_ENV, r"^env:(\w+)$")]),
  )
  .unwrap();
  assert_eq!(cfg.start_hint.step_ref("env:a"), Some("a"));
  assert_eq!(cfg.start_hint.step_ref("flag:a"), None);
}

#[test]
fn flag_used_without_env() {
  let cfg = WatchConfig::resolve(false, Some(r"^flag:(\w+)$"), env_of(&[])).unwrap();
  assert_eq!(cfg.start_hint.step_ref("flag:a"), Some("a"));
}
