//! Per-line timestamp prefixes of execution logs.
//!
//! Every log line starts with an RFC 3339 timestamp with nanoseconds, followed by one separator
//! byte. UTC timestamps end in `Z` (30 bytes); offset timestamps end in `+hh:mm` (35 bytes).

/// Length of a UTC timestamp prefix: RFC 3339 with nanoseconds, without the `00:00` offset.
pub const LOG_TIMESTAMP_LENGTH: usize = 30;

/// Length of an offset timestamp prefix (`2006-01-02T15:04:05.999999999+07:00`).
pub const LOG_TIMESTAMP_WITH_OFFSET_LENGTH: usize = 35;

/// Byte offset that holds either `Z` or the `+` of an offset.
const ZONE_MARKER_OFFSET: usize = 29;

/// Returns how many leading bytes of `line` are the timestamp, not counting the separator.
pub fn timestamp_length(line: &str) -> usize {
  if line.as_bytes().get(ZONE_MARKER_OFFSET) == Some(&b'+') {
    LOG_TIMESTAMP_WITH_OFFSET_LENGTH
  } else {
    LOG_TIMESTAMP_LENGTH
  }
}

/// Strips the timestamp and separator from a complete line.
///
/// Lines shorter than `LOG_TIMESTAMP_LENGTH - 1` are returned unchanged; longer lines lose at most
/// their whole content.
pub fn strip_timestamp(line: &str) -> &str {
  if line.len() < LOG_TIMESTAMP_LENGTH - 1 {
    return line;
  }
  let skip = (timestamp_length(line) + 1).min(line.len());
  line.get(skip..).unwrap_or(line)
}
