//! Writes live log chunks of the active step with their timestamps removed.

use std::io::{self, Write};

use crate::terminal::Terminal;
use crate::timestamp::{LOG_TIMESTAMP_LENGTH, timestamp_length};

/// Line state carried across the chunks of one watched execution.
///
/// A chunk may end anywhere, including inside a timestamp; the partial prefix is held back until
/// the next chunk completes it.
#[derive(Debug)]
pub struct LineSession {
  line_beginning: bool,
  pending: String,
}

impl Default for LineSession {
  fn default() -> Self {
    Self::new()
  }
}

impl LineSession {
  pub fn new() -> Self {
    Self {
      line_beginning: true,
      pending: String::new(),
    }
  }

  pub fn is_line_beginning(&self) -> bool {
    self.line_beginning
  }

  /// Writes any held-back text verbatim and marks the next chunk as starting a fresh line.
  pub fn reset_line<W: Write>(&mut self, term: &mut Terminal<W>) -> io::Result<()> {
    let pending = std::mem::take(&mut self.pending);
    if !pending.is_empty() {
      term.raw(&pending)?;
    }
    self.line_beginning = true;
    Ok(())
  }

  /// Writes `chunk`, dropping the timestamp and separator at the start of every line.
  pub fn write_chunk<W: Write>(&mut self, term: &mut Terminal<W>, chunk: &str) -> io::Result<()> {
    let joined;
    let mut rest: &str = if self.pending.is_empty() {
      chunk
    } else {
      joined = std::mem::take(&mut self.pending) + chunk;
      &joined
    };

    while !rest.is_empty() {
      if self.line_beginning {
        match prefix_length(rest) {
          Some(skip) => rest = &rest[skip..],
          None => {
            self.pending.push_str(rest);
            return Ok(());
          }
        }
        self.line_beginning = false;
      }

      match rest.find('\n') {
        Some(i) => {
          term.raw(&rest[..=i])?;
          rest = &rest[i + 1..];
          self.line_beginning = true;
        }
        None => {
          term.raw(rest)?;
          break;
        }
      }
    }
    Ok(())
  }

  /// Writes whatever was held back, verbatim. Called once the stream ends.
  pub fn finish<W: Write>(&mut self, term: &mut Terminal<W>) -> io::Result<()> {
    if !self.pending.is_empty() {
      let pending = std::mem::take(&mut self.pending);
      term.raw(&pending)?;
      self.line_beginning = pending.ends_with('\n');
    }
    Ok(())
  }
}

/// Bytes to skip at the start of `rest`, or `None` while the prefix is still incomplete.
fn prefix_length(rest: &str) -> Option<usize> {
  let line_end = rest.find('\n');
  let line = &rest[..line_end.unwrap_or(rest.len())];
  let complete = line_end.is_some();

  if !complete && line.len() < LOG_TIMESTAMP_LENGTH {
    return None;
  }
  let ts = timestamp_length(line);
  if !complete && line.len() <= ts {
    return None;
  }
  if line.len() < ts {
    return Some(0);
  }
  let skip = (ts + 1).min(line.len());
  Some(if line.is_char_boundary(skip) { skip } else { 0 })
}
