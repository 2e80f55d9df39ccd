//! Styled line output.

use std::io::{self, Write};

use owo_colors::OwoColorize;

/// Style class of an output line; the palette is decided here, callers only pick the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
  Plain,
  Success,
  Failure,
  Warning,
  Info,
  Dimmed,
}

/// Writes text to `W`, coloured when enabled.
pub struct Terminal<W: Write> {
  out: W,
  color: bool,
}

impl<W: Write> Terminal<W> {
  pub fn new(out: W, color: bool) -> Self {
    Self { out, color }
  }

  /// Writes `text` in `style` followed by a newline.
  pub fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
    self.styled(style, text)?;
    self.out.write_all(b"\n")
  }

  /// Writes an empty line, then `text` as a line.
  pub fn section(&mut self, style: Style, text: &str) -> io::Result<()> {
    self.out.write_all(b"\n")?;
    self.line(style, text)
  }

  /// Writes `text` verbatim.
  pub fn raw(&mut self, text: &str) -> io::Result<()> {
    self.out.write_all(text.as_bytes())
  }

  pub fn newline(&mut self) -> io::Result<()> {
    self.out.write_all(b"\n")
  }

  pub fn flush(&mut self) -> io::Result<()> {
    self.out.flush()
  }

  fn styled(&mut self, style: Style, text: &str) -> io::Result<()> {
    if !self.color {
      return self.out.write_all(text.as_bytes());
    }
    match style {
      Style::Plain => write!(self.out, "{}", text),
      Style::Success => write!(self.out, "{}", text.green()),
      Style::Failure => write!(self.out, "{}", text.red()),
      Style::Warning => write!(self.out, "{}", text.yellow()),
      Style::Info => write!(self.out, "{}", text.bright_cyan()),
      Style::Dimmed => write!(self.out, "{}", text.bright_black()),
    }
  }
}

impl Terminal<Vec<u8>> {
  /// Captured output as text; used by tests and by callers rendering into memory.
  pub fn contents(&self) -> String {
    String::from_utf8_lossy(&self.out).into_owned()
  }
}
