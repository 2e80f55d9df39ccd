//! Watch loop: consumes an execution's notification stream and renders it live.

use std::io::{self, Write};
use std::pin::Pin;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{WatchError, WatchFailure};
use crate::flatten::flatten_signatures;
use crate::result_diff::{has_result_difference, print_result_difference};
use crate::structured_log::LineSession;
use crate::terminal::{Style, Terminal};
use crate::types::{Notification, ResultSnapshot, StepSignature};

/// Ordered notifications of one execution.
pub type NotificationStream =
  Pin<Box<dyn Stream<Item = Result<Notification, WatchError>> + Send>>;

/// Opens the notification stream of an execution.
#[async_trait]
pub trait NotificationSource {
  async fn notifications(&self, execution_id: &str) -> Result<NotificationStream, WatchError>;
}

/// Rendering state of one watched execution: the flattened steps, the previous snapshot and the
/// line state of the structured log.
#[derive(Debug)]
pub struct WatchSession {
  steps: Vec<StepSignature>,
  previous: Option<ResultSnapshot>,
  lines: LineSession,
}

impl WatchSession {
  pub fn new(signatures: &[StepSignature]) -> Self {
    Self {
      steps: flatten_signatures(signatures),
      previous: None,
      lines: LineSession::new(),
    }
  }

  pub fn steps(&self) -> &[StepSignature] {
    &self.steps
  }

  /// Last snapshot received so far.
  pub fn last_result(&self) -> Option<&ResultSnapshot> {
    self.previous.as_ref()
  }

  /// Renders one notification.
  pub fn handle<W: Write>(
    &mut self,
    term: &mut Terminal<W>,
    notification: Notification,
  ) -> io::Result<()> {
    match notification {
      Notification::Output(_) => {
        trace!("skipping output notification");
      }
      Notification::Result(result) => {
        if has_result_difference(self.previous.as_ref(), Some(&result), &self.steps) {
          self.lines.reset_line(term)?;
          print_result_difference(term, self.previous.as_ref(), Some(&result), &self.steps)?;
        }
        self.previous = Some(*result);
      }
      Notification::Log(chunk) => {
        self.lines.write_chunk(term, &chunk.log)?;
      }
    }
    Ok(())
  }

  /// Flushes held-back log text and ends the view with a newline.
  pub fn finish<W: Write>(&mut self, term: &mut Terminal<W>) -> io::Result<()> {
    self.lines.finish(term)?;
    term.newline()?;
    term.flush()
  }

  pub fn into_result(self) -> Option<ResultSnapshot> {
    self.previous
  }
}

/// Watches `execution_id` until its notification stream closes and returns the last snapshot.
///
/// A stream or output error ends the watch; the snapshot received before it is kept in the
/// returned [WatchFailure].
#[instrument(level = "trace", skip(term, signatures, source))]
pub async fn watch_logs<S, W>(
  term: &mut Terminal<W>,
  execution_id: &str,
  signatures: &[StepSignature],
  source: &S,
) -> Result<Option<ResultSnapshot>, WatchFailure>
where
  S: NotificationSource + Sync + ?Sized,
  W: Write,
{
  term
    .line(
      Style::Info,
      &format!("Getting logs from test workflow job {}", execution_id),
    )
    .map_err(|e| WatchFailure::new(None, e.into()))?;

  let mut stream = source
    .notifications(execution_id)
    .await
    .map_err(|e| WatchFailure::new(None, e))?;

  let mut session = WatchSession::new(signatures);
  info!(execution_id, steps = session.steps().len(), "watching execution");

  let mut failure = None;
  while let Some(item) = stream.next().await {
    let handled = match item {
      Ok(notification) => session.handle(term, notification).map_err(WatchError::from),
      Err(e) => Err(e),
    };
    if let Err(e) = handled {
      warn!(error = %e, "watch interrupted");
      failure = Some(e);
      break;
    }
  }

  let finished = session.finish(term);
  let result = session.into_result();
  match (failure, finished) {
    (Some(e), _) => Err(WatchFailure::new(result, e)),
    (None, Err(e)) => Err(WatchFailure::new(result, e.into())),
    (None, Ok(())) => {
      debug!(status = ?result.as_ref().and_then(|r| r.status.clone()), "notification stream closed");
      Ok(result)
    }
  }
}
