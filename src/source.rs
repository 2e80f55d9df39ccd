//! Notification sources: newline-delimited JSON from a file or stdin, and an in-memory channel.

use std::path::PathBuf;
use std::sync::Mutex;

use async_stream::try_stream;
use async_trait::async_trait;
use futures::Stream;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, trace};

use crate::error::WatchError;
use crate::types::Notification;
use crate::watch::{NotificationSource, NotificationStream};

/// Reads one JSON notification per line. Blank lines are skipped; a malformed line ends the
/// stream with an error.
pub struct NdjsonSource {
  /// File to read; stdin when `None`.
  path: Option<PathBuf>,
}

impl NdjsonSource {
  pub fn from_file(path: impl Into<PathBuf>) -> Self {
    Self {
      path: Some(path.into()),
    }
  }

  pub fn stdin() -> Self {
    Self { path: None }
  }
}

#[async_trait]
impl NotificationSource for NdjsonSource {
  async fn notifications(&self, execution_id: &str) -> Result<NotificationStream, WatchError> {
    let reader: Box<dyn AsyncRead + Unpin + Send> = match &self.path {
      Some(path) => {
        debug!(execution_id, path = %path.display(), "reading notifications from file");
        Box::new(tokio::fs::File::open(path).await?)
      }
      None => {
        debug!(execution_id, "reading notifications from stdin");
        Box::new(tokio::io::stdin())
      }
    };
    Ok(Box::pin(read_notifications(BufReader::new(reader))))
  }
}

/// Decodes newline-delimited JSON notifications from `reader`.
pub fn read_notifications<R>(
  reader: R,
) -> impl Stream<Item = Result<Notification, WatchError>> + Send
where
  R: AsyncBufRead + Unpin + Send + 'static,
{
  try_stream! {
    let mut lines = reader.lines();
    let mut line_no = 0usize;
    while let Some(line) = lines.next_line().await? {
      line_no += 1;
      if line.trim().is_empty() {
        continue;
      }
      trace!(line_no, bytes = line.len(), "notification line");
      let notification: Notification = serde_json::from_str(&line)?;
      yield notification;
    }
  }
}

/// Source fed through a channel, for embedding the watcher behind another transport.
/// The stream can be opened once.
pub struct ChannelSource {
  rx: Mutex<Option<mpsc::Receiver<Result<Notification, WatchError>>>>,
}

impl ChannelSource {
  /// Returns the source and the sender that feeds it. Dropping the sender closes the stream.
  pub fn new(buffer: usize) -> (Self, mpsc::Sender<Result<Notification, WatchError>>) {
    let (tx, rx) = mpsc::channel(buffer);
    (
      Self {
        rx: Mutex::new(Some(rx)),
      },
      tx,
    )
  }
}

#[async_trait]
impl NotificationSource for ChannelSource {
  async fn notifications(&self, _execution_id: &str) -> Result<NotificationStream, WatchError> {
    let rx = self
      .rx
      .lock()
      .map_err(|_| WatchError::Stream("channel source lock poisoned".to_string()))?
      .take()
      .ok_or_else(|| WatchError::Stream("channel source already consumed".to_string()))?;
    Ok(Box::pin(ReceiverStream::new(rx)))
  }
}
