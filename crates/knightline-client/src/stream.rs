//! Newline-delimited JSON record streams.
//!
//! A [`RecordStream`] is fed by one background task that owns the response
//! body. The task reads one line at a time, skips blank lines, decodes every
//! other line into `T` and pushes it into a bounded channel. It stops on end
//! of input, on the first malformed line, on a read error, or when cancelled;
//! in every case it drops the body before the channel closes.

use std::fmt;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, OnceLock};
use std::task::{Context, Poll};

use futures::{Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio_util::io::StreamReader;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Why a record stream stopped producing records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEnd {
    /// The server closed the body.
    Eof,
    /// The stream was cancelled or dropped by the consumer.
    Cancelled,
    /// A line could not be decoded. Records before it were delivered.
    Malformed {
        /// One-based line number, blank lines included.
        line: usize,
        /// Decoder message.
        message: String,
    },
    /// Reading the body failed.
    Transport(String),
}

impl StreamEnd {
    /// Returns true for the endings a consumer does not need to treat as
    /// failures.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        matches!(self, Self::Eof | Self::Cancelled)
    }
}

impl fmt::Display for StreamEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => write!(f, "end of stream"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Malformed { line, message } => write!(f, "malformed record on line {line}: {message}"),
            Self::Transport(message) => write!(f, "read failed: {message}"),
        }
    }
}

/// Handle that stops the reader task of a [`RecordStream`].
///
/// Cloning is cheap. Cancelling more than once, or after the stream ended on
/// its own, does nothing.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    /// Asks the reader task to stop and release the response body.
    ///
    /// Records already buffered are still delivered before the stream ends.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns true once [`cancel`](Self::cancel) was called or the stream
    /// was dropped.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Lazily produced, single-consumer sequence of decoded records.
///
/// Records arrive in wire order. The sequence ends with `None` for every kind
/// of termination; [`termination`](Self::termination) tells them apart once
/// the end was observed. Dropping the stream cancels the reader task.
pub struct RecordStream<T> {
    records: mpsc::Receiver<T>,
    end: Arc<OnceLock<StreamEnd>>,
    token: CancellationToken,
}

impl<T> RecordStream<T> {
    /// Returns why the stream ended, or `None` while the reader is running.
    ///
    /// Always `Some` after the stream yielded `None`.
    #[must_use]
    pub fn termination(&self) -> Option<&StreamEnd> {
        self.end.get()
    }

    /// Returns a handle that cancels this stream.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            token: self.token.clone(),
        }
    }
}

impl<T> Stream for RecordStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.records.poll_recv(cx)
    }
}

impl<T> Drop for RecordStream<T> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl<T> fmt::Debug for RecordStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStream")
            .field("buffered", &self.records.len())
            .field("termination", &self.end.get())
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}

/// Decodes newline-delimited JSON from `reader` on a background task.
///
/// At most `capacity` decoded records wait in memory; beyond that the task
/// stops reading until the consumer catches up. Must be called from within a
/// tokio runtime.
pub fn decode_ndjson<T, R>(reader: R, capacity: usize) -> (RecordStream<T>, CancelHandle)
where
    T: DeserializeOwned + Send + 'static,
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let token = CancellationToken::new();
    let end = Arc::new(OnceLock::new());

    tokio::spawn(run_reader(reader, tx, token.clone(), Arc::clone(&end)));

    let stream = RecordStream {
        records: rx,
        end,
        token: token.clone(),
    };
    (stream, CancelHandle { token })
}

/// Decodes a newline-delimited JSON response body.
///
/// The stream takes ownership of the response; the connection is released
/// when the stream ends.
pub fn stream_response<T>(response: reqwest::Response, capacity: usize) -> (RecordStream<T>, CancelHandle)
where
    T: DeserializeOwned + Send + 'static,
{
    let body = Box::pin(response.bytes_stream().map_err(io::Error::other));
    decode_ndjson(StreamReader::new(body), capacity)
}

/// Reader task body: pumps records, then releases the reader before the
/// channel closes.
async fn run_reader<T, R>(
    mut reader: R,
    tx: mpsc::Sender<T>,
    token: CancellationToken,
    end: Arc<OnceLock<StreamEnd>>,
) where
    T: DeserializeOwned,
    R: AsyncBufRead + Unpin,
{
    let outcome = pump(&mut reader, &tx, &token).await;
    drop(reader);

    if outcome.is_clean() {
        debug!(%outcome, "record stream finished");
    } else {
        warn!(%outcome, "record stream aborted");
    }

    let _ = end.set(outcome);
    drop(tx);
}

async fn pump<T, R>(reader: &mut R, tx: &mpsc::Sender<T>, token: &CancellationToken) -> StreamEnd
where
    T: DeserializeOwned,
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    let mut line_no = 0usize;

    loop {
        if token.is_cancelled() {
            return StreamEnd::Cancelled;
        }

        line.clear();
        let read = tokio::select! {
            biased;
            () = token.cancelled() => return StreamEnd::Cancelled,
            read = reader.read_until(b'\n', &mut line) => read,
        };

        match read {
            Ok(0) => return StreamEnd::Eof,
            Ok(_) => line_no += 1,
            Err(e) => return StreamEnd::Transport(e.to_string()),
        }

        let payload = line.trim_ascii();
        if payload.is_empty() {
            trace!(line = line_no, "skipping blank line");
            continue;
        }

        let record: T = match serde_json::from_slice(payload) {
            Ok(record) => record,
            Err(e) => {
                return StreamEnd::Malformed {
                    line: line_no,
                    message: e.to_string(),
                };
            }
        };

        tokio::select! {
            biased;
            () = token.cancelled() => return StreamEnd::Cancelled,
            sent = tx.send(record) => {
                // Receiver gone: nobody is listening any more.
                if sent.is_err() {
                    return StreamEnd::Cancelled;
                }
            }
        }
    }
}
