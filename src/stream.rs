//! Console and generic writer sink.
//!
//! This module defines `StreamSink`, which formats records and writes them
//! to an `io::Write` on a background thread. Records travel over a bounded
//! channel so the producer never blocks on I/O; a full queue drops the
//! record, matching the crate's fire-and-forget delivery semantics.

use std::{
    io::{self, Write},
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::{Receiver, Sender, bounded};
use log::warn;

use crate::{
    error::SinkError,
    record::VitalsRecord,
    reporter::{ErrorReporter, LogReporter},
    sink::OutputSink,
};

/// Default bounded channel capacity used by the worker.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

/// Sink writing CSV lines to an `io::Write` stream.
///
/// Each instance owns a worker thread which receives records via a bounded
/// channel and writes and flushes them one at a time. The writer moves into
/// that thread, so the caller never locks or blocks on I/O.
pub struct StreamSink {
    tx: Option<Sender<VitalsRecord>>,
    handle: Option<JoinHandle<()>>,
    done_rx: Receiver<()>,
}

impl StreamSink {
    /// Sink writing to `stdout` with the default capacity.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Sink writing to an arbitrary writer with the default capacity and
    /// the `log`-backed reporter.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_capacity(writer, DEFAULT_CHANNEL_CAPACITY, Arc::new(LogReporter))
    }

    /// Sink with an explicit queue capacity and failure reporter.
    pub fn with_capacity<W>(
        writer: W,
        capacity: usize,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self
    where
        W: Write + Send + 'static,
    {
        let (tx, rx) = bounded(capacity);
        let (done_tx, done_rx) = bounded(1);
        let handle = thread::spawn(move || {
            let mut writer = writer;
            for record in rx {
                let outcome = writeln!(writer, "{record}").and_then(|()| writer.flush());
                if let Err(err) = outcome {
                    reporter.report(&SinkError::Write(err));
                }
            }
            let _ = done_tx.send(());
        });

        Self {
            tx: Some(tx),
            handle: Some(handle),
            done_rx,
        }
    }
}

impl OutputSink for StreamSink {
    fn output(&self, record: &VitalsRecord) {
        let Some(tx) = &self.tx else {
            return;
        };
        if tx.try_send(record.clone()).is_err() {
            warn!("StreamSink: queue full or shutting down, dropping record");
        }
    }
}

impl std::fmt::Debug for StreamSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSink")
            .field("open", &self.tx.is_some())
            .finish()
    }
}

impl Drop for StreamSink {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain buffered records and exit.
        drop(self.tx.take());
        if self.done_rx.recv_timeout(SHUTDOWN_TIMEOUT).is_err() {
            warn!("StreamSink: worker thread did not shut down within 1s");
            // Detach the thread so teardown continues
            return;
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("StreamSink: worker thread panicked");
            }
        }
    }
}
