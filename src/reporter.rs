//! Failure-reporting collaborator injected into sinks.
//!
//! Sinks swallow asynchronous failures rather than surfacing them to the
//! producer; the reporter is how those failures stay visible. The default
//! [`LogReporter`] forwards to the `log` crate, and tests inject
//! [`CollectingReporter`] to assert on reported errors without capturing
//! console output.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::SinkError;

/// Receives the failures a sink swallows on the producer's behalf.
///
/// Implementations must not block for long: `report` runs on the acceptor
/// thread or inside the producer's `output` call.
pub trait ErrorReporter: Send + Sync {
    /// Record one swallowed failure.
    fn report(&self, error: &SinkError);
}

/// Default reporter forwarding to the `log` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &SinkError) {
        match error {
            SinkError::Write(_) => log::warn!("vitalsink: {error}"),
            _ => log::error!("vitalsink: {error}"),
        }
    }
}

/// Reporter retaining every failure message for later inspection.
#[derive(Clone, Default)]
pub struct CollectingReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CollectingReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&self, error: &SinkError) {
        self.messages.lock().push(error.to_string());
    }
}
