//! Error taxonomy shared by the sinks.

use std::io;

use thiserror::Error;

/// Failures a sink can encounter.
///
/// Only `Bind` and `Io` surface synchronously to callers; `Accept` and
/// `Write` happen after construction and are delivered through the sink's
/// [`ErrorReporter`](crate::reporter::ErrorReporter) instead of the
/// producer's call path.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The listening endpoint could not be created.
    #[error("failed to bind listener: {0}")]
    Bind(#[source] io::Error),
    /// The background accept failed; the sink stays consumerless for the
    /// rest of its life.
    #[error("failed to accept consumer: {0}")]
    Accept(#[source] io::Error),
    /// A write to the established consumer connection failed.
    #[error("failed to write record to consumer: {0}")]
    Write(#[source] io::Error),
    /// A sink's backing writer could not be opened.
    #[error(transparent)]
    Io(#[from] io::Error),
}
