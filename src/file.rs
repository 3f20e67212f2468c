//! File-backed sink.
//!
//! `FileSink` opens its target file synchronously, so construction failures
//! surface to the caller, then delegates the write path to the stream
//! worker.

use std::{
    fs::{File, OpenOptions},
    path::Path,
    sync::Arc,
};

use crate::{
    error::SinkError,
    record::VitalsRecord,
    reporter::ErrorReporter,
    sink::OutputSink,
    stream::StreamSink,
};

/// Sink appending CSV lines to a file.
pub struct FileSink {
    inner: StreamSink,
}

impl FileSink {
    /// Create or truncate `path` and write records to it.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let file = File::create(path)?;
        Ok(Self {
            inner: StreamSink::new(file),
        })
    }

    /// Open `path` for appending, creating it when missing.
    pub fn append(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            inner: StreamSink::new(file),
        })
    }

    /// As [`FileSink::append`], with an explicit queue capacity and
    /// failure reporter.
    pub fn with_capacity(
        path: impl AsRef<Path>,
        capacity: usize,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Result<Self, SinkError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            inner: StreamSink::with_capacity(file, capacity, reporter),
        })
    }
}

impl OutputSink for FileSink {
    fn output(&self, record: &VitalsRecord) {
        self.inner.output(record);
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("inner", &self.inner)
            .finish()
    }
}
