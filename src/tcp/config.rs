//! Builder configuring a [`TcpSink`] before it binds.

use std::sync::Arc;

use crate::{
    error::SinkError,
    reporter::{ErrorReporter, LogReporter},
};

use super::sink::TcpSink;

/// Default host the listener binds to.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Builder for [`TcpSink`].
///
/// Only the port is required; the host defaults to all interfaces and the
/// reporter to the `log`-backed [`LogReporter`].
#[derive(Clone)]
pub struct TcpSinkBuilder {
    host: String,
    port: u16,
    reporter: Arc<dyn ErrorReporter>,
}

impl TcpSinkBuilder {
    /// Start a builder targeting `port`.
    pub fn new(port: u16) -> Self {
        Self {
            host: DEFAULT_BIND_HOST.to_owned(),
            port,
            reporter: Arc::new(LogReporter),
        }
    }

    /// Override the local address the listener binds to.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Inject the reporter receiving accept and write failures.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Bind the listener and start the acceptor thread.
    pub fn bind(self) -> Result<TcpSink, SinkError> {
        TcpSink::from_builder(self)
    }

    pub(super) fn into_parts(self) -> (String, u16, Arc<dyn ErrorReporter>) {
        (self.host, self.port, self.reporter)
    }
}

impl std::fmt::Debug for TcpSinkBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcpSinkBuilder")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
