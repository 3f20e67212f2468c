//! Listener setup, the acceptor thread, and the record write path.

use std::{
    io::Write,
    net::{SocketAddr, TcpListener, TcpStream},
    sync::Arc,
    thread,
};

use log::info;
use parking_lot::Mutex;

use crate::{
    error::SinkError,
    record::VitalsRecord,
    reporter::ErrorReporter,
    sink::OutputSink,
};

use super::config::TcpSinkBuilder;

/// Slot the acceptor publishes the consumer connection into.
///
/// Written exactly once by the acceptor thread, read by every `output`
/// call. The mutex doubles as the write-path lock, so concurrent producers
/// cannot interleave lines on the wire.
type ConnectionSlot = Arc<Mutex<Option<TcpStream>>>;

/// Server-side TCP sink for a single consumer.
///
/// The state machine per instance is `NoConnection -> Connected`, one way:
/// the acceptor accepts once and exits, the connection is never replaced,
/// and a write failure does not clear the slot. If the accept fails the
/// sink behaves as a discard sink for the rest of its life.
pub struct TcpSink {
    connection: ConnectionSlot,
    local_addr: SocketAddr,
    reporter: Arc<dyn ErrorReporter>,
}

impl TcpSink {
    /// Bind `port` on all interfaces with the default `log`-backed reporter.
    pub fn bind(port: u16) -> Result<Self, SinkError> {
        TcpSinkBuilder::new(port).bind()
    }

    /// Start configuring a sink targeting `port`.
    pub fn builder(port: u16) -> TcpSinkBuilder {
        TcpSinkBuilder::new(port)
    }

    pub(super) fn from_builder(builder: TcpSinkBuilder) -> Result<Self, SinkError> {
        let (host, port, reporter) = builder.into_parts();
        let listener = TcpListener::bind((host.as_str(), port)).map_err(SinkError::Bind)?;
        let local_addr = listener.local_addr().map_err(SinkError::Bind)?;
        info!("TCP sink listening on {local_addr}");

        let connection: ConnectionSlot = Arc::new(Mutex::new(None));
        spawn_acceptor(listener, Arc::clone(&connection), Arc::clone(&reporter));

        Ok(Self {
            connection,
            local_addr,
            reporter,
        })
    }

    /// Address the listener is bound to. Useful when binding port 0 to let
    /// the OS pick a free port.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Whether the acceptor has published a consumer connection yet.
    pub fn is_connected(&self) -> bool {
        self.connection.lock().is_some()
    }

    /// Convenience form of [`OutputSink::output`] building the record in
    /// place from its four fields.
    pub fn output_parts(&self, patient_id: u32, timestamp_ms: i64, label: &str, data: &str) {
        self.output(&VitalsRecord::new(patient_id, timestamp_ms, label, data));
    }
}

impl OutputSink for TcpSink {
    fn output(&self, record: &VitalsRecord) {
        let mut slot = self.connection.lock();
        let Some(stream) = slot.as_mut() else {
            // No consumer yet, or ever: fire and forget.
            return;
        };
        let outcome = writeln!(stream, "{record}").and_then(|()| stream.flush());
        if let Err(err) = outcome {
            // The slot stays occupied: a second consumer is never accepted,
            // so each later call reports its own failure the same way.
            self.reporter.report(&SinkError::Write(err));
        }
    }
}

impl std::fmt::Debug for TcpSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcpSink")
            .field("local_addr", &self.local_addr)
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Accept exactly one consumer and publish its stream into `slot`.
///
/// The thread is detached rather than joined on drop: the accept wait has
/// no cancellation, so joining could hang a sink that never saw a consumer.
/// The listener drops when the closure returns, which closes the listening
/// socket and leaves any later connection attempt refused.
fn spawn_acceptor(listener: TcpListener, slot: ConnectionSlot, reporter: Arc<dyn ErrorReporter>) {
    let thread_reporter = Arc::clone(&reporter);
    let spawned = thread::Builder::new()
        .name("vitalsink-acceptor".to_owned())
        .spawn(move || match listener.accept() {
            Ok((stream, peer)) => {
                info!("consumer connected from {peer}");
                *slot.lock() = Some(stream);
            }
            Err(err) => thread_reporter.report(&SinkError::Accept(err)),
        });
    if let Err(err) = spawned {
        reporter.report(&SinkError::Accept(err));
    }
}
