//! Output sinks for patient measurement records.
//!
//! A producer (typically a measurement simulator) calls
//! [`OutputSink::output`] for every record it generates; sinks forward the
//! record to their consumer without blocking or failing the producer.
//!
//! [`TcpSink`] is the network sink: it listens on a TCP port, accepts a
//! single consumer on a background thread, and writes each record to it as
//! one line of `patient_id,timestamp_ms,label,data`. Records produced
//! before the consumer arrives are dropped, and transport failures are
//! routed to an injected [`ErrorReporter`] rather than the caller.
//! [`StreamSink`] and [`FileSink`] cover console and file output under the
//! same contract, so producers can swap implementations behind
//! `Arc<dyn OutputSink>`.

mod error;
mod file;
mod record;
mod reporter;
mod sink;
mod stream;
mod tcp;

pub use error::SinkError;
pub use file::FileSink;
pub use record::VitalsRecord;
pub use reporter::{CollectingReporter, ErrorReporter, LogReporter};
pub use sink::OutputSink;
pub use stream::StreamSink;
pub use tcp::{TcpSink, TcpSinkBuilder};
