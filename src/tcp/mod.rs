//! TCP server sink servicing a single consumer.
//!
//! This module defines [`TcpSink`], which binds a listening socket at
//! construction time, accepts exactly one consumer on a background thread,
//! and writes each record to it as one CSV line. Records produced before a
//! consumer connects are dropped silently, and write failures are reported
//! through the injected [`ErrorReporter`](crate::reporter::ErrorReporter)
//! and swallowed, so the producer never observes sink trouble.

mod config;
mod sink;


pub use config::TcpSinkBuilder;
pub use sink::TcpSink;
