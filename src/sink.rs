use crate::record::VitalsRecord;

/// Trait implemented by all output sinks.
///
/// `OutputSink` is `Send + Sync` so a producer can share one instance across
/// threads behind an `Arc<dyn OutputSink>`. Every implementation must return
/// without blocking on a missing or slow consumer: delivery is best effort,
/// and failures travel through the sink's own error reporter rather than
/// back to the caller.
pub trait OutputSink: Send + Sync {
    /// Forward one record to the sink's consumer.
    fn output(&self, record: &VitalsRecord);
}
