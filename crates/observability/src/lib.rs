//! Tracing, logging and line-oriented output sinks (shared setup).

/// Initialize process-wide observability (tracing/logging) with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize process-wide observability with an explicit output format.
pub fn init_with(format: LogFormat) {
    tracing::init_with(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Line-oriented output capability and its composable variants.
pub mod sink;

pub use self::tracing::LogFormat;
pub use sink::{Broadcast, Gated, MemorySink, Sink, SinkError, TracingSink, WriterSink};
