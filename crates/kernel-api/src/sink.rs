use uuid::Uuid;

/// Sink for non-fatal diagnostics emitted during resolution.
///
/// Shared across concurrent invocations: implementations must serialize
/// writes so a single call is atomic (no interleaved partial messages).
/// Ordering across threads is unspecified.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str, instance: Uuid);
}

/// Forwards warnings to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str, instance: Uuid) {
        tracing::warn!(instance = %instance, "{message}");
    }
}
