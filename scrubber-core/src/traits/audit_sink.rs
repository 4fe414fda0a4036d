use crate::models::SanitizationEvent;

/// Destination for per-call sanitization summaries.
///
/// Implementations lock internally: the engine hands events over from `&self`.
pub trait IAuditSink: Send + Sync {
    /// Append one event. Events are never mutated after this.
    fn append(&self, event: SanitizationEvent);

    /// Snapshot of the retained events, oldest first.
    fn events(&self) -> Vec<SanitizationEvent>;

    /// Number of retained events.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every retained event.
    fn clear(&self);
}
