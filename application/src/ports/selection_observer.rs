//! Selection notification port
//!
//! Defines the interface for hearing about committed selection changes.

use trellis_domain::ComponentId;

/// Callback for selection changes on a check group
///
/// Implementations live in the presentation layer and can react in
/// various ways (console output, recording, etc.). Notification fires
/// only on the listener path — after a change round-trip commits, never
/// during a form's default processing walk.
pub trait SelectionObserver<T>: Send + Sync {
    /// Called after `group`'s new selection has been committed. The
    /// slice is the freshly committed model content, in wire order.
    fn selection_changed(&self, _group: ComponentId, _selection: &[T]) {}
}

/// No-op observer for when selection notifications are not needed
pub struct NoSelectionObserver;

impl<T> SelectionObserver<T> for NoSelectionObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer_accepts_events() {
        let observer = NoSelectionObserver;
        SelectionObserver::<&str>::selection_changed(&observer, ComponentId(0), &["a"]);
    }
}
