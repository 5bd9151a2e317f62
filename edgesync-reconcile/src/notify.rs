//! Downstream change notification.
//!
//! The finalized entity and its prior state (if any) are handed to a
//! listener for cluster-wide propagation. Fire-and-forget from the
//! reconciler's perspective.

use async_trait::async_trait;

/// Receives finalized entity changes.
#[async_trait]
pub trait ChangeListener<E>: Send + Sync {
    /// Called after persistence with the saved entity and the state it
    /// replaced, or `None` on creation.
    async fn on_changed(&self, saved: &E, previous: Option<&E>);
}

/// Listener that drops all notifications.
pub struct NoopListener;

#[async_trait]
impl<E: Sync> ChangeListener<E> for NoopListener {
    async fn on_changed(&self, _saved: &E, _previous: Option<&E>) {}
}
