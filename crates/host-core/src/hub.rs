//! Frame-change notification hub.
//!
//! Hosts dispatch frame-change events to at most one observer. The
//! observer is not reentrant-safe to duplicate, so registration always
//! replaces: installing a new observer drops the previous one instead of
//! accumulating alongside it.

use speedtrace_series_model::FrameNumber;

/// Identifies one registration; a later registration gets a larger id.
pub type SubscriptionId = u64;

/// Receives frame-change events with mutable access to the host
/// environment `E`.
pub trait FrameObserver<E> {
    fn frame_changed(&mut self, env: &mut E, frame: FrameNumber);
}

impl<E, F> FrameObserver<E> for F
where
    F: FnMut(&mut E, FrameNumber),
{
    fn frame_changed(&mut self, env: &mut E, frame: FrameNumber) {
        self(env, frame)
    }
}

/// Single-subscriber event hub with replace-on-register semantics.
pub struct FrameChangeHub<E> {
    active: Option<(SubscriptionId, Box<dyn FrameObserver<E>>)>,
    next_id: SubscriptionId,
}

impl<E> Default for FrameChangeHub<E> {
    fn default() -> Self {
        Self {
            active: None,
            next_id: 1,
        }
    }
}

impl<E> FrameChangeHub<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `observer`, dropping whichever observer was active before.
    pub fn replace(&mut self, observer: Box<dyn FrameObserver<E>>) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        if let Some((old, _)) = self.active.replace((id, observer)) {
            tracing::debug!(replaced = old, with = id, "frame-change observer replaced");
        }
        id
    }

    /// Drop the active observer, if any.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Id of the active registration, if any.
    pub fn active_subscription(&self) -> Option<SubscriptionId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    /// Deliver a frame change to the active observer.
    pub fn dispatch(&mut self, env: &mut E, frame: FrameNumber) {
        if let Some((_, observer)) = self.active.as_mut() {
            observer.frame_changed(env, frame);
        }
    }
}

impl<E> std::fmt::Debug for FrameChangeHub<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameChangeHub")
            .field("active_subscription", &self.active_subscription())
            .finish()
    }
}
