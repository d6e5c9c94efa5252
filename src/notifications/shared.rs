// SPDX-License-Identifier: MPL-2.0
//! Shared notification container and the fire-and-forget `notify` entry point.
//!
//! `Toasts` wraps a [`Manager`] behind a mutex so any part of the
//! application can push notifications without owning the manager. The
//! module-scoped [`toasts`] factory provides a lazily-created singleton
//! container with creation-once semantics; repeated calls observe the same
//! instance.

use super::manager::{Manager, Message};
use super::notification::{Category, Notification, NotificationId};
use super::toast::{Anchor, Toast};
use iced::Element;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Instant;

/// Thread-safe notification container.
///
/// Every operation degrades to a no-op if the inner lock is poisoned;
/// pushing a notification is fire-and-forget and must never surface a
/// failure to the caller.
#[derive(Debug, Default)]
pub struct Toasts {
    inner: Mutex<Manager>,
}

impl Toasts {
    /// Creates a new empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notification, returning its ID when the container is
    /// usable.
    pub fn push(&self, notification: Notification) -> Option<NotificationId> {
        match self.inner.lock() {
            Ok(mut manager) => Some(manager.push(notification)),
            Err(_) => {
                tracing::warn!("notification container lock poisoned, dropping notification");
                None
            }
        }
    }

    /// Dismisses a notification by ID at the given instant.
    ///
    /// Returns `true` if a close sequence was started.
    pub fn dismiss(&self, id: NotificationId, now: Instant) -> bool {
        self.inner
            .lock()
            .map(|mut manager| manager.dismiss(id, now))
            .unwrap_or(false)
    }

    /// Advances all pending deadlines to `now`.
    pub fn tick(&self, now: Instant) {
        if let Ok(mut manager) = self.inner.lock() {
            manager.tick(now);
        }
    }

    /// Handles a notification widget message.
    pub fn handle_message(&self, message: &Message) {
        if let Ok(mut manager) = self.inner.lock() {
            manager.handle_message(message);
        }
    }

    /// Sets the cap on simultaneously visible notifications.
    pub fn set_max_visible(&self, max_visible: Option<usize>) {
        if let Ok(mut manager) = self.inner.lock() {
            manager.set_max_visible(max_visible);
        }
    }

    /// Returns a snapshot of the visible notifications in display order.
    pub fn visible(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .map(|manager| manager.visible().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns whether any notifications are pending (visible or queued).
    pub fn has_notifications(&self) -> bool {
        self.inner
            .lock()
            .map(|manager| manager.has_notifications())
            .unwrap_or(false)
    }

    /// Clears all notifications.
    pub fn clear(&self) {
        if let Ok(mut manager) = self.inner.lock() {
            manager.clear();
        }
    }

    /// Renders the toast overlay for the current snapshot.
    pub fn view(&self, anchor: Anchor) -> Element<'static, Message> {
        Toast::view_overlay(self.visible(), anchor)
    }
}

/// Cloneable handle to a shared notification container.
pub type SharedToasts = Arc<Toasts>;

/// Creates a new shared notification container.
pub fn create_toasts() -> SharedToasts {
    Arc::new(Toasts::new())
}

/// Returns the module-scoped singleton container.
///
/// The container is created on first use; every later call returns the
/// same instance, so callers never need an explicit init step.
pub fn toasts() -> &'static SharedToasts {
    static INSTANCE: OnceLock<SharedToasts> = OnceLock::new();
    INSTANCE.get_or_init(create_toasts)
}

/// Pushes a notification onto the singleton container.
///
/// Fire-and-forget: there is no return value and no observable failure.
/// The message is rendered verbatim as plain text.
pub fn notify(message: impl Into<String>, category: Category) {
    toasts().push(Notification::new(category, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_id_and_snapshot_reflects_it() {
        let toasts = Toasts::new();
        let id = toasts.push(Notification::info("test")).expect("usable lock");

        let snapshot = toasts.visible();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id(), id);
    }

    #[test]
    fn snapshot_preserves_display_order() {
        let toasts = Toasts::new();
        toasts.push(Notification::info("A"));
        toasts.push(Notification::info("B"));

        let messages: Vec<String> = toasts
            .visible()
            .iter()
            .map(|n| n.message().to_owned())
            .collect();
        assert_eq!(messages, vec!["A", "B"]);
    }

    #[test]
    fn clear_empties_container() {
        let toasts = Toasts::new();
        toasts.push(Notification::info("test"));
        assert!(toasts.has_notifications());

        toasts.clear();
        assert!(!toasts.has_notifications());
    }

    #[test]
    fn factory_returns_same_instance() {
        assert!(Arc::ptr_eq(toasts(), toasts()));
    }
}
