// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered sequence of live notifications and drives
//! their phase transitions from periodic ticks. Notifications are appended
//! at the tail, so display order always equals call order. An optional
//! visibility cap queues overflow notifications until space frees up.

use super::notification::{Category, Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Periodic tick carrying the current instant for deadline checks.
    Tick(Instant),
}

/// Manages the visible notifications and the overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications, in insertion order (oldest first).
    visible: Vec<Notification>,
    /// Queued notifications waiting for a visible slot.
    queue: VecDeque<Notification>,
    /// Optional cap on simultaneously visible notifications.
    max_visible: Option<usize>,
}

impl Manager {
    /// Creates a new empty notification manager with no visibility cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cap on simultaneously visible notifications.
    ///
    /// `None` (the default) means unbounded. When a cap is set, overflow
    /// notifications wait in a FIFO queue and are promoted as slots free
    /// up; a promoted notification's display window starts at promotion.
    pub fn set_max_visible(&mut self, max_visible: Option<usize>) {
        self.max_visible = max_visible;
    }

    /// Pushes a new notification and returns its ID.
    ///
    /// If there is a visible slot (or no cap), the notification is
    /// displayed immediately at the tail of the stack. Otherwise it is
    /// queued and shown when space becomes available.
    ///
    /// Warnings and errors are also emitted as tracing events, since the
    /// toast itself disappears after a few seconds.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();

        match notification.category() {
            Category::Warning => {
                tracing::warn!(message = notification.message(), "warning notification");
            }
            Category::Error => {
                tracing::error!(message = notification.message(), "error notification");
            }
            Category::Info | Category::Success => {
                // Not logged; these are routine feedback.
            }
        }

        if self.has_visible_slot() {
            self.visible.push(notification);
        } else {
            self.queue.push_back(notification);
        }

        id
    }

    /// Dismisses a notification by its ID at the given instant.
    ///
    /// A visible notification begins its hiding phase; its pending
    /// auto-dismiss deadline is cancelled so the timer path cannot start a
    /// second close sequence. A queued notification is dropped outright.
    ///
    /// Returns `true` if a close sequence was started (or a queued entry
    /// removed). Unknown IDs and notifications already hiding return
    /// `false`; the call is always a safe no-op in those cases.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(notification) = self.visible.iter_mut().find(|n| n.id() == id) {
            if notification.is_hiding() {
                return false;
            }
            notification.begin_hiding(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick, advancing every notification past its deadlines.
    ///
    /// Should be called periodically (e.g. every 100 ms) while
    /// notifications are pending. Notifications whose auto-dismiss
    /// deadline has passed begin hiding; notifications whose removal
    /// deadline has passed are dropped from the container. Freed slots are
    /// refilled from the queue.
    pub fn tick(&mut self, now: Instant) {
        for notification in &mut self.visible {
            if notification.should_begin_hiding(now) {
                notification.begin_hiding(now);
            }
        }

        let before = self.visible.len();
        self.visible.retain(|n| !n.should_remove(now));

        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, Instant::now());
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Returns the currently visible notifications in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn has_visible_slot(&self) -> bool {
        self.max_visible.is_none_or(|cap| self.visible.len() < cap)
    }

    /// Promotes queued notifications into freed visible slots.
    ///
    /// Promotion restarts the display window: the auto-dismiss countdown
    /// begins when the notification actually appears, not when it was
    /// pushed.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.has_visible_slot() {
            if let Some(mut notification) = self.queue.pop_front() {
                notification.restart(now);
                self.visible.push(notification);
            } else {
                break;
            }
        }
    }
}
