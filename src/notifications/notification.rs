// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` entity, its `Category`, and the
//! in-container lifecycle `Phase`. Each notification carries explicit
//! deadlines for its two scheduled transitions (auto-dismiss and removal)
//! so that a manual dismissal can cancel a pending auto-dismiss outright.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// How long a notification stays fully visible before auto-dismiss begins.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// How long a notification lingers in the hiding phase before removal.
///
/// This window lets the exit transition play out before the element is
/// dropped, so dismissal never looks like an abrupt pop. Part of the
/// observable contract, not a tuning knob.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity category determining icon and accent styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Error requiring attention (red).
    Error,
    /// Warning that doesn't block operation (orange).
    Warning,
}

impl Category {
    /// Parses a category name, falling back to `Info` for anything
    /// unrecognized. Matching is case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "success" => Category::Success,
            "error" => Category::Error,
            "warning" => Category::Warning,
            _ => Category::Info,
        }
    }

    /// Returns the lowercase category name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
        }
    }

    /// Returns the stable icon glyph name for this category.
    ///
    /// Consumers depend on this mapping; changing it is a breaking change.
    #[must_use]
    pub fn icon_name(&self) -> &'static str {
        match self {
            Category::Info => "info-circle",
            Category::Success => "check-circle",
            Category::Error => "exclamation-circle",
            Category::Warning => "exclamation-triangle",
        }
    }

    /// Returns the accent color for this category.
    #[must_use]
    pub fn accent_color(&self) -> Color {
        match self {
            Category::Info => palette::INFO_500,
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Warning => palette::WARNING_500,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle phase of a notification while it sits in the container.
///
/// Removal is not a phase: a removed notification is simply absent from
/// the container and never re-enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fully displayed, auto-dismiss deadline pending.
    #[default]
    Visible,
    /// Exit cue playing, removal deadline pending.
    Hiding,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity category (determines icon and accent color).
    category: Category,
    /// Display text, rendered verbatim as plain text.
    message: String,
    /// Current lifecycle phase.
    phase: Phase,
    /// When this notification was created (or last promoted).
    created_at: Instant,
    /// How long the notification stays visible before auto-dismiss.
    display_duration: Duration,
    /// Pending auto-dismiss deadline; cleared once dismissal begins.
    dismiss_at: Option<Instant>,
    /// Pending removal deadline; set when the hiding phase begins.
    remove_at: Option<Instant>,
}

impl Notification {
    /// Creates a new notification with the given category and message.
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        let created_at = Instant::now();
        Self {
            id: NotificationId::new(),
            category,
            message: message.into(),
            phase: Phase::Visible,
            created_at,
            display_duration: DISPLAY_DURATION,
            dismiss_at: Some(created_at + DISPLAY_DURATION),
            remove_at: None,
        }
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Category::Info, message)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Category::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Category::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Category::Warning, message)
    }

    /// Overrides the display window, replacing the default of
    /// [`DISPLAY_DURATION`].
    ///
    /// Useful for notifications that need more time to read.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.display_duration = duration;
        self.dismiss_at = Some(self.created_at + duration);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the exit cue is playing.
    #[must_use]
    pub fn is_hiding(&self) -> bool {
        self.phase == Phase::Hiding
    }

    /// Returns when this notification was created (or last promoted).
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the pending auto-dismiss deadline, if any.
    #[must_use]
    pub fn dismiss_at(&self) -> Option<Instant> {
        self.dismiss_at
    }

    /// Returns the pending removal deadline, if any.
    #[must_use]
    pub fn remove_at(&self) -> Option<Instant> {
        self.remove_at
    }

    /// Begins the hiding phase at `now`.
    ///
    /// Cancels the pending auto-dismiss deadline and schedules removal at
    /// `now + EXIT_DURATION`. Calling this on a notification that is
    /// already hiding is a no-op, so the manual and timer-driven paths
    /// cannot start a second close sequence.
    pub fn begin_hiding(&mut self, now: Instant) {
        if self.phase == Phase::Hiding {
            return;
        }
        self.phase = Phase::Hiding;
        self.dismiss_at = None;
        self.remove_at = Some(now + EXIT_DURATION);
    }

    /// Restarts the display window at `now`.
    ///
    /// Used when a queued notification is promoted to visible: its
    /// auto-dismiss countdown starts from the moment it actually appears.
    pub fn restart(&mut self, now: Instant) {
        self.phase = Phase::Visible;
        self.created_at = now;
        self.dismiss_at = Some(now + self.display_duration);
        self.remove_at = None;
    }

    /// Returns whether the auto-dismiss deadline has passed at `now`.
    #[must_use]
    pub fn should_begin_hiding(&self, now: Instant) -> bool {
        self.dismiss_at.is_some_and(|deadline| now >= deadline)
    }

    /// Returns whether the removal deadline has passed at `now`.
    #[must_use]
    pub fn should_remove(&self, now: Instant) -> bool {
        self.remove_at.is_some_and(|deadline| now >= deadline)
    }
}
