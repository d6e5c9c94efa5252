// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction or stealing input focus.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` entity with categories and
//!   lifecycle phases
//! - [`manager`] - `Manager` for ordering, deadlines, and dismissal
//! - [`shared`] - Shared container handle and the free [`notify`] function
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! The simplest entry point is the fire-and-forget free function backed by
//! a lazily-created singleton container:
//!
//! ```ignore
//! use iced_toasts::notifications::{notify, Category};
//!
//! notify("Saved successfully", Category::Success);
//! ```
//!
//! Applications that prefer to own their container can hold a `Manager`
//! (or a `SharedToasts` handle) directly, drive it with periodic ticks,
//! and render `Toast::view_overlay` on top of their content.
//!
//! # Lifecycle
//!
//! Every notification follows visible -> hiding -> removed. It stays
//! visible for 5 s (or until manually dismissed), then lingers for 300 ms
//! in a faded hiding state before being dropped from the container. The
//! manual and timer-driven paths drive the same transition; whichever
//! fires first wins and the other becomes a no-op.

pub mod manager;
pub mod notification;
pub mod shared;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    Category, Notification, NotificationId, Phase, DISPLAY_DURATION, EXIT_DURATION,
};
pub use shared::{create_toasts, notify, toasts, SharedToasts, Toasts};
pub use toast::{Anchor, Toast};
