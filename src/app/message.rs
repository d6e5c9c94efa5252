// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::{Category, NotificationMessage};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// notification widget messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Fire a single notification of the given category.
    Notify(Category),
    /// Fire three notifications back to back.
    Burst,
    /// Drop every pending notification.
    ClearAll,
    /// Persist the current overlay settings to `settings.toml`.
    SaveSettings,
    /// A message from the toast widgets (dismiss clicks).
    Notification(NotificationMessage),
    /// Periodic tick driving notification deadlines.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// Flags take precedence over the config file, which takes precedence
/// over built-in defaults.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional overlay anchor corner in kebab-case (e.g. `top-left`).
    pub anchor: Option<String>,
    /// Optional cap on simultaneously visible toasts.
    pub max_visible: Option<usize>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_TOASTS_CONFIG_DIR` environment
    /// variable.
    pub config_dir: Option<String>,
}
