// SPDX-License-Identifier: MPL-2.0
//! Update logic for the demo application.

use super::{App, Message};
use crate::config::{self, Config, ToastsConfig};
use crate::notifications::{self, Category};
use iced::Task;

/// Processes a top-level message and mutates application state.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Notify(category) => {
            app.sequence += 1;
            notifications::notify(
                format!("Sample {} notification #{}", category, app.sequence),
                category,
            );
        }
        Message::Burst => {
            // Three in immediate succession, each on its own timeline.
            for label in ["A", "B", "C"] {
                app.sequence += 1;
                notifications::notify(
                    format!("Burst {} #{}", label, app.sequence),
                    Category::Info,
                );
            }
        }
        Message::ClearAll => {
            app.toasts.clear();
        }
        Message::SaveSettings => {
            let config = Config {
                toasts: ToastsConfig {
                    anchor: app.anchor,
                    max_visible: app.max_visible,
                },
            };
            match config::save_with_override(&config, app.config_dir.clone()) {
                Ok(()) => {
                    notifications::notify("Settings saved", Category::Success);
                }
                Err(err) => {
                    notifications::notify(
                        format!("Failed to save settings: {err}"),
                        Category::Error,
                    );
                }
            }
        }
        Message::Notification(notification_message) => {
            app.toasts.handle_message(&notification_message);
        }
        Message::Tick(now) => {
            app.toasts.tick(now);
        }
    }

    Task::none()
}
