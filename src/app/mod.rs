// SPDX-License-Identifier: MPL-2.0
//! Demo application exercising the notification stack.
//!
//! The `App` struct wires the shared toast container into an Iced shell:
//! buttons fire notifications per category, a periodic tick drives the
//! lifecycle deadlines, and the overlay renders on top of the page. Flag
//! overrides beat the config file, which beats built-in defaults.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::notifications::{self, Anchor, Notification, SharedToasts};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Root Iced application state for the demo.
#[derive(Debug)]
pub struct App {
    /// Shared handle to the singleton toast container.
    toasts: SharedToasts,
    /// Screen corner the overlay is anchored to.
    anchor: Anchor,
    /// Cap on simultaneously visible toasts, if any.
    max_visible: Option<usize>,
    /// Config directory override from the CLI, if any.
    config_dir: Option<PathBuf>,
    /// Counter making fired notification messages distinguishable.
    sequence: u64,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());

        let anchor = flags
            .anchor
            .as_deref()
            .map(Anchor::from_name)
            .unwrap_or(config.toasts.anchor);
        let max_visible = flags.max_visible.or(config.toasts.max_visible);

        let toasts = notifications::toasts().clone();
        toasts.set_max_visible(max_visible);

        if let Some(warning) = config_warning {
            toasts.push(Notification::warning(warning));
        }

        let app = App {
            toasts,
            anchor,
            max_visible,
            config_dir,
            sequence: 0,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toasts")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            anchor: self.anchor,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toasts.has_notifications())
    }
}
