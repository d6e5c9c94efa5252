// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Only active while notifications are pending; with nothing to expire
/// there is no reason to wake the event loop.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
