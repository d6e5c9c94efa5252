// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides a toast notification lifecycle manager and the
//! overlay widgets to render it with the Iced GUI framework.
//!
//! Notifications follow a visible -> hiding -> removed lifecycle with a
//! 5 s display window and a 300 ms exit transition. The simplest entry
//! point is the fire-and-forget [`notifications::notify`] function; see
//! the [`notifications`] module for the embedding API.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod notifications;
pub mod ui;
