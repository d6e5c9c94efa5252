// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are the visual representation of notifications: small cards with
//! a category icon, the message text, and a dismiss button, stacked in one
//! corner of the window. A notification in its hiding phase renders faded,
//! which is the exit cue shown during the removal delay.

use super::manager::Message;
use super::notification::{Category, Notification};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use serde::{Deserialize, Serialize};

/// Screen corner the overlay column is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Anchor {
    /// Parses an anchor name in kebab-case, falling back to the default
    /// corner for anything unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "top-left" => Anchor::TopLeft,
            "top-right" => Anchor::TopRight,
            "bottom-left" => Anchor::BottomLeft,
            _ => Anchor::BottomRight,
        }
    }

    fn horizontal(self) -> alignment::Horizontal {
        match self {
            Anchor::TopLeft | Anchor::BottomLeft => alignment::Horizontal::Left,
            Anchor::TopRight | Anchor::BottomRight => alignment::Horizontal::Right,
        }
    }

    fn vertical(self) -> alignment::Vertical {
        match self {
            Anchor::TopLeft | Anchor::TopRight => alignment::Vertical::Top,
            Anchor::BottomLeft | Anchor::BottomRight => alignment::Vertical::Bottom,
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'static, Message> {
        let accent_color = notification.category().accent_color();
        let hiding = notification.is_hiding();

        let icon_widget =
            icons::sized(Self::category_icon(notification.category()), sizing::ICON_MD);

        let fade = if hiding {
            opacity::OVERLAY_MEDIUM
        } else {
            opacity::OPAQUE
        };
        let message_widget = Text::new(notification.message().to_owned())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: fade,
                    ..theme.palette().text
                }),
            });

        let notification_id = notification.id();
        let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, hiding))
            .into()
    }

    /// Renders the toast overlay for a snapshot of visible notifications.
    ///
    /// Toasts are stacked in display order, oldest first, aligned to the
    /// given screen corner.
    pub fn view_overlay(
        notifications: Vec<Notification>,
        anchor: Anchor,
    ) -> Element<'static, Message> {
        let toasts: Vec<Element<'static, Message>> =
            notifications.iter().map(Self::view).collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(anchor.horizontal());

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(anchor.horizontal())
                .align_y(anchor.vertical())
                .padding(spacing::MD)
                .into()
        }
    }

    /// Returns the icon for the given category.
    fn category_icon(category: Category) -> Svg<'static> {
        match category {
            Category::Info => icons::info_circle(),
            Category::Success => icons::check_circle(),
            Category::Error => icons::exclamation_circle(),
            Category::Warning => icons::exclamation_triangle(),
        }
    }
}

/// Style function for the toast container.
///
/// A hiding toast renders with faded background and accent border, the
/// exit cue preceding removal.
fn toast_container_style(theme: &Theme, accent_color: Color, hiding: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let fade = if hiding {
        opacity::OVERLAY_MEDIUM
    } else {
        opacity::OPAQUE
    };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: bg_color.a * fade,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: fade,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if hiding { shadow::NONE } else { shadow::MD },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, false);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn hiding_toast_fades_accent_border() {
        let theme = Theme::Dark;
        let accent = palette::ERROR_500;
        let style = toast_container_style(&theme, accent, true);

        assert!(style.border.color.a < accent.a);
    }

    #[test]
    fn anchor_from_name_parses_corners() {
        assert_eq!(Anchor::from_name("top-left"), Anchor::TopLeft);
        assert_eq!(Anchor::from_name("top-right"), Anchor::TopRight);
        assert_eq!(Anchor::from_name("bottom-left"), Anchor::BottomLeft);
        assert_eq!(Anchor::from_name("bottom-right"), Anchor::BottomRight);
    }

    #[test]
    fn anchor_from_name_falls_back_to_default() {
        assert_eq!(Anchor::from_name("middle"), Anchor::default());
        assert_eq!(Anchor::default(), Anchor::BottomRight);
    }

    #[test]
    fn category_icons_are_defined() {
        // Just verify icons don't panic when created
        let _ = Toast::category_icon(Category::Info);
        let _ = Toast::category_icon(Category::Success);
        let _ = Toast::category_icon(Category::Error);
        let _ = Toast::category_icon(Category::Warning);
    }

    #[test]
    fn empty_overlay_takes_no_space() {
        let _ = Toast::view_overlay(Vec::new(), Anchor::default());
    }
}
