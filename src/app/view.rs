// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The toast overlay is stacked on top of the page content so it never
//! disturbs layout; an empty overlay takes no space.

use super::Message;
use crate::notifications::{Anchor, Category, SharedToasts};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a SharedToasts,
    pub anchor: Anchor,
}

/// Renders the demo page with the toast overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let title = Text::new("Toast notifications").size(typography::TITLE_MD);

    let category_buttons = Row::new()
        .spacing(spacing::XS)
        .push(notify_button("Info", Category::Info))
        .push(notify_button("Success", Category::Success))
        .push(notify_button("Warning", Category::Warning))
        .push(notify_button("Error", Category::Error));

    let action_buttons = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Burst")).on_press(Message::Burst))
        .push(button(Text::new("Clear all")).on_press(Message::ClearAll))
        .push(button(Text::new("Save settings")).on_press(Message::SaveSettings));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(category_buttons)
        .push(action_buttons);

    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let overlay = ctx.toasts.view(ctx.anchor).map(Message::Notification);

    Stack::new()
        .push(page)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn notify_button(label: &'static str, category: Category) -> Element<'static, Message> {
    button(Text::new(label))
        .on_press(Message::Notify(category))
        .into()
}
