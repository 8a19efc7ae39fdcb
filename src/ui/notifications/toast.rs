// SPDX-License-Identifier: MPL-2.0
//! Toast widgets for rendering notifications.
//!
//! Toasts appear as small cards with a severity-colored accent, stacked
//! bottom-center over the showcase.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Renders a single toast notification.
pub fn view(notification: &Notification) -> Element<'_, Message> {
    let severity = notification.severity();
    let accent_color = severity.color();

    let glyph_widget = Text::new(severity.glyph())
        .size(typography::BODY)
        .color(accent_color);

    let message_widget = Text::new(notification.message())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss_button = button(Text::new("×").size(typography::BODY))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph_widget).padding(spacing::XXS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders the overlay stack of all visible toasts, bottom-centered.
pub fn overlay(manager: &Manager) -> Element<'_, Message> {
    let toasts: Vec<Element<'_, Message>> = manager.visible().map(view).collect();

    if toasts.is_empty() {
        // An empty container that takes no space.
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let stack = Column::with_children(toasts)
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: iced::Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: 0.2,
                ..base.text
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..iced::Border::default()
            },
            ..button::Style::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            ..button::Style::default()
        },
    }
}
