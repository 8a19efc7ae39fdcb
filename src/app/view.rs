// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::toast;
use iced::widget::{canvas, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Composes the page: the showcase in the middle, toasts layered above,
/// and the celebration overlay on top while one is playing.
pub fn view(app: &App) -> Element<'_, Message> {
    let scheme = app.theme_mode.scheme();

    let mut content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new("Skills")
                .size(typography::HEADING)
                .color(scheme.text_primary),
        );

    content = if app.showcase.is_empty() {
        content.push(
            Text::new("Nothing to show yet. Add rows to the catalog.")
                .size(typography::BODY)
                .color(scheme.text_secondary),
        )
    } else {
        content.push(app.showcase.view(&scheme).map(Message::Showcase))
    };

    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_y(alignment::Vertical::Center);

    let mut layers = Stack::new()
        .push(page)
        .push(toast::overlay(&app.notifications).map(Message::Notification));

    if let Some(celebration) = app.celebration {
        layers = layers.push(
            canvas::Canvas::new(celebration)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    layers.into()
}
