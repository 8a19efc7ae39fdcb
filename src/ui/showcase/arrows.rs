// SPDX-License-Identifier: MPL-2.0
//! Arrow controls flanking a marquee row.
//!
//! Each arrow is a `mouse_area` rather than a button: the controller
//! needs the raw press/release/leave stream to drive both single-step
//! clicks and press-and-hold scrolling, and a click is simply a press
//! followed by a release over the same control.

use crate::marquee::Direction;
use crate::ui::design_tokens::{opacity, radius, sizing, typography};
use iced::widget::{container, mouse_area, Container, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Events surfaced by one arrow control.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Primary button pressed over the arrow (starts a hold).
    Pressed(Direction),
    /// Primary button released over the arrow (ends the hold, counts as
    /// a click).
    Released(Direction),
    /// Pointer left the arrow (ends the hold without a click).
    Exited(Direction),
}

/// Renders one arrow control.
///
/// `active` mirrors the controller's indicator: the arrow that armed the
/// current manual pause is highlighted until auto-scroll resumes.
pub fn view<'a>(direction: Direction, active: bool) -> Element<'a, Event> {
    let glyph = match direction {
        Direction::Left => "‹",
        Direction::Right => "›",
    };

    let face = Container::new(
        Text::new(glyph)
            .size(typography::HEADING)
            .style(move |theme: &Theme| arrow_text_style(theme, active)),
    )
    .width(Length::Fixed(sizing::ARROW_SIZE))
    .height(Length::Fixed(sizing::ARROW_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |theme: &Theme| arrow_container_style(theme, active));

    mouse_area(face)
        .on_press(Event::Pressed(direction))
        .on_release(Event::Released(direction))
        .on_exit(Event::Exited(direction))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

fn arrow_container_style(theme: &Theme, active: bool) -> container::Style {
    let palette = theme.extended_palette();
    let background = if active {
        palette.primary.base.color
    } else {
        Color {
            a: opacity::SURFACE_TINT,
            ..palette.background.base.text
        }
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: iced::Border {
            radius: radius::MD.into(),
            ..iced::Border::default()
        },
        ..container::Style::default()
    }
}

fn arrow_text_style(theme: &Theme, active: bool) -> iced::widget::text::Style {
    let palette = theme.extended_palette();
    let color = if active {
        palette.primary.base.text
    } else {
        Color {
            a: 1.0 - opacity::INACTIVE,
            ..palette.background.base.text
        }
    };

    iced::widget::text::Style { color: Some(color) }
}
