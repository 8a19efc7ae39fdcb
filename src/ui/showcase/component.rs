// SPDX-License-Identifier: MPL-2.0
//! Showcase component: the set of marquee rows and their controllers.
//!
//! Owns one [`RowController`] per installable catalog row and translates
//! UI events (arrow press/release/leave, row hover, the frame tick) into
//! controller calls. Rows never interact with each other; every message
//! names the row it belongs to.

use super::arrows;
use super::track_canvas::{self, ChipTrack};
use crate::catalog::Catalog;
use crate::marquee::{Direction, RowController, Track, Tuning};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{canvas, mouse_area, Column, Row, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// One installed marquee row: its display data plus its controller.
#[derive(Debug, Clone)]
pub struct InstalledRow {
    title: Option<String>,
    labels: Vec<String>,
    controller: RowController,
}

impl InstalledRow {
    /// Chip labels shown on this row.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The row's scroll controller.
    #[must_use]
    pub fn controller(&self) -> &RowController {
        &self.controller
    }
}

/// Messages for the showcase component.
#[derive(Debug, Clone)]
pub enum Message {
    /// An arrow control event on one row.
    Arrow { row: usize, event: arrows::Event },
    /// Pointer entered a row's track viewport.
    HoverEntered(usize),
    /// Pointer left a row's track viewport.
    HoverExited(usize),
    /// Periodic frame tick.
    Tick(Instant),
}

/// Showcase component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    rows: Vec<InstalledRow>,
}

impl State {
    /// Builds the showcase from a catalog.
    ///
    /// Rows with no entries are skipped silently; the siblings install
    /// normally. An all-empty catalog yields an empty showcase.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, default_speed: f32, tuning: Tuning) -> Self {
        let rows = catalog
            .installable_rows()
            .map(|spec| {
                let velocity = spec.heading.velocity(spec.effective_speed(default_speed));
                let track = Track::new(track_canvas::loop_width(&spec.entries), velocity);
                InstalledRow {
                    title: spec.title.clone(),
                    labels: spec.entries.clone(),
                    controller: RowController::new(track, tuning),
                }
            })
            .collect();

        Self { rows }
    }

    /// The installed rows.
    #[must_use]
    pub fn rows(&self) -> &[InstalledRow] {
        &self.rows
    }

    /// Whether no row could be installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Handles a showcase message.
    pub fn update(&mut self, message: Message) {
        self.apply_at(message, Instant::now());
    }

    /// Handles a message with an explicit clock, the entry point tests
    /// drive directly. Tick messages carry their own instant and ignore
    /// `now`.
    pub(crate) fn apply_at(&mut self, message: Message, now: Instant) {
        match message {
            Message::Arrow { row, event } => {
                let Some(row) = self.rows.get_mut(row) else {
                    return;
                };
                match event {
                    arrows::Event::Pressed(direction) => {
                        row.controller.hold_started(direction, now);
                    }
                    arrows::Event::Released(direction) => {
                        // A release over the control is also the click.
                        row.controller.hold_released();
                        row.controller.arrow_clicked(direction, now);
                    }
                    arrows::Event::Exited(_) => {
                        row.controller.hold_released();
                    }
                }
            }
            Message::HoverEntered(index) => {
                if let Some(row) = self.rows.get_mut(index) {
                    row.controller.hover_entered();
                }
            }
            Message::HoverExited(index) => {
                if let Some(row) = self.rows.get_mut(index) {
                    row.controller.hover_exited();
                }
            }
            Message::Tick(tick_now) => {
                for row in &mut self.rows {
                    row.controller.tick(tick_now);
                }
            }
        }
    }

    /// Renders all rows.
    pub fn view<'a>(&'a self, scheme: &ColorScheme) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::LG).width(Length::Fill);

        for (index, row) in self.rows.iter().enumerate() {
            column = column.push(self.view_row(index, row, scheme));
        }

        column.into()
    }

    fn view_row<'a>(
        &'a self,
        index: usize,
        row: &'a InstalledRow,
        scheme: &ColorScheme,
    ) -> Element<'a, Message> {
        let active = row.controller.active_arrow();

        let left = arrows::view(Direction::Left, active == Some(Direction::Left))
            .map(move |event| Message::Arrow { row: index, event });
        let right = arrows::view(Direction::Right, active == Some(Direction::Right))
            .map(move |event| Message::Arrow { row: index, event });

        let track = canvas::Canvas::new(ChipTrack::new(
            &row.labels,
            row.controller.offset_px(),
            scheme,
        ))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ROW_HEIGHT));

        let viewport = mouse_area(track)
            .on_enter(Message::HoverEntered(index))
            .on_exit(Message::HoverExited(index));

        let controls = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(left)
            .push(viewport)
            .push(right);

        let mut block = Column::new().spacing(spacing::XS);
        if let Some(title) = &row.title {
            block = block.push(
                Text::new(title.as_str())
                    .size(typography::TITLE)
                    .color(scheme.text_secondary),
            );
        }
        block.push(controls).into()
    }
}
