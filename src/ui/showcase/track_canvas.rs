// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for one marquee track.
//!
//! Draws the row's chips as pill-shaped cards at the offset the row
//! controller dictates. Content is laid out twice back to back so the
//! wrap at the loop width is seamless.

use crate::ui::design_tokens::{radius, sizing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas;
use iced::{alignment, mouse, Color, Point, Rectangle, Size, Theme};

/// Estimated pixel width of a chip for the given label.
///
/// Canvas text cannot be measured before drawing, so layout uses a fixed
/// per-character advance. Slightly generous is fine; chips just get a bit
/// more breathing room.
#[must_use]
pub fn chip_width(label: &str) -> f32 {
    sizing::CHIP_PADDING * 2.0 + label.chars().count() as f32 * sizing::CHIP_CHAR_ADVANCE
}

/// Total track width of one copy of the content, including trailing gap.
/// This is the loop width the row's track wraps at.
#[must_use]
pub fn loop_width(labels: &[String]) -> f32 {
    labels
        .iter()
        .map(|label| chip_width(label) + sizing::CHIP_GAP)
        .sum()
}

/// Canvas program drawing one row's chips at a fixed offset.
#[derive(Debug)]
pub struct ChipTrack<'a> {
    labels: &'a [String],
    offset: f32,
    loop_width: f32,
    chip_background: Color,
    chip_text: Color,
}

impl<'a> ChipTrack<'a> {
    /// Creates a renderer for the given labels at the rendered offset.
    #[must_use]
    pub fn new(labels: &'a [String], offset: f32, scheme: &ColorScheme) -> Self {
        Self {
            labels,
            offset,
            loop_width: loop_width(labels),
            chip_background: scheme.chip_background,
            chip_text: scheme.chip_text,
        }
    }

    fn draw_chip(&self, frame: &mut canvas::Frame, x: f32, label: &str) {
        let y = (sizing::ROW_HEIGHT - sizing::CHIP_HEIGHT) / 2.0;
        let width = chip_width(label);

        let pill = canvas::Path::rounded_rectangle(
            Point::new(x, y),
            Size::new(width, sizing::CHIP_HEIGHT),
            radius::PILL.into(),
        );
        frame.fill(&pill, self.chip_background);

        frame.fill_text(canvas::Text {
            content: label.to_string(),
            position: Point::new(x + width / 2.0, y + sizing::CHIP_HEIGHT / 2.0),
            color: self.chip_text,
            size: iced::Pixels(f32::from(typography::CHIP)),
            align_x: alignment::Horizontal::Center.into(),
            align_y: alignment::Vertical::Center.into(),
            ..canvas::Text::default()
        });
    }
}

impl<Message> canvas::Program<Message> for ChipTrack<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Normalize so the first copy starts at or left of the viewport.
        let base = self.offset.rem_euclid(self.loop_width) - self.loop_width;

        // Two copies cover any viewport narrower than the loop width;
        // keep stamping further copies for very wide windows.
        let mut copy_start = base;
        while copy_start < bounds.width {
            let mut x = copy_start;
            for label in self.labels {
                let width = chip_width(label);
                if x + width > 0.0 && x < bounds.width {
                    self.draw_chip(&mut frame, x, label);
                }
                x += width + sizing::CHIP_GAP;
            }
            copy_start += self.loop_width;
        }

        vec![frame.into_geometry()]
    }
}
