// SPDX-License-Identifier: MPL-2.0
//! Celebration overlay: a short burst of spinning stars.
//!
//! Triggered by the easter egg. Stars spawn staggered across the window,
//! spin up and fade out; the whole burst is a pure function of elapsed
//! time, so the frame tick just redraws until [`Celebration::is_finished`]
//! reports done and the overlay is dropped.

use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Theme, Vector};
use std::time::{Duration, Instant};

/// Number of stars in one burst.
const STAR_COUNT: u32 = 30;

/// Delay between consecutive star spawns.
const SPAWN_STAGGER: Duration = Duration::from_millis(50);

/// Lifetime of a single star.
const STAR_LIFETIME: Duration = Duration::from_millis(1000);

/// Peak scale a star reaches at the end of its life.
const PEAK_SCALE: f32 = 1.5;

/// Base outer radius of a star in pixels.
const STAR_RADIUS: f32 = 16.0;

/// A burst of stars anchored at the instant it was triggered.
#[derive(Debug, Clone, Copy)]
pub struct Celebration {
    started_at: Instant,
}

impl Celebration {
    /// Starts a burst at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { started_at: now }
    }

    /// Whether every star has finished its animation.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= Self::total_duration()
    }

    /// Full duration of the burst: last spawn plus one lifetime.
    #[must_use]
    pub fn total_duration() -> Duration {
        SPAWN_STAGGER * (STAR_COUNT - 1) + STAR_LIFETIME
    }

    /// Life progress of star `index` in `[0, 1]`, or `None` if it has not
    /// spawned yet or already finished.
    fn star_progress(&self, index: u32, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.started_at);
        let spawn_at = SPAWN_STAGGER * index;
        let age = elapsed.checked_sub(spawn_at)?;
        if age >= STAR_LIFETIME {
            return None;
        }
        Some(age.as_secs_f32() / STAR_LIFETIME.as_secs_f32())
    }
}

/// Deterministic pseudo-random position for star `index`, as fractions of
/// the window size. Splitmix-style hash so the spread looks random while
/// every burst is identical.
fn star_position(index: u32) -> (f32, f32) {
    let mut z = u64::from(index).wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;

    let x = (z & 0xffff) as f32 / 65536.0;
    let y = ((z >> 16) & 0xffff) as f32 / 65536.0;
    (x, y)
}

/// Size variation per star, in `[1.0, 2.0]`.
fn star_size_factor(index: u32) -> f32 {
    let (x, y) = star_position(index.wrapping_add(STAR_COUNT));
    1.0 + (x + y) / 2.0
}

fn star_path(radius: f32) -> canvas::Path {
    const POINTS: u32 = 5;
    let inner = radius * 0.4;

    canvas::Path::new(|builder| {
        for i in 0..(POINTS * 2) {
            let r = if i % 2 == 0 { radius } else { inner };
            let angle = std::f32::consts::PI * (i as f32) / (POINTS as f32)
                - std::f32::consts::FRAC_PI_2;
            let point = Point::new(r * angle.cos(), r * angle.sin());
            if i == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }
        builder.close();
    })
}

impl<Message> canvas::Program<Message> for Celebration {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let now = Instant::now();
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        for index in 0..STAR_COUNT {
            let Some(progress) = self.star_progress(index, now) else {
                continue;
            };

            let (fx, fy) = star_position(index);
            let center = Vector::new(fx * bounds.width, fy * bounds.height);
            let scale = PEAK_SCALE * progress * star_size_factor(index);
            let rotation = std::f32::consts::TAU * progress;
            let color = Color {
                a: 1.0 - progress,
                ..palette::GOLD
            };

            frame.with_save(|frame| {
                frame.translate(center);
                frame.rotate(rotation);
                frame.scale(scale.max(0.01));
                frame.fill(&star_path(STAR_RADIUS), color);
            });
        }

        vec![frame.into_geometry()]
    }
}
