// SPDX-License-Identifier: MPL-2.0
//! Track model backing one marquee row.
//!
//! The track is the single shared resource between a row's controller and
//! the rendering layer: it stores the auto-scroll position, the optional
//! manual offset override, and the play state. The rendered offset is the
//! manual override when one is set, otherwise the auto-scroll position.
//!
//! Content is drawn twice back to back, so the auto-scroll position wraps
//! at the loop width and the motion appears endless.

use std::time::Duration;

/// Largest time step a single advance may apply.
///
/// Frame ticks stall when the window is suspended or dragged; clamping the
/// step keeps the track from leaping several loops on the first tick back.
const MAX_ADVANCE: Duration = Duration::from_millis(250);

/// Render-surface model for one marquee row.
#[derive(Debug, Clone)]
pub struct Track {
    /// Width in pixels after which the content repeats.
    loop_width: f32,
    /// Signed auto-scroll velocity in px/sec (negative scrolls leftward).
    velocity: f32,
    /// Auto-scroll baseline position, wrapped into `[0, loop_width)`.
    auto_position: f32,
    /// Manual offset override; when set it is what gets rendered.
    manual_offset: Option<f32>,
    /// Whether the auto-scroll animation is paused.
    paused: bool,
}

impl Track {
    /// Creates a track with the given loop width and signed velocity.
    ///
    /// A non-positive loop width is clamped to one pixel so the wrap
    /// arithmetic stays defined.
    #[must_use]
    pub fn new(loop_width: f32, velocity: f32) -> Self {
        Self {
            loop_width: loop_width.max(1.0),
            velocity,
            auto_position: 0.0,
            manual_offset: None,
            paused: false,
        }
    }

    /// Advances the auto-scroll position by `dt`, wrapping at the loop
    /// width. No-op while paused.
    pub fn advance(&mut self, dt: Duration) {
        if self.paused {
            return;
        }
        let dt = dt.min(MAX_ADVANCE);
        let moved = self.auto_position + self.velocity * dt.as_secs_f32();
        self.auto_position = moved.rem_euclid(self.loop_width);
    }

    /// Pauses the auto-scroll animation. The position freezes in place.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes the auto-scroll animation from the frozen position.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether the auto-scroll animation is currently paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Applies a manual offset override. Until cleared, this is the value
    /// the row renders.
    pub fn set_manual_offset(&mut self, px: f32) {
        self.manual_offset = Some(px);
    }

    /// Removes the manual override, returning visuals to the auto-scroll
    /// baseline.
    pub fn clear_manual_offset(&mut self) {
        self.manual_offset = None;
    }

    /// The manual offset override, if one is applied.
    #[must_use]
    pub fn manual_offset(&self) -> Option<f32> {
        self.manual_offset
    }

    /// The presently rendered horizontal offset in pixels.
    ///
    /// Manual steps always compose on top of this value, so offsets left
    /// by a previous hold session or by in-flight auto motion are never
    /// lost.
    #[must_use]
    pub fn current_offset_px(&self) -> f32 {
        self.manual_offset.unwrap_or(self.auto_position)
    }

    /// Whether the track is at its automatic baseline: no manual override
    /// and the animation unpaused.
    #[must_use]
    pub fn is_at_baseline(&self) -> bool {
        self.manual_offset.is_none() && !self.paused
    }

    /// Width in pixels after which the content repeats.
    #[must_use]
    pub fn loop_width(&self) -> f32 {
        self.loop_width
    }

    /// Signed auto-scroll velocity in px/sec.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}
