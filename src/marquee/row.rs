// SPDX-License-Identifier: MPL-2.0
//! Per-row scroll controller.
//!
//! Reconciles three independent input sources for one marquee row (a
//! directional arrow click, a directional press-and-hold, and pointer
//! hover over the row) into a single coherent offset and pause/resume
//! state on the row's [`Track`].
//!
//! Precedence rules:
//! - A manual pause (arrow click) always outlives a hover pause: leaving
//!   the row never interrupts an active manual pause; only its own resume
//!   deadline ends it.
//! - Every re-click restarts the resume countdown from zero (last click
//!   wins, the windows do not accumulate).
//! - Offsets are always read back from the track's rendered position, so
//!   clicks and hold steps compose with whatever motion is on screen.
//!
//! Both deferred actions are plain `Option`s replaced wholesale, so at
//! most one resume deadline and one hold session can exist per row.

use super::track::Track;
use crate::config;
use std::time::{Duration, Instant};

/// Direction of a manual scroll step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step the content leftward (negative offset).
    Left,
    /// Step the content rightward (positive offset).
    Right,
}

impl Direction {
    /// Sign of the offset delta this direction applies.
    #[must_use]
    pub fn signum(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Scroll mode of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Resting state: continuous automatic scroll.
    #[default]
    Auto,
    /// Entered by an explicit arrow click; ends when the resume deadline
    /// fires.
    ManualPause,
    /// Entered by pointer hover while in [`Mode::Auto`]; always
    /// subordinate to [`Mode::ManualPause`].
    HoverPause,
}

/// A live press-and-hold session on one arrow.
///
/// Steps are accounted against the session start at a fixed cadence, so a
/// session held for `n * cadence` delivers exactly `n` steps no matter how
/// the frame ticks land.
#[derive(Debug, Clone, Copy)]
pub struct HoldSession {
    direction: Direction,
    started_at: Instant,
    delivered: u32,
}

impl HoldSession {
    /// Direction this session steps in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of steps delivered so far.
    #[must_use]
    pub fn delivered(&self) -> u32 {
        self.delivered
    }
}

/// Tuning knobs for a row controller.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Offset applied by a single arrow click.
    pub click_step_px: f32,
    /// Offset applied by each hold step.
    pub hold_step_px: f32,
    /// Cadence of hold steps.
    pub hold_tick: Duration,
    /// Delay before auto-scroll resumes after the last click.
    pub resume_delay: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            click_step_px: config::CLICK_STEP_PX,
            hold_step_px: config::HOLD_STEP_PX,
            hold_tick: Duration::from_millis(config::HOLD_TICK_MS),
            resume_delay: Duration::from_millis(config::RESUME_DELAY_MS),
        }
    }
}

/// Authoritative state for one marquee row.
#[derive(Debug, Clone)]
pub struct RowController {
    track: Track,
    tuning: Tuning,
    mode: Mode,
    /// Whether the pointer is currently over the row.
    hovering: bool,
    /// Pending "return to auto" deadline, if armed.
    resume_deadline: Option<Instant>,
    /// Live press-and-hold session, if any.
    hold: Option<HoldSession>,
    /// Arrow currently showing the "active" indicator.
    active_arrow: Option<Direction>,
    /// Previous tick instant, for advancing the track.
    last_tick: Option<Instant>,
}

impl RowController {
    /// Creates a controller owning the given track.
    #[must_use]
    pub fn new(track: Track, tuning: Tuning) -> Self {
        Self {
            track,
            tuning,
            mode: Mode::Auto,
            hovering: false,
            resume_deadline: None,
            hold: None,
            active_arrow: None,
            last_tick: None,
        }
    }

    /// Handles a click on one of the row's arrows.
    ///
    /// Pauses auto-scroll, steps the rendered offset by the click step in
    /// `direction`, and (re-)arms the resume deadline. Idempotent with
    /// respect to mode: repeated clicks accumulate steps and restart the
    /// countdown from `now`.
    pub fn arrow_clicked(&mut self, direction: Direction, now: Instant) {
        self.track.pause();
        self.mode = Mode::ManualPause;

        // Cancel-before-reassign: the old deadline must never fire.
        self.resume_deadline = None;

        let stepped = self.track.current_offset_px() + direction.signum() * self.tuning.click_step_px;
        self.track.set_manual_offset(stepped);

        self.resume_deadline = Some(now + self.tuning.resume_delay);
        self.active_arrow = Some(direction);
    }

    /// Begins a press-and-hold session on one arrow.
    ///
    /// Replaces any previous session wholesale, so exactly one tick stream
    /// exists afterward. Deliberately leaves mode, pause state, and the
    /// resume deadline untouched: a hold assumes a prior or concurrent
    /// click has already paused the animation.
    pub fn hold_started(&mut self, direction: Direction, now: Instant) {
        self.hold = Some(HoldSession {
            direction,
            started_at: now,
            delivered: 0,
        });
    }

    /// Ends the press-and-hold session, if one is live.
    ///
    /// Fired on release and when the pointer leaves the arrow. Mode and
    /// the resume deadline are unaffected.
    pub fn hold_released(&mut self) {
        self.hold = None;
    }

    /// Handles the pointer entering the row.
    ///
    /// Pauses the animation visually regardless of mode, but never cancels
    /// an armed resume deadline and never demotes a manual pause.
    pub fn hover_entered(&mut self) {
        self.hovering = true;
        self.track.pause();
        if self.mode == Mode::Auto {
            self.mode = Mode::HoverPause;
        }
    }

    /// Handles the pointer leaving the row.
    ///
    /// Restores the automatic baseline unless a manual pause is active, in
    /// which case the manual pause stays authoritative until its own
    /// deadline fires.
    pub fn hover_exited(&mut self) {
        self.hovering = false;
        if self.mode != Mode::ManualPause {
            self.return_to_auto();
        }
    }

    /// Advances the row clock: delivers due hold steps, moves the
    /// auto-scroll baseline, and fires the resume deadline.
    ///
    /// The track advances before the deadline check so a resume takes
    /// effect at the deadline: motion restarts on the following tick
    /// rather than retroactively covering the paused interval.
    pub fn tick(&mut self, now: Instant) {
        self.deliver_hold_steps(now);

        if let Some(last) = self.last_tick {
            self.track.advance(now.saturating_duration_since(last));
        }
        self.last_tick = Some(now);

        if self.resume_deadline.is_some_and(|deadline| now >= deadline) {
            self.fire_resume();
        }
    }

    /// Applies every hold step owed since the session started.
    ///
    /// `owed = elapsed / cadence` makes the step count a function of time
    /// alone: frame-tick jitter can batch steps but never add or drop one.
    fn deliver_hold_steps(&mut self, now: Instant) {
        let Some(hold) = self.hold else {
            return;
        };

        let elapsed = now.saturating_duration_since(hold.started_at);
        let owed = (elapsed.as_millis() / self.tuning.hold_tick.as_millis()) as u32;

        let mut delivered = hold.delivered;
        while delivered < owed {
            let stepped = self.track.current_offset_px()
                + hold.direction.signum() * self.tuning.hold_step_px;
            self.track.set_manual_offset(stepped);
            delivered += 1;
        }

        if let Some(session) = &mut self.hold {
            session.delivered = delivered;
        }
    }

    /// The armed resume deadline expired: return to automatic scrolling.
    ///
    /// If the pointer is still over the row the visual pause is kept and
    /// the row lands in [`Mode::HoverPause`]; leaving the row then
    /// restores motion.
    fn fire_resume(&mut self) {
        self.resume_deadline = None;
        self.active_arrow = None;
        self.track.clear_manual_offset();

        if self.hovering {
            self.mode = Mode::HoverPause;
        } else {
            self.mode = Mode::Auto;
            self.track.resume();
        }
    }

    fn return_to_auto(&mut self) {
        self.track.clear_manual_offset();
        self.track.resume();
        self.mode = Mode::Auto;
        self.active_arrow = None;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Current scroll mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The presently rendered horizontal offset in pixels.
    #[must_use]
    pub fn offset_px(&self) -> f32 {
        self.track.current_offset_px()
    }

    /// Arrow currently showing the "active" indicator, if any.
    #[must_use]
    pub fn active_arrow(&self) -> Option<Direction> {
        self.active_arrow
    }

    /// Whether a press-and-hold session is live.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.hold.is_some()
    }

    /// Whether the pointer is currently over the row.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Instant at which auto-scroll will resume, if a deadline is armed.
    #[must_use]
    pub fn resume_at(&self) -> Option<Instant> {
        self.resume_deadline
    }

    /// The row's track model.
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Tuning knobs in effect for this row.
    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const MS: Duration = Duration::from_millis(1);

    fn controller() -> RowController {
        // Leftward row, wide enough that wrap never interferes.
        RowController::new(Track::new(10_000.0, -40.0), Tuning::default())
    }

    /// Controller with the track clock already started at `t0`.
    fn started(t0: Instant) -> RowController {
        let mut row = controller();
        row.tick(t0);
        row
    }

    #[test]
    fn click_pauses_and_steps_by_click_step() {
        let t0 = Instant::now();
        let mut row = started(t0);

        row.arrow_clicked(Direction::Left, t0);

        assert_eq!(row.mode(), Mode::ManualPause);
        assert_eq!(row.active_arrow(), Some(Direction::Left));
        assert!(row.track().is_paused());
        assert_abs_diff_eq!(row.offset_px(), -150.0);
    }

    #[test]
    fn repeated_clicks_accumulate_steps() {
        let t0 = Instant::now();
        let mut row = started(t0);

        row.arrow_clicked(Direction::Left, t0);
        row.arrow_clicked(Direction::Left, t0 + 100 * MS);
        row.arrow_clicked(Direction::Right, t0 + 200 * MS);

        assert_abs_diff_eq!(row.offset_px(), -150.0);
        assert_eq!(row.active_arrow(), Some(Direction::Right));
    }

    #[test]
    fn each_click_restarts_resume_countdown() {
        // Click at t=0 and t=2000 ⇒ resume at t=5000, not t=3000.
        let t0 = Instant::now();
        let mut row = started(t0);

        row.arrow_clicked(Direction::Left, t0);
        row.arrow_clicked(Direction::Left, t0 + 2000 * MS);

        row.tick(t0 + 3000 * MS);
        assert_eq!(row.mode(), Mode::ManualPause);
        assert_abs_diff_eq!(row.offset_px(), -300.0);

        row.tick(t0 + 4999 * MS);
        assert_eq!(row.mode(), Mode::ManualPause);

        row.tick(t0 + 5000 * MS);
        assert_eq!(row.mode(), Mode::Auto);
        assert!(row.track().is_at_baseline());
        assert!(row.active_arrow().is_none());
    }

    #[test]
    fn resume_clears_offset_and_indicator() {
        let t0 = Instant::now();
        let mut row = started(t0);

        row.arrow_clicked(Direction::Right, t0);
        row.tick(t0 + 3000 * MS);

        assert_eq!(row.mode(), Mode::Auto);
        assert!(row.resume_at().is_none());
        assert!(row.active_arrow().is_none());
        // Track was paused the whole time, so the baseline has not moved.
        assert_abs_diff_eq!(row.offset_px(), 0.0);
    }

    #[test]
    fn hold_for_500ms_delivers_exactly_ten_steps() {
        let t0 = Instant::now();
        let mut row = started(t0);
        // Pause first so the baseline cannot drift under the hold.
        row.arrow_clicked(Direction::Left, t0);
        let base = row.offset_px();

        row.hold_started(Direction::Left, t0);
        row.tick(t0 + 500 * MS);

        assert_abs_diff_eq!(row.offset_px(), base - 500.0);
    }

    #[test]
    fn hold_steps_are_monotonic_in_held_direction() {
        let t0 = Instant::now();
        let mut row = started(t0);
        row.arrow_clicked(Direction::Right, t0);

        row.hold_started(Direction::Right, t0);
        let mut previous = row.offset_px();
        for ms in [50_u64, 120, 250, 333, 500] {
            row.tick(t0 + Duration::from_millis(ms));
            assert!(row.offset_px() >= previous);
            previous = row.offset_px();
        }
        assert_abs_diff_eq!(row.offset_px(), 150.0 + 500.0);
    }

    #[test]
    fn restarting_a_hold_yields_a_single_tick_stream() {
        let t0 = Instant::now();
        let mut row = started(t0);
        row.arrow_clicked(Direction::Left, t0);

        row.hold_started(Direction::Left, t0);
        row.tick(t0 + 200 * MS); // four steps from the first session
        let before_restart = row.offset_px();

        // New session supersedes the old one entirely.
        row.hold_started(Direction::Left, t0 + 200 * MS);
        row.tick(t0 + 700 * MS);

        // Exactly 10 steps over the 500 ms window, single-session rate.
        assert_abs_diff_eq!(row.offset_px(), before_restart - 500.0);
    }

    #[test]
    fn hold_release_stops_steps_but_keeps_mode_and_deadline() {
        let t0 = Instant::now();
        let mut row = started(t0);
        row.arrow_clicked(Direction::Left, t0);
        row.hold_started(Direction::Left, t0);
        row.tick(t0 + 100 * MS);
        let held = row.offset_px();

        row.hold_released();
        assert!(!row.is_holding());
        row.tick(t0 + 400 * MS);

        assert_abs_diff_eq!(row.offset_px(), held);
        assert_eq!(row.mode(), Mode::ManualPause);
        assert!(row.resume_at().is_some());
    }

    #[test]
    fn hold_without_click_leaves_auto_running_underneath() {
        // Reproduces the source asymmetry: a bare hold steps the rendered
        // offset while the animation is nominally still running.
        let t0 = Instant::now();
        let mut row = started(t0);

        row.hold_started(Direction::Left, t0);
        row.tick(t0 + 500 * MS);

        // Exactly ten 50 px steps over 500 ms, in the held direction.
        assert_eq!(row.mode(), Mode::Auto);
        assert!(!row.track().is_paused());
        assert_abs_diff_eq!(row.offset_px(), -500.0, epsilon = 1e-3);
    }

    #[test]
    fn hover_enter_pauses_without_touching_manual_state() {
        let t0 = Instant::now();
        let mut row = started(t0);
        row.arrow_clicked(Direction::Left, t0);
        let offset = row.offset_px();
        let deadline = row.resume_at();

        row.hover_entered();

        assert_eq!(row.mode(), Mode::ManualPause);
        assert_abs_diff_eq!(row.offset_px(), offset);
        assert_eq!(row.resume_at(), deadline);
    }

    #[test]
    fn hover_exit_is_noop_during_manual_pause() {
        let t0 = Instant::now();
        let mut row = started(t0);
        row.arrow_clicked(Direction::Left, t0);
        row.hover_entered();
        row.hover_exited();

        assert_eq!(row.mode(), Mode::ManualPause);
        assert_abs_diff_eq!(row.offset_px(), -150.0);
        assert!(row.resume_at().is_some());
    }

    #[test]
    fn hover_cycle_in_auto_pauses_and_restores_baseline() {
        let t0 = Instant::now();
        let mut row = started(t0);

        row.hover_entered();
        assert_eq!(row.mode(), Mode::HoverPause);
        assert!(row.track().is_paused());

        row.hover_exited();
        assert_eq!(row.mode(), Mode::Auto);
        assert!(row.track().is_at_baseline());
    }

    #[test]
    fn hover_exit_clears_stray_manual_offset() {
        // A bare hold leaves an override behind; leaving the row returns
        // visuals to the automatic baseline.
        let t0 = Instant::now();
        let mut row = started(t0);
        row.hold_started(Direction::Left, t0);
        row.tick(t0 + 100 * MS);
        row.hold_released();

        row.hover_entered();
        row.hover_exited();

        assert_eq!(row.mode(), Mode::Auto);
        assert!(row.track().is_at_baseline());
    }

    #[test]
    fn resume_firing_under_hover_keeps_visual_pause() {
        let t0 = Instant::now();
        let mut row = started(t0);
        row.arrow_clicked(Direction::Left, t0);
        row.hover_entered();

        row.tick(t0 + 3000 * MS);

        assert_eq!(row.mode(), Mode::HoverPause);
        assert!(row.track().is_paused());
        assert!(row.track().manual_offset().is_none());
        assert!(row.active_arrow().is_none());

        row.hover_exited();
        assert_eq!(row.mode(), Mode::Auto);
        assert!(row.track().is_at_baseline());
    }

    #[test]
    fn direction_signum_and_opposite() {
        assert_eq!(Direction::Left.signum(), -1.0);
        assert_eq!(Direction::Right.signum(), 1.0);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }
}
