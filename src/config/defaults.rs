// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Manual steps**: Offset applied by arrow clicks and press-and-hold
//! - **Timing**: Resume delay, hold cadence, frame tick
//! - **Auto-scroll**: Baseline scroll speed bounds

// ==========================================================================
// Manual Step Defaults
// ==========================================================================

/// Offset in pixels applied by a single arrow click.
pub const CLICK_STEP_PX: f32 = 150.0;

/// Offset in pixels applied by each tick of a press-and-hold session.
pub const HOLD_STEP_PX: f32 = 50.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay before auto-scroll resumes after the last arrow click (milliseconds).
pub const RESUME_DELAY_MS: u64 = 3000;

/// Cadence of press-and-hold offset steps (milliseconds).
pub const HOLD_TICK_MS: u64 = 50;

/// Frame tick period driving auto-scroll and deadline checks (milliseconds).
pub const FRAME_TICK_MS: u64 = 16;

// ==========================================================================
// Auto-scroll Defaults
// ==========================================================================

/// Default auto-scroll speed in pixels per second.
pub const DEFAULT_SPEED_PX_PER_SEC: f32 = 40.0;

/// Minimum allowed auto-scroll speed.
pub const MIN_SPEED_PX_PER_SEC: f32 = 5.0;

/// Maximum allowed auto-scroll speed.
pub const MAX_SPEED_PX_PER_SEC: f32 = 400.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Step validation
    assert!(CLICK_STEP_PX > 0.0);
    assert!(HOLD_STEP_PX > 0.0);
    assert!(CLICK_STEP_PX >= HOLD_STEP_PX);

    // Timing validation
    assert!(RESUME_DELAY_MS > 0);
    assert!(HOLD_TICK_MS > 0);
    assert!(FRAME_TICK_MS > 0);
    assert!(RESUME_DELAY_MS > HOLD_TICK_MS);

    // Speed validation
    assert!(MIN_SPEED_PX_PER_SEC > 0.0);
    assert!(MAX_SPEED_PX_PER_SEC > MIN_SPEED_PX_PER_SEC);
    assert!(DEFAULT_SPEED_PX_PER_SEC >= MIN_SPEED_PX_PER_SEC);
    assert!(DEFAULT_SPEED_PX_PER_SEC <= MAX_SPEED_PX_PER_SEC);
};
