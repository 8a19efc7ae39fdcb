// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the showcase UI.
//!
//! Single source of truth for colors, spacing, and component sizes so the
//! widgets stay visually consistent. Kept deliberately small; add tokens
//! here rather than scattering literals through view code.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand
    pub const PRIMARY_400: Color = Color::from_rgb(0.45, 0.62, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.25, 0.47, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.18, 0.36, 0.78);

    // Semantic
    pub const SUCCESS_500: Color = Color::from_rgb(0.26, 0.69, 0.28);
    pub const WARNING_500: Color = Color::from_rgb(0.95, 0.61, 0.07);
    pub const ERROR_500: Color = Color::from_rgb(0.90, 0.15, 0.13);
    pub const INFO_500: Color = Color::from_rgb(0.18, 0.53, 0.89);

    // Accents
    pub const GOLD: Color = Color::from_rgb(1.0, 0.84, 0.0);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Subtle surface tint behind chips.
    pub const SURFACE_TINT: f32 = 0.08;
    /// Disabled or inactive control.
    pub const INACTIVE: f32 = 0.45;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of a marquee row viewport.
    pub const ROW_HEIGHT: f32 = 64.0;
    /// Height of a chip within the row.
    pub const CHIP_HEIGHT: f32 = 40.0;
    /// Horizontal padding inside a chip.
    pub const CHIP_PADDING: f32 = 18.0;
    /// Gap between chips on the track.
    pub const CHIP_GAP: f32 = 14.0;
    /// Estimated advance per character of chip label text.
    pub const CHIP_CHAR_ADVANCE: f32 = 9.0;
    /// Square side of an arrow control.
    pub const ARROW_SIZE: f32 = 36.0;
    /// Width of a toast notification card.
    pub const TOAST_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 15.0;
    pub const CHIP: f32 = 15.0;
    pub const TITLE: f32 = 13.0;
    pub const HEADING: f32 = 22.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Chips are pill-shaped: half the chip height.
    pub const PILL: f32 = super::sizing::CHIP_HEIGHT / 2.0;
}

/// Compile-time sanity checks on related tokens.
const _: () = {
    assert!(sizing::CHIP_HEIGHT < sizing::ROW_HEIGHT);
    assert!(radius::PILL * 2.0 == sizing::CHIP_HEIGHT);
};
