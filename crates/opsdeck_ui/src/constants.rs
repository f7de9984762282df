//! Centralized constants for opsdeck_ui.
//!
//! Magic numbers shared across widgets live here so defaults stay consistent.

// =============================================================================
// Typography
// =============================================================================

/// Default font size used across most widgets
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Smaller font size for secondary text
pub const SMALL_FONT_SIZE: f32 = 12.0;

/// Approximate character width as a ratio of font size
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Layout & Spacing
// =============================================================================

/// Default spacing between children in Column/Row
pub const DEFAULT_SPACING: f32 = 8.0;

/// Standard padding inside containers and panels
pub const PADDING_STANDARD: f32 = 8.0;

/// Comfortable padding (buttons, cards)
pub const PADDING_COMFORTABLE: f32 = 16.0;

// =============================================================================
// Scroll Region
// =============================================================================

/// Default scrollbar track thickness
pub const TRACK_THICKNESS: f32 = 8.0;

/// Default distance between the track and the region's far edge
pub const TRACK_INSET: f32 = 8.0;

/// Default minimum scrollbar thumb size
pub const MIN_THUMB_SIZE: f32 = 32.0;

/// Overflow slack: content must exceed the viewport by more than this many
/// pixels before the scrollbar appears, so the thumb does not flicker when
/// the two extents are effectively equal.
pub const OVERFLOW_EPSILON: f32 = 0.5;

/// Fraction of the visible extent scrolled by one track click
pub const PAGE_FRACTION: f32 = 0.9;

/// Duration of the animated page-scroll transition, in seconds
pub const PAGE_SCROLL_DURATION: f32 = 0.2;

/// Scroll speed multiplier for mouse wheel deltas
pub const SCROLL_SPEED: f32 = 1.0;
