//! Application-level constants.

/// Logical window width for the headless frame.
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Logical window height for the headless frame.
pub const WINDOW_HEIGHT: f32 = 800.0;

/// Height of the top navigation bar.
pub const NAV_BAR_HEIGHT: f32 = 48.0;

/// Simulated frame interval used when driving animations, in seconds.
pub const FRAME_INTERVAL: f32 = 1.0 / 60.0;
