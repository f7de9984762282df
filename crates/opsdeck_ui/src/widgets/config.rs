//! Widget configuration structs for customizable appearance and behavior.
//!
//! These centralize hardcoded values so widgets stay customizable without
//! sprouting constructor parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{
    MIN_THUMB_SIZE, PADDING_COMFORTABLE, PAGE_FRACTION, PAGE_SCROLL_DURATION, SCROLL_SPEED,
    TRACK_INSET, TRACK_THICKNESS,
};
use crate::renderer::Color;

/// Configuration for scroll region appearance and behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollRegionConfig {
    /// Thickness of the scrollbar track
    pub track_thickness: f32,
    /// Distance between the track and the region's right edge
    pub track_inset: f32,
    /// Minimum thumb length along the scroll axis
    pub min_thumb_size: f32,
    /// Track background color
    pub track_color: Color,
    /// Thumb color when idle
    pub thumb_color: Color,
    /// Thumb color while dragging
    pub thumb_active_color: Color,
    /// Multiplier applied to mouse wheel deltas
    pub scroll_speed: f32,
    /// Fraction of the visible extent scrolled by one track click
    pub page_fraction: f32,
    /// Duration of the animated page scroll, in seconds
    pub page_duration: f32,
}

impl Default for ScrollRegionConfig {
    fn default() -> Self {
        Self {
            track_thickness: TRACK_THICKNESS,
            track_inset: TRACK_INSET,
            min_thumb_size: MIN_THUMB_SIZE,
            track_color: Color::rgba(0.15, 0.15, 0.18, 0.6),
            thumb_color: Color::rgb(0.45, 0.45, 0.5),
            thumb_active_color: Color::rgb(0.6, 0.6, 0.68),
            scroll_speed: SCROLL_SPEED,
            page_fraction: PAGE_FRACTION,
            page_duration: PAGE_SCROLL_DURATION,
        }
    }
}

impl ScrollRegionConfig {
    /// Create a new scroll region configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track thickness.
    pub fn track_thickness(mut self, thickness: f32) -> Self {
        self.track_thickness = thickness;
        self
    }

    /// Set the track inset from the right edge.
    pub fn track_inset(mut self, inset: f32) -> Self {
        self.track_inset = inset;
        self
    }

    /// Set the minimum thumb size.
    pub fn min_thumb_size(mut self, size: f32) -> Self {
        self.min_thumb_size = size;
        self
    }

    /// Set the track color.
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the idle thumb color.
    pub fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    /// Set the thumb color used while dragging.
    pub fn thumb_active_color(mut self, color: Color) -> Self {
        self.thumb_active_color = color;
        self
    }

    /// Set the mouse wheel speed multiplier.
    pub fn scroll_speed(mut self, speed: f32) -> Self {
        self.scroll_speed = speed;
        self
    }

    /// Set the fraction of the visible extent scrolled per track click.
    pub fn page_fraction(mut self, fraction: f32) -> Self {
        self.page_fraction = fraction;
        self
    }

    /// Set the page scroll animation duration.
    pub fn page_duration(mut self, duration: f32) -> Self {
        self.page_duration = duration;
        self
    }
}

/// Configuration for button appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Horizontal padding inside the button
    pub padding_x: f32,
    /// Vertical padding inside the button
    pub padding_y: f32,
    /// Background color when idle
    pub background: Color,
    /// Background color while the pointer is pressed on the button
    pub background_pressed: Color,
    /// Label color
    pub text_color: Color,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            padding_x: PADDING_COMFORTABLE,
            padding_y: PADDING_COMFORTABLE / 2.0,
            background: Color::rgb(0.25, 0.35, 0.55),
            background_pressed: Color::rgb(0.2, 0.28, 0.45),
            text_color: Color::WHITE,
        }
    }
}

impl ButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, x: f32, y: f32) -> Self {
        self.padding_x = x;
        self.padding_y = y;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn background_pressed(mut self, color: Color) -> Self {
        self.background_pressed = color;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_region_defaults() {
        let config = ScrollRegionConfig::default();
        assert_eq!(config.track_thickness, 8.0);
        assert_eq!(config.track_inset, 8.0);
        assert_eq!(config.min_thumb_size, 32.0);
        assert_eq!(config.page_fraction, 0.9);
    }

    #[test]
    fn test_config_survives_serde() {
        let config = ScrollRegionConfig::new().track_thickness(10.0);
        let json = serde_json::to_string(&config).expect("serialize");
        let back: ScrollRegionConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.track_thickness, 10.0);
        assert_eq!(back.min_thumb_size, config.min_thumb_size);
    }

    #[test]
    fn test_builder_chaining() {
        let config = ScrollRegionConfig::new()
            .track_thickness(12.0)
            .min_thumb_size(24.0)
            .page_fraction(0.5);
        assert_eq!(config.track_thickness, 12.0);
        assert_eq!(config.min_thumb_size, 24.0);
        assert_eq!(config.page_fraction, 0.5);
    }
}
