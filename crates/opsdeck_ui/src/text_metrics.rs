//! Approximate text measurement used during layout.
//!
//! The display list carries text as strings; layout only needs an estimate of
//! the space a string occupies, derived from per-font ratios.

use crate::layout::Size;

/// Ratio-based metrics for a font size.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Font size in pixels.
    pub size: f32,
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f32,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f32,
}

impl TextMetrics {
    /// Create metrics for a font size with the default ratios.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            char_width_ratio: crate::constants::CHAR_WIDTH_FACTOR,
            line_height_ratio: crate::constants::LINE_HEIGHT_FACTOR,
        }
    }

    /// Estimated width of a single line.
    pub fn line_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * self.char_width_ratio
    }

    /// Line height in pixels.
    pub fn line_height(&self) -> f32 {
        self.size * self.line_height_ratio
    }

    /// Estimated extent of possibly multi-line text.
    /// An empty string still occupies one line.
    pub fn measure(&self, text: &str) -> Size {
        let mut line_count = 0usize;
        let mut width = 0.0f32;
        for line in text.lines() {
            line_count += 1;
            width = width.max(self.line_width(line));
        }
        let line_count = line_count.max(1);
        Size::new(width, line_count as f32 * self.line_height())
    }
}

/// Measure `text` at `size` with default ratios.
pub fn measure_text(text: &str, size: f32) -> Size {
    TextMetrics::new(size).measure(text)
}

/// Line height at `size` with default ratios.
pub fn line_height(size: f32) -> f32 {
    TextMetrics::new(size).line_height()
}
