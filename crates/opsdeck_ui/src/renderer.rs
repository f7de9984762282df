//! Display-list renderer.
//!
//! Widgets draw through high-level primitives; the renderer records a flat
//! list of [`DrawCommand`]s per frame. Scroll offsets and clip rectangles are
//! applied at record time, so a command in the finished list already carries
//! its final screen coordinates. Backends (or tests, or the snapshot dump)
//! consume the command list; no drawing API leaks into widget code.

use serde::{Deserialize, Serialize};

use crate::layout::{Bounds, Point};

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle.
    FillRect { bounds: Bounds, color: Color },
    /// Rectangle outline.
    StrokeRect {
        bounds: Bounds,
        color: Color,
        width: f32,
    },
    /// A single line of text anchored at its top-left corner.
    Text {
        content: String,
        position: Point,
        size: f32,
        color: Color,
    },
}

/// Records draw commands with clip and scroll-offset stacks.
#[derive(Debug, Default)]
pub struct Renderer {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Bounds>,
    offset_stack: Vec<f32>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded state, ready for the next frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.offset_stack.clear();
    }

    /// Push a clip rectangle; nested clips intersect.
    pub fn push_clip(&mut self, bounds: Bounds) {
        let clip = match self.current_clip() {
            Some(outer) => outer.intersection(&bounds).unwrap_or(Bounds::ZERO),
            None => bounds,
        };
        self.clip_stack.push(clip);
    }

    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    /// Push a vertical scroll offset; content drawn while it is active is
    /// shifted up by `offset` pixels. Offsets nest additively.
    pub fn push_scroll_offset(&mut self, offset: f32) {
        self.offset_stack.push(offset);
    }

    pub fn pop_scroll_offset(&mut self) {
        self.offset_stack.pop();
    }

    /// Filled rectangle, clipped against the active clip.
    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let bounds = self.apply_offset(bounds);
        match self.current_clip() {
            Some(clip) => {
                if let Some(visible) = bounds.intersection(&clip) {
                    self.commands.push(DrawCommand::FillRect {
                        bounds: visible,
                        color,
                    });
                }
            }
            None => self.commands.push(DrawCommand::FillRect { bounds, color }),
        }
    }

    /// Rectangle outline. Culled (not partially clipped) against the clip.
    pub fn stroke_rect(&mut self, bounds: Bounds, color: Color, width: f32) {
        let bounds = self.apply_offset(bounds);
        if self.is_visible(&bounds) {
            self.commands.push(DrawCommand::StrokeRect {
                bounds,
                color,
                width,
            });
        }
    }

    /// A line of text. Culled when its anchor box is fully outside the clip.
    pub fn draw_text(&mut self, content: impl Into<String>, position: Point, size: f32, color: Color) {
        let position = Point::new(position.x, position.y - self.current_offset());
        // Approximate box for culling only; actual metrics live in text_metrics.
        let cull_box = Bounds::new(position.x, position.y, f32::MAX / 2.0, size * 1.5);
        if self.is_visible(&cull_box) {
            self.commands.push(DrawCommand::Text {
                content: content.into(),
                position,
                size,
                color,
            });
        }
    }

    /// Commands recorded so far this frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the frame's commands, leaving the renderer empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn current_clip(&self) -> Option<Bounds> {
        self.clip_stack.last().copied()
    }

    fn current_offset(&self) -> f32 {
        self.offset_stack.iter().sum()
    }

    fn apply_offset(&self, bounds: Bounds) -> Bounds {
        bounds.translated(0.0, -self.current_offset())
    }

    fn is_visible(&self, bounds: &Bounds) -> bool {
        match self.current_clip() {
            Some(clip) => bounds.intersection(&clip).is_some(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_unclipped() {
        let mut r = Renderer::new();
        r.fill_rect(Bounds::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert_eq!(r.commands().len(), 1);
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut r = Renderer::new();
        r.push_clip(Bounds::new(0.0, 0.0, 50.0, 50.0));
        r.fill_rect(Bounds::new(40.0, 40.0, 20.0, 20.0), Color::WHITE);
        r.pop_clip();
        match &r.commands()[0] {
            DrawCommand::FillRect { bounds, .. } => {
                assert_eq!(*bounds, Bounds::new(40.0, 40.0, 10.0, 10.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_fully_clipped_rect_dropped() {
        let mut r = Renderer::new();
        r.push_clip(Bounds::new(0.0, 0.0, 10.0, 10.0));
        r.fill_rect(Bounds::new(100.0, 100.0, 5.0, 5.0), Color::WHITE);
        assert!(r.commands().is_empty());
    }

    #[test]
    fn test_scroll_offset_shifts_content_up() {
        let mut r = Renderer::new();
        r.push_scroll_offset(30.0);
        r.fill_rect(Bounds::new(0.0, 100.0, 10.0, 10.0), Color::WHITE);
        r.pop_scroll_offset();
        match &r.commands()[0] {
            DrawCommand::FillRect { bounds, .. } => assert_eq!(bounds.y, 70.0),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_nested_clips_intersect() {
        let mut r = Renderer::new();
        r.push_clip(Bounds::new(0.0, 0.0, 50.0, 50.0));
        r.push_clip(Bounds::new(25.0, 25.0, 50.0, 50.0));
        r.fill_rect(Bounds::new(0.0, 0.0, 100.0, 100.0), Color::WHITE);
        match &r.commands()[0] {
            DrawCommand::FillRect { bounds, .. } => {
                assert_eq!(*bounds, Bounds::new(25.0, 25.0, 25.0, 25.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_begin_frame_clears() {
        let mut r = Renderer::new();
        r.fill_rect(Bounds::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        r.begin_frame();
        assert!(r.commands().is_empty());
    }
}
