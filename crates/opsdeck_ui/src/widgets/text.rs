//! Text label.

use crate::constants::DEFAULT_FONT_SIZE;
use crate::event::Event;
use crate::layout::{Bounds, Limits, Size};
use crate::renderer::{Color, Renderer};
use crate::text_metrics::TextMetrics;
use crate::widget::Widget;

pub struct Text {
    content: String,
    size: f32,
    color: Color,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_FONT_SIZE,
            color: Color::WHITE,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn metrics(&self) -> TextMetrics {
        TextMetrics::new(self.size)
    }
}

impl<M> Widget<M> for Text {
    fn layout(&self, limits: &Limits) -> Size {
        limits.resolve(self.metrics().measure(&self.content))
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.draw_text(self.content.clone(), bounds.position(), self.size, self.color);
    }

    fn on_event(&mut self, _event: &Event, _bounds: Bounds) -> Option<M> {
        None
    }
}
