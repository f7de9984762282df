//! Single-child container with padding and an optional background.

use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Limits, Padding, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::Widget;

pub struct Container<M> {
    child: Element<M>,
    padding: Padding,
    background: Option<Color>,
}

impl<M> Container<M> {
    pub fn new(child: impl Into<Element<M>>) -> Self {
        Self {
            child: child.into(),
            padding: Padding::ZERO,
            background: None,
        }
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

impl<M> Widget<M> for Container<M> {
    fn layout(&self, limits: &Limits) -> Size {
        let inner = self.child.layout(&limits.shrunk(self.padding));
        limits.resolve(Size::new(
            inner.width + self.padding.horizontal(),
            inner.height + self.padding.vertical(),
        ))
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        if let Some(color) = self.background {
            renderer.fill_rect(bounds, color);
        }
        self.child.draw(renderer, bounds.shrink(self.padding));
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        self.child.on_event(event, bounds.shrink(self.padding))
    }

    fn has_active_drag(&self) -> bool {
        self.child.has_active_drag()
    }
}
