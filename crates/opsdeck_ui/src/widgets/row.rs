//! Horizontal stack of children.

use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Limits, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

pub struct Row<M> {
    children: Vec<Element<M>>,
    spacing: f32,
}

impl<M> Default for Row<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Row<M> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            spacing: DEFAULT_SPACING,
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn push(mut self, child: impl Into<Element<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    fn child_bounds(&self, bounds: Bounds) -> Vec<Bounds> {
        let limits = Limits::new(f32::INFINITY, bounds.height);
        let mut x = bounds.x;
        self.children
            .iter()
            .map(|child| {
                let size = child.layout(&limits);
                let child_bounds = Bounds::new(x, bounds.y, size.width, size.height);
                x += size.width + self.spacing;
                child_bounds
            })
            .collect()
    }
}

impl<M> Widget<M> for Row<M> {
    fn layout(&self, limits: &Limits) -> Size {
        let child_limits = Limits::new(f32::INFINITY, limits.max_height);
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        for (i, child) in self.children.iter().enumerate() {
            let size = child.layout(&child_limits);
            height = height.max(size.height);
            width += size.width;
            if i + 1 < self.children.len() {
                width += self.spacing;
            }
        }
        limits.resolve(Size::new(width, height))
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        for (child, child_bounds) in self.children.iter().zip(self.child_bounds(bounds)) {
            child.draw(renderer, child_bounds);
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let all_bounds = self.child_bounds(bounds);
        for (child, child_bounds) in self.children.iter_mut().zip(all_bounds) {
            if let Some(message) = child.on_event(event, child_bounds) {
                return Some(message);
            }
        }
        None
    }

    fn has_active_drag(&self) -> bool {
        self.children.iter().any(Element::has_active_drag)
    }
}
