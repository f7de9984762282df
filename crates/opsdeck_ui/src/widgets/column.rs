//! Vertical stack of children.

use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Limits, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

pub struct Column<M> {
    children: Vec<Element<M>>,
    spacing: f32,
}

impl<M> Default for Column<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Column<M> {
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

    /// Per-child bounds stacked top to bottom inside `bounds`.
    ///
    /// Layout is recomputed identically on the draw and event paths, so hit
    /// testing always agrees with what was rendered.
    fn child_bounds(&self, bounds: Bounds) -> Vec<Bounds> {
        let limits = Limits::new(bounds.width, f32::INFINITY);
        let mut y = bounds.y;
        self.children
            .iter()
            .map(|child| {
                let size = child.layout(&limits);
                let child_bounds = Bounds::new(bounds.x, y, size.width, size.height);
                y += size.height + self.spacing;
                child_bounds
            })
            .collect()
    }
}

impl<M> Widget<M> for Column<M> {
    fn layout(&self, limits: &Limits) -> Size {
        let child_limits = Limits::new(limits.max_width, f32::INFINITY);
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        for (i, child) in self.children.iter().enumerate() {
            let size = child.layout(&child_limits);
            width = width.max(size.width);
            height += size.height;
            if i + 1 < self.children.len() {
                height += self.spacing;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_FONT_SIZE;
    use crate::text_metrics::line_height;
    use crate::widgets::text::Text;

    #[test]
    fn test_heights_accumulate_with_spacing() {
        let column: Column<()> = Column::new()
            .spacing(4.0)
            .push(Text::new("a"))
            .push(Text::new("b"))
            .push(Text::new("c"));
        let size = column.layout(&Limits::new(500.0, 500.0));
        let line = line_height(DEFAULT_FONT_SIZE);
        assert!((size.height - (line * 3.0 + 8.0)).abs() < 0.001);
    }

    #[test]
    fn test_empty_column_is_zero_sized() {
        let column: Column<()> = Column::new();
        assert_eq!(column.layout(&Limits::new(100.0, 100.0)), Size::ZERO);
    }
}
