//! Bordered panel: background fill, outline, padded child.

use crate::constants::PADDING_STANDARD;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Limits, Padding, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::Widget;

pub struct Panel<M> {
    child: Element<M>,
    padding: Padding,
    background: Color,
    border_color: Color,
    border_width: f32,
}

impl<M> Panel<M> {
    pub fn new(child: impl Into<Element<M>>) -> Self {
        Self {
            child: child.into(),
            padding: Padding::uniform(PADDING_STANDARD),
            background: Color::rgb(0.12, 0.12, 0.15),
            border_color: Color::rgb(0.3, 0.3, 0.35),
            border_width: 1.0,
        }
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }
}

impl<M> Widget<M> for Panel<M> {
    fn layout(&self, limits: &Limits) -> Size {
        let inner = self.child.layout(&limits.shrunk(self.padding));
        limits.resolve(Size::new(
            inner.width + self.padding.horizontal(),
            inner.height + self.padding.vertical(),
        ))
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.fill_rect(bounds, self.background);
        renderer.stroke_rect(bounds, self.border_color, self.border_width);
        self.child.draw(renderer, bounds.shrink(self.padding));
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        self.child.on_event(event, bounds.shrink(self.padding))
    }

    fn has_active_drag(&self) -> bool {
        self.child.has_active_drag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;
    use crate::widgets::text::Text;

    #[test]
    fn test_draw_order_background_border_child() {
        let panel: Panel<()> = Panel::new(Text::new("x"));
        let mut renderer = Renderer::new();
        panel.draw(&mut renderer, Bounds::new(0.0, 0.0, 100.0, 40.0));
        assert!(matches!(renderer.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(renderer.commands()[1], DrawCommand::StrokeRect { .. }));
        assert!(matches!(renderer.commands()[2], DrawCommand::Text { .. }));
    }
}
