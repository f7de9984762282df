//! Type-erased widget wrapper.

use crate::event::Event;
use crate::layout::{Bounds, Limits, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

/// A boxed widget, so containers can hold heterogeneous children.
pub struct Element<M> {
    widget: Box<dyn Widget<M>>,
}

impl<M> Element<M> {
    pub fn new<W: Widget<M> + 'static>(widget: W) -> Self {
        Self {
            widget: Box::new(widget),
        }
    }

    pub fn layout(&self, limits: &Limits) -> Size {
        self.widget.layout(limits)
    }

    pub fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        self.widget.draw(renderer, bounds);
    }

    pub fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        self.widget.on_event(event, bounds)
    }

    pub fn has_active_drag(&self) -> bool {
        self.widget.has_active_drag()
    }
}

impl<M> std::fmt::Debug for Element<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").finish_non_exhaustive()
    }
}

// A blanket `impl<M, W: Widget<M>> From<W> for Element<M>` would conflict
// with core's reflexive `From`, so each widget converts explicitly.
macro_rules! impl_from_widget {
    ($($widget:ident),* $(,)?) => {
        $(
            impl<M: 'static> From<crate::widgets::$widget<M>> for Element<M> {
                fn from(widget: crate::widgets::$widget<M>) -> Self {
                    Element::new(widget)
                }
            }
        )*
    };
}

impl_from_widget!(Button, Column, Container, Panel, Row, ScrollRegion);

impl<M> From<crate::widgets::Text> for Element<M> {
    fn from(widget: crate::widgets::Text) -> Self {
        Element::new(widget)
    }
}
