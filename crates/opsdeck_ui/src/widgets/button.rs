//! Clickable button with a text label.

use crate::callback::Callback0;
use crate::constants::DEFAULT_FONT_SIZE;
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Limits, Point, Size};
use crate::renderer::Renderer;
use crate::text_metrics::TextMetrics;
use crate::widget::Widget;
use crate::widgets::config::ButtonConfig;

pub struct Button<M> {
    label: String,
    config: ButtonConfig,
    on_press: Callback0<M>,
    pressed: bool,
}

impl<M> Button<M> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            config: ButtonConfig::default(),
            on_press: Callback0::none(),
            pressed: false,
        }
    }

    pub fn config(mut self, config: ButtonConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_press<F>(mut self, f: F) -> Self
    where
        F: Fn(()) -> M + 'static,
    {
        self.on_press = Callback0::new(f);
        self
    }

    fn label_size(&self) -> Size {
        TextMetrics::new(DEFAULT_FONT_SIZE).measure(&self.label)
    }
}

impl<M> Widget<M> for Button<M> {
    fn layout(&self, limits: &Limits) -> Size {
        let label = self.label_size();
        limits.resolve(Size::new(
            label.width + 2.0 * self.config.padding_x,
            label.height + 2.0 * self.config.padding_y,
        ))
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let background = if self.pressed {
            self.config.background_pressed
        } else {
            self.config.background
        };
        renderer.fill_rect(bounds, background);
        renderer.draw_text(
            self.label.clone(),
            Point::new(
                bounds.x + self.config.padding_x,
                bounds.y + self.config.padding_y,
            ),
            DEFAULT_FONT_SIZE,
            self.config.text_color,
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        // Activates on press; hosts rebuild the tree per event, so waiting
        // for the matching release would lose the press across rebuilds.
        match event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } if bounds.contains(*position) => {
                self.pressed = true;
                self.on_press.emit()
            }
            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            } => {
                self.pressed = false;
                None
            }
            _ => None,
        }
    }
}
