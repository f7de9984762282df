//! Input events delivered to widgets.

use crate::layout::Point;

/// Events that widgets can respond to.
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed { button: MouseButton, position: Point },
    /// Mouse button released.
    MouseReleased { button: MouseButton, position: Point },
    /// Mouse moved.
    MouseMoved { position: Point },
    /// Mouse wheel scrolled. Positive delta scrolls the content down.
    MouseWheel { delta: f32, position: Point },
    /// Keyboard key pressed.
    KeyPressed { key: Key, modifiers: Modifiers },
}

impl Event {
    /// The pointer position carried by this event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::MousePressed { position, .. }
            | Event::MouseReleased { position, .. }
            | Event::MouseMoved { position }
            | Event::MouseWheel { position, .. } => Some(*position),
            Event::KeyPressed { .. } => None,
        }
    }

    /// The same event with its pointer position translated by the deltas.
    ///
    /// Used by containers to hand events to scrolled or offset children.
    pub fn translated(&self, dx: f32, dy: f32) -> Event {
        match self {
            Event::MousePressed { button, position } => Event::MousePressed {
                button: *button,
                position: position.translated(dx, dy),
            },
            Event::MouseReleased { button, position } => Event::MouseReleased {
                button: *button,
                position: position.translated(dx, dy),
            },
            Event::MouseMoved { position } => Event::MouseMoved {
                position: position.translated(dx, dy),
            },
            Event::MouseWheel { delta, position } => Event::MouseWheel {
                delta: *delta,
                position: position.translated(dx, dy),
            },
            Event::KeyPressed { .. } => self.clone(),
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys (the subset the dashboard shells react to).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_keeps_button() {
        let event = Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(10.0, 20.0),
        };
        match event.translated(0.0, 5.0) {
            Event::MousePressed { button, position } => {
                assert_eq!(button, MouseButton::Left);
                assert_eq!(position, Point::new(10.0, 25.0));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_key_event_has_no_position() {
        let event = Event::KeyPressed {
            key: Key::Escape,
            modifiers: Modifiers::default(),
        };
        assert!(event.position().is_none());
    }
}
