//! The core widget trait.

use crate::event::Event;
use crate::layout::{Bounds, Limits, Size};
use crate::renderer::Renderer;

/// A UI element parameterized over the application message type `M`.
///
/// Widgets are rebuilt every frame from application state; anything that must
/// survive a frame lives in shared state handles (see [`crate::state`]).
pub trait Widget<M> {
    /// The size this widget wants within the given limits.
    fn layout(&self, limits: &Limits) -> Size;

    /// Record draw commands for this widget at `bounds`.
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// React to an event, optionally producing a message.
    ///
    /// Events are delivered regardless of pointer position; widgets decide
    /// relevance from `bounds`. This is what lets a widget with an active
    /// drag keep receiving moves after the pointer leaves it.
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let _ = (event, bounds);
        None
    }

    /// Whether this widget (or a descendant) currently owns a pointer drag.
    ///
    /// While true, hosts must keep routing pointer events to this subtree
    /// even when the pointer is outside its bounds.
    fn has_active_drag(&self) -> bool {
        false
    }
}
