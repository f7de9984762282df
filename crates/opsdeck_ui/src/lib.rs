//! opsdeck_ui - a small retained-state, immediate-tree widget toolkit
//!
//! Widgets are rebuilt from application state every frame and draw into a
//! display list; state that must survive a frame (scroll positions, drag
//! sessions, animations) lives in shared state handles.

mod callback;
pub mod constants;
mod element;
mod event;
mod layout;
mod renderer;
mod state;
pub mod text_metrics;
mod widget;
pub mod widgets;

pub use callback::{Callback, Callback0};
pub use element::Element;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::{Bounds, Limits, Padding, Point, Size};
pub use renderer::{Color, DrawCommand, Renderer};
pub use state::{
    ChangeKind, ChangeNotifier, DragState, ScrollAnimation, ScrollRegionHandle, ScrollRegionState,
    SubscriptionId,
};
pub use widget::Widget;

// Re-export widgets
pub use widgets::{
    button, column, container, panel, row, scroll_region, text, Button, ButtonConfig, Column,
    Container, Panel, Row, ScrollRegion, ScrollRegionConfig, ScrollbarAccessibility, Text,
    ThumbState, TrackMetrics, ViewportMetrics,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::event::{Event, Key, Modifiers, MouseButton};
    pub use crate::layout::{Bounds, Limits, Padding, Point, Size};
    pub use crate::renderer::{Color, DrawCommand, Renderer};
    pub use crate::state::{ChangeKind, ScrollRegionState};
    pub use crate::widget::Widget;
    pub use crate::widgets::{button, column, container, panel, row, scroll_region, text};
}
