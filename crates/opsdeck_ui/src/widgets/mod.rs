//! Built-in widgets.

pub mod button;
pub mod column;
pub mod config;
pub mod container;
pub mod panel;
pub mod row;
pub mod scroll_region;
pub mod scrollbar;
pub mod text;

pub use button::Button;
pub use column::Column;
pub use config::{ButtonConfig, ScrollRegionConfig};
pub use container::Container;
pub use panel::Panel;
pub use row::Row;
pub use scroll_region::ScrollRegion;
pub use scrollbar::{
    compute_thumb, offset_for_thumb_top, ScrollbarAccessibility, ThumbState, TrackMetrics,
    ViewportMetrics,
};
pub use text::Text;

use crate::element::Element;
use crate::state::ScrollRegionState;

/// Create a text label.
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

/// Create an empty column.
pub fn column<M>() -> Column<M> {
    Column::new()
}

/// Create an empty row.
pub fn row<M>() -> Row<M> {
    Row::new()
}

/// Create a button with a label.
pub fn button<M>(label: impl Into<String>) -> Button<M> {
    Button::new(label)
}

/// Wrap a child in a padding container.
pub fn container<M>(child: impl Into<Element<M>>) -> Container<M> {
    Container::new(child)
}

/// Wrap a child in a bordered panel.
pub fn panel<M>(child: impl Into<Element<M>>) -> Panel<M> {
    Panel::new(child)
}

/// Create a scroll region over `content`, backed by `state`.
pub fn scroll_region<M>(
    state: &ScrollRegionState,
    content: impl Into<Element<M>>,
) -> ScrollRegion<M> {
    ScrollRegion::new(state, content)
}
