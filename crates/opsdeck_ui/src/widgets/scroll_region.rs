//! Scroll region: a clipped viewport over taller content, with an overlay
//! scrollbar.
//!
//! The widget is rebuilt every frame; scroll position, drag sessions and
//! page animations live in [`ScrollRegionState`], reached through a weak
//! handle. Each frame the widget measures its content, reports viewport and
//! track geometry into the state, and renders whatever thumb the state's
//! change observer derived from it. Events mutate the state through the same
//! handle; a region whose state was dropped mid-gesture degrades to a plain
//! clipped container.

use crate::callback::{Callback, Callback0};
use crate::element::Element;
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Limits, Size};
use crate::renderer::Renderer;
use crate::state::{ScrollRegionHandle, ScrollRegionState};
use crate::widget::Widget;
use crate::widgets::config::ScrollRegionConfig;
use crate::widgets::scrollbar::TrackMetrics;

/// A vertically scrollable viewport with an overlay scrollbar.
pub struct ScrollRegion<M> {
    handle: ScrollRegionHandle,
    content: Element<M>,
    config: ScrollRegionConfig,
    on_scroll: Callback<f32, M>,
    on_drag_start: Callback0<M>,
    on_drag_end: Callback0<M>,
    height: Option<f32>,
}

impl<M> ScrollRegion<M> {
    pub fn new(state: &ScrollRegionState, content: impl Into<Element<M>>) -> Self {
        Self {
            handle: state.handle(),
            content: content.into(),
            config: ScrollRegionConfig::default(),
            on_scroll: Callback::none(),
            on_drag_start: Callback0::none(),
            on_drag_end: Callback0::none(),
            height: None,
        }
    }

    /// Replace the appearance/behavior configuration.
    pub fn config(mut self, config: ScrollRegionConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the viewport height. Required when the parent offers unbounded
    /// vertical space (a scroll region cannot adopt its content's height).
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Message to emit whenever user input changes the scroll offset.
    pub fn on_scroll<F>(mut self, f: F) -> Self
    where
        F: Fn(f32) -> M + 'static,
    {
        self.on_scroll = Callback::new(f);
        self
    }

    /// Message to emit when a thumb drag session begins.
    pub fn on_drag_start<F>(mut self, f: F) -> Self
    where
        F: Fn(()) -> M + 'static,
    {
        self.on_drag_start = Callback0::new(f);
        self
    }

    /// Message to emit when a thumb drag session ends.
    pub fn on_drag_end<F>(mut self, f: F) -> Self
    where
        F: Fn(()) -> M + 'static,
    {
        self.on_drag_end = Callback0::new(f);
        self
    }

    /// Measure content and report this frame's geometry into the state.
    ///
    /// Runs on both draw and event paths so the state never acts on stale
    /// extents; every write is change-detected, so a quiet frame notifies
    /// nothing.
    fn sync_geometry(&self, bounds: Bounds) {
        let limits = Limits::new(bounds.width, bounds.height).with_unbounded_height();
        let content_size = self.content.layout(&limits);
        self.handle.set_visible_extent(bounds.height);
        self.handle.set_content_extent(content_size.height);
        let track = self.track_bounds(bounds);
        self.handle
            .set_track(TrackMetrics::new(track.height, track.y));
        self.handle.set_min_thumb_size(self.config.min_thumb_size);
    }

    /// Screen-space strip the scrollbar occupies.
    fn track_bounds(&self, bounds: Bounds) -> Bounds {
        Bounds::new(
            bounds.right() - self.config.track_inset - self.config.track_thickness,
            bounds.y + self.config.track_inset,
            self.config.track_thickness,
            (bounds.height - 2.0 * self.config.track_inset).max(0.0),
        )
    }

    /// Bounds of the content in its own (unscrolled) coordinate space.
    fn content_bounds(&self, bounds: Bounds) -> Bounds {
        let content_height = self
            .handle
            .metrics()
            .map(|m| m.content_extent)
            .unwrap_or(bounds.height);
        Bounds::new(bounds.x, bounds.y, bounds.width, content_height)
    }

    fn emit_scroll(&self) -> Option<M> {
        self.on_scroll.call(self.handle.scroll_offset())
    }

    /// Hand the event to the content, translated into content coordinates.
    ///
    /// Pointer events outside the region are dropped unless a descendant
    /// owns an active drag.
    fn forward_to_content(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        if let Some(position) = event.position() {
            if !bounds.contains(position) && !self.content.has_active_drag() {
                return None;
            }
        }
        let offset = self.handle.scroll_offset();
        let content_bounds = self.content_bounds(bounds);
        self.content
            .on_event(&event.translated(0.0, offset), content_bounds)
    }
}

impl<M> Widget<M> for ScrollRegion<M> {
    fn layout(&self, limits: &Limits) -> Size {
        // Fills the space it is given; the content's own height only
        // determines how far it can scroll.
        let height = match self.height {
            Some(height) => height.min(limits.max_height),
            None => limits.max_height,
        };
        Size::new(limits.max_width, height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        self.sync_geometry(bounds);

        let offset = self.handle.scroll_offset();
        renderer.push_clip(bounds);
        renderer.push_scroll_offset(offset);
        self.content.draw(renderer, self.content_bounds(bounds));
        renderer.pop_scroll_offset();

        // Scrollbar overlays the content and does not scroll with it.
        if let (Some(track), Some(thumb)) = (self.handle.track(), self.handle.thumb()) {
            if thumb.visible {
                let track_bounds = self.track_bounds(bounds);
                renderer.fill_rect(track_bounds, self.config.track_color);
                let color = if self.handle.is_dragging() {
                    self.config.thumb_active_color
                } else {
                    self.config.thumb_color
                };
                renderer.fill_rect(
                    thumb.bounds(&track, track_bounds.x, self.config.track_thickness),
                    color,
                );
            }
        }
        renderer.pop_clip();
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        self.sync_geometry(bounds);

        match event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => {
                if let (Some(track), Some(thumb)) = (self.handle.track(), self.handle.thumb()) {
                    if thumb.visible {
                        let track_bounds = self.track_bounds(bounds);
                        let thumb_bounds =
                            thumb.bounds(&track, track_bounds.x, self.config.track_thickness);
                        if thumb_bounds.contains(*position) {
                            self.handle.begin_drag(position.y);
                            return self.on_drag_start.emit();
                        }
                        if track_bounds.contains(*position) {
                            // Click above the thumb pages up, below pages down.
                            let forward = position.y > thumb_bounds.y;
                            self.handle.page_scroll(
                                forward,
                                self.config.page_fraction,
                                self.config.page_duration,
                            );
                            return None;
                        }
                    }
                }
                self.forward_to_content(event, bounds)
            }
            Event::MouseMoved { position } => {
                if self.handle.is_dragging() {
                    self.handle.drag_to(position.y);
                    self.emit_scroll()
                } else {
                    self.forward_to_content(event, bounds)
                }
            }
            Event::MouseReleased { .. } => {
                // Release anywhere ends the session; the gesture consumed it.
                if self.handle.end_drag() {
                    self.on_drag_end.emit()
                } else {
                    self.forward_to_content(event, bounds)
                }
            }
            Event::MouseWheel { delta, position } => {
                let scrollable = self
                    .handle
                    .metrics()
                    .map(|m| m.has_overflow())
                    .unwrap_or(false);
                if bounds.contains(*position) && scrollable {
                    self.handle.scroll_by(delta * self.config.scroll_speed);
                    self.emit_scroll()
                } else {
                    self.forward_to_content(event, bounds)
                }
            }
            Event::MousePressed { .. } | Event::KeyPressed { .. } => {
                self.forward_to_content(event, bounds)
            }
        }
    }

    fn has_active_drag(&self) -> bool {
        self.handle.is_dragging() || self.content.has_active_drag()
    }
}

impl<M> std::fmt::Debug for ScrollRegion<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollRegion")
            .field("handle", &self.handle)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;
    use crate::renderer::{Color, DrawCommand};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Msg {
        Scrolled(f32),
        ContentClicked,
        DragStarted,
        DragEnded,
    }

    /// Fixed-height content that records the content-space Y of clicks.
    struct TallProbe {
        height: f32,
        last_click_y: Rc<Cell<Option<f32>>>,
    }

    impl Widget<Msg> for TallProbe {
        fn layout(&self, limits: &Limits) -> Size {
            Size::new(limits.max_width, self.height)
        }

        fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
            renderer.fill_rect(bounds, Color::rgb(0.1, 0.1, 0.1));
        }

        fn on_event(&mut self, event: &Event, _bounds: Bounds) -> Option<Msg> {
            if let Event::MousePressed { position, .. } = event {
                self.last_click_y.set(Some(position.y));
                return Some(Msg::ContentClicked);
            }
            None
        }
    }

    impl From<TallProbe> for Element<Msg> {
        fn from(widget: TallProbe) -> Self {
            Element::new(widget)
        }
    }

    struct Fixture {
        state: ScrollRegionState,
        last_click_y: Rc<Cell<Option<f32>>>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                state: ScrollRegionState::new(),
                last_click_y: Rc::default(),
            }
        }

        fn region(&self) -> ScrollRegion<Msg> {
            ScrollRegion::new(
                &self.state,
                TallProbe {
                    height: 2000.0,
                    last_click_y: Rc::clone(&self.last_click_y),
                },
            )
            .on_scroll(Msg::Scrolled)
        }
    }

    // 400px viewport with 8px track insets leaves a 384px track.
    fn region_bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 300.0, 400.0)
    }

    fn press(x: f32, y: f32) -> Event {
        Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_wheel_scrolls_and_emits() {
        let fixture = Fixture::new();
        let mut region = fixture.region();
        let event = Event::MouseWheel {
            delta: 120.0,
            position: Point::new(150.0, 200.0),
        };
        let msg = region.on_event(&event, region_bounds());
        assert_eq!(msg, Some(Msg::Scrolled(120.0)));
        assert_eq!(fixture.state.scroll_offset(), 120.0);
    }

    #[test]
    fn test_wheel_outside_bounds_ignored() {
        let fixture = Fixture::new();
        let mut region = fixture.region();
        let event = Event::MouseWheel {
            delta: 120.0,
            position: Point::new(500.0, 200.0),
        };
        assert!(region.on_event(&event, region_bounds()).is_none());
        assert_eq!(fixture.state.scroll_offset(), 0.0);
    }

    #[test]
    fn test_thumb_drag_follows_pointer_outside_bounds() {
        let fixture = Fixture::new();
        fixture.state.set_visible_extent(400.0);
        fixture.state.set_content_extent(2000.0);
        let mut region = fixture.region();
        let bounds = region_bounds();

        // Thumb at the top of the 384px track: 8..84 vertically, on the
        // 8px strip at x=284..292.
        region.on_event(&press(288.0, 40.0), bounds);
        assert!(region.has_active_drag());

        // The pointer leaves the region; the drag keeps tracking it.
        let msg = region.on_event(
            &Event::MouseMoved {
                position: Point::new(900.0, 70.0),
            },
            bounds,
        );
        assert!(matches!(msg, Some(Msg::Scrolled(_))));
        let expected = 30.0 * 1600.0 / 308.0;
        assert!((fixture.state.scroll_offset() - expected).abs() < 0.01);

        // Release far away still ends the session.
        region.on_event(
            &Event::MouseReleased {
                button: MouseButton::Left,
                position: Point::new(-50.0, -50.0),
            },
            bounds,
        );
        assert!(!region.has_active_drag());
    }

    #[test]
    fn test_drag_session_messages() {
        let fixture = Fixture::new();
        let mut region = fixture
            .region()
            .on_drag_start(|_| Msg::DragStarted)
            .on_drag_end(|_| Msg::DragEnded);
        let bounds = region_bounds();

        let msg = region.on_event(&press(288.0, 40.0), bounds);
        assert_eq!(msg, Some(Msg::DragStarted));
        let msg = region.on_event(
            &Event::MouseReleased {
                button: MouseButton::Left,
                position: Point::new(288.0, 40.0),
            },
            bounds,
        );
        assert_eq!(msg, Some(Msg::DragEnded));
    }

    #[test]
    fn test_track_click_pages_down_animated() {
        let fixture = Fixture::new();
        let mut region = fixture.region();
        let bounds = region_bounds();

        // Click the track well below the thumb.
        region.on_event(&press(288.0, 350.0), bounds);
        assert!(fixture.state.is_animating());
        while fixture.state.tick(0.016) {}
        assert!((fixture.state.scroll_offset() - 360.0).abs() < 0.001);
    }

    #[test]
    fn test_track_click_above_thumb_pages_up() {
        let fixture = Fixture::new();
        fixture.state.set_visible_extent(400.0);
        fixture.state.set_content_extent(2000.0);
        fixture.state.set_scroll_offset(800.0);
        let mut region = fixture.region();
        let bounds = region_bounds();

        // Thumb sits at track offset 154 (screen y 162..238); click above it.
        region.on_event(&press(288.0, 100.0), bounds);
        while fixture.state.tick(0.016) {}
        assert!((fixture.state.scroll_offset() - 440.0).abs() < 0.001);
    }

    #[test]
    fn test_content_click_translated_by_offset() {
        let fixture = Fixture::new();
        let mut region = fixture.region();
        let bounds = region_bounds();
        fixture.state.set_visible_extent(400.0);
        fixture.state.set_content_extent(2000.0);
        fixture.state.set_scroll_offset(500.0);

        let msg = region.on_event(&press(100.0, 50.0), bounds);
        assert_eq!(msg, Some(Msg::ContentClicked));
        assert_eq!(fixture.last_click_y.get(), Some(550.0));
    }

    #[test]
    fn test_draw_renders_thumb_at_reference_position() {
        let fixture = Fixture::new();
        fixture.state.set_visible_extent(400.0);
        fixture.state.set_content_extent(2000.0);
        fixture.state.set_scroll_offset(800.0);
        let region = fixture.region();

        let mut renderer = Renderer::new();
        region.draw(&mut renderer, region_bounds());

        let rects: Vec<&Bounds> = renderer
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { bounds, .. } => Some(bounds),
                _ => None,
            })
            .collect();
        // content fill, track, thumb
        assert_eq!(rects.len(), 3);
        let thumb = rects[2];
        assert_eq!(thumb.height, 76.0);
        assert!((thumb.y - (8.0 + 154.0)).abs() < 0.001);
        assert_eq!(thumb.x, 284.0);
    }

    #[test]
    fn test_no_scrollbar_when_content_fits() {
        let fixture = Fixture::new();
        let region = ScrollRegion::new(
            &fixture.state,
            TallProbe {
                height: 100.0,
                last_click_y: Rc::default(),
            },
        );
        let mut renderer = Renderer::new();
        region.draw(&mut renderer, region_bounds());
        // content fill only
        assert_eq!(renderer.commands().len(), 1);
    }

    #[test]
    fn test_dropped_state_degrades_to_plain_container() {
        let fixture = Fixture::new();
        let mut region = fixture.region();
        drop(fixture.state);

        let bounds = region_bounds();
        let mut renderer = Renderer::new();
        region.draw(&mut renderer, bounds);
        assert_eq!(renderer.commands().len(), 1);

        // Content still receives events at an unscrolled offset.
        let msg = region.on_event(&press(100.0, 50.0), bounds);
        assert_eq!(msg, Some(Msg::ContentClicked));
        assert_eq!(fixture.last_click_y.get(), Some(50.0));
        assert!(!region.has_active_drag());
    }
}
