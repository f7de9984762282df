//! Scrollbar thumb geometry.
//!
//! Pure functions mapping viewport metrics and track space to thumb
//! size/position/visibility, plus the inverse mapping used while dragging.
//! Everything here is side-effect free; the scroll region widget and its
//! change observer both go through these functions, so the rendered thumb is
//! always a pure function of the true scroll state.

use serde::{Deserialize, Serialize};

use crate::constants::OVERFLOW_EPSILON;
use crate::layout::Bounds;

/// Ground-truth scroll state of a viewport, along the vertical axis.
///
/// All scalars are non-negative. Owned by [`crate::state::ScrollRegionState`];
/// widgets only change it through explicit set-scroll-offset calls.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// Current scroll position.
    pub scroll_offset: f32,
    /// Total content height.
    pub content_extent: f32,
    /// Visible viewport height.
    pub visible_extent: f32,
}

impl ViewportMetrics {
    pub fn new(scroll_offset: f32, content_extent: f32, visible_extent: f32) -> Self {
        Self {
            scroll_offset,
            content_extent,
            visible_extent,
        }
    }

    /// Largest valid scroll position.
    pub fn max_scroll_offset(&self) -> f32 {
        (self.content_extent - self.visible_extent).max(0.0)
    }

    /// Whether the content overflows the viewport (with slack, so the
    /// scrollbar does not flicker when the extents are effectively equal).
    pub fn has_overflow(&self) -> bool {
        self.content_extent > self.visible_extent + OVERFLOW_EPSILON
    }
}

/// The physical space the thumb travels in, derived from widget layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    /// Track length along the scroll axis.
    pub length: f32,
    /// Y position of the track's upper end in screen space.
    pub origin_offset: f32,
}

impl TrackMetrics {
    pub fn new(length: f32, origin_offset: f32) -> Self {
        Self {
            length,
            origin_offset,
        }
    }
}

/// Derived thumb render state. Never mutated directly; always recomputed
/// from `(ViewportMetrics, TrackMetrics, min_thumb_size)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbState {
    /// Offset of the thumb's upper edge from the track origin.
    pub top: f32,
    /// Thumb length along the scroll axis.
    pub height: f32,
    /// Whether the thumb should be shown at all.
    pub visible: bool,
}

impl Default for ThumbState {
    fn default() -> Self {
        Self {
            top: 0.0,
            height: crate::constants::MIN_THUMB_SIZE,
            visible: false,
        }
    }
}

impl ThumbState {
    /// Largest valid thumb top for this thumb on the given track.
    pub fn max_top(&self, track: &TrackMetrics) -> f32 {
        (track.length - self.height).max(0.0)
    }

    /// Screen-space bounds of the thumb within a vertical track strip.
    pub fn bounds(&self, track: &TrackMetrics, track_x: f32, thickness: f32) -> Bounds {
        Bounds::new(track_x, track.origin_offset + self.top, thickness, self.height)
    }
}

/// Compute the thumb for the given viewport and track.
///
/// The thumb height is the track length scaled by the visible fraction,
/// floored, raised to `min_thumb_size` and clamped to the track length (so a
/// minimum larger than a tiny track degrades to a full-track thumb instead of
/// overflowing it). Positions divide only after checking the denominator.
pub fn compute_thumb(
    viewport: &ViewportMetrics,
    track: &TrackMetrics,
    min_thumb_size: f32,
) -> ThumbState {
    if !viewport.has_overflow() {
        // Stable defaults while hidden, so a later overflow starts from a
        // well-defined state.
        return ThumbState {
            top: 0.0,
            height: min_thumb_size.min(track.length.max(0.0)),
            visible: false,
        };
    }

    let ratio = viewport.visible_extent / viewport.content_extent;
    let height = (ratio * track.length)
        .floor()
        .max(min_thumb_size)
        .min(track.length.max(0.0));

    let max_thumb_top = (track.length - height).max(0.0);
    let max_scroll = viewport.max_scroll_offset();
    let top = if max_scroll > 0.0 {
        ((viewport.scroll_offset / max_scroll) * max_thumb_top).clamp(0.0, max_thumb_top)
    } else {
        0.0
    };

    ThumbState {
        top,
        height,
        visible: true,
    }
}

/// Inverse of [`compute_thumb`]'s position step: map a thumb top back to the
/// scroll offset that would place it there. Used by the drag controller.
pub fn offset_for_thumb_top(
    thumb_top: f32,
    viewport: &ViewportMetrics,
    track: &TrackMetrics,
    thumb_height: f32,
) -> f32 {
    let max_thumb_top = (track.length - thumb_height).max(0.0);
    let ratio = if max_thumb_top > 0.0 {
        (thumb_top / max_thumb_top).clamp(0.0, 1.0)
    } else {
        0.0
    };
    ratio * viewport.max_scroll_offset()
}

/// Accessibility descriptor for the scrollbar semantic.
///
/// Recomputed on every geometry pass alongside the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbarAccessibility {
    pub value_min: u8,
    pub value_max: u8,
    /// Scroll position as a percentage of the scrollable range.
    pub value_now: u8,
}

impl Default for ScrollbarAccessibility {
    fn default() -> Self {
        Self {
            value_min: 0,
            value_max: 100,
            value_now: 0,
        }
    }
}

impl ScrollbarAccessibility {
    /// Derive the descriptor from viewport metrics.
    pub fn from_metrics(viewport: &ViewportMetrics) -> Self {
        let max_scroll = viewport.max_scroll_offset();
        let value_now = if max_scroll > 0.0 {
            (viewport.scroll_offset / max_scroll * 100.0)
                .round()
                .clamp(0.0, 100.0) as u8
        } else {
            0
        };
        Self {
            value_min: 0,
            value_max: 100,
            value_now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_viewport(offset: f32) -> ViewportMetrics {
        ViewportMetrics::new(offset, 2000.0, 400.0)
    }

    fn reference_track() -> TrackMetrics {
        TrackMetrics::new(384.0, 0.0)
    }

    #[test]
    fn test_reference_geometry() {
        // visible=400, content=2000, track=384, min=32:
        // ratio 0.2, floor(0.2*384)=76; offset 800 of 1600 over travel 308 => 154
        let thumb = compute_thumb(&reference_viewport(800.0), &reference_track(), 32.0);
        assert!(thumb.visible);
        assert_eq!(thumb.height, 76.0);
        assert!((thumb.top - 154.0).abs() < 0.001);
    }

    #[test]
    fn test_reference_drag_inverse() {
        let viewport = reference_viewport(800.0);
        let track = reference_track();
        let thumb = compute_thumb(&viewport, &track, 32.0);
        // Dragging down 30px from top=154 lands at 184 => offset ~955.84
        let offset = offset_for_thumb_top(thumb.top + 30.0, &viewport, &track, thumb.height);
        assert!((offset - 955.844).abs() < 0.01, "offset was {offset}");
    }

    #[test]
    fn test_thumb_top_monotonic_in_offset() {
        let track = reference_track();
        let mut last_top = -1.0f32;
        let max_scroll = reference_viewport(0.0).max_scroll_offset();
        let mut offset = 0.0;
        while offset <= max_scroll {
            let thumb = compute_thumb(&reference_viewport(offset), &track, 32.0);
            assert!(thumb.top >= last_top);
            last_top = thumb.top;
            offset += 13.7;
        }
    }

    #[test]
    fn test_thumb_height_bounds() {
        for content in [401.0, 500.0, 1000.0, 10000.0, 1_000_000.0] {
            let viewport = ViewportMetrics::new(0.0, content, 400.0);
            let thumb = compute_thumb(&viewport, &reference_track(), 32.0);
            assert!(thumb.height >= 32.0);
            assert!(thumb.height <= 384.0);
        }
    }

    #[test]
    fn test_no_overflow_hides_thumb() {
        for offset in [0.0, 100.0, 5000.0] {
            let viewport = ViewportMetrics::new(offset, 300.0, 400.0);
            let thumb = compute_thumb(&viewport, &reference_track(), 32.0);
            assert!(!thumb.visible);
            assert_eq!(thumb.top, 0.0);
        }
    }

    #[test]
    fn test_equal_extents_within_epsilon_hidden() {
        let viewport = ViewportMetrics::new(0.0, 400.3, 400.0);
        assert!(!viewport.has_overflow());
        let viewport = ViewportMetrics::new(0.0, 401.0, 400.0);
        assert!(viewport.has_overflow());
    }

    #[test]
    fn test_min_thumb_clamped_to_tiny_track() {
        let viewport = ViewportMetrics::new(0.0, 2000.0, 400.0);
        let track = TrackMetrics::new(20.0, 0.0);
        let thumb = compute_thumb(&viewport, &track, 32.0);
        assert_eq!(thumb.height, 20.0);
        assert_eq!(thumb.max_top(&track), 0.0);
    }

    #[test]
    fn test_drag_gain_matches_ratio() {
        // Moving the thumb by d changes the offset by d * maxScroll/maxThumbTop.
        let viewport = reference_viewport(800.0);
        let track = reference_track();
        let thumb = compute_thumb(&viewport, &track, 32.0);
        let gain = viewport.max_scroll_offset() / thumb.max_top(&track);
        for d in [1.0, 5.0, 30.0, 100.0] {
            let from = offset_for_thumb_top(thumb.top, &viewport, &track, thumb.height);
            let to = offset_for_thumb_top(thumb.top + d, &viewport, &track, thumb.height);
            assert!((to - from - d * gain).abs() < 0.01);
        }
    }

    #[test]
    fn test_recompute_idempotent() {
        let viewport = reference_viewport(640.0);
        let a = compute_thumb(&viewport, &reference_track(), 32.0);
        let b = compute_thumb(&viewport, &reference_track(), 32.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_accessibility_value() {
        assert_eq!(
            ScrollbarAccessibility::from_metrics(&reference_viewport(800.0)).value_now,
            50
        );
        assert_eq!(
            ScrollbarAccessibility::from_metrics(&reference_viewport(0.0)).value_now,
            0
        );
        assert_eq!(
            ScrollbarAccessibility::from_metrics(&reference_viewport(1600.0)).value_now,
            100
        );
        // No scrollable range at all
        let flat = ViewportMetrics::new(0.0, 100.0, 400.0);
        assert_eq!(ScrollbarAccessibility::from_metrics(&flat).value_now, 0);
    }

    #[test]
    fn test_offset_beyond_range_clamps_top() {
        let viewport = ViewportMetrics::new(99999.0, 2000.0, 400.0);
        let track = reference_track();
        let thumb = compute_thumb(&viewport, &track, 32.0);
        assert!(thumb.top <= thumb.max_top(&track));
    }
}
