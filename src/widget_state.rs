//! Long-lived widget state.
//!
//! The view tree is rebuilt every frame, so state that must survive a frame
//! (scroll offsets, drag sessions, animations) is owned here and handed to
//! widgets by handle.

use opsdeck_ui::{ScrollRegionState, SubscriptionId};

/// Per-widget retained state for the dashboard.
pub struct WidgetStates {
    /// Scroll state of the overview page.
    pub overview_scroll: ScrollRegionState,
    /// Scroll state of the accounts list.
    pub accounts_scroll: ScrollRegionState,
    accounts_scroll_log: Option<SubscriptionId>,
}

impl Default for WidgetStates {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetStates {
    pub fn new() -> Self {
        let accounts_scroll = ScrollRegionState::new();
        // Debug tap on the accounts list change stream.
        let accounts_scroll_log = Some(accounts_scroll.subscribe(|kind| {
            log::trace!("accounts list change: {kind:?}");
        }));
        Self {
            overview_scroll: ScrollRegionState::new(),
            accounts_scroll,
            accounts_scroll_log,
        }
    }

    /// Drop the debug tap from the accounts list change stream.
    pub fn silence_change_log(&mut self) {
        if let Some(id) = self.accounts_scroll_log.take() {
            self.accounts_scroll.unsubscribe(id);
        }
    }

    /// Advance widget animations. Returns true while another frame is needed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let overview = self.overview_scroll.tick(dt);
        let accounts = self.accounts_scroll.tick(dt);
        overview || accounts
    }
}

impl std::fmt::Debug for WidgetStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetStates")
            .field("accounts_scroll", &self.accounts_scroll)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_silence_change_log_unsubscribes() {
        let mut states = WidgetStates::new();
        let count = Rc::new(Cell::new(0u32));
        let probe = Rc::clone(&count);
        states.accounts_scroll.subscribe(move |_| probe.set(probe.get() + 1));

        states.accounts_scroll.set_content_extent(1000.0);
        assert_eq!(count.get(), 1);
        states.silence_change_log();
        // External subscribers are unaffected.
        states.accounts_scroll.set_content_extent(1200.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_tick_idle_without_animation() {
        let mut states = WidgetStates::new();
        assert!(!states.tick(0.016));
    }
}
