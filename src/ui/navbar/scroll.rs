// SPDX-License-Identifier: MPL-2.0
//! Scroll-threshold tracking for the navigation bar.
//!
//! The bar switches to its compact, solid style once the page has scrolled
//! past a threshold. The state holds one listener on the scroll source while
//! mounted. There is no hysteresis: offsets oscillating around the threshold
//! toggle the flag on every event.

use crate::config::defaults::DEFAULT_SCROLL_THRESHOLD;
use crate::ui::events::{EventSource, Listener};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
pub struct ScrollState {
    threshold: f32,
    scrolled: Rc<Cell<bool>>,
    listener: Option<Listener>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollState {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            scrolled: Rc::new(Cell::new(false)),
            listener: None,
        }
    }

    /// Starts listening to `source`. Mounting again replaces the previous
    /// listener.
    pub fn mount(&mut self, source: &EventSource<f32>) {
        let threshold = self.threshold;
        let scrolled = Rc::clone(&self.scrolled);
        self.listener = Some(source.listen(move |offset| {
            scrolled.set(*offset > threshold);
        }));
    }

    /// Releases the listener. Later scroll events no longer reach this state.
    pub fn unmount(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.release();
            tracing::trace!("navbar scroll listener released");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Whether the last observed offset was past the threshold.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unscrolled() {
        let state = ScrollState::default();
        assert!(!state.is_scrolled());
        assert!(!state.is_mounted());
        assert_eq!(state.threshold(), 50.0);
    }

    #[test]
    fn tracks_offset_against_threshold() {
        let source = EventSource::new();
        let mut state = ScrollState::new(50.0);
        state.mount(&source);

        source.emit(&80.0);
        assert!(state.is_scrolled());
        source.emit(&10.0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let source = EventSource::new();
        let mut state = ScrollState::new(50.0);
        state.mount(&source);

        source.emit(&50.0);
        assert!(!state.is_scrolled());
        source.emit(&50.5);
        assert!(state.is_scrolled());
    }

    #[test]
    fn unmount_before_any_scroll_releases_listener() {
        let source = EventSource::new();
        let mut state = ScrollState::default();
        state.mount(&source);
        assert_eq!(source.listener_count(), 1);

        state.unmount();
        assert_eq!(source.listener_count(), 0);

        source.emit(&500.0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn remount_keeps_single_listener() {
        let source = EventSource::new();
        let mut state = ScrollState::default();
        state.mount(&source);
        state.mount(&source);
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn dropping_state_releases_listener() {
        let source = EventSource::new();
        {
            let mut state = ScrollState::default();
            state.mount(&source);
        }
        assert_eq!(source.listener_count(), 0);
    }
}
