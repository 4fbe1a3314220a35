//! Indicator rail: one dot per slide, highlighting the current one

use crate::host::DeckView;
use crate::navigation::{NavigationListener, SlideChange};

/// Listener name the rail subscribes under
pub const INDICATOR_LISTENER: &str = "indicator-rail";

/// Keeps the indicator dots in sync with the current slide
#[derive(Clone, Copy, Debug, Default)]
pub struct IndicatorRail;

impl IndicatorRail {
    /// Highlight `current` and clear every other dot
    pub fn refresh(view: &mut dyn DeckView, current: usize, total: usize) {
        for index in 0..total {
            view.set_indicator_active(index, index == current);
        }
    }
}

impl NavigationListener for IndicatorRail {
    fn on_slide_change(&mut self, change: &SlideChange, view: &mut dyn DeckView) {
        Self::refresh(view, change.to, change.total);
    }
}
