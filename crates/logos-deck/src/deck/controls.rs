//! Fullscreen, hints overlay, autoplay and indicator controls

use crate::host::{DeckView, Scheduler};
use crate::indicators::{IndicatorRail, INDICATOR_LISTENER};
use crate::navigation::NavigationListener;
use super::Deck;

impl<V: DeckView, S: Scheduler> Deck<V, S> {
    /// Enter fullscreen, or leave it if already fullscreen
    ///
    /// A refused request is logged and otherwise ignored.
    pub fn toggle_fullscreen(&mut self) {
        if self.view.is_fullscreen() {
            self.view.exit_fullscreen();
        } else if let Err(err) = self.view.request_fullscreen() {
            log::warn!("{}", err);
        }
    }

    /// Leave fullscreen if active
    pub fn exit_fullscreen(&mut self) {
        if self.view.is_fullscreen() {
            self.view.exit_fullscreen();
        }
    }

    /// Show or hide the keyboard hints overlay; returns the new visibility
    pub fn toggle_hints(&mut self) -> bool {
        self.hints_visible = !self.hints_visible;
        self.view.set_hints_visible(self.hints_visible);
        self.hints_visible
    }

    /// Start or stop autoplay; returns whether autoplay is now running
    pub fn toggle_autoplay(&mut self) -> bool {
        let playing = self.autoplay.toggle(&mut self.scheduler);
        self.log_autoplay(playing);
        playing
    }

    /// Set autoplay to an explicit state; never schedules a second timer
    pub fn set_autoplay(&mut self, enabled: bool) -> bool {
        let changed = if enabled {
            self.autoplay.start(&mut self.scheduler)
        } else {
            self.autoplay.stop(&mut self.scheduler)
        };
        if changed {
            self.log_autoplay(enabled);
        }
        changed
    }

    fn log_autoplay(&self, playing: bool) {
        if playing {
            log::debug!("autoplay on, every {} ms", self.autoplay.interval_ms());
        } else {
            log::debug!("autoplay off");
        }
    }

    /// Create the indicator rail and subscribe it to slide changes
    ///
    /// Returns false if the rail is already installed.
    pub fn install_indicators(&mut self) -> bool {
        if self.listeners.contains(INDICATOR_LISTENER) {
            return false;
        }
        let total = self.nav.total();
        self.view.install_indicators(total);
        IndicatorRail::refresh(&mut self.view, self.nav.current(), total);
        self.listeners
            .subscribe(INDICATOR_LISTENER, Box::new(IndicatorRail))
    }

    /// Subscribe a navigation listener under `name`; idempotent per name
    pub fn subscribe(&mut self, name: &'static str, listener: Box<dyn NavigationListener>) -> bool {
        self.listeners.subscribe(name, listener)
    }

    /// Remove the listener registered under `name`
    pub fn unsubscribe(&mut self, name: &str) -> bool {
        self.listeners.unsubscribe(name)
    }

    /// Enlarge or restore an indicator dot under the pointer
    pub fn hover_indicator(&mut self, index: usize, hovered: bool) {
        if index < self.nav.total() && self.listeners.contains(INDICATOR_LISTENER) {
            self.view.set_indicator_hovered(index, hovered);
        }
    }
}
