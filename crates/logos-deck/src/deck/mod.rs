//! Deck controller coordinating all components
//!
//! This module is split into focused submodules:
//! - `navigation`: slide transitions, chrome and listener fan-out
//! - `input`: per-channel input handlers and command dispatch
//! - `tasks`: deferred callbacks (activation, counter frames, autoplay ticks)
//! - `controls`: fullscreen, hints, autoplay and indicator toggles

mod controls;
mod input;
mod navigation;
mod tasks;

use serde::Serialize;

use crate::animation::CounterAnimator;
use crate::autoplay::Autoplay;
use crate::config::DeckConfig;
use crate::error::DeckError;
use crate::host::{Chrome, DeckView, Scheduler};
use crate::input::InputRouter;
use crate::navigation::{ListenerList, Navigator};
use crate::registry::SlideRegistry;

/// Snapshot of the deck state for debugging and the JS API
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStatus {
    /// Current slide index
    pub current: usize,
    /// Number of slides
    pub total: usize,
    /// Derived chrome for the current slide
    #[serde(flatten)]
    pub chrome: Chrome,
    /// Whether autoplay is running
    pub autoplaying: bool,
    /// Whether the keyboard hints overlay is shown
    pub hints_visible: bool,
    /// Whether the document is fullscreen
    pub fullscreen: bool,
    /// Whether a deferred activation has not fired yet
    pub activation_pending: bool,
}

/// Presentation deck controller
///
/// Owns all navigation state and drives the injected view and scheduler:
/// - Slide registry (fixed, non-empty)
/// - Navigator (current index, clamping)
/// - Input router (keyboard, click, swipe, wheel, indicators)
/// - Counter animator (eased tweens per counter)
/// - Autoplay timer
/// - Navigation listeners (indicator rail)
pub struct Deck<V: DeckView, S: Scheduler> {
    pub(crate) config: DeckConfig,
    pub(crate) registry: SlideRegistry,
    pub(crate) nav: Navigator,
    pub(crate) input: InputRouter,
    pub(crate) counters: CounterAnimator,
    pub(crate) autoplay: Autoplay,
    pub(crate) listeners: ListenerList,
    pub(crate) view: V,
    pub(crate) scheduler: S,
    /// Generation of the most recent navigation; older activations are stale
    pub(crate) activation_generation: u64,
    pub(crate) activation_pending: bool,
    pub(crate) hints_visible: bool,
}

impl<V: DeckView, S: Scheduler> Deck<V, S> {
    /// Create a deck with the default configuration
    pub fn new(registry: SlideRegistry, view: V, scheduler: S) -> Self {
        Self::build(registry, view, scheduler, DeckConfig::default())
    }

    /// Create a deck with a custom configuration
    pub fn with_config(
        registry: SlideRegistry,
        view: V,
        scheduler: S,
        config: DeckConfig,
    ) -> Result<Self, DeckError> {
        config.validate()?;
        Ok(Self::build(registry, view, scheduler, config))
    }

    /// Assemble a deck from an already validated configuration
    pub(crate) fn build(registry: SlideRegistry, view: V, scheduler: S, config: DeckConfig) -> Self {
        Self {
            nav: Navigator::new(registry.len()),
            input: InputRouter::new(&config),
            counters: CounterAnimator::new(config.counter_duration_ms),
            autoplay: Autoplay::new(config.autoplay_interval_ms),
            listeners: ListenerList::new(),
            registry,
            view,
            scheduler,
            config,
            activation_generation: 0,
            activation_pending: false,
            hints_visible: true,
        }
    }

    /// Current slide index
    #[inline]
    pub fn current_slide(&self) -> usize {
        self.nav.current()
    }

    /// Number of slides
    #[inline]
    pub fn total_slides(&self) -> usize {
        self.nav.total()
    }

    /// The injected view
    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The injected scheduler
    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The injected scheduler, mutably
    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Counter tweens
    #[inline]
    pub fn counters(&self) -> &CounterAnimator {
        &self.counters
    }

    /// Whether autoplay is running
    #[inline]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_playing()
    }

    /// Whether the hints overlay is shown
    #[inline]
    pub fn hints_visible(&self) -> bool {
        self.hints_visible
    }

    /// Chrome for the current slide
    pub fn chrome(&self) -> Chrome {
        Chrome::for_position(self.nav.current(), self.nav.total())
    }

    /// Snapshot of the current state
    pub fn status(&self) -> DeckStatus {
        DeckStatus {
            current: self.nav.current(),
            total: self.nav.total(),
            chrome: self.chrome(),
            autoplaying: self.autoplay.is_playing(),
            hints_visible: self.hints_visible,
            fullscreen: self.view.is_fullscreen(),
            activation_pending: self.activation_pending,
        }
    }

    /// Snapshot of the current state as JSON
    pub fn status_json(&self) -> String {
        serde_json::to_string(&self.status()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<V: DeckView, S: Scheduler> std::fmt::Debug for Deck<V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("current", &self.nav.current())
            .field("total", &self.nav.total())
            .field("autoplaying", &self.autoplay.is_playing())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
