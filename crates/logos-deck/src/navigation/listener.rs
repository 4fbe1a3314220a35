//! Navigation listeners
//!
//! Components that react to slide changes (the indicator rail, mainly)
//! subscribe here instead of wrapping the navigation entry points.

use crate::host::DeckView;

/// Input channel that caused a navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSource {
    /// Keyboard shortcut
    Keyboard,
    /// Click in a side zone of the page
    Click,
    /// Touch swipe
    Swipe,
    /// Mouse wheel
    Wheel,
    /// Indicator dot
    Indicator,
    /// Prev/next button
    Button,
    /// Autoplay timer
    Autoplay,
    /// Programmatic API call
    Api,
}

/// A completed navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    /// Slide that was current before the request
    pub from: usize,
    /// Slide that is current now
    pub to: usize,
    /// Deck size
    pub total: usize,
    /// Channel that issued the request
    pub source: NavSource,
}

/// Receives every slide change
pub trait NavigationListener {
    /// Called after the navigation state and chrome have been updated
    fn on_slide_change(&mut self, change: &SlideChange, view: &mut dyn DeckView);
}

impl<F> NavigationListener for F
where
    F: FnMut(&SlideChange, &mut dyn DeckView),
{
    fn on_slide_change(&mut self, change: &SlideChange, view: &mut dyn DeckView) {
        self(change, view)
    }
}

/// Named, ordered listener list
#[derive(Default)]
pub struct ListenerList {
    entries: Vec<(&'static str, Box<dyn NavigationListener>)>,
}

impl ListenerList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe under `name`; returns false if `name` is already subscribed
    pub fn subscribe(&mut self, name: &'static str, listener: Box<dyn NavigationListener>) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push((name, listener));
        true
    }

    /// Remove the listener registered under `name`
    pub fn unsubscribe(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(n, _)| *n != name);
        self.entries.len() != before
    }

    /// Whether `name` is subscribed
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Number of listeners
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listener is subscribed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver a change to every listener in subscription order
    pub fn notify(&mut self, change: &SlideChange, view: &mut dyn DeckView) {
        for (_, listener) in self.entries.iter_mut() {
            listener.on_slide_change(change, view);
        }
    }
}

impl std::fmt::Debug for ListenerList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}
