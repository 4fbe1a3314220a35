//! Slide transitions and derived UI

use crate::animation::trigger_slide_entry;
use crate::host::{DeckView, ScheduledTask, Scheduler, SlideTag};
use crate::navigation::{NavSource, SlideChange};
use super::Deck;

impl<V: DeckView, S: Scheduler> Deck<V, S> {
    /// Render the initial state and play the first slide's entrance
    ///
    /// Tags the current slide active (every other slide inactive), renders the
    /// chrome, then replays entrance animations and starts counters.
    pub fn start(&mut self) {
        self.apply_slide_tags();
        let chrome = self.chrome();
        self.view.render_chrome(&chrome);
        self.trigger_entry(self.nav.current());
        log::info!("deck ready with {} slides", self.nav.total());
    }

    /// Host reported that every resource finished loading
    pub fn resources_loaded(&mut self) {
        self.view.mark_loaded();
        self.trigger_entry(self.nav.current());
    }

    /// Go to `index`, clamped into the deck
    pub fn go_to_slide(&mut self, index: i64) -> SlideChange {
        self.navigate(index, NavSource::Api)
    }

    /// Advance one slide; no-op on the last slide
    pub fn next_slide(&mut self) -> Option<SlideChange> {
        self.step_next(NavSource::Api)
    }

    /// Go back one slide; no-op on the first slide
    pub fn prev_slide(&mut self) -> Option<SlideChange> {
        self.step_prev(NavSource::Api)
    }

    pub(crate) fn step_next(&mut self, source: NavSource) -> Option<SlideChange> {
        let target = self.nav.next_target()?;
        Some(self.navigate(target as i64, source))
    }

    pub(crate) fn step_prev(&mut self, source: NavSource) -> Option<SlideChange> {
        let target = self.nav.prev_target()?;
        Some(self.navigate(target as i64, source))
    }

    /// Core transition shared by every navigation entry point
    pub(crate) fn navigate(&mut self, index: i64, source: NavSource) -> SlideChange {
        let outgoing = self.nav.current();
        self.view.set_slide_tag(outgoing, SlideTag::Prev);

        let (from, to) = self.nav.go_to(index);

        // A newer navigation invalidates any activation still in flight
        self.activation_generation += 1;
        self.activation_pending = true;
        self.scheduler.schedule_after(
            self.config.activation_delay_ms,
            ScheduledTask::Activate {
                generation: self.activation_generation,
            },
        );

        let chrome = self.chrome();
        self.view.render_chrome(&chrome);
        self.trigger_entry(to);

        let change = SlideChange {
            from,
            to,
            total: self.nav.total(),
            source,
        };
        self.listeners.notify(&change, &mut self.view);

        log::debug!("slide {} -> {} via {:?}", from, to, source);
        change
    }

    /// Tag the current slide active and every other slide inactive
    pub(crate) fn apply_slide_tags(&mut self) {
        let current = self.nav.current();
        for slide in 0..self.nav.total() {
            let tag = if slide == current {
                SlideTag::Active
            } else {
                SlideTag::Inactive
            };
            self.view.set_slide_tag(slide, tag);
        }
    }

    fn trigger_entry(&mut self, slide: usize) {
        if let Some(spec) = self.registry.get(slide) {
            trigger_slide_entry(
                slide,
                spec,
                &mut self.view,
                &mut self.scheduler,
                &mut self.counters,
            );
        }
    }
}
