//! Deferred callback handling

use crate::animation::CounterId;
use crate::autoplay::Autoplay;
use crate::host::{DeckView, ScheduledTask, Scheduler};
use crate::navigation::NavSource;
use super::Deck;

impl<V: DeckView, S: Scheduler> Deck<V, S> {
    /// Run a task previously handed to the scheduler
    ///
    /// Tasks whose generation has been superseded are dropped.
    pub fn run_task(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::Activate { generation } => self.complete_activation(generation),
            ScheduledTask::CounterFrame { counter, generation } => {
                self.advance_counter(counter, generation)
            }
            ScheduledTask::AutoplayTick { generation } => self.autoplay_tick(generation),
        }
    }

    fn complete_activation(&mut self, generation: u64) {
        if !self.activation_pending || generation != self.activation_generation {
            log::trace!(
                "activation {} superseded by {}",
                generation,
                self.activation_generation
            );
            return;
        }
        self.activation_pending = false;
        self.apply_slide_tags();
    }

    fn advance_counter(&mut self, counter: CounterId, generation: u64) {
        let now_ms = self.scheduler.now_ms();
        let Some(frame) = self.counters.frame(counter, generation, now_ms) else {
            return;
        };
        self.view.set_counter_value(counter, frame.value);
        if !frame.done {
            self.scheduler
                .request_frame(ScheduledTask::CounterFrame { counter, generation });
        }
    }

    fn autoplay_tick(&mut self, generation: u64) {
        if !self.autoplay.accepts(generation) {
            log::trace!("stale autoplay tick {} ignored", generation);
            return;
        }
        let target = Autoplay::advance_target(self.nav.current(), self.nav.last());
        self.navigate(target as i64, NavSource::Autoplay);
    }
}
