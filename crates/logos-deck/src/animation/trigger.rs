//! Slide entry animation trigger

use super::{CounterAnimator, CounterId};
use crate::host::{DeckView, ScheduledTask, Scheduler};
use crate::registry::SlideSpec;

/// Replay the entrance animations of `slide` and restart all of its counters
///
/// Every counter is reset to 0 immediately and gets a fresh tween whose first
/// frame is requested from the scheduler.
pub fn trigger_slide_entry<V, S>(
    slide: usize,
    spec: &SlideSpec,
    view: &mut V,
    scheduler: &mut S,
    counters: &mut CounterAnimator,
) where
    V: DeckView + ?Sized,
    S: Scheduler + ?Sized,
{
    view.restart_entrance_animations(slide);

    let now_ms = scheduler.now_ms();
    for (index, &target) in spec.counters.iter().enumerate() {
        let counter = CounterId::new(slide, index);
        let generation = counters.start(counter, target, now_ms);
        view.set_counter_value(counter, 0);
        scheduler.request_frame(ScheduledTask::CounterFrame { counter, generation });
    }
}
