//! Autoplay timer
//!
//! A single periodic timer that advances the deck and wraps to the first
//! slide after the last one.

use crate::host::{ScheduledTask, Scheduler, TimerHandle};

/// Autoplay state: at most one live timer
#[derive(Clone, Debug)]
pub struct Autoplay {
    interval_ms: u32,
    timer: Option<TimerHandle>,
    generation: u64,
}

impl Autoplay {
    /// Create a stopped autoplay with the given cadence
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            timer: None,
            generation: 0,
        }
    }

    /// Whether autoplay is running
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Advance cadence in milliseconds
    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Start the timer; returns false if it was already running
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.is_playing() {
            return false;
        }
        self.generation += 1;
        let handle = scheduler.schedule_every(
            self.interval_ms,
            ScheduledTask::AutoplayTick {
                generation: self.generation,
            },
        );
        self.timer = Some(handle);
        true
    }

    /// Cancel the timer; returns false if it was not running
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        match self.timer.take() {
            Some(handle) => {
                scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Flip between running and stopped; returns the new state
    pub fn toggle<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.is_playing() {
            self.stop(scheduler);
        } else {
            self.start(scheduler);
        }
        self.is_playing()
    }

    /// Whether a tick from `generation` belongs to the live timer
    #[inline]
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_playing() && generation == self.generation
    }

    /// Slide to show after `current` in a deck whose last index is `last`
    #[inline]
    pub fn advance_target(current: usize, last: usize) -> usize {
        if current < last {
            current + 1
        } else {
            0
        }
    }
}
