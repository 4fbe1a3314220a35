//! Counter tween: drives a displayed integer from 0 to its target

use std::collections::HashMap;

use super::ease_out_quart;

/// Address of one counter widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CounterId {
    /// Slide containing the counter
    pub slide: usize,
    /// Position of the counter within its slide
    pub index: usize,
}

impl CounterId {
    /// Create a counter id
    pub const fn new(slide: usize, index: usize) -> Self {
        Self { slide, index }
    }
}

/// Displayed value of a counter `elapsed_ms` into a `duration_ms` tween
///
/// The final frame shows exactly `target`, never a rounded-down neighbor.
pub fn counter_value(target: i64, elapsed_ms: f64, duration_ms: f64) -> i64 {
    let progress = if duration_ms > 0.0 {
        (elapsed_ms / duration_ms).clamp(0.0, 1.0)
    } else {
        1.0
    };
    if progress >= 1.0 {
        return target;
    }
    (target as f64 * ease_out_quart(progress)).floor() as i64
}

/// One running tween
#[derive(Clone, Debug)]
pub struct CounterTween {
    /// Value shown when the tween completes
    pub target: i64,
    /// Start time (ms timestamp)
    pub start_ms: f64,
    /// Token that identifies this run of the counter
    pub generation: u64,
}

/// Outcome of advancing a tween by one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    /// Value to display
    pub value: i64,
    /// Whether this was the final frame
    pub done: bool,
}

/// Runs independent tweens for any number of counters
#[derive(Clone, Debug)]
pub struct CounterAnimator {
    duration_ms: f64,
    tweens: HashMap<CounterId, CounterTween>,
    next_generation: u64,
}

impl CounterAnimator {
    /// Create an animator whose tweens last `duration_ms`
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms as f64,
            tweens: HashMap::new(),
            next_generation: 1,
        }
    }

    /// Start (or restart) a counter; returns the new tween's generation
    pub fn start(&mut self, counter: CounterId, target: i64, now_ms: f64) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        let superseded = self.tweens.insert(
            counter,
            CounterTween {
                target,
                start_ms: now_ms,
                generation,
            },
        );
        if let Some(old) = superseded {
            log::trace!(
                "counter {}:{} restarted, generation {} superseded",
                counter.slide,
                counter.index,
                old.generation
            );
        }
        generation
    }

    /// Advance a counter; `None` if `generation` is not the live tween
    pub fn frame(&mut self, counter: CounterId, generation: u64, now_ms: f64) -> Option<CounterFrame> {
        let tween = self.tweens.get(&counter).filter(|t| t.generation == generation)?;
        let elapsed = now_ms - tween.start_ms;
        let value = counter_value(tween.target, elapsed, self.duration_ms);
        let done = elapsed >= self.duration_ms;
        if done {
            self.tweens.remove(&counter);
        }
        Some(CounterFrame { value, done })
    }

    /// Whether a counter has a live tween
    pub fn is_running(&self, counter: CounterId) -> bool {
        self.tweens.contains_key(&counter)
    }

    /// Number of live tweens
    pub fn running_count(&self) -> usize {
        self.tweens.len()
    }
}
