//! Host capabilities injected into the deck
//!
//! The deck never touches the document or the browser clock directly. It talks
//! to two interfaces instead:
//!
//! - [`DeckView`]: the UI binding (slide classes, chrome, counters, indicators,
//!   fullscreen)
//! - [`Scheduler`]: the clock plus one-shot, repaint-aligned and periodic
//!   callbacks
//!
//! Scheduled work is described by [`ScheduledTask`] values. The host hands a
//! task back to [`Deck::run_task`](crate::Deck::run_task) when it fires; tasks
//! carry generation tokens so stale ones fall through as no-ops.

use serde::Serialize;

use crate::animation::CounterId;
use crate::error::DeckError;

/// Display tag of a slide panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideTag {
    /// Currently displayed
    Active,
    /// Outgoing slide during the transition window
    Prev,
    /// Neither
    Inactive,
}

/// Derived navigation chrome (progress bar, label, button enablement)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chrome {
    /// Progress bar width in percent
    pub progress_percent: f64,
    /// Counter label, e.g. `"3 / 12"`
    pub label: String,
    /// Whether the previous button is interactive
    pub prev_enabled: bool,
    /// Whether the next button is interactive
    pub next_enabled: bool,
}

impl Chrome {
    /// Compute the chrome for `current` in a deck of `total` slides
    pub fn for_position(current: usize, total: usize) -> Self {
        let last = total.saturating_sub(1);
        Self {
            progress_percent: (current + 1) as f64 / total.max(1) as f64 * 100.0,
            label: format!("{} / {}", current + 1, total),
            prev_enabled: current > 0,
            next_enabled: current < last,
        }
    }
}

/// Opaque handle to a periodic timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Deferred work the deck asks the host to run later
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Promote the current slide to active after the transition delay
    Activate {
        /// Navigation generation that scheduled this activation
        generation: u64,
    },
    /// Advance one counter tween by a frame
    CounterFrame {
        /// Counter being animated
        counter: CounterId,
        /// Tween generation that requested the frame
        generation: u64,
    },
    /// Periodic autoplay advance
    AutoplayTick {
        /// Autoplay session that owns the timer
        generation: u64,
    },
}

/// UI binding for a deck
///
/// Implementations translate these calls into document mutations. All methods
/// are infallible except the fullscreen request, which the host may refuse.
pub trait DeckView {
    /// Set the display tag of one slide
    fn set_slide_tag(&mut self, slide: usize, tag: SlideTag);

    /// Render progress bar, counter label and prev/next button state
    fn render_chrome(&mut self, chrome: &Chrome);

    /// Replay the entrance animations of every animated element in `slide`
    fn restart_entrance_animations(&mut self, slide: usize);

    /// Display `value` in a counter widget
    fn set_counter_value(&mut self, counter: CounterId, value: i64);

    /// Show or hide the keyboard hints overlay
    fn set_hints_visible(&mut self, visible: bool);

    /// Create the indicator rail with one dot per slide
    fn install_indicators(&mut self, count: usize);

    /// Highlight or clear one indicator dot
    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Enlarge or restore one indicator dot
    fn set_indicator_hovered(&mut self, index: usize, hovered: bool);

    /// Whether the document is currently fullscreen
    fn is_fullscreen(&self) -> bool;

    /// Ask the host to enter fullscreen
    fn request_fullscreen(&mut self) -> Result<(), DeckError>;

    /// Leave fullscreen
    fn exit_fullscreen(&mut self);

    /// Mark the document as fully loaded
    fn mark_loaded(&mut self) {}
}

/// Clock and callback scheduling
pub trait Scheduler {
    /// Monotonic time in milliseconds
    fn now_ms(&self) -> f64;

    /// Run `task` once after `delay_ms`
    fn schedule_after(&mut self, delay_ms: u32, task: ScheduledTask);

    /// Run `task` before the next repaint
    fn request_frame(&mut self, task: ScheduledTask);

    /// Run `task` every `period_ms` until cancelled
    fn schedule_every(&mut self, period_ms: u32, task: ScheduledTask) -> TimerHandle;

    /// Cancel a periodic timer; unknown handles are ignored
    fn cancel(&mut self, handle: TimerHandle);
}
