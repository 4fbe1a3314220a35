//! Slide entry animations
//!
//! Provides the entrance-animation trigger and the eased counter tweens it
//! starts.

mod counter;
mod easing;
mod trigger;

pub use counter::{counter_value, CounterAnimator, CounterFrame, CounterId, CounterTween};
pub use easing::ease_out_quart;
pub use trigger::trigger_slide_entry;
