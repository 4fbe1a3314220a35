//! Input routing module
//!
//! Provides the multi-channel input router and the gesture recognizers it
//! uses for swipes and wheel debouncing.

mod command;
mod gesture;
mod keys;
mod result;
mod router;

pub use command::DeckCommand;
pub use gesture::{SwipeDirection, SwipeTracker, WheelGate};
pub use keys::command_for_key;
pub use result::{ClickTarget, InputResult};
pub use router::InputRouter;
