//! Navigation state machine
//!
//! Provides the clamped slide index and the listener list notified on every
//! slide change.

mod listener;
mod navigator;

pub use listener::{ListenerList, NavSource, NavigationListener, SlideChange};
pub use navigator::Navigator;
