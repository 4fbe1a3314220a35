//! Slide-deck controller for browser presentations
//!
//! This crate provides the navigation state machine behind a single-page
//! slide presentation:
//! - Clamped slide navigation with a deferred, cancellable activation
//! - Input routing for keyboard, click zones, touch swipes, wheel and dots
//! - Entrance animation replay and eased counter tweens on slide entry
//! - Autoplay with wrap-around
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`navigation`]: Slide index state and navigation listeners
//! - [`input`]: Input router and gesture recognizers
//! - [`animation`]: Entrance trigger, counter tweens and easing
//! - [`host`]: Capabilities the host injects (`DeckView`, `Scheduler`)
//! - [`registry`]: The fixed slide list discovered at startup
//! - [`config`]: Timing and gesture tuning
//!
//! ## Example
//!
//! ```rust,ignore
//! use logos_deck::{Deck, SlideRegistry, SlideSpec};
//!
//! let registry = SlideRegistry::new(vec![
//!     SlideSpec::plain(),
//!     SlideSpec::with_counters(vec![1500]),
//! ])?;
//! let mut deck = Deck::new(registry, my_view, my_scheduler);
//! deck.start();
//! deck.install_indicators();
//! deck.handle_key("End");
//! assert_eq!(deck.current_slide(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Deferred work goes through an injected scheduler
//! 3. **Cancellable Callbacks**: Every scheduled task carries a generation token
//! 4. **Browser Binding Behind a Feature**: `wasm` adds the DOM and JS exports

pub mod animation;
pub mod config;
pub mod host;
pub mod input;
pub mod navigation;
pub mod registry;

mod autoplay;
mod deck;
mod error;
mod indicators;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use animation::{counter_value, CounterAnimator, CounterId};
pub use autoplay::Autoplay;
pub use config::DeckConfig;
pub use deck::{Deck, DeckStatus};
pub use error::DeckError;
pub use host::{Chrome, DeckView, ScheduledTask, Scheduler, SlideTag, TimerHandle};
pub use indicators::{IndicatorRail, INDICATOR_LISTENER};
pub use input::{ClickTarget, DeckCommand, InputResult, InputRouter};
pub use navigation::{NavSource, NavigationListener, Navigator, SlideChange};
pub use registry::{SlideRegistry, SlideSpec};

/// Delay before the target slide is tagged active, in milliseconds
pub use config::ACTIVATION_DELAY_MS;

/// Duration of counter tweens in milliseconds
pub use config::COUNTER_DURATION_MS;

/// Wheel debounce window in milliseconds
pub use config::WHEEL_COOLDOWN_MS;

/// Autoplay cadence in milliseconds
pub use config::AUTOPLAY_INTERVAL_MS;

/// Minimum swipe travel in pixels
pub use config::SWIPE_THRESHOLD_PX;
