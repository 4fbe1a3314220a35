//! Deck tuning parameters
//!
//! Every timing and gesture threshold the deck uses lives here. The browser
//! binding accepts an optional JSON object with camelCase keys, missing keys
//! fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Delay between tagging the outgoing slide `prev` and promoting the new one
pub const ACTIVATION_DELAY_MS: u32 = 50;

/// Duration of the counter tween in milliseconds
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Minimum horizontal travel (px) for a touch gesture to count as a swipe
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Wheel events are ignored for this long after a wheel-triggered navigation
pub const WHEEL_COOLDOWN_MS: u32 = 800;

/// Autoplay advance interval in milliseconds
pub const AUTOPLAY_INTERVAL_MS: u32 = 8000;

/// Width fraction of the left/right click zones
pub const CLICK_ZONE_FRACTION: f32 = 0.3;

/// Runtime configuration for a [`Deck`](crate::Deck)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeckConfig {
    /// Delay before the target slide is tagged active
    pub activation_delay_ms: u32,
    /// Counter tween duration
    pub counter_duration_ms: u32,
    /// Swipe distance threshold
    pub swipe_threshold_px: f32,
    /// Wheel debounce window
    pub wheel_cooldown_ms: u32,
    /// Autoplay cadence
    pub autoplay_interval_ms: u32,
    /// Fraction of the viewport width used by each click zone
    pub click_zone_fraction: f32,
    /// Maximum log level forwarded to the console (`error` .. `trace`, or `off`)
    pub log_level: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            activation_delay_ms: ACTIVATION_DELAY_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            wheel_cooldown_ms: WHEEL_COOLDOWN_MS,
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            click_zone_fraction: CLICK_ZONE_FRACTION,
            log_level: "info".to_string(),
        }
    }
}

impl DeckConfig {
    /// Parse a JSON configuration object and validate it
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let config: DeckConfig =
            serde_json::from_str(json).map_err(|e| DeckError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or invert the deck's behavior
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.counter_duration_ms == 0 {
            return Err(DeckError::InvalidConfig(
                "counterDurationMs must be greater than zero".to_string(),
            ));
        }
        if self.autoplay_interval_ms == 0 {
            return Err(DeckError::InvalidConfig(
                "autoplayIntervalMs must be greater than zero".to_string(),
            ));
        }
        if self.swipe_threshold_px.is_nan() || self.swipe_threshold_px < 0.0 {
            return Err(DeckError::InvalidConfig(
                "swipeThresholdPx must be a non-negative number".to_string(),
            ));
        }
        if !(self.click_zone_fraction > 0.0 && self.click_zone_fraction <= 0.5) {
            return Err(DeckError::InvalidConfig(format!(
                "clickZoneFraction must be in (0, 0.5], got {}",
                self.click_zone_fraction
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    /// Parsed form of [`log_level`](Self::log_level)
    pub fn level_filter(&self) -> Result<log::LevelFilter, DeckError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| DeckError::InvalidConfig(format!("unknown log level '{}'", self.log_level)))
    }
}
