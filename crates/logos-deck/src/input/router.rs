//! Input router state machine
//!
//! Translates raw keyboard, click, touch, wheel and indicator input into
//! [`DeckCommand`]s. Each channel keeps its own gesture state; the router never
//! touches navigation state itself.

use super::gesture::{SwipeDirection, SwipeTracker, WheelGate};
use super::keys::command_for_key;
use super::{ClickTarget, DeckCommand};
use crate::config::DeckConfig;

/// Input router owning per-channel gesture state
#[derive(Clone, Debug)]
pub struct InputRouter {
    swipe: SwipeTracker,
    wheel: WheelGate,
    click_zone_fraction: f32,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(&DeckConfig::default())
    }
}

impl InputRouter {
    /// Create a router with thresholds from `config`
    pub fn new(config: &DeckConfig) -> Self {
        Self {
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            wheel: WheelGate::new(config.wheel_cooldown_ms),
            click_zone_fraction: config.click_zone_fraction,
        }
    }

    /// Map a key press; `Escape` only counts while fullscreen
    pub fn key(&self, key: &str, fullscreen: bool) -> Option<DeckCommand> {
        match command_for_key(key)? {
            DeckCommand::ExitFullscreen if !fullscreen => None,
            command => Some(command),
        }
    }

    /// Map a click at horizontal position `x` in a viewport `width` pixels wide
    pub fn click(&self, x: f32, width: f32, target: ClickTarget) -> Option<DeckCommand> {
        if target.is_interactive() || width <= 0.0 {
            return None;
        }
        if x > width * (1.0 - self.click_zone_fraction) {
            Some(DeckCommand::Next)
        } else if x < width * self.click_zone_fraction {
            Some(DeckCommand::Prev)
        } else {
            None
        }
    }

    /// Record a touch start
    pub fn touch_start(&mut self, x: f32) {
        self.swipe.start(x);
    }

    /// Finish a touch cycle
    pub fn touch_end(&mut self, x: f32) -> Option<DeckCommand> {
        match self.swipe.end(x)? {
            SwipeDirection::Left => Some(DeckCommand::Next),
            SwipeDirection::Right => Some(DeckCommand::Prev),
        }
    }

    /// Map a wheel event; zero deltas neither navigate nor arm the cool-down
    pub fn wheel(&mut self, delta_y: f64, now_ms: f64) -> Option<DeckCommand> {
        if delta_y == 0.0 || delta_y.is_nan() {
            return None;
        }
        if !self.wheel.try_pass(now_ms) {
            return None;
        }
        Some(if delta_y > 0.0 {
            DeckCommand::Next
        } else {
            DeckCommand::Prev
        })
    }

    /// Map an indicator dot click
    #[inline]
    pub fn indicator(&self, index: usize) -> DeckCommand {
        DeckCommand::GoTo(index)
    }

    /// Whether wheel input is currently being ignored
    #[inline]
    pub fn is_wheel_blocked(&self, now_ms: f64) -> bool {
        self.wheel.is_blocked(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_requires_fullscreen() {
        let router = InputRouter::default();
        assert_eq!(router.key("Escape", false), None);
        assert_eq!(router.key("Escape", true), Some(DeckCommand::ExitFullscreen));
    }

    #[test]
    fn test_click_zones() {
        let router = InputRouter::default();
        assert_eq!(router.click(900.0, 1000.0, ClickTarget::Surface), Some(DeckCommand::Next));
        assert_eq!(router.click(100.0, 1000.0, ClickTarget::Surface), Some(DeckCommand::Prev));
        assert_eq!(router.click(500.0, 1000.0, ClickTarget::Surface), None);
        assert_eq!(router.click(690.0, 1000.0, ClickTarget::Surface), None);
        assert_eq!(router.click(310.0, 1000.0, ClickTarget::Surface), None);
        assert_eq!(router.click(710.0, 1000.0, ClickTarget::Surface), Some(DeckCommand::Next));
        assert_eq!(router.click(290.0, 1000.0, ClickTarget::Surface), Some(DeckCommand::Prev));
    }

    #[test]
    fn test_click_on_interactive_target_ignored() {
        let router = InputRouter::default();
        for target in [ClickTarget::NavButton, ClickTarget::FlipCard, ClickTarget::Link, ClickTarget::Button] {
            assert_eq!(router.click(990.0, 1000.0, target), None);
        }
    }

    #[test]
    fn test_swipe_maps_to_navigation() {
        let mut router = InputRouter::default();
        router.touch_start(400.0);
        assert_eq!(router.touch_end(340.0), Some(DeckCommand::Next));

        router.touch_start(400.0);
        assert_eq!(router.touch_end(470.0), Some(DeckCommand::Prev));

        router.touch_start(400.0);
        assert_eq!(router.touch_end(370.0), None);
    }

    #[test]
    fn test_wheel_direction_and_debounce() {
        let mut router = InputRouter::default();
        assert_eq!(router.wheel(120.0, 0.0), Some(DeckCommand::Next));
        assert_eq!(router.wheel(-120.0, 100.0), None);
        assert!(router.is_wheel_blocked(799.0));
        assert_eq!(router.wheel(-120.0, 800.0), Some(DeckCommand::Prev));
    }

    #[test]
    fn test_zero_wheel_delta_does_not_arm_cooldown() {
        let mut router = InputRouter::default();
        assert_eq!(router.wheel(0.0, 0.0), None);
        assert_eq!(router.wheel(50.0, 1.0), Some(DeckCommand::Next));
    }

    #[test]
    fn test_indicator_maps_to_go_to() {
        let router = InputRouter::default();
        assert_eq!(router.indicator(3), DeckCommand::GoTo(3));
    }
}
