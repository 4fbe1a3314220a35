//! Gesture recognizers for touch swipes and wheel scrolling

/// Horizontal swipe direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left
    Left,
    /// Finger moved left to right
    Right,
}

/// Tracks one touch cycle at a time
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    threshold_px: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    /// Create a tracker that ignores travel of `threshold_px` or less
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    /// Record the touch-start position, replacing any unfinished cycle
    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the cycle at `x`
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= self.threshold_px {
            return None;
        }
        Some(if diff > 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }

    /// Whether a touch cycle is in progress
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

/// Wheel debounce: passes one event, then blocks for a cool-down window
#[derive(Clone, Debug)]
pub struct WheelGate {
    cooldown_ms: f64,
    blocked_until_ms: Option<f64>,
}

impl WheelGate {
    /// Create a gate with the given cool-down
    pub fn new(cooldown_ms: u32) -> Self {
        Self {
            cooldown_ms: cooldown_ms as f64,
            blocked_until_ms: None,
        }
    }

    /// Whether an event at `now_ms` falls inside the cool-down window
    pub fn is_blocked(&self, now_ms: f64) -> bool {
        matches!(self.blocked_until_ms, Some(until) if now_ms < until)
    }

    /// Try to pass an event at `now_ms`; arms the cool-down on success
    pub fn try_pass(&mut self, now_ms: f64) -> bool {
        if self.is_blocked(now_ms) {
            return false;
        }
        self.blocked_until_ms = Some(now_ms + self.cooldown_ms);
        true
    }
}
