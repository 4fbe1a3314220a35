//! Easing functions for animations

/// Ease-out quartic: fast start, slow finish
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}
