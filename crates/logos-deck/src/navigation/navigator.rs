//! Slide index state machine

/// Owns the current slide index and its clamping rules
#[derive(Clone, Debug)]
pub struct Navigator {
    current: usize,
    total: usize,
}

impl Navigator {
    /// Create a navigator at slide 0; `total` must be non-zero
    pub fn new(total: usize) -> Self {
        debug_assert!(total > 0, "navigator needs at least one slide");
        Self { current: 0, total }
    }

    /// Current slide index
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Index of the last slide
    #[inline]
    pub fn last(&self) -> usize {
        self.total - 1
    }

    /// Whether the first slide is current
    #[inline]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Whether the last slide is current
    #[inline]
    pub fn is_last(&self) -> bool {
        self.current == self.last()
    }

    /// Clamp an arbitrary request into `[0, total-1]`
    pub fn clamp(&self, index: i64) -> usize {
        if index <= 0 {
            0
        } else {
            (index as u64).min(self.last() as u64) as usize
        }
    }

    /// Move to `index` (clamped); returns `(from, to)`
    pub fn go_to(&mut self, index: i64) -> (usize, usize) {
        let from = self.current;
        self.current = self.clamp(index);
        (from, self.current)
    }

    /// Target of a `next` request, `None` at the last slide
    pub fn next_target(&self) -> Option<usize> {
        (!self.is_last()).then(|| self.current + 1)
    }

    /// Target of a `prev` request, `None` at the first slide
    pub fn prev_target(&self) -> Option<usize> {
        (!self.is_first()).then(|| self.current - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let nav = Navigator::new(5);
        assert_eq!(nav.current(), 0);
        assert!(nav.is_first());
        assert!(!nav.is_last());
    }

    #[test]
    fn test_go_to_clamps() {
        let mut nav = Navigator::new(5);
        for (request, expected) in [(-10, 0), (-1, 0), (0, 0), (3, 3), (4, 4), (5, 4), (i64::MAX, 4)] {
            nav.go_to(request);
            assert_eq!(nav.current(), expected, "request {}", request);
        }
    }

    #[test]
    fn test_go_to_reports_transition() {
        let mut nav = Navigator::new(3);
        assert_eq!(nav.go_to(2), (0, 2));
        assert_eq!(nav.go_to(1), (2, 1));
    }

    #[test]
    fn test_next_prev_targets_at_bounds() {
        let mut nav = Navigator::new(2);
        assert_eq!(nav.prev_target(), None);
        assert_eq!(nav.next_target(), Some(1));

        nav.go_to(1);
        assert_eq!(nav.next_target(), None);
        assert_eq!(nav.prev_target(), Some(0));
    }

    #[test]
    fn test_single_slide_is_first_and_last() {
        let nav = Navigator::new(1);
        assert!(nav.is_first() && nav.is_last());
        assert_eq!(nav.next_target(), None);
        assert_eq!(nav.prev_target(), None);
    }
}
