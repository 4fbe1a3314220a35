//! Slide registry
//!
//! The ordered, fixed set of slides discovered once at startup.

use crate::error::DeckError;

/// Description of one slide as found in the markup
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideSpec {
    /// Number of elements carrying an entrance animation
    pub animated_elements: usize,
    /// Target values of the slide's counter widgets, in document order
    pub counters: Vec<i64>,
}

impl SlideSpec {
    /// A slide with neither animated elements nor counters
    pub fn plain() -> Self {
        Self::default()
    }

    /// A slide with the given counter targets
    pub fn with_counters(counters: impl Into<Vec<i64>>) -> Self {
        Self {
            animated_elements: 0,
            counters: counters.into(),
        }
    }
}

/// Immutable, non-empty list of slides
#[derive(Clone, Debug)]
pub struct SlideRegistry {
    slides: Vec<SlideSpec>,
}

impl SlideRegistry {
    /// Build a registry, failing on an empty deck
    pub fn new(slides: Vec<SlideSpec>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    /// Registry of `count` plain slides
    pub fn plain(count: usize) -> Result<Self, DeckError> {
        Self::new(vec![SlideSpec::plain(); count])
    }

    /// Number of slides (never zero)
    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Index of the last slide
    #[inline]
    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    /// Get a slide by index
    pub fn get(&self, index: usize) -> Option<&SlideSpec> {
        self.slides.get(index)
    }
}
