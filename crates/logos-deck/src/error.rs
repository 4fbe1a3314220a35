//! Deck errors

use thiserror::Error;

/// Errors raised while building or driving a deck
///
/// Navigation itself never fails: out-of-range requests are clamped. These
/// cover broken markup at startup and host services that can refuse a request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The document contains no slide panels
    #[error("deck has no slides; at least one `.slide` element is required")]
    EmptyDeck,
    /// A required element of the markup contract is absent
    #[error("required element '{0}' is missing from the document")]
    MissingElement(String),
    /// A counter's target attribute is not an integer
    #[error("counter {index} on slide {slide} has non-integer target '{value}'")]
    InvalidCounterTarget {
        /// Slide containing the counter
        slide: usize,
        /// Position of the counter within the slide
        index: usize,
        /// Raw attribute value
        value: String,
    },
    /// The host refused to enter fullscreen
    #[error("fullscreen request rejected: {0}")]
    Fullscreen(String),
    /// Configuration failed validation
    #[error("invalid deck configuration: {0}")]
    InvalidConfig(String),
    /// Any other host runtime failure
    #[error("host error: {0}")]
    Host(String),
}
