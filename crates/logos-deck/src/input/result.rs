//! Input result type

use serde::Serialize;

/// What a pointer click landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// Plain slide content
    Surface,
    /// A prev/next navigation button
    NavButton,
    /// A flippable product card
    FlipCard,
    /// A hyperlink
    Link,
    /// Any other button element
    Button,
}

impl ClickTarget {
    /// Whether the target has its own click semantics
    #[inline]
    pub fn is_interactive(&self) -> bool {
        !matches!(self, ClickTarget::Surface)
    }
}

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Input was mapped to a deck command
    Handled {
        /// The host should suppress the browser's default action
        #[serde(rename = "preventDefault")]
        prevent_default: bool,
    },
    /// Input was not handled (pass through)
    Unhandled,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled { .. })
    }

    /// Check if the browser default should be suppressed
    #[inline]
    pub fn prevents_default(&self) -> bool {
        matches!(self, InputResult::Handled { prevent_default: true })
    }
}
