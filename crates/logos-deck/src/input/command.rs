//! Commands produced by the input router

/// Action requested by an input channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckCommand {
    /// Advance one slide
    Next,
    /// Go back one slide
    Prev,
    /// Jump to the first slide
    First,
    /// Jump to the last slide
    Last,
    /// Jump to a specific slide
    GoTo(usize),
    /// Enter or leave fullscreen
    ToggleFullscreen,
    /// Leave fullscreen if active
    ExitFullscreen,
    /// Show or hide the keyboard hints overlay
    ToggleHints,
    /// Start or stop autoplay
    ToggleAutoplay,
}

impl DeckCommand {
    /// Whether the command moves between slides
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            DeckCommand::Next
                | DeckCommand::Prev
                | DeckCommand::First
                | DeckCommand::Last
                | DeckCommand::GoTo(_)
        )
    }
}
