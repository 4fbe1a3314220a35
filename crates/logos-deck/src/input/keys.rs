//! Keyboard shortcut table
//!
//! Keys are matched on the DOM `KeyboardEvent.key` value.

use super::DeckCommand;

/// Map a key value to a command
///
/// `Escape` maps to [`DeckCommand::ExitFullscreen`]; the caller decides whether
/// fullscreen is active.
pub fn command_for_key(key: &str) -> Option<DeckCommand> {
    let command = match key {
        "ArrowRight" | "ArrowDown" | " " | "Enter" => DeckCommand::Next,
        "ArrowLeft" | "ArrowUp" => DeckCommand::Prev,
        "Home" => DeckCommand::First,
        "End" => DeckCommand::Last,
        "f" | "F" => DeckCommand::ToggleFullscreen,
        "h" | "H" => DeckCommand::ToggleHints,
        "a" | "A" => DeckCommand::ToggleAutoplay,
        "Escape" => DeckCommand::ExitFullscreen,
        _ => return None,
    };
    Some(command)
}
