//! Input handling for keyboard, pointer, touch, wheel and indicator events

use crate::host::{DeckView, Scheduler};
use crate::input::{ClickTarget, DeckCommand, InputResult};
use crate::navigation::NavSource;
use super::Deck;

impl<V: DeckView, S: Scheduler> Deck<V, S> {
    /// Handle a key press (DOM `KeyboardEvent.key`)
    pub fn handle_key(&mut self, key: &str) -> InputResult {
        let command = match self.input.key(key, self.view.is_fullscreen()) {
            Some(command) => command,
            None => return InputResult::Unhandled,
        };
        self.execute(command, NavSource::Keyboard);
        InputResult::Handled {
            prevent_default: command.is_navigation(),
        }
    }

    /// Handle a click at `x` in a viewport `width` pixels wide
    pub fn handle_click(&mut self, x: f32, width: f32, target: ClickTarget) -> InputResult {
        let command = self.input.click(x, width, target);
        self.dispatch(command, NavSource::Click)
    }

    /// Handle touch start
    pub fn handle_touch_start(&mut self, x: f32) {
        self.input.touch_start(x);
    }

    /// Handle touch end
    pub fn handle_touch_end(&mut self, x: f32) -> InputResult {
        let command = self.input.touch_end(x);
        self.dispatch(command, NavSource::Swipe)
    }

    /// Handle a wheel event; debounced against the scheduler clock
    pub fn handle_wheel(&mut self, delta_y: f64) -> InputResult {
        let now_ms = self.scheduler.now_ms();
        let command = self.input.wheel(delta_y, now_ms);
        self.dispatch(command, NavSource::Wheel)
    }

    /// Handle a click on indicator dot `index`
    pub fn handle_indicator_click(&mut self, index: usize) -> InputResult {
        let command = self.input.indicator(index);
        self.dispatch(Some(command), NavSource::Indicator)
    }

    /// Handle the previous button
    pub fn handle_prev_button(&mut self) -> InputResult {
        self.dispatch(Some(DeckCommand::Prev), NavSource::Button)
    }

    /// Handle the next button
    pub fn handle_next_button(&mut self) -> InputResult {
        self.dispatch(Some(DeckCommand::Next), NavSource::Button)
    }

    fn dispatch(&mut self, command: Option<DeckCommand>, source: NavSource) -> InputResult {
        match command {
            Some(command) => {
                self.execute(command, source);
                InputResult::Handled {
                    prevent_default: false,
                }
            }
            None => InputResult::Unhandled,
        }
    }

    /// Execute a command on behalf of `source`
    pub fn execute(&mut self, command: DeckCommand, source: NavSource) {
        match command {
            DeckCommand::Next => {
                self.step_next(source);
            }
            DeckCommand::Prev => {
                self.step_prev(source);
            }
            DeckCommand::First => {
                self.navigate(0, source);
            }
            DeckCommand::Last => {
                self.navigate(self.nav.last() as i64, source);
            }
            DeckCommand::GoTo(index) => {
                let index = i64::try_from(index).unwrap_or(i64::MAX);
                self.navigate(index, source);
            }
            DeckCommand::ToggleFullscreen => self.toggle_fullscreen(),
            DeckCommand::ExitFullscreen => self.exit_fullscreen(),
            DeckCommand::ToggleHints => {
                self.toggle_hints();
            }
            DeckCommand::ToggleAutoplay => {
                self.toggle_autoplay();
            }
        }
    }
}
