//! Browser [`Scheduler`]: `setTimeout`, `requestAnimationFrame`, `setInterval`

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::dom::DomView;
use crate::deck::Deck;
use crate::host::{ScheduledTask, Scheduler, TimerHandle};

/// The deck as shared between JS handlers and scheduled callbacks
pub(crate) type DeckCell = RefCell<Deck<DomView, BrowserScheduler>>;

/// Hand a fired task back to the deck, if it is still alive and idle
pub(crate) fn dispatch(deck: &Weak<DeckCell>, task: ScheduledTask) {
    let Some(deck) = deck.upgrade() else {
        return;
    };
    match deck.try_borrow_mut() {
        Ok(mut deck) => deck.run_task(task),
        Err(_) => log::warn!("deck busy, dropped {:?}", task),
    };
}

/// A live `setInterval` registration
struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

/// Scheduler backed by the window's timer and frame APIs
pub struct BrowserScheduler {
    window: Window,
    deck: Weak<DeckCell>,
    intervals: HashMap<TimerHandle, Interval>,
    next_handle: u64,
}

impl BrowserScheduler {
    /// Create a scheduler that delivers tasks to `deck`
    pub(crate) fn new(window: Window, deck: Weak<DeckCell>) -> Self {
        Self {
            window,
            deck,
            intervals: HashMap::new(),
            next_handle: 1,
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        match self.window.performance() {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }

    fn schedule_after(&mut self, delay_ms: u32, task: ScheduledTask) {
        let deck = self.deck.clone();
        let callback = Closure::once_into_js(move || dispatch(&deck, task));
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            log::error!("setTimeout failed for {:?}: {:?}", task, err);
        }
    }

    fn request_frame(&mut self, task: ScheduledTask) {
        let deck = self.deck.clone();
        let callback = Closure::once_into_js(move |_timestamp: f64| dispatch(&deck, task));
        if let Err(err) = self.window.request_animation_frame(callback.unchecked_ref()) {
            log::error!("requestAnimationFrame failed for {:?}: {:?}", task, err);
        }
    }

    fn schedule_every(&mut self, period_ms: u32, task: ScheduledTask) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        let deck = self.deck.clone();
        let callback = Closure::<dyn FnMut()>::new(move || dispatch(&deck, task));
        let period = i32::try_from(period_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period,
            ) {
            Ok(id) => {
                self.intervals.insert(
                    handle,
                    Interval {
                        id,
                        _callback: callback,
                    },
                );
            }
            Err(err) => log::error!("setInterval failed for {:?}: {:?}", task, err),
        }
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(interval) = self.intervals.remove(&handle) {
            self.window.clear_interval_with_handle(interval.id);
        }
    }
}

impl BrowserScheduler {
    /// Clear every live interval; returns how many were cleared
    pub(crate) fn cancel_all(&mut self) -> usize {
        let count = self.intervals.len();
        for (_, interval) in self.intervals.drain() {
            self.window.clear_interval_with_handle(interval.id);
        }
        count
    }

    #[cfg(test)]
    pub(crate) fn interval_count(&self) -> usize {
        self.intervals.len()
    }
}

// The interval closures die with the scheduler, so the browser must stop
// calling them first
impl Drop for BrowserScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
