//! DOM event listeners feeding the deck's input handlers

use std::rc::Weak;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, KeyboardEvent, MouseEvent,
    TouchEvent, WheelEvent, Window,
};

use super::scheduler::DeckCell;
use super::BrowserDeck;
use crate::input::ClickTarget;

type Listener = Closure<dyn FnMut(Event)>;

/// Keeps every registered listener alive for the page's lifetime
pub(crate) struct EventBindings {
    deck: Weak<DeckCell>,
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

impl EventBindings {
    pub(crate) fn new(deck: Weak<DeckCell>) -> Self {
        Self {
            deck,
            listeners: Vec::new(),
        }
    }

    /// Attach `handler` to `target`, giving it mutable access to the deck
    fn listen<F>(&mut self, target: &EventTarget, event: &'static str, passive: bool, mut handler: F)
    where
        F: FnMut(&mut BrowserDeck, &Event) + 'static,
    {
        let deck = self.deck.clone();
        let closure: Listener = Closure::new(move |e: Event| {
            let Some(deck) = deck.upgrade() else {
                return;
            };
            match deck.try_borrow_mut() {
                Ok(mut deck) => handler(&mut *deck, &e),
                Err(_) => log::warn!("deck busy, dropped {} event", e.type_()),
            };
        });

        let result = if passive {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
        } else {
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        };
        match result {
            Ok(()) => self.listeners.push((target.clone(), event, closure)),
            Err(err) => log::error!("failed to listen for {}: {:?}", event, err),
        }
    }

    /// Keyboard, click, touch and wheel listeners on the document
    pub(crate) fn bind_document(&mut self, document: &Document, window: &Window) {
        self.listen(document, "keydown", false, |deck, e| {
            let Some(key_event) = e.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if deck.handle_key(&key_event.key()).prevents_default() {
                e.prevent_default();
            }
        });

        let viewport = window.clone();
        self.listen(document, "click", false, move |deck, e| {
            let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let width = viewport
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            deck.handle_click(mouse.client_x() as f32, width as f32, click_target(e));
        });

        self.listen(document, "touchstart", false, |deck, e| {
            if let Some(x) = first_changed_touch_x(e) {
                deck.handle_touch_start(x);
            }
        });

        self.listen(document, "touchend", false, |deck, e| {
            if let Some(x) = first_changed_touch_x(e) {
                deck.handle_touch_end(x);
            }
        });

        self.listen(document, "wheel", true, |deck, e| {
            if let Some(wheel) = e.dyn_ref::<WheelEvent>() {
                deck.handle_wheel(wheel.delta_y());
            }
        });
    }

    /// Prev/next buttons
    pub(crate) fn bind_buttons(&mut self, prev: &EventTarget, next: &EventTarget) {
        self.listen(prev, "click", false, |deck, _| {
            deck.handle_prev_button();
        });
        self.listen(next, "click", false, |deck, _| {
            deck.handle_next_button();
        });
    }

    /// Click and hover listeners on each indicator dot
    pub(crate) fn bind_indicators(&mut self, dots: &[EventTarget]) {
        for (index, dot) in dots.iter().enumerate() {
            self.listen(dot, "click", false, move |deck, _| {
                deck.handle_indicator_click(index);
            });
            self.listen(dot, "mouseenter", false, move |deck, _| {
                deck.hover_indicator(index, true);
            });
            self.listen(dot, "mouseleave", false, move |deck, _| {
                deck.hover_indicator(index, false);
            });
        }
    }

    /// Replay entrance animations once every resource has loaded
    pub(crate) fn bind_load(&mut self, window: &Window) {
        self.listen(window, "load", false, |deck, _| {
            deck.resources_loaded();
        });
    }

    /// Number of live listeners
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        for (target, event, closure) in self.listeners.drain(..) {
            let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

/// Classify the element a click landed on
fn click_target(e: &Event) -> ClickTarget {
    let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return ClickTarget::Surface;
    };
    let within = |selector: &str| matches!(el.closest(selector), Ok(Some(_)));
    if within(".nav-btn") {
        ClickTarget::NavButton
    } else if within(".product-card") {
        ClickTarget::FlipCard
    } else if within("a") {
        ClickTarget::Link
    } else if within("button") {
        ClickTarget::Button
    } else {
        ClickTarget::Surface
    }
}

fn first_changed_touch_x(e: &Event) -> Option<f32> {
    let touch = e.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(touch.screen_x() as f32)
}
