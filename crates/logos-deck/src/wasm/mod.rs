//! WASM exports for the slide deck
//!
//! This module provides wasm-bindgen exports for the [`Deck`], wiring it to the
//! live document: DOM discovery, event listeners, browser timers and console
//! logging.

mod dom;
mod events;
mod logger;
mod scheduler;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

use crate::config::DeckConfig;
use crate::deck::Deck;
use crate::error::DeckError;

pub use dom::DomView;
pub use scheduler::BrowserScheduler;

use events::EventBindings;
use scheduler::DeckCell;

/// Deck type driven by the browser binding
pub(crate) type BrowserDeck = Deck<DomView, BrowserScheduler>;

fn to_js(err: DeckError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Presentation controller for WASM - wraps the deck with a JS-friendly API
#[wasm_bindgen]
pub struct Presentation {
    deck: Rc<DeckCell>,
    _bindings: EventBindings,
}

#[wasm_bindgen]
impl Presentation {
    /// Discover the deck in the current document and start it
    ///
    /// `config_json` is an optional JSON object of [`DeckConfig`] overrides.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Presentation, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => DeckConfig::from_json(&json).map_err(to_js)?,
            None => DeckConfig::default(),
        };
        logger::init(config.level_filter().map_err(to_js)?);

        let window = web_sys::window().ok_or_else(|| to_js(DeckError::Host("no window".into())))?;
        let document = window
            .document()
            .ok_or_else(|| to_js(DeckError::Host("no document".into())))?;
        let (view, registry) = DomView::discover(document.clone()).map_err(to_js)?;

        let deck: Rc<DeckCell> = Rc::new_cyclic(|weak| {
            let scheduler = BrowserScheduler::new(window.clone(), weak.clone());
            RefCell::new(Deck::build(registry, view, scheduler, config))
        });

        let mut bindings = EventBindings::new(Rc::downgrade(&deck));
        {
            let mut deck = deck
                .try_borrow_mut()
                .map_err(|_| to_js(DeckError::Host("deck is busy".into())))?;
            deck.start();
            deck.install_indicators();

            bindings.bind_document(&document, &window);
            bindings.bind_buttons(deck.view().prev_button(), deck.view().next_button());
            let dots: Vec<EventTarget> = deck
                .view()
                .indicators()
                .iter()
                .map(|dot| EventTarget::from(dot.clone()))
                .collect();
            bindings.bind_indicators(&dots);

            if document.ready_state() == "complete" {
                deck.resources_loaded();
            } else {
                bindings.bind_load(&window);
            }
        }

        log::info!("presentation loaded");
        log::info!("navigation: arrow keys, space, click, scroll, swipe");
        log::info!("F = fullscreen | H = hide hints | A = autoplay");
        log::debug!("{} event listeners bound", bindings.len());

        Ok(Self {
            deck,
            _bindings: bindings,
        })
    }

    fn with_deck<R>(&self, f: impl FnOnce(&mut BrowserDeck) -> R) -> Result<R, JsValue> {
        let mut deck = self
            .deck
            .try_borrow_mut()
            .map_err(|_| to_js(DeckError::Host("deck is busy".into())))?;
        Ok(f(&mut deck))
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Go to a slide; out-of-range indices are clamped
    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, index: i32) -> Result<(), JsValue> {
        self.with_deck(|deck| {
            deck.go_to_slide(i64::from(index));
        })
    }

    /// Advance one slide
    #[wasm_bindgen(js_name = nextSlide)]
    pub fn next_slide(&self) -> Result<(), JsValue> {
        self.with_deck(|deck| {
            deck.next_slide();
        })
    }

    /// Go back one slide
    #[wasm_bindgen(js_name = prevSlide)]
    pub fn prev_slide(&self) -> Result<(), JsValue> {
        self.with_deck(|deck| {
            deck.prev_slide();
        })
    }

    /// Current slide index
    #[wasm_bindgen(js_name = getCurrentSlide)]
    pub fn get_current_slide(&self) -> Result<u32, JsValue> {
        self.with_deck(|deck| deck.current_slide() as u32)
    }

    /// Number of slides
    #[wasm_bindgen(js_name = getTotalSlides)]
    pub fn get_total_slides(&self) -> Result<u32, JsValue> {
        self.with_deck(|deck| deck.total_slides() as u32)
    }

    // =========================================================================
    // Controls
    // =========================================================================

    /// Enter or leave fullscreen
    #[wasm_bindgen(js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(&self) -> Result<(), JsValue> {
        self.with_deck(|deck| deck.toggle_fullscreen())
    }

    /// Start or stop autoplay; returns whether it is now running
    #[wasm_bindgen(js_name = toggleAutoPlay)]
    pub fn toggle_auto_play(&self) -> Result<bool, JsValue> {
        self.with_deck(|deck| deck.toggle_autoplay())
    }

    /// Show or hide the keyboard hints; returns the new visibility
    #[wasm_bindgen(js_name = toggleHints)]
    pub fn toggle_hints(&self) -> Result<bool, JsValue> {
        self.with_deck(|deck| deck.toggle_hints())
    }

    /// Deck state as JSON
    #[wasm_bindgen(js_name = statusJson)]
    pub fn status_json(&self) -> Result<String, JsValue> {
        self.with_deck(|deck| deck.status_json())
    }
}
