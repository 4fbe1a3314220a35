//! DOM implementation of [`DeckView`]
//!
//! Markup contract:
//! - `.slide` panels, toggled with the `active` / `prev` classes
//! - `#progressBar`, `#slideCounter`, `#prevBtn`, `#nextBtn`, `#keyboardHints`
//! - `.animate-in` elements and `.counter[data-target]` widgets inside slides

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement};

use crate::animation::CounterId;
use crate::error::DeckError;
use crate::host::{Chrome, DeckView, SlideTag};
use crate::registry::{SlideRegistry, SlideSpec};

const SLIDE_SELECTOR: &str = ".slide";
const ANIMATED_SELECTOR: &str = ".animate-in";
const COUNTER_SELECTOR: &str = ".counter";
const COUNTER_TARGET_ATTR: &str = "data-target";

const RAIL_STYLE: &str = "position: fixed; right: 20px; top: 50%; transform: translateY(-50%); \
    display: flex; flex-direction: column; gap: 8px; z-index: 1000;";
const DOT_STYLE: &str = "width: 8px; height: 8px; border-radius: 50%; \
    border: 1px solid rgba(255,255,255,0.3); background: transparent; cursor: pointer; \
    transition: all 0.3s ease; padding: 0;";
const DOT_ACTIVE_COLOR: &str = "var(--accent-blue)";
const DOT_IDLE_BORDER: &str = "rgba(255,255,255,0.3)";

/// Document-backed deck view
pub struct DomView {
    document: Document,
    slides: Vec<Element>,
    counters: Vec<Vec<Element>>,
    progress_bar: HtmlElement,
    slide_counter: Element,
    prev_btn: HtmlElement,
    next_btn: HtmlElement,
    keyboard_hints: HtmlElement,
    indicators: Vec<HtmlElement>,
}

impl DomView {
    /// Discover the slides and chrome elements of `document`
    pub fn discover(document: Document) -> Result<(Self, SlideRegistry), DeckError> {
        let slides = query_all(&document, SLIDE_SELECTOR)?;

        let mut specs = Vec::with_capacity(slides.len());
        let mut counters = Vec::with_capacity(slides.len());
        for (slide_index, slide) in slides.iter().enumerate() {
            let animated = slide
                .query_selector_all(ANIMATED_SELECTOR)
                .map(|list| list.length() as usize)
                .unwrap_or(0);
            let counter_elements = query_all(slide, COUNTER_SELECTOR)?;
            let targets = counter_elements
                .iter()
                .enumerate()
                .map(|(index, el)| parse_target(slide_index, index, el))
                .collect::<Result<Vec<_>, _>>()?;

            specs.push(SlideSpec {
                animated_elements: animated,
                counters: targets,
            });
            counters.push(counter_elements);
        }
        let registry = SlideRegistry::new(specs)?;

        let view = Self {
            progress_bar: html_by_id(&document, "progressBar")?,
            slide_counter: element_by_id(&document, "slideCounter")?,
            prev_btn: html_by_id(&document, "prevBtn")?,
            next_btn: html_by_id(&document, "nextBtn")?,
            keyboard_hints: html_by_id(&document, "keyboardHints")?,
            document,
            slides,
            counters,
            indicators: Vec::new(),
        };
        Ok((view, registry))
    }

    /// Previous button element
    pub fn prev_button(&self) -> &HtmlElement {
        &self.prev_btn
    }

    /// Next button element
    pub fn next_button(&self) -> &HtmlElement {
        &self.next_btn
    }

    /// Indicator dots, empty until the rail is installed
    pub fn indicators(&self) -> &[HtmlElement] {
        &self.indicators
    }

    fn set_style(el: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = el.style().set_property(property, value) {
            log::debug!("failed to set {}: {:?}", property, err);
        }
    }

    fn set_button_enabled(button: &HtmlElement, enabled: bool) {
        Self::set_style(button, "opacity", if enabled { "1" } else { "0.3" });
        Self::set_style(button, "pointer-events", if enabled { "auto" } else { "none" });
    }
}

impl DeckView for DomView {
    fn set_slide_tag(&mut self, slide: usize, tag: SlideTag) {
        let Some(el) = self.slides.get(slide) else {
            return;
        };
        let classes = el.class_list();
        let result = match tag {
            SlideTag::Active => classes.remove_1("prev").and_then(|_| classes.add_1("active")),
            SlideTag::Prev => classes.remove_1("active").and_then(|_| classes.add_1("prev")),
            SlideTag::Inactive => classes.remove_2("active", "prev"),
        };
        if let Err(err) = result {
            log::debug!("failed to tag slide {}: {:?}", slide, err);
        }
    }

    fn render_chrome(&mut self, chrome: &Chrome) {
        Self::set_style(
            &self.progress_bar,
            "width",
            &format!("{}%", chrome.progress_percent),
        );
        self.slide_counter.set_text_content(Some(&chrome.label));
        Self::set_button_enabled(&self.prev_btn, chrome.prev_enabled);
        Self::set_button_enabled(&self.next_btn, chrome.next_enabled);
    }

    fn restart_entrance_animations(&mut self, slide: usize) {
        let Some(el) = self.slides.get(slide) else {
            return;
        };
        let Ok(animated) = query_all(el, ANIMATED_SELECTOR) else {
            return;
        };
        for el in animated {
            let Ok(el) = el.dyn_into::<HtmlElement>() else {
                continue;
            };
            Self::set_style(&el, "animation", "none");
            // Reading layout forces a reflow so the cleared animation takes effect
            let _ = el.offset_height();
            let _ = el.style().remove_property("animation");
        }
    }

    fn set_counter_value(&mut self, counter: CounterId, value: i64) {
        if let Some(el) = self
            .counters
            .get(counter.slide)
            .and_then(|slide| slide.get(counter.index))
        {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    fn set_hints_visible(&mut self, visible: bool) {
        Self::set_style(
            &self.keyboard_hints,
            "display",
            if visible { "flex" } else { "none" },
        );
    }

    fn install_indicators(&mut self, count: usize) {
        if !self.indicators.is_empty() {
            return;
        }
        let Some(body) = self.document.body() else {
            log::warn!("document has no body, indicator rail skipped");
            return;
        };
        let Some(rail) = create_html(&self.document, "div") else {
            return;
        };
        rail.set_class_name("slide-indicators");
        rail.style().set_css_text(RAIL_STYLE);

        // Dots are only kept once the whole rail is attached
        let mut dots = Vec::with_capacity(count);
        for index in 0..count {
            let Some(dot) = create_html(&self.document, "button") else {
                return;
            };
            dot.set_class_name("slide-indicator");
            dot.style().set_css_text(DOT_STYLE);
            let _ = dot.set_attribute("aria-label", &format!("Go to slide {}", index + 1));
            if let Err(err) = rail.append_child(&dot) {
                log::warn!("failed to append indicator {}: {:?}", index, err);
                return;
            }
            dots.push(dot);
        }

        if let Err(err) = body.append_child(&rail) {
            log::warn!("failed to append indicator rail: {:?}", err);
            return;
        }
        self.indicators = dots;
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        let Some(dot) = self.indicators.get(index) else {
            return;
        };
        let (background, border) = if active {
            (DOT_ACTIVE_COLOR, DOT_ACTIVE_COLOR)
        } else {
            ("transparent", DOT_IDLE_BORDER)
        };
        Self::set_style(dot, "background", background);
        Self::set_style(dot, "border-color", border);
    }

    fn set_indicator_hovered(&mut self, index: usize, hovered: bool) {
        if let Some(dot) = self.indicators.get(index) {
            Self::set_style(dot, "transform", if hovered { "scale(1.5)" } else { "scale(1)" });
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&mut self) -> Result<(), DeckError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| DeckError::MissingElement("documentElement".to_string()))?;

        // Called through Reflect to get hold of the returned promise
        let request = js_sys::Reflect::get(&root, &"requestFullscreen".into())
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| DeckError::Fullscreen("requestFullscreen is not supported".to_string()))?;
        let returned = request
            .call0(&root)
            .map_err(|err| DeckError::Fullscreen(format!("{:?}", err)))?;

        if let Ok(promise) = returned.dyn_into::<js_sys::Promise>() {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("{}", DeckError::Fullscreen(format!("{:?}", err)));
                }
            });
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.document.exit_fullscreen();
    }

    fn mark_loaded(&mut self) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().add_1("loaded");
        }
    }
}

/// Anything that can run `querySelectorAll`
trait Queryable {
    fn select_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue>;
}

impl Queryable for Document {
    fn select_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Queryable for Element {
    fn select_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

fn query_all<Q: Queryable>(root: &Q, selector: &str) -> Result<Vec<Element>, DeckError> {
    let list = root
        .select_all(selector)
        .map_err(|err| DeckError::Host(format!("querySelectorAll('{}'): {:?}", selector, err)))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, DeckError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DeckError::MissingElement(format!("#{}", id)))
}

fn html_by_id(document: &Document, id: &str) -> Result<HtmlElement, DeckError> {
    element_by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DeckError::MissingElement(format!("#{} (not an HTML element)", id)))
}

fn create_html(document: &Document, tag: &str) -> Option<HtmlElement> {
    match document.create_element(tag) {
        Ok(el) => el.dyn_into::<HtmlElement>().ok(),
        Err(err) => {
            log::warn!("failed to create <{}>: {:?}", tag, err);
            None
        }
    }
}

fn parse_target(slide: usize, index: usize, el: &Element) -> Result<i64, DeckError> {
    let raw = el.get_attribute(COUNTER_TARGET_ATTR).unwrap_or_default();
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DeckError::InvalidCounterTarget {
            slide,
            index,
            value: raw,
        })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const MARKUP: &str = r#"
        <div id="progressBar"></div>
        <div class="slide"></div>
        <div class="slide"><span class="counter" data-target="12">0</span></div>
        <div id="slideCounter"></div>
        <button id="prevBtn"></button>
        <button id="nextBtn"></button>
        <div id="keyboardHints"></div>
    "#;

    fn document_with(markup: &str) -> Document {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        document.body().unwrap().set_inner_html(markup);
        document
    }

    #[wasm_bindgen_test]
    fn test_discover_reads_counters() {
        let (_, registry) = DomView::discover(document_with(MARKUP)).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(1).map(|s| s.counters.clone()), Some(vec![12]));
    }

    #[wasm_bindgen_test]
    fn test_indicator_dots_are_attached() {
        let document = document_with(MARKUP);
        let (mut view, _) = DomView::discover(document.clone()).unwrap();

        view.install_indicators(2);
        view.install_indicators(2);

        assert_eq!(view.indicators().len(), 2);
        assert!(view.indicators().iter().all(|dot| dot.is_connected()));
        let in_document = document.query_selector_all(".slide-indicator").unwrap();
        assert_eq!(in_document.length(), 2);
    }
}
