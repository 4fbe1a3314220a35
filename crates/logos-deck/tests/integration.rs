//! Integration tests for Deck
//!
//! These tests drive a full deck on the mock host, verifying:
//! - Clamped navigation and the deferred activation
//! - Chrome (progress, label, button state)
//! - Keyboard, click, swipe, wheel, button and indicator input
//! - Counter tweens and their supersession
//! - Autoplay wrap-around and cancellation
//! - Fullscreen, hints, indicators and the status snapshot

use std::cell::RefCell;
use std::rc::Rc;

use logos_deck::{
    ClickTarget, Deck, DeckConfig, DeckError, DeckView, InputResult, NavSource, SlideChange,
    SlideRegistry, SlideSpec, SlideTag, ACTIVATION_DELAY_MS, AUTOPLAY_INTERVAL_MS,
    COUNTER_DURATION_MS, WHEEL_COOLDOWN_MS,
};
use logos_deck_mock::{advance, mock_deck, settle, MockDeck, MockScheduler, MockView, PendingKind};

fn plain_deck(slides: usize) -> MockDeck {
    mock_deck(SlideRegistry::plain(slides).unwrap())
}

fn counter_deck(target: i64) -> MockDeck {
    mock_deck(
        SlideRegistry::new(vec![
            SlideSpec::plain(),
            SlideSpec::with_counters(vec![target]),
            SlideSpec::plain(),
        ])
        .unwrap(),
    )
}

/// Record every slide change under the name `recorder`
fn record_changes(deck: &mut MockDeck) -> Rc<RefCell<Vec<SlideChange>>> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    deck.subscribe(
        "recorder",
        Box::new(move |change: &SlideChange, _view: &mut dyn DeckView| {
            sink.borrow_mut().push(*change);
        }),
    );
    changes
}

fn activation_window() -> f64 {
    f64::from(ACTIVATION_DELAY_MS)
}

// =============================================================================
// Navigation Tests
// =============================================================================

#[test]
fn test_start_tags_first_slide_active() {
    let deck = plain_deck(4);

    assert_eq!(deck.current_slide(), 0);
    assert_eq!(deck.view().slides_tagged(SlideTag::Active), vec![0]);
    assert_eq!(deck.view().slides_tagged(SlideTag::Inactive), vec![1, 2, 3]);
    assert_eq!(deck.view().entrance_restarts, vec![0]);
}

#[test]
fn test_go_to_slide_clamps_every_request() {
    let mut deck = plain_deck(5);

    for (request, expected) in [(-5, 0), (-1, 0), (0, 0), (2, 2), (4, 4), (5, 4), (100, 4)] {
        let change = deck.go_to_slide(request);
        assert_eq!(deck.current_slide(), expected, "request {}", request);
        assert_eq!(change.to, expected);
        assert_eq!(change.source, NavSource::Api);
        settle(&mut deck, 100.0);
    }
}

#[test]
fn test_next_at_last_and_prev_at_first_are_noops() {
    let mut deck = plain_deck(3);

    assert!(deck.prev_slide().is_none());
    assert_eq!(deck.current_slide(), 0);

    deck.go_to_slide(2);
    settle(&mut deck, 100.0);
    let renders = deck.view().chrome_renders;

    assert!(deck.next_slide().is_none());
    assert_eq!(deck.current_slide(), 2);
    assert_eq!(deck.view().chrome_renders, renders);
}

#[test]
fn test_outgoing_slide_is_prev_until_activation() {
    let mut deck = plain_deck(4);

    deck.go_to_slide(2);
    assert_eq!(deck.view().slides_tagged(SlideTag::Prev), vec![0]);
    assert!(deck.view().slides_tagged(SlideTag::Active).is_empty());
    assert!(deck.status().activation_pending);

    advance(&mut deck, activation_window());
    assert_eq!(deck.view().slides_tagged(SlideTag::Active), vec![2]);
    assert!(deck.view().slides_tagged(SlideTag::Prev).is_empty());
    assert!(!deck.status().activation_pending);
}

#[test]
fn test_newer_navigation_supersedes_pending_activation() {
    let mut deck = plain_deck(5);

    deck.go_to_slide(1);
    advance(&mut deck, 30.0);
    deck.go_to_slide(3);

    // The first activation falls due but is stale
    advance(&mut deck, 25.0);
    assert_eq!(deck.view().slides_tagged(SlideTag::Prev), vec![0, 1]);
    assert!(deck.view().slides_tagged(SlideTag::Active).is_empty());
    assert!(deck.status().activation_pending);

    advance(&mut deck, 30.0);
    assert_eq!(deck.view().slides_tagged(SlideTag::Active), vec![3]);
    assert!(deck.view().slides_tagged(SlideTag::Prev).is_empty());
}

#[test]
fn test_exactly_one_active_after_any_navigation() {
    let mut deck = plain_deck(6);

    for request in [3, 0, 5, 5, 2, -3, 9] {
        deck.go_to_slide(request);
        settle(&mut deck, 100.0);
        let active = deck.view().slides_tagged(SlideTag::Active);
        assert_eq!(active, vec![deck.current_slide()]);
    }
}

#[test]
fn test_requesting_current_slide_replays_entry() {
    let mut deck = plain_deck(3);
    deck.go_to_slide(1);
    settle(&mut deck, 100.0);
    let restarts = deck.view().entrance_restarts.len();

    let change = deck.go_to_slide(1);
    assert_eq!((change.from, change.to), (1, 1));
    assert_eq!(deck.view().entrance_restarts.len(), restarts + 1);
    assert_eq!(deck.view().tags[1], SlideTag::Prev);

    settle(&mut deck, 100.0);
    assert_eq!(deck.view().slides_tagged(SlideTag::Active), vec![1]);
}

#[test]
fn test_resources_loaded_replays_current_slide() {
    let mut deck = plain_deck(3);
    deck.go_to_slide(2);

    deck.resources_loaded();
    assert!(deck.view().loaded);
    assert_eq!(deck.view().entrance_restarts.last(), Some(&2));
}

// =============================================================================
// Chrome Tests
// =============================================================================

#[test]
fn test_progress_first_and_last() {
    let mut deck = plain_deck(4);

    let chrome = deck.view().chrome.clone().unwrap();
    assert!((chrome.progress_percent - 25.0).abs() < 0.001);
    assert_eq!(chrome.label, "1 / 4");
    assert!(!chrome.prev_enabled);
    assert!(chrome.next_enabled);

    deck.go_to_slide(3);
    let chrome = deck.view().chrome.clone().unwrap();
    assert!((chrome.progress_percent - 100.0).abs() < 0.001);
    assert_eq!(chrome.label, "4 / 4");
    assert!(chrome.prev_enabled);
    assert!(!chrome.next_enabled);
}

#[test]
fn test_end_key_on_five_slides() {
    let mut deck = plain_deck(5);

    let result = deck.handle_key("End");
    assert_eq!(
        result,
        InputResult::Handled {
            prevent_default: true
        }
    );
    assert_eq!(deck.current_slide(), 4);

    let chrome = deck.view().chrome.clone().unwrap();
    assert!(chrome.prev_enabled);
    assert!(!chrome.next_enabled);
    assert_eq!(chrome.label, "5 / 5");
}

// =============================================================================
// Keyboard Tests
// =============================================================================

#[test]
fn test_navigation_keys() {
    let mut deck = plain_deck(5);

    for key in ["ArrowRight", "ArrowDown", " ", "Enter"] {
        let before = deck.current_slide();
        assert!(deck.handle_key(key).prevents_default());
        assert_eq!(deck.current_slide(), before + 1, "key {:?}", key);
    }
    assert_eq!(deck.current_slide(), 4);

    deck.handle_key("ArrowLeft");
    deck.handle_key("ArrowUp");
    assert_eq!(deck.current_slide(), 2);

    deck.handle_key("Home");
    assert_eq!(deck.current_slide(), 0);
}

#[test]
fn test_unknown_key_is_unhandled() {
    let mut deck = plain_deck(3);
    assert_eq!(deck.handle_key("q"), InputResult::Unhandled);
    assert_eq!(deck.current_slide(), 0);
}

#[test]
fn test_keyboard_navigation_reports_source() {
    let mut deck = plain_deck(3);
    let changes = record_changes(&mut deck);

    deck.handle_key("ArrowRight");
    let changes = changes.borrow();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].source, NavSource::Keyboard);
    assert_eq!((changes[0].from, changes[0].to), (0, 1));
}

#[test]
fn test_escape_only_counts_in_fullscreen() {
    let mut deck = plain_deck(3);
    assert_eq!(deck.handle_key("Escape"), InputResult::Unhandled);

    let result = deck.handle_key("f");
    assert_eq!(
        result,
        InputResult::Handled {
            prevent_default: false
        }
    );
    assert!(deck.view().fullscreen);

    assert!(deck.handle_key("Escape").is_handled());
    assert!(!deck.view().fullscreen);
}

// =============================================================================
// Pointer, Touch and Wheel Tests
// =============================================================================

#[test]
fn test_click_zones() {
    let mut deck = plain_deck(5);

    assert!(deck.handle_click(800.0, 1000.0, ClickTarget::Surface).is_handled());
    assert_eq!(deck.current_slide(), 1);

    assert_eq!(
        deck.handle_click(500.0, 1000.0, ClickTarget::Surface),
        InputResult::Unhandled
    );
    assert_eq!(deck.current_slide(), 1);

    assert!(deck.handle_click(100.0, 1000.0, ClickTarget::Surface).is_handled());
    assert_eq!(deck.current_slide(), 0);
}

#[test]
fn test_click_on_interactive_element_is_ignored() {
    let mut deck = plain_deck(5);

    for target in [
        ClickTarget::NavButton,
        ClickTarget::FlipCard,
        ClickTarget::Link,
        ClickTarget::Button,
    ] {
        assert_eq!(deck.handle_click(900.0, 1000.0, target), InputResult::Unhandled);
    }
    assert_eq!(deck.current_slide(), 0);
}

#[test]
fn test_leftward_swipe_of_sixty_pixels_advances_once() {
    let mut deck = plain_deck(5);
    let changes = record_changes(&mut deck);

    deck.handle_touch_start(300.0);
    assert!(deck.handle_touch_end(240.0).is_handled());

    assert_eq!(deck.current_slide(), 1);
    assert_eq!(changes.borrow().len(), 1);
    assert_eq!(changes.borrow()[0].source, NavSource::Swipe);
}

#[test]
fn test_short_swipe_is_ignored() {
    let mut deck = plain_deck(5);

    deck.handle_touch_start(300.0);
    assert_eq!(deck.handle_touch_end(270.0), InputResult::Unhandled);
    assert_eq!(deck.current_slide(), 0);
}

#[test]
fn test_rightward_swipe_goes_back() {
    let mut deck = plain_deck(5);
    deck.go_to_slide(2);

    deck.handle_touch_start(240.0);
    deck.handle_touch_end(300.0);
    assert_eq!(deck.current_slide(), 1);
}

#[test]
fn test_touch_end_without_start_is_ignored() {
    let mut deck = plain_deck(5);

    assert_eq!(deck.handle_touch_end(0.0), InputResult::Unhandled);

    // The start is consumed by the first touch-end
    deck.handle_touch_start(300.0);
    deck.handle_touch_end(200.0);
    assert_eq!(deck.handle_touch_end(100.0), InputResult::Unhandled);
    assert_eq!(deck.current_slide(), 1);
}

#[test]
fn test_wheel_burst_navigates_once() {
    let mut deck = plain_deck(5);
    let changes = record_changes(&mut deck);

    for _ in 0..10 {
        deck.handle_wheel(120.0);
        advance(&mut deck, 80.0);
    }
    assert_eq!(deck.current_slide(), 1);
    assert_eq!(changes.borrow().len(), 1);
    assert_eq!(changes.borrow()[0].source, NavSource::Wheel);
}

#[test]
fn test_wheel_accepted_after_cooldown() {
    let mut deck = plain_deck(5);

    assert!(deck.handle_wheel(120.0).is_handled());
    advance(&mut deck, f64::from(WHEEL_COOLDOWN_MS) - 1.0);
    assert_eq!(deck.handle_wheel(120.0), InputResult::Unhandled);

    advance(&mut deck, 1.0);
    assert!(deck.handle_wheel(-120.0).is_handled());
    assert_eq!(deck.current_slide(), 0);
}

#[test]
fn test_zero_wheel_delta_does_not_arm_cooldown() {
    let mut deck = plain_deck(5);

    assert_eq!(deck.handle_wheel(0.0), InputResult::Unhandled);
    assert!(deck.handle_wheel(40.0).is_handled());
    assert_eq!(deck.current_slide(), 1);
}

#[test]
fn test_buttons() {
    let mut deck = plain_deck(3);

    deck.handle_next_button();
    deck.handle_next_button();
    deck.handle_next_button();
    assert_eq!(deck.current_slide(), 2);

    deck.handle_prev_button();
    assert_eq!(deck.current_slide(), 1);
}

// =============================================================================
// Counter Tests
// =============================================================================

#[test]
fn test_counter_runs_from_zero_to_exact_target() {
    let mut deck = counter_deck(1500);

    deck.go_to_slide(1);
    assert_eq!(deck.view().counter(1, 0), Some(0));

    advance(&mut deck, f64::from(COUNTER_DURATION_MS) + 100.0);

    let values = deck.view().counter_values(1, 0);
    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&1500));
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(deck.counters().running_count(), 0);
    assert_eq!(deck.scheduler().pending_count(), 0);
}

#[test]
fn test_counter_restart_supersedes_old_tween() {
    let mut deck = counter_deck(1500);

    deck.go_to_slide(1);
    advance(&mut deck, 500.0);
    assert!(deck.view().counter(1, 0).unwrap() > 0);

    deck.go_to_slide(0);
    deck.go_to_slide(1);
    assert_eq!(deck.view().counter(1, 0), Some(0));

    advance(&mut deck, 100.0);
    let frames = deck
        .scheduler()
        .pending()
        .iter()
        .filter(|p| p.kind == PendingKind::Frame)
        .count();
    assert_eq!(frames, 1);

    advance(&mut deck, f64::from(COUNTER_DURATION_MS));
    let values = deck.view().counter_values(1, 0);
    let restart = values.iter().rposition(|v| *v == 0).unwrap();
    let rerun = &values[restart..];
    assert!(rerun.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(rerun.last(), Some(&1500));
}

#[test]
fn test_counter_keeps_running_after_leaving_slide() {
    let mut deck = counter_deck(800);

    deck.go_to_slide(1);
    advance(&mut deck, 300.0);
    deck.go_to_slide(2);
    advance(&mut deck, f64::from(COUNTER_DURATION_MS));

    assert_eq!(deck.view().counter(1, 0), Some(800));
}

// =============================================================================
// Autoplay Tests
// =============================================================================

#[test]
fn test_autoplay_wraps_once_after_three_fires() {
    let mut deck = plain_deck(3);
    let changes = record_changes(&mut deck);

    assert!(deck.toggle_autoplay());
    let interval = f64::from(AUTOPLAY_INTERVAL_MS);

    advance(&mut deck, interval);
    assert_eq!(deck.current_slide(), 1);
    advance(&mut deck, interval);
    assert_eq!(deck.current_slide(), 2);
    advance(&mut deck, interval);
    assert_eq!(deck.current_slide(), 0);

    let changes = changes.borrow();
    assert_eq!(changes.len(), 3);
    assert!(changes.iter().all(|c| c.source == NavSource::Autoplay));
    let wraps = changes.iter().filter(|c| c.from == 2 && c.to == 0).count();
    assert_eq!(wraps, 1);
}

#[test]
fn test_autoplay_toggle_off_cancels_timer() {
    let mut deck = plain_deck(3);

    deck.handle_key("a");
    assert!(deck.is_autoplaying());
    assert_eq!(deck.scheduler().interval_count(), 1);

    assert!(!deck.toggle_autoplay());
    assert_eq!(deck.scheduler().interval_count(), 0);
    assert_eq!(deck.scheduler().cancelled().len(), 1);

    advance(&mut deck, f64::from(AUTOPLAY_INTERVAL_MS) * 3.0);
    assert_eq!(deck.current_slide(), 0);
}

#[test]
fn test_set_autoplay_is_idempotent() {
    let mut deck = plain_deck(3);

    assert!(deck.set_autoplay(true));
    assert!(!deck.set_autoplay(true));
    assert_eq!(deck.scheduler().interval_count(), 1);

    assert!(deck.set_autoplay(false));
    assert!(!deck.set_autoplay(false));
    assert_eq!(deck.scheduler().interval_count(), 0);
}

#[test]
fn test_autoplay_with_custom_interval() {
    let config = DeckConfig {
        autoplay_interval_ms: 1000,
        ..DeckConfig::default()
    };
    let mut deck = Deck::with_config(
        SlideRegistry::plain(4).unwrap(),
        MockView::new(4),
        MockScheduler::new(),
        config,
    )
    .unwrap();
    deck.start();

    deck.set_autoplay(true);
    advance(&mut deck, 2500.0);
    assert_eq!(deck.current_slide(), 2);
}

// =============================================================================
// Fullscreen and Hints Tests
// =============================================================================

#[test]
fn test_fullscreen_toggle() {
    let mut deck = plain_deck(3);

    deck.toggle_fullscreen();
    assert!(deck.status().fullscreen);
    deck.toggle_fullscreen();
    assert!(!deck.status().fullscreen);
}

#[test]
fn test_rejected_fullscreen_leaves_state_untouched() {
    let mut deck = Deck::new(
        SlideRegistry::plain(3).unwrap(),
        MockView::rejecting_fullscreen(3),
        MockScheduler::new(),
    );
    deck.start();
    deck.go_to_slide(1);
    let before = deck.status();

    deck.toggle_fullscreen();
    assert_eq!(deck.view().fullscreen_requests, 1);
    assert!(!deck.view().fullscreen);
    assert_eq!(deck.status(), before);
}

#[test]
fn test_hints_start_visible_and_toggle() {
    let mut deck = plain_deck(3);
    assert!(deck.hints_visible());

    assert!(deck.handle_key("h").is_handled());
    assert!(!deck.hints_visible());
    assert_eq!(deck.view().hints_visible, Some(false));

    assert!(deck.toggle_hints());
    assert_eq!(deck.view().hints_visible, Some(true));
}

// =============================================================================
// Indicator Tests
// =============================================================================

#[test]
fn test_install_indicators_is_idempotent() {
    let mut deck = plain_deck(4);

    assert!(deck.install_indicators());
    assert!(!deck.install_indicators());
    assert_eq!(deck.view().indicator_installs, 1);
    assert_eq!(deck.view().indicators.len(), 4);
    assert_eq!(deck.view().active_indicators(), vec![0]);
}

#[test]
fn test_indicators_follow_navigation() {
    let mut deck = plain_deck(4);
    deck.install_indicators();

    deck.go_to_slide(3);
    assert_eq!(deck.view().active_indicators(), vec![3]);

    assert!(deck.handle_indicator_click(1).is_handled());
    assert_eq!(deck.current_slide(), 1);
    assert_eq!(deck.view().active_indicators(), vec![1]);
}

#[test]
fn test_indicator_hover() {
    let mut deck = plain_deck(4);

    // No rail yet
    deck.hover_indicator(2, true);
    assert!(deck.view().hovered.is_empty());

    deck.install_indicators();
    deck.hover_indicator(2, true);
    assert!(deck.view().hovered[2]);
    deck.hover_indicator(2, false);
    assert!(!deck.view().hovered[2]);

    deck.hover_indicator(99, true);
    assert!(deck.view().hovered.iter().all(|h| !h));
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut deck = plain_deck(3);
    let changes = record_changes(&mut deck);

    deck.next_slide();
    assert!(deck.unsubscribe("recorder"));
    deck.next_slide();

    assert_eq!(changes.borrow().len(), 1);
}

// =============================================================================
// Configuration and Status Tests
// =============================================================================

#[test]
fn test_invalid_config_is_rejected() {
    let config = DeckConfig {
        click_zone_fraction: 0.8,
        ..DeckConfig::default()
    };
    let result = Deck::with_config(
        SlideRegistry::plain(2).unwrap(),
        MockView::new(2),
        MockScheduler::new(),
        config,
    );
    assert!(matches!(result, Err(DeckError::InvalidConfig(_))));
}

#[test]
fn test_status_json() {
    let mut deck = plain_deck(4);
    deck.go_to_slide(1);

    let status: serde_json::Value = serde_json::from_str(&deck.status_json()).unwrap();
    assert_eq!(status["current"], 1);
    assert_eq!(status["total"], 4);
    assert_eq!(status["label"], "2 / 4");
    assert!((status["progressPercent"].as_f64().unwrap() - 50.0).abs() < 0.001);
    assert_eq!(status["prevEnabled"], true);
    assert_eq!(status["autoplaying"], false);
    assert_eq!(status["hintsVisible"], true);
    assert_eq!(status["fullscreen"], false);
    assert_eq!(status["activationPending"], true);
}
