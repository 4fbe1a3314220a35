//! Mock host implementation for testing logos-deck
//!
//! This provides a recording [`DeckView`] and a virtual-clock [`Scheduler`]
//! so the deck can be driven end to end without a browser.

use std::collections::BTreeMap;

use logos_deck::{
    Chrome, CounterId, Deck, DeckError, DeckView, ScheduledTask, Scheduler, SlideTag,
    TimerHandle,
};

/// Interval between simulated repaints, in milliseconds
pub const FRAME_MS: f64 = 16.0;

/// Deck wired to the mock host
pub type MockDeck = Deck<MockView, MockScheduler>;

// ============================================================================
// View
// ============================================================================

/// Recording view for unit testing
///
/// Every call the deck makes is reflected in public fields that tests can
/// inspect directly.
#[derive(Clone, Debug, Default)]
pub struct MockView {
    /// Current tag of every slide
    pub tags: Vec<SlideTag>,
    /// Most recently rendered chrome
    pub chrome: Option<Chrome>,
    /// Number of chrome renders
    pub chrome_renders: usize,
    /// Slides whose entrance animations were restarted, in call order
    pub entrance_restarts: Vec<usize>,
    /// Latest displayed value of each counter
    pub counters: BTreeMap<CounterId, i64>,
    /// Every counter write, in call order
    pub counter_history: Vec<(CounterId, i64)>,
    /// Last hints visibility written, if any
    pub hints_visible: Option<bool>,
    /// Highlight state of each indicator dot
    pub indicators: Vec<bool>,
    /// Hover state of each indicator dot
    pub hovered: Vec<bool>,
    /// Number of times the rail was created
    pub indicator_installs: usize,
    /// Simulated fullscreen state
    pub fullscreen: bool,
    /// Refuse fullscreen requests, as a browser policy would
    pub reject_fullscreen: bool,
    /// Number of fullscreen requests received
    pub fullscreen_requests: usize,
    /// Whether the loaded marker was set
    pub loaded: bool,
}

impl MockView {
    /// Create a view for a deck of `slides` slides
    pub fn new(slides: usize) -> Self {
        Self {
            tags: vec![SlideTag::Inactive; slides],
            ..Self::default()
        }
    }

    /// Create a view whose fullscreen requests are refused
    pub fn rejecting_fullscreen(slides: usize) -> Self {
        Self {
            reject_fullscreen: true,
            ..Self::new(slides)
        }
    }

    /// Indices of slides currently tagged `tag`
    pub fn slides_tagged(&self, tag: SlideTag) -> Vec<usize> {
        self.tags
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == tag)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of highlighted indicator dots
    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Latest value of one counter
    pub fn counter(&self, slide: usize, index: usize) -> Option<i64> {
        self.counters.get(&CounterId::new(slide, index)).copied()
    }

    /// Every value written to one counter, in order
    pub fn counter_values(&self, slide: usize, index: usize) -> Vec<i64> {
        let id = CounterId::new(slide, index);
        self.counter_history
            .iter()
            .filter(|(counter, _)| *counter == id)
            .map(|(_, value)| *value)
            .collect()
    }
}

impl DeckView for MockView {
    fn set_slide_tag(&mut self, slide: usize, tag: SlideTag) {
        if let Some(t) = self.tags.get_mut(slide) {
            *t = tag;
        }
    }

    fn render_chrome(&mut self, chrome: &Chrome) {
        self.chrome = Some(chrome.clone());
        self.chrome_renders += 1;
    }

    fn restart_entrance_animations(&mut self, slide: usize) {
        self.entrance_restarts.push(slide);
    }

    fn set_counter_value(&mut self, counter: CounterId, value: i64) {
        self.counters.insert(counter, value);
        self.counter_history.push((counter, value));
    }

    fn set_hints_visible(&mut self, visible: bool) {
        self.hints_visible = Some(visible);
    }

    fn install_indicators(&mut self, count: usize) {
        self.indicators = vec![false; count];
        self.hovered = vec![false; count];
        self.indicator_installs += 1;
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.indicators.get_mut(index) {
            *dot = active;
        }
    }

    fn set_indicator_hovered(&mut self, index: usize, hovered: bool) {
        if let Some(dot) = self.hovered.get_mut(index) {
            *dot = hovered;
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), DeckError> {
        self.fullscreen_requests += 1;
        if self.reject_fullscreen {
            return Err(DeckError::Fullscreen("permission denied".to_string()));
        }
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    fn mark_loaded(&mut self) {
        self.loaded = true;
    }
}

// ============================================================================
// Scheduler
// ============================================================================

/// Kind of a queued callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingKind {
    /// One-shot delay
    Timeout,
    /// Repaint-aligned frame
    Frame,
    /// Periodic timer
    Interval {
        /// Handle returned to the caller
        handle: TimerHandle,
        /// Period in milliseconds
        period_ms: u32,
    },
}

/// A callback waiting for the virtual clock
#[derive(Clone, Copy, Debug)]
pub struct Pending {
    /// Virtual time at which it fires
    pub due_ms: f64,
    /// Registration order, breaks ties between equal due times
    pub seq: u64,
    /// Task handed back to the deck
    pub task: ScheduledTask,
    /// How it was registered
    pub kind: PendingKind,
}

/// Virtual-clock scheduler for unit testing
///
/// Nothing fires on its own: tests advance the clock with [`advance`] or
/// [`MockScheduler::pop_due`] and feed the returned tasks to the deck.
#[derive(Clone, Debug, Default)]
pub struct MockScheduler {
    now_ms: f64,
    next_seq: u64,
    next_handle: u64,
    queue: Vec<Pending>,
    cancelled: Vec<TimerHandle>,
}

impl MockScheduler {
    /// Create a scheduler with the clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the virtual clock without firing anything
    pub fn set_time(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Every queued callback
    pub fn pending(&self) -> &[Pending] {
        &self.queue
    }

    /// Number of queued callbacks
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Number of live periodic timers
    pub fn interval_count(&self) -> usize {
        self.queue
            .iter()
            .filter(|p| matches!(p.kind, PendingKind::Interval { .. }))
            .count()
    }

    /// Handles cancelled so far
    pub fn cancelled(&self) -> &[TimerHandle] {
        &self.cancelled
    }

    /// Remove and return the earliest callback due at or before `until_ms`
    ///
    /// The clock moves to the callback's due time. Periodic timers are
    /// re-armed one period later.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<ScheduledTask> {
        let position = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then_with(|| a.seq.cmp(&b.seq))
            })
            .map(|(i, _)| i)?;

        let fired = self.queue.remove(position);
        self.now_ms = self.now_ms.max(fired.due_ms);
        if let PendingKind::Interval { period_ms, .. } = fired.kind {
            let due_ms = fired.due_ms + f64::from(period_ms);
            self.push(due_ms, fired.task, fired.kind);
        }
        Some(fired.task)
    }

    fn push(&mut self, due_ms: f64, task: ScheduledTask, kind: PendingKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Pending {
            due_ms,
            seq,
            task,
            kind,
        });
    }
}

impl Scheduler for MockScheduler {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn schedule_after(&mut self, delay_ms: u32, task: ScheduledTask) {
        self.push(self.now_ms + f64::from(delay_ms), task, PendingKind::Timeout);
    }

    fn request_frame(&mut self, task: ScheduledTask) {
        self.push(self.now_ms + FRAME_MS, task, PendingKind::Frame);
    }

    fn schedule_every(&mut self, period_ms: u32, task: ScheduledTask) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.push(
            self.now_ms + f64::from(period_ms),
            task,
            PendingKind::Interval { handle, period_ms },
        );
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.queue
            .retain(|p| !matches!(p.kind, PendingKind::Interval { handle: h, .. } if h == handle));
        self.cancelled.push(handle);
    }
}

// ============================================================================
// Driving helpers
// ============================================================================

/// Build a started deck on the mock host
pub fn mock_deck(registry: logos_deck::SlideRegistry) -> MockDeck {
    let view = MockView::new(registry.len());
    let mut deck = Deck::new(registry, view, MockScheduler::new());
    deck.start();
    deck
}

/// Advance virtual time by `ms`, running every callback that falls due
///
/// Callbacks scheduled while running are honored if they are due within the
/// window. The clock ends exactly `ms` later.
pub fn advance(deck: &mut MockDeck, ms: f64) {
    let until_ms = deck.scheduler().now_ms() + ms;
    while let Some(task) = deck.scheduler_mut().pop_due(until_ms) {
        deck.run_task(task);
    }
    deck.scheduler_mut().set_time(until_ms);
}

/// Run every one-shot and frame callback until none remain
///
/// Periodic timers that fall due on the way fire too; `max_ms` bounds the
/// virtual time spent.
pub fn settle(deck: &mut MockDeck, max_ms: f64) {
    let until_ms = deck.scheduler().now_ms() + max_ms;
    loop {
        let has_one_shot = deck
            .scheduler()
            .pending()
            .iter()
            .any(|p| !matches!(p.kind, PendingKind::Interval { .. }) && p.due_ms <= until_ms);
        if !has_one_shot {
            break;
        }
        match deck.scheduler_mut().pop_due(until_ms) {
            Some(task) => deck.run_task(task),
            None => break,
        }
    }
}
