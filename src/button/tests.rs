//! Unit tests for a single button driven through `ButtonState::poll`.
//!
//! A `Cell<bool>` stands in for the contact; time advances in whole
//! milliseconds and every poll is explicit.

use core::cell::Cell;

use super::{ButtonState, ClickSeries};
use crate::config::{ButtonConfig, Timing};
use crate::event::{ButtonEvent, EventKind};

const MS: u64 = 1_000;

struct Rig<'a> {
    level: &'a Cell<bool>,
    config: ButtonConfig<'a>,
    state: ButtonState,
    now: u64,
}

impl<'a> Rig<'a> {
    fn new(level: &'a Cell<bool>, input: &'a dyn crate::RawInput, timing: Timing) -> Self {
        Self {
            level,
            config: ButtonConfig::new(3, input).with_timing(timing),
            state: ButtonState::new(),
            now: 0,
        }
    }

    fn set(&mut self, level: bool) {
        self.level.set(level);
    }

    fn poll(&mut self) -> Option<ButtonEvent> {
        self.state.poll(&self.config, self.now)
    }

    /// Advance `ms` and poll once.
    fn step(&mut self, ms: u64) -> Option<ButtonEvent> {
        self.now += ms * MS;
        self.poll()
    }
}

fn timing() -> Timing {
    Timing::new(10, 200, 500, 100)
}

// ═══════════════════════════════════════════════════════════════════════════
// Press / release
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn down_and_up_are_dated_to_debounce_completion() {
    let level = Cell::new(false);
    let read = || level.get();
    let mut rig = Rig::new(&level, &read, timing());

    rig.set(true);
    assert_eq!(rig.poll(), None);
    assert_eq!(rig.step(5), None);
    let down = rig.step(10).unwrap();
    assert_eq!(down, ButtonEvent::new(3, EventKind::Down, 0, 15 * MS));
    assert!(rig.state.is_pressed());

    rig.set(false);
    assert_eq!(rig.step(5), None);
    let up = rig.step(11).unwrap();
    assert_eq!(up, ButtonEvent::new(3, EventKind::Up, 0, 31 * MS));
    assert!(!rig.state.is_pressed());
    assert_eq!(rig.state.click_series(), ClickSeries::Counting(1));
}

#[test]
fn active_low_inverts_the_reading() {
    let level = Cell::new(true);
    let read = || level.get();
    let mut rig = Rig::new(&level, &read, timing());
    rig.config = rig.config.active_low();

    assert_eq!(rig.poll(), None);
    assert_eq!(rig.step(20), None);

    rig.set(false);
    rig.poll();
    assert_eq!(rig.step(20).map(|e| e.kind), Some(EventKind::Down));
}

#[test]
fn missing_input_produces_nothing() {
    let level = Cell::new(true);
    let read = || level.get();
    let mut rig = Rig::new(&level, &read, timing());
    rig.config.input = None;
    for _ in 0..10 {
        assert_eq!(rig.step(50), None);
    }
    assert_eq!(rig.state, ButtonState::new());
}

// ═══════════════════════════════════════════════════════════════════════════
// Hold duration
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn hold_duration_tracks_debounced_press() {
    let level = Cell::new(false);
    let read = || level.get();
    let mut rig = Rig::new(&level, &read, timing());

    assert_eq!(rig.state.hold_duration(1_000 * MS), 0);
    rig.set(true);
    rig.poll();
    rig.step(11);
    assert_eq!(rig.state.hold_duration(111 * MS), 100 * MS);
    // Timestamp regression clamps to zero.
    assert_eq!(rig.state.hold_duration(0), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Suppression
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn suppression_silences_rest_of_hold() {
    let level = Cell::new(false);
    let read = || level.get();
    let mut rig = Rig::new(&level, &read, timing());

    rig.set(true);
    rig.poll();
    assert_eq!(rig.step(11).map(|e| e.kind), Some(EventKind::Down));

    rig.state.suppress();
    assert!(rig.state.is_suppressed());
    assert!(!rig.state.is_pressed());
    assert_eq!(rig.state.hold_duration(rig.now + 50 * MS), 0);

    // Long press and release both stay silent.
    for _ in 0..100 {
        assert_eq!(rig.step(10), None);
    }
    rig.set(false);
    for _ in 0..50 {
        assert_eq!(rig.step(10), None);
    }
    assert_eq!(rig.state.click_series(), ClickSeries::Idle);

    // Next fresh press behaves normally again.
    rig.set(true);
    rig.poll();
    assert_eq!(rig.step(11).map(|e| e.kind), Some(EventKind::Down));
    assert!(!rig.state.is_suppressed());
}

#[test]
fn suppression_discards_pending_series() {
    let level = Cell::new(false);
    let read = || level.get();
    let mut rig = Rig::new(&level, &read, timing());

    // First short press completes.
    rig.set(true);
    rig.poll();
    rig.step(11);
    rig.set(false);
    rig.poll();
    rig.step(11);
    assert_eq!(rig.state.click_series(), ClickSeries::Counting(1));

    // Second press is hijacked by a combo.
    rig.set(true);
    rig.step(20);
    rig.step(11);
    rig.state.suppress();
    assert_eq!(rig.state.click_series(), ClickSeries::Idle);
    rig.set(false);
    rig.poll();
    rig.step(11);

    for _ in 0..40 {
        assert_eq!(rig.step(10), None);
    }
}
