//! Click / long-press / auto-repeat state machine.
//!
//! Driven by debounced edges plus a periodic tick. Each call yields at most
//! one [`Emission`]; the owning [`ButtonState`](super::ButtonState) attaches
//! the button id and applies suppression.

use crate::config::Timing;
use crate::event::EventKind;

/// Progress of the current click series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickSeries {
    /// No short press pending.
    #[default]
    Idle,
    /// `n` short presses released, waiting for the timeout or another press.
    Counting(u8),
    /// LongStart was sent for the current hold; no click can follow.
    LongPress,
}

/// An event before it is bound to a button id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Emission {
    pub kind: EventKind,
    pub count: u8,
    pub at: u64,
}

impl Emission {
    const fn new(kind: EventKind, count: u8, at: u64) -> Self {
        Self { kind, count, at }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickHold {
    /// Start of the current hold (µs).
    hold_anchor: u64,
    /// Last release of the current series (µs).
    release_anchor: u64,
    /// LongStart time plus one period per LongHold sent (µs).
    repeat_anchor: u64,
    series: ClickSeries,
    repeats: u8,
}

impl ClickHold {
    pub const fn new() -> Self {
        Self {
            hold_anchor: 0,
            release_anchor: 0,
            repeat_anchor: 0,
            series: ClickSeries::Idle,
            repeats: 0,
        }
    }

    pub fn on_press(&mut self, now: u64) -> Emission {
        self.hold_anchor = now;
        self.repeat_anchor = now;
        self.repeats = 0;
        Emission::new(EventKind::Down, 0, now)
    }

    /// A release ending a hold no longer than the threshold extends the
    /// click series, unless the hold was suppressed.
    pub fn on_release(&mut self, now: u64, timing: &Timing, suppressed: bool) -> Emission {
        let held = now.saturating_sub(self.hold_anchor);
        if suppressed || held > timing.long_press_us() {
            self.series = ClickSeries::Idle;
        } else {
            self.series = match self.series {
                ClickSeries::Counting(n) => ClickSeries::Counting(n.saturating_add(1)),
                ClickSeries::Idle | ClickSeries::LongPress => ClickSeries::Counting(1),
            };
            self.release_anchor = now;
        }
        Emission::new(EventKind::Up, 0, now)
    }

    /// Evaluate long press and auto-repeat while held.
    pub fn tick_pressed(&mut self, now: u64, timing: &Timing) -> Option<Emission> {
        if now.saturating_sub(self.hold_anchor) <= timing.long_press_us() {
            return None;
        }

        if self.series != ClickSeries::LongPress {
            self.series = ClickSeries::LongPress;
            self.repeats = 0;
            self.repeat_anchor = now;
            return Some(Emission::new(EventKind::LongStart, 0, now));
        }

        let period = timing.repeat_period_us();
        if period > 0 && now.saturating_sub(self.repeat_anchor) > period {
            self.repeats = self.repeats.saturating_add(1);
            // Step by whole periods so poll jitter does not accumulate.
            self.repeat_anchor = self.repeat_anchor.saturating_add(period);
            return Some(Emission::new(EventKind::LongHold, self.repeats, now));
        }
        None
    }

    /// Evaluate the click timeout while released.
    pub fn tick_released(&mut self, now: u64, timing: &Timing) -> Option<Emission> {
        match self.series {
            ClickSeries::Counting(n)
                if now.saturating_sub(self.release_anchor) > timing.click_timeout_us() =>
            {
                self.series = ClickSeries::Idle;
                self.repeats = 0;
                // Dated to the last release, not to the timeout expiry.
                Some(Emission::new(EventKind::Click, n, self.release_anchor))
            }
            _ => None,
        }
    }

    /// Drop the pending series and repeat index; anchors stay.
    pub fn discard_series(&mut self) {
        self.series = ClickSeries::Idle;
        self.repeats = 0;
    }

    pub fn hold_anchor(&self) -> u64 {
        self.hold_anchor
    }

    pub fn series(&self) -> ClickSeries {
        self.series
    }
}
