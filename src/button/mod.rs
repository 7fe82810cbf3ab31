//! Per-button runtime state: debounce filter, click/hold machine and the
//! suppression overlay.

mod debounce;
mod machine;

#[cfg(test)]
mod tests;

pub use debounce::{Debouncer, Edge};
pub use machine::{ClickHold, ClickSeries, Emission};

use crate::config::ButtonConfig;
use crate::event::ButtonEvent;

/// Mutable state of one configured button.
///
/// The all-default value is the idle baseline a slot returns to on setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    debounce: Debouncer,
    machine: ClickHold,
    suppressed: bool,
}

impl ButtonState {
    /// Released, idle, not suppressed.
    pub const fn new() -> Self {
        Self {
            debounce: Debouncer::new(),
            machine: ClickHold::new(),
            suppressed: false,
        }
    }

    /// Run one polling pass for this button.
    ///
    /// Returns the (at most one) event that survives suppression, tagged
    /// with `config.id`. A config without an input yields nothing.
    pub fn poll(&mut self, config: &ButtonConfig<'_>, now: u64) -> Option<ButtonEvent> {
        let active = config.read_active()?;
        let timing = &config.timing;

        let emission = match self.debounce.sample(active, now, timing.debounce_us()) {
            Some(Edge::Press) => {
                // A fresh physical press always starts unsuppressed.
                self.suppressed = false;
                Some(self.machine.on_press(now))
            }
            Some(Edge::Release) => Some(self.machine.on_release(now, timing, self.suppressed)),
            None if self.debounce.is_pressed() => self.machine.tick_pressed(now, timing),
            None => self.machine.tick_released(now, timing),
        }?;

        if self.suppressed {
            return None;
        }
        Some(ButtonEvent::new(
            config.id,
            emission.kind,
            emission.count,
            emission.at,
        ))
    }

    /// Silence this button until its next fresh press.
    ///
    /// Drops any pending click series and the repeat index; the debounced
    /// level and timing anchors are kept.
    pub fn suppress(&mut self) {
        self.suppressed = true;
        self.machine.discard_series();
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Debounced press that is not suppressed.
    pub fn is_pressed(&self) -> bool {
        self.debounce.is_pressed() && !self.suppressed
    }

    /// Time since the debounced press (µs), 0 when released or suppressed.
    pub fn hold_duration(&self, now: u64) -> u64 {
        if self.is_pressed() {
            now.saturating_sub(self.machine.hold_anchor())
        } else {
            0
        }
    }

    /// Pending click series, for diagnostics.
    pub fn click_series(&self) -> ClickSeries {
        self.machine.series()
    }
}
