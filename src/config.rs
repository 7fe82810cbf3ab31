//! Button configuration and default timing profile.
//!
//! A [`ButtonConfig`] is immutable once handed to a context and may be
//! shared by any number of slots (e.g. several buttons using one timing
//! profile). All timing parameters are in milliseconds; the engine itself
//! works in microseconds.

use crate::hook::EventHook;
use crate::input::RawInput;

// Default timing profile

/// Debounce window (ms). 20-50 ms covers most tactile switches.
pub const DEFAULT_DEBOUNCE_MS: u16 = 20;

/// Time to wait for the next press of a click series (ms).
pub const DEFAULT_CLICK_TIMEOUT_MS: u16 = 200;

/// Hold time before a press becomes a long press (ms).
pub const DEFAULT_LONG_PRESS_MS: u16 = 800;

/// Auto-repeat period while a long press is held (ms). 0 disables repeat.
pub const DEFAULT_REPEAT_PERIOD_MS: u16 = 100;

/// Microseconds per millisecond.
pub(crate) const US_PER_MS: u64 = 1_000;

/// Electrical level that means "pressed".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed reads low (pull-up wiring).
    ActiveLow,
    /// Pressed reads high.
    #[default]
    ActiveHigh,
}

impl Polarity {
    /// Convert a raw pin level into "button is active".
    #[inline]
    pub const fn apply(self, level: bool) -> bool {
        match self {
            Polarity::ActiveLow => !level,
            Polarity::ActiveHigh => level,
        }
    }
}

/// Timing parameters of one button, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Raw level must be stable for longer than this before it is accepted.
    pub debounce_ms: u16,
    /// Silence after the last release that closes a click series.
    pub click_timeout_ms: u16,
    /// Hold duration that turns a press into a long press.
    pub long_press_ms: u16,
    /// Auto-repeat period during a long press, 0 = no repeat.
    pub repeat_period_ms: u16,
}

impl Timing {
    /// All four parameters in milliseconds.
    pub const fn new(
        debounce_ms: u16,
        click_timeout_ms: u16,
        long_press_ms: u16,
        repeat_period_ms: u16,
    ) -> Self {
        Self {
            debounce_ms,
            click_timeout_ms,
            long_press_ms,
            repeat_period_ms,
        }
    }

    /// Same profile with auto-repeat turned off.
    pub const fn without_repeat(self) -> Self {
        Self {
            repeat_period_ms: 0,
            ..self
        }
    }

    pub(crate) const fn debounce_us(&self) -> u64 {
        self.debounce_ms as u64 * US_PER_MS
    }

    pub(crate) const fn click_timeout_us(&self) -> u64 {
        self.click_timeout_ms as u64 * US_PER_MS
    }

    pub(crate) const fn long_press_us(&self) -> u64 {
        self.long_press_ms as u64 * US_PER_MS
    }

    pub(crate) const fn repeat_period_us(&self) -> u64 {
        self.repeat_period_ms as u64 * US_PER_MS
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(
            DEFAULT_DEBOUNCE_MS,
            DEFAULT_CLICK_TIMEOUT_MS,
            DEFAULT_LONG_PRESS_MS,
            DEFAULT_REPEAT_PERIOD_MS,
        )
    }
}

/// Static description of one button.
///
/// `input` is the hardware read capability; a config without one is
/// rejected at setup and its slot stays disabled. `hook` may consume
/// events before they reach the queue.
#[derive(Clone, Copy)]
pub struct ButtonConfig<'a> {
    /// Application identifier copied into every event of this button.
    pub id: u8,
    pub polarity: Polarity,
    pub input: Option<&'a dyn RawInput>,
    pub hook: Option<&'a dyn EventHook>,
    pub timing: Timing,
}

impl<'a> ButtonConfig<'a> {
    /// Active-high button with the default timing profile and no hook.
    pub const fn new(id: u8, input: &'a dyn RawInput) -> Self {
        Self {
            id,
            polarity: Polarity::ActiveHigh,
            input: Some(input),
            hook: None,
            timing: Timing::new(
                DEFAULT_DEBOUNCE_MS,
                DEFAULT_CLICK_TIMEOUT_MS,
                DEFAULT_LONG_PRESS_MS,
                DEFAULT_REPEAT_PERIOD_MS,
            ),
        }
    }

    /// Shorthand for `with_polarity(Polarity::ActiveLow)`.
    pub const fn active_low(self) -> Self {
        self.with_polarity(Polarity::ActiveLow)
    }

    /// Set how the raw reading maps to "pressed".
    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Route this button's events through `hook` before queueing.
    pub const fn with_hook(mut self, hook: &'a dyn EventHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Whether setup will accept this configuration.
    pub const fn is_valid(&self) -> bool {
        self.input.is_some()
    }

    /// Sample the input and apply polarity. `None` without a read capability.
    pub(crate) fn read_active(&self) -> Option<bool> {
        self.input.map(|input| self.polarity.apply(input.read()))
    }
}

impl core::fmt::Debug for ButtonConfig<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("id", &self.id)
            .field("polarity", &self.polarity)
            .field("input", &self.input.is_some())
            .field("hook", &self.hook.is_some())
            .field("timing", &self.timing)
            .finish()
    }
}
