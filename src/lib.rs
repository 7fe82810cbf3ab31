//! Polled button engine for bare-metal main loops.
//!
//! Turns sampled, bouncing contact levels into press, release, N-click,
//! long-press and auto-repeat events. No allocation, no interrupts, no
//! internal clock: the caller samples time and calls
//! [`ButtonContext::update`] every 1-10 ms, then drains the queue.
//!
//! ```
//! use core::cell::Cell;
//! use buttonkit::{ButtonConfig, ButtonContext, EventKind, Timing};
//!
//! let level = Cell::new(false);
//! let read = || level.get();
//! let ok = ButtonConfig::new(1, &read).with_timing(Timing::new(10, 200, 500, 0));
//!
//! let mut buttons: ButtonContext<'_, 1, 8> = ButtonContext::new();
//! buttons.setup(0, Some(&ok)).unwrap();
//!
//! level.set(true);
//! buttons.update(0);
//! buttons.update(11_000);
//! assert_eq!(buttons.pop_event().map(|e| e.kind), Some(EventKind::Down));
//! ```
//!
//! Features:
//! - `embedded`: [`PinInput`] adapter for embedded-hal 1.0 input pins.
//! - `defmt`: `defmt::Format` on public types plus on-target logging.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod hook;
pub mod input;
pub mod queue;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use button::{ButtonState, ClickSeries};
pub use config::{ButtonConfig, Polarity, Timing};
pub use context::ButtonContext;
pub use error::Error;
pub use event::{ButtonEvent, EventKind};
pub use hook::{EventHook, Interception};
pub use input::RawInput;
#[cfg(feature = "embedded")]
pub use input::PinInput;
pub use queue::EventQueue;
