//! Button registry and event dispatch.
//!
//! A [`ButtonContext`] owns a fixed array of slots and the event queue.
//! Each slot binds a caller-owned [`ButtonConfig`] to its own
//! [`ButtonState`]; a slot without a usable config is skipped.
//!
//! One `update` pass polls every enabled slot in index order. An event that
//! survives suppression is offered to the slot's hook, then queued unless
//! the hook consumed it. Events of different buttons are therefore ordered
//! by slot index within a pass, not by timestamp.

use crate::button::ButtonState;
use crate::config::ButtonConfig;
use crate::error::Error;
use crate::event::ButtonEvent;
use crate::hook::Interception;
use crate::queue::{Drain, EventQueue};

/// One registry entry.
#[derive(Clone, Copy)]
struct Slot<'a> {
    config: Option<&'a ButtonConfig<'a>>,
    state: ButtonState,
}

impl<'a> Slot<'a> {
    const EMPTY: Self = Self {
        config: None,
        state: ButtonState::new(),
    };
}

/// A set of `SLOTS` buttons sharing one polling cadence and a queue of
/// `QUEUE` events.
///
/// Contexts are independent of each other; keep one per panel if needed.
pub struct ButtonContext<'a, const SLOTS: usize, const QUEUE: usize> {
    slots: [Slot<'a>; SLOTS],
    queue: EventQueue<QUEUE>,
}

impl<'a, const SLOTS: usize, const QUEUE: usize> ButtonContext<'a, SLOTS, QUEUE> {
    /// All slots disabled, queue empty, nothing dropped.
    pub const fn new() -> Self {
        Self {
            slots: [Slot::EMPTY; SLOTS],
            queue: EventQueue::new(),
        }
    }

    /// Bind `config` to slot `index` with a fresh idle state.
    ///
    /// Re-running setup on a slot resets it. A missing config or one without
    /// an input leaves the slot disabled.
    pub fn setup(&mut self, index: usize, config: Option<&'a ButtonConfig<'a>>) -> Result<(), Error> {
        let slot = self.slots.get_mut(index).ok_or(Error::SlotOutOfRange {
            index,
            slots: SLOTS,
        })?;
        slot.state = ButtonState::new();

        let checked = match config {
            None => Err(Error::MissingConfig),
            Some(cfg) if !cfg.is_valid() => Err(Error::MissingInput { id: cfg.id }),
            Some(cfg) => Ok(cfg),
        };

        match checked {
            Ok(cfg) => {
                slot.config = Some(cfg);
                #[cfg(feature = "defmt")]
                defmt::debug!("ButtonContext: slot {} -> button {}", index, cfg.id);
                Ok(())
            }
            Err(err) => {
                slot.config = None;
                #[cfg(feature = "defmt")]
                defmt::warn!("ButtonContext: slot {} disabled: {}", index, err);
                Err(err)
            }
        }
    }

    /// Run one polling pass at `now_us` (monotonic microseconds).
    pub fn update(&mut self, now_us: u64) {
        for slot in self.slots.iter_mut() {
            let Some(config) = slot.config else {
                continue;
            };
            let Some(event) = slot.state.poll(config, now_us) else {
                continue;
            };

            #[cfg(feature = "defmt")]
            defmt::trace!("ButtonContext: {}", event);

            if let Some(hook) = config.hook {
                if hook.intercept(&event) == Interception::Consumed {
                    continue;
                }
            }
            self.queue.push(event);
        }
    }

    /// Oldest queued event, if any.
    pub fn pop_event(&mut self) -> Option<ButtonEvent> {
        self.queue.pop()
    }

    /// Iterate over queued events, removing them.
    pub fn drain(&mut self) -> Drain<'_, QUEUE> {
        self.queue.drain()
    }

    /// Throw away everything that is queued.
    pub fn flush_queue(&mut self) {
        self.queue.clear();
    }

    /// Number of events waiting in the queue.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Events lost to queue overwrites since the context was created.
    pub fn dropped_events(&self) -> u32 {
        self.queue.dropped()
    }

    /// Debounced and not suppressed. Unknown ids report `false`.
    pub fn is_pressed(&self, id: u8) -> bool {
        self.state(id).is_some_and(ButtonState::is_pressed)
    }

    /// Microseconds since the press of button `id`; 0 when released,
    /// suppressed or unknown.
    pub fn hold_duration(&self, id: u8, now_us: u64) -> u64 {
        self.state(id).map_or(0, |state| state.hold_duration(now_us))
    }

    /// Silence button `id` until it is released and pressed again.
    ///
    /// Returns `false` if no enabled slot has that id.
    pub fn suppress(&mut self, id: u8) -> bool {
        match self.lookup(id) {
            Some(index) => {
                self.slots[index].state.suppress();
                true
            }
            None => false,
        }
    }

    /// Slot index of the first enabled slot configured with `id`.
    pub fn lookup(&self, id: u8) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.config.is_some_and(|cfg| cfg.id == id))
    }

    /// Whether slot `index` exists and holds a usable config.
    pub fn is_enabled(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.config.is_some())
    }

    /// Runtime state of button `id`.
    pub fn state(&self, id: u8) -> Option<&ButtonState> {
        self.lookup(id).map(|index| &self.slots[index].state)
    }

    /// Number of slots, enabled or not.
    pub const fn slot_count(&self) -> usize {
        SLOTS
    }
}

impl<const SLOTS: usize, const QUEUE: usize> Default for ButtonContext<'_, SLOTS, QUEUE> {
    fn default() -> Self {
        Self::new()
    }
}
