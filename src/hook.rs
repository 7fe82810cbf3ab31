//! Per-button event interception.

use crate::event::ButtonEvent;

/// Outcome of offering an event to a hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interception {
    /// The hook handled the event; it is not queued.
    Consumed,
    /// The event continues to the queue.
    PassThrough,
}

/// Strategy invoked with every event of a button before queue admission.
///
/// Hooks run inside `update`, so they should be short. State a hook needs
/// (the C-style "user data") is held by the implementor; use `Cell` or
/// `RefCell` for anything it mutates.
pub trait EventHook {
    fn intercept(&self, event: &ButtonEvent) -> Interception;
}

impl<F> EventHook for F
where
    F: Fn(&ButtonEvent) -> Interception,
{
    fn intercept(&self, event: &ButtonEvent) -> Interception {
        self(event)
    }
}
