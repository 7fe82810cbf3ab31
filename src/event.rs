//! Semantic button events.

/// What happened to a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Debounced press.
    Down,
    /// Debounced release.
    Up,
    /// End of a click series; `count` holds the series length.
    Click,
    /// Hold crossed the long-press threshold.
    LongStart,
    /// Auto-repeat tick during a long press; `count` holds the repeat index.
    LongHold,
}

/// One event as delivered to a hook or the queue.
///
/// `timestamp` is in microseconds. For `Click` it is the moment of the last
/// release of the series, for every other kind the moment of emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    /// Id of the emitting button's config.
    pub id: u8,
    pub kind: EventKind,
    /// Series length for `Click`, repeat index for `LongHold`, else 0.
    pub count: u8,
    /// Microseconds, see above.
    pub timestamp: u64,
}

impl ButtonEvent {
    /// Build an event by hand, e.g. to feed a hook in tests.
    pub const fn new(id: u8, kind: EventKind, count: u8, timestamp: u64) -> Self {
        Self {
            id,
            kind,
            count,
            timestamp,
        }
    }

    /// `true` for a click series of exactly `clicks` presses.
    pub fn is_click(&self, clicks: u8) -> bool {
        self.kind == EventKind::Click && self.count == clicks
    }
}
