//! Bounded event queue with overwrite-oldest admission.
//!
//! The queue never rejects an event: when it is full the oldest unread
//! entry is evicted and counted as dropped. Consumers that cannot lose
//! events must size `N` for the worst burst between drains.

use heapless::Deque;

use crate::event::ButtonEvent;

/// Fixed-capacity FIFO of [`ButtonEvent`]s. `N` must be at least 1.
pub struct EventQueue<const N: usize> {
    events: Deque<ButtonEvent, N>,
    dropped: u32,
}

impl<const N: usize> EventQueue<N> {
    /// Empty queue with a zero dropped counter.
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Append `event`, evicting the oldest entry if the queue is full.
    pub fn push(&mut self, event: ButtonEvent) {
        if self.events.is_full() {
            if let Some(_evicted) = self.events.pop_front() {
                #[cfg(feature = "defmt")]
                defmt::debug!("EventQueue: full, dropping {}", _evicted);
            }
            self.dropped = self.dropped.saturating_add(1);
        }
        // Cannot fail: there is at least one free slot now.
        let _ = self.events.push_back(event);
    }

    /// Remove and return the oldest event.
    pub fn pop(&mut self) -> Option<ButtonEvent> {
        self.events.pop_front()
    }

    /// Pop events until the queue is empty.
    pub fn drain(&mut self) -> Drain<'_, N> {
        Drain { queue: self }
    }

    /// Discard every pending event. The dropped counter is left alone.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// No events pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Maximum number of pending events (`N`).
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Events evicted by overwrites since creation. Never decreases.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

/// Iterator returned by [`EventQueue::drain`].
pub struct Drain<'q, const N: usize> {
    queue: &'q mut EventQueue<N>,
}

impl<const N: usize> Iterator for Drain<'_, N> {
    type Item = ButtonEvent;

    fn next(&mut self) -> Option<ButtonEvent> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
