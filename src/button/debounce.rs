//! Restart-on-change debounce filter.
//!
//! Every change of the raw level restarts the stability timer. The logical
//! level follows the raw level only once it has held still for longer than
//! the window, so contact chatter faster than the window is never seen.

/// Debounced edge reported by [`Debouncer::sample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Press,
    Release,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    raw: bool,
    logical: bool,
    /// Time of the last raw change (µs).
    anchor: u64,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            raw: false,
            logical: false,
            anchor: 0,
        }
    }

    /// Feed one polarity-corrected reading taken at `now`.
    pub fn sample(&mut self, active: bool, now: u64, window_us: u64) -> Option<Edge> {
        if active != self.raw {
            self.raw = active;
            self.anchor = now;
        }

        if self.logical == self.raw || now.saturating_sub(self.anchor) <= window_us {
            return None;
        }

        self.logical = self.raw;
        Some(if self.logical {
            Edge::Press
        } else {
            Edge::Release
        })
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        self.logical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 10_000;

    #[test]
    fn accepts_level_stable_longer_than_window() {
        let mut d = Debouncer::new();
        assert_eq!(d.sample(true, 0, WINDOW), None);
        assert_eq!(d.sample(true, 10_000, WINDOW), None); // equal is not longer
        assert_eq!(d.sample(true, 10_001, WINDOW), Some(Edge::Press));
        assert!(d.is_pressed());
        assert_eq!(d.sample(true, 20_000, WINDOW), None);

        assert_eq!(d.sample(false, 30_000, WINDOW), None);
        assert_eq!(d.sample(false, 45_000, WINDOW), Some(Edge::Release));
        assert!(!d.is_pressed());
    }

    #[test]
    fn chatter_faster_than_window_is_ignored() {
        let mut d = Debouncer::new();
        let mut level = false;
        for step in 0..200u64 {
            level = !level;
            assert_eq!(d.sample(level, step * 4_000, WINDOW), None);
        }
        assert!(!d.is_pressed());
    }

    #[test]
    fn glitch_restarts_the_timer() {
        let mut d = Debouncer::new();
        d.sample(true, 0, WINDOW);
        d.sample(false, 8_000, WINDOW);
        d.sample(true, 9_000, WINDOW);
        // 12 ms after the first change, only 3 ms after the last one.
        assert_eq!(d.sample(true, 12_000, WINDOW), None);
        assert_eq!(d.sample(true, 19_001, WINDOW), Some(Edge::Press));
    }

    #[test]
    fn zero_window_needs_a_later_sample() {
        let mut d = Debouncer::new();
        assert_eq!(d.sample(true, 5, 0), None);
        assert_eq!(d.sample(true, 6, 0), Some(Edge::Press));
    }

    #[test]
    fn time_regression_does_not_fire() {
        let mut d = Debouncer::new();
        d.sample(true, 50_000, WINDOW);
        assert_eq!(d.sample(true, 1_000, WINDOW), None);
    }
}
