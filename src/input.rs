//! Hardware read capability.
//!
//! The engine only ever asks "what level is the contact at right now?".
//! Whatever the read needs (pin number, port register, ADC channel, test
//! fixture) lives inside the implementor.

/// Raw level of one button input.
///
/// Returns the electrical level; [`Polarity`](crate::Polarity) decides which
/// level means pressed. Called once per slot per update pass.
pub trait RawInput {
    fn read(&self) -> bool;
}

impl<F> RawInput for F
where
    F: Fn() -> bool,
{
    fn read(&self) -> bool {
        self()
    }
}

#[cfg(feature = "embedded")]
pub use pin::PinInput;

#[cfg(feature = "embedded")]
mod pin {
    use core::cell::RefCell;

    use embedded_hal::digital::InputPin;

    use super::RawInput;

    /// Adapter for any embedded-hal 1.0 [`InputPin`].
    ///
    /// `InputPin` needs `&mut self`, while configs are shared read-only, so
    /// the pin sits in a `RefCell`. A failed read reports low.
    pub struct PinInput<P> {
        pin: RefCell<P>,
    }

    impl<P: InputPin> PinInput<P> {
        pub const fn new(pin: P) -> Self {
            Self {
                pin: RefCell::new(pin),
            }
        }

        /// Give the pin back.
        pub fn release(self) -> P {
            self.pin.into_inner()
        }
    }

    impl<P: InputPin> RawInput for PinInput<P> {
        fn read(&self) -> bool {
            match self.pin.borrow_mut().is_high() {
                Ok(level) => level,
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("PinInput: read failed, reporting low");
                    false
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

        #[test]
        fn pin_input_reports_pin_level() {
            let expectations = [
                Transaction::get(State::High),
                Transaction::get(State::Low),
            ];
            let input = PinInput::new(Mock::new(&expectations));
            assert!(input.read());
            assert!(!input.read());
            input.release().done();
        }
    }
}
