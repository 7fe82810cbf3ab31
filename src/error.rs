//! Error type for slot setup.
//!
//! Steady-state operation has no failure path; only `setup` reports
//! errors. Variants carry fixed-size data only (no `alloc`).

use core::fmt;

/// Reason a slot could not be configured.
///
/// For [`Error::MissingConfig`] and [`Error::MissingInput`] the slot is
/// left disabled until it is set up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The slot index is beyond the context's slot count.
    SlotOutOfRange { index: usize, slots: usize },

    /// No configuration was supplied.
    MissingConfig,

    /// The configuration has no hardware read capability.
    MissingInput { id: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SlotOutOfRange { index, slots } => {
                write!(f, "slot index {} out of range ({} slots)", index, slots)
            }
            Error::MissingConfig => f.write_str("no button configuration supplied"),
            Error::MissingInput { id } => write!(f, "button {} has no input to read", id),
        }
    }
}
