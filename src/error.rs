//! Unified error type for usbtyper.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Payload
    /// The payload does not fit into the fixed-capacity buffer.
    PayloadTooLong {
        /// Length of the rejected text in bytes.
        len: usize,
        /// Buffer capacity in bytes.
        capacity: usize,
    },

    // USB
    /// Writing a report to the HID endpoint failed.
    Usb,

    /// The host refused or does not allow remote wakeup.
    RemoteWakeup,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PayloadTooLong { len, capacity } => {
                write!(f, "payload of {} bytes exceeds capacity {}", len, capacity)
            }
            Error::Usb => f.write_str("USB HID write failed"),
            Error::RemoteWakeup => f.write_str("remote wakeup failed"),
            Error::Display => f.write_str("display I2C transaction failed"),
        }
    }
}

/// Convenience alias used by fallible library constructors.
pub type Result<T> = core::result::Result<T, Error>;
