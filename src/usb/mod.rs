//! USB Device subsystem - presents a boot-protocol keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`. One HID interface carries the typed keystrokes (IN)
//! and the host's keyboard LED state (OUT).
//!
//! - `hid_device`: stack setup, bus events, remote wakeup
//! - `status`: host state shared between tasks
//! - `transport`: the typing loop that paces reports on write completion

pub mod hid_device;
pub mod status;
pub mod transport;
