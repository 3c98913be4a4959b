//! Application-wide constants and compile-time configuration.
//!
//! USB identity, timing parameters and the typed payload live here so
//! they can be tuned in one place.

// Payload

/// Text typed on every trigger.
pub const PAYLOAD: &str = "hello world!";

/// Maximum payload length in bytes.
pub const PAYLOAD_CAPACITY: usize = 100;

/// Send a final all-zero report after the last character so the host
/// does not auto-repeat it.
pub const RELEASE_AFTER_LAST: bool = true;

// Scheduling

/// Interval between two payload transmissions (ms).
pub const TRIGGER_INTERVAL_MS: u64 = 2000;

/// Period of the cooperative typing loop (ms).
pub const TASK_POLL_MS: u64 = 10;

// Status LED blink pattern

/// Blink period while the device is not configured by a host (ms).
pub const BLINK_NOT_MOUNTED_MS: u32 = 250;

/// Blink period while mounted (ms).
pub const BLINK_MOUNTED_MS: u32 = 1000;

/// Blink period while the bus is suspended (ms).
pub const BLINK_SUSPENDED_MS: u32 = 2500;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "usbtyper";
pub const USB_PRODUCT: &str = "USB Keystroke Injector";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 10;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button TRIGGER → P0.11
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Status LED     → P0.13

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Minimum period between two status screen redraws (ms).
pub const DISPLAY_REFRESH_MS: u64 = 100;
