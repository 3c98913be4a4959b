//! User interface subsystem - status LED, OLED display and trigger button.
//!
//! ## Components
//!
//! - **LED**: blink pattern tells not-mounted / mounted / suspended apart
//! - **Display**: SSD1306 128×64 OLED via I²C, shows typing progress
//! - **Button**: starts a transmission immediately, or wakes a sleeping host

pub mod buttons;
pub mod display;
pub mod led;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use usbtyper::typer::Progress;

static TRIGGER: Signal<CriticalSectionRawMutex, ()> = Signal::new();
static PROGRESS: Signal<CriticalSectionRawMutex, Progress> = Signal::new();

/// Button presses asking for an immediate transmission.
pub fn trigger_signal() -> &'static Signal<CriticalSectionRawMutex, ()> {
    &TRIGGER
}

/// Latest typing progress, for the display.
pub fn progress_signal() -> &'static Signal<CriticalSectionRawMutex, Progress> {
    &PROGRESS
}
