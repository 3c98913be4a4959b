//! Host-visible device state shared between Embassy tasks.
//!
//! Written from the USB stack's callbacks, read by the typing, LED and
//! display tasks. All tasks run on one executor, so relaxed ordering is
//! enough.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use usbtyper::indicator::DeviceState;

static CONFIGURED: AtomicBool = AtomicBool::new(false);
static SUSPENDED: AtomicBool = AtomicBool::new(false);
static CAPS_LOCK: AtomicBool = AtomicBool::new(false);
static WAKEUP_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();

pub fn set_configured(configured: bool) {
    CONFIGURED.store(configured, Ordering::Relaxed);
}

pub fn is_configured() -> bool {
    CONFIGURED.load(Ordering::Relaxed)
}

pub fn set_suspended(suspended: bool) {
    SUSPENDED.store(suspended, Ordering::Relaxed);
}

pub fn is_suspended() -> bool {
    SUSPENDED.load(Ordering::Relaxed)
}

pub fn set_caps_lock(on: bool) {
    CAPS_LOCK.store(on, Ordering::Relaxed);
}

pub fn caps_lock() -> bool {
    CAPS_LOCK.load(Ordering::Relaxed)
}

pub fn device_state() -> DeviceState {
    DeviceState::from_flags(is_configured(), is_suspended())
}

/// Remote-wakeup requests, consumed by the USB device task.
pub fn wakeup_signal() -> &'static Signal<CriticalSectionRawMutex, ()> {
    &WAKEUP_REQUEST
}
