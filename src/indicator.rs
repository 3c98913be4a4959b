//! Status LED policy.
//!
//! The LED blinks at a rate that tells the device state apart. When the
//! host turns Caps Lock on, blinking stops and the LED stays lit.

use crate::config::{BLINK_MOUNTED_MS, BLINK_NOT_MOUNTED_MS, BLINK_SUSPENDED_MS};

/// USB device state as seen by the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    NotMounted,
    Mounted,
    Suspended,
}

impl DeviceState {
    pub fn from_flags(configured: bool, suspended: bool) -> Self {
        if suspended {
            DeviceState::Suspended
        } else if configured {
            DeviceState::Mounted
        } else {
            DeviceState::NotMounted
        }
    }

    pub fn blink_interval_ms(self) -> u32 {
        match self {
            DeviceState::NotMounted => BLINK_NOT_MOUNTED_MS,
            DeviceState::Mounted => BLINK_MOUNTED_MS,
            DeviceState::Suspended => BLINK_SUSPENDED_MS,
        }
    }
}

/// LED state machine driven by the poll loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indicator {
    last_toggle_ms: u64,
    level: bool,
}

impl Indicator {
    pub const fn new() -> Self {
        Self {
            last_toggle_ms: 0,
            level: false,
        }
    }

    pub fn level(&self) -> bool {
        self.level
    }

    /// Returns the new LED level when it has to change.
    pub fn update(&mut self, state: DeviceState, caps_lock: bool, now_ms: u64) -> Option<bool> {
        if caps_lock {
            self.last_toggle_ms = now_ms;
            if self.level {
                return None;
            }
            self.level = true;
            return Some(true);
        }

        let interval = u64::from(state.blink_interval_ms());
        if now_ms.saturating_sub(self.last_toggle_ms) < interval {
            return None;
        }
        self.last_toggle_ms = now_ms;
        self.level = !self.level;
        Some(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_from_flags() {
        assert_eq!(DeviceState::from_flags(false, false), DeviceState::NotMounted);
        assert_eq!(DeviceState::from_flags(true, false), DeviceState::Mounted);
        assert_eq!(DeviceState::from_flags(true, true), DeviceState::Suspended);
        assert_eq!(DeviceState::from_flags(false, true), DeviceState::Suspended);
    }

    #[test]
    fn blink_rates() {
        assert_eq!(DeviceState::NotMounted.blink_interval_ms(), 250);
        assert_eq!(DeviceState::Mounted.blink_interval_ms(), 1000);
        assert_eq!(DeviceState::Suspended.blink_interval_ms(), 2500);
    }

    #[test]
    fn toggles_once_per_interval() {
        let mut led = Indicator::new();
        assert_eq!(led.update(DeviceState::NotMounted, false, 100), None);
        assert_eq!(led.update(DeviceState::NotMounted, false, 250), Some(true));
        assert_eq!(led.update(DeviceState::NotMounted, false, 400), None);
        assert_eq!(led.update(DeviceState::NotMounted, false, 500), Some(false));
        assert_eq!(led.update(DeviceState::Mounted, false, 1000), None);
        assert_eq!(led.update(DeviceState::Mounted, false, 1500), Some(true));
    }

    #[test]
    fn caps_lock_holds_led_on() {
        let mut led = Indicator::new();
        assert_eq!(led.update(DeviceState::Mounted, true, 10), Some(true));
        assert_eq!(led.update(DeviceState::Mounted, true, 5000), None);
        assert!(led.level());

        // Blinking resumes one full interval after Caps Lock goes off.
        assert_eq!(led.update(DeviceState::Mounted, false, 5500), None);
        assert_eq!(led.update(DeviceState::Mounted, false, 6000), Some(false));
    }
}
