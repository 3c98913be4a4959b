//! USB HID mouse report (boot protocol compatible) and the analog
//! joystick mapping that feeds it.
//!
//! Layout (4 bytes):
//! ```text
//! Byte 0: Button bitfield
//!         Bit 0 = Left, Bit 1 = Right, Bit 2 = Middle
//! Byte 1: X displacement (signed, -127..127)
//! Byte 2: Y displacement (signed, -127..127)
//! Byte 3: Scroll wheel  (signed, -127..127)
//! ```

/// Mouse report size in bytes.
pub const MOUSE_REPORT_SIZE: usize = 4;

/// ADC reading above which the joystick counts as deflected high.
pub const JOYSTICK_HIGH_THRESHOLD: u16 = 2400;

/// ADC reading below which the joystick counts as deflected low.
pub const JOYSTICK_LOW_THRESHOLD: u16 = 1600;

/// Pointer step per report while the joystick is deflected.
pub const JOYSTICK_STEP: i8 = 3;

/// Standard USB HID boot-protocol mouse report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    /// Button bitfield (bit 0 = left, bit 1 = right, bit 2 = middle).
    pub buttons: u8,
    /// Relative X movement (signed).
    pub dx: i8,
    /// Relative Y movement (signed).
    pub dy: i8,
    /// Scroll wheel delta (signed).
    pub wheel: i8,
}

impl MouseReport {
    /// Create an idle (no movement, no buttons) report.
    pub const fn idle() -> Self {
        Self {
            buttons: 0,
            dx: 0,
            dy: 0,
            wheel: 0,
        }
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 4).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < MOUSE_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.buttons;
        buf[1] = self.dx as u8;
        buf[2] = self.dy as u8;
        buf[3] = self.wheel as u8;
        MOUSE_REPORT_SIZE
    }

    /// Returns `true` when no buttons are pressed and there is no movement.
    pub fn is_idle(&self) -> bool {
        self.buttons == 0 && self.dx == 0 && self.dy == 0 && self.wheel == 0
    }
}

/// Map two 12-bit joystick ADC readings to a relative mouse report.
///
/// The X axis is mounted inverted: pushing it high moves the pointer left.
pub fn joystick_to_mouse(x_raw: u16, y_raw: u16) -> MouseReport {
    let dx = if x_raw > JOYSTICK_HIGH_THRESHOLD {
        -JOYSTICK_STEP
    } else if x_raw < JOYSTICK_LOW_THRESHOLD {
        JOYSTICK_STEP
    } else {
        0
    };
    let dy = if y_raw > JOYSTICK_HIGH_THRESHOLD {
        JOYSTICK_STEP
    } else if y_raw < JOYSTICK_LOW_THRESHOLD {
        -JOYSTICK_STEP
    } else {
        0
    };
    MouseReport {
        buttons: 0,
        dx,
        dy,
        wheel: 0,
    }
}
