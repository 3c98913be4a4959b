//! Unit tests for HID report serialisation and the joystick mapping.
//!
//! These tests run on the host (not embedded) and verify the pure
//! logic of the wire formats.

use super::keyboard::{KeyReport, KeyboardLeds, MODIFIER_LEFT_SHIFT};
use super::mouse::{joystick_to_mouse, MouseReport};

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_release() {
    let report = KeyReport::release();
    assert!(report.is_release());
    assert_eq!(report.modifier, 0);
    assert_eq!(report.keys, [0; 6]);
    assert_eq!(report, KeyReport::default());
}

#[test]
fn keyboard_report_single_key() {
    // Left Shift + 'a' key (0x04) types 'A'
    let report = KeyReport::single(MODIFIER_LEFT_SHIFT, 0x04);
    assert_eq!(report.modifier, 0x02);
    assert_eq!(report.keys, [0x04, 0, 0, 0, 0, 0]);
    assert!(!report.is_release());
}

#[test]
fn keyboard_report_modifier_only_is_not_release() {
    let report = KeyReport::single(MODIFIER_LEFT_SHIFT, 0);
    assert!(!report.is_release());
}

#[test]
fn keyboard_report_serialize_boot_layout() {
    let report = KeyReport {
        modifier: 0x05,
        keys: [0x04, 0x05, 0x06, 0x00, 0x00, 0x00],
    };

    let mut buf = [0xAAu8; 8];
    let written = report.serialize(&mut buf);

    assert_eq!(written, 8);
    // Reserved byte is always written as zero
    assert_eq!(buf, [0x05, 0x00, 0x04, 0x05, 0x06, 0x00, 0x00, 0x00]);
}

#[test]
fn keyboard_report_serialize_buffer_too_small() {
    let report = KeyReport::release();
    let mut small_buf = [0u8; 4];
    let written = report.serialize(&mut small_buf);
    assert_eq!(written, 0); // Should fail gracefully
}

#[test]
fn keyboard_leds_caps_lock() {
    let leds = KeyboardLeds::from_output_report(&[0x02]).unwrap();
    assert!(leds.caps_lock());
    assert!(!leds.num_lock());
    assert!(!leds.scroll_lock());

    let leds = KeyboardLeds::from_output_report(&[0x05, 0xFF]).unwrap();
    assert!(leds.num_lock());
    assert!(leds.scroll_lock());
    assert!(!leds.caps_lock());
    assert_eq!(leds.bits(), 0x05);
}

#[test]
fn keyboard_leds_empty_report_ignored() {
    assert!(KeyboardLeds::from_output_report(&[]).is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// Mouse Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn mouse_report_idle() {
    let report = MouseReport::idle();
    assert!(report.is_idle());
    assert_eq!(report, MouseReport::default());
}

#[test]
fn mouse_report_serialize_signed_fields() {
    let original = MouseReport {
        buttons: 0x05,
        dx: -100,
        dy: 50,
        wheel: -2,
    };

    let mut buf = [0u8; 4];
    let written = original.serialize(&mut buf);

    assert_eq!(written, 4);
    assert_eq!(buf[0], 0x05);
    assert_eq!(buf[1] as i8, -100);
    assert_eq!(buf[2] as i8, 50);
    assert_eq!(buf[3] as i8, -2);
}

#[test]
fn mouse_report_serialize_buffer_too_small() {
    let mut buf = [0u8; 3];
    assert_eq!(MouseReport::idle().serialize(&mut buf), 0);
}

#[test]
fn joystick_centered_is_idle() {
    assert!(joystick_to_mouse(2000, 2000).is_idle());
    // Thresholds themselves are still inside the dead zone
    assert!(joystick_to_mouse(2400, 1600).is_idle());
}

#[test]
fn joystick_x_axis_is_inverted() {
    assert_eq!(joystick_to_mouse(4095, 2000).dx, -3);
    assert_eq!(joystick_to_mouse(0, 2000).dx, 3);
}

#[test]
fn joystick_y_axis() {
    let report = joystick_to_mouse(2000, 4095);
    assert_eq!(report.dx, 0);
    assert_eq!(report.dy, 3);
    assert_eq!(joystick_to_mouse(2000, 100).dy, -3);
    assert_eq!(joystick_to_mouse(2000, 100).buttons, 0);
}
