//! ASCII character to keyboard report encoding.

use crate::hid::keyboard::{KeyReport, MODIFIER_LEFT_SHIFT};
use crate::hid::scancode::{self, ScancodeEntry};

/// Build the key-down report that types `ascii`.
///
/// Shifted characters set Left Shift and put the usage into slot 0.
/// Characters without a key give the all-zero report.
pub fn encode(ascii: u8) -> KeyReport {
    match scancode::lookup(ascii) {
        Some(entry) if entry.shift => KeyReport::single(MODIFIER_LEFT_SHIFT, entry.usage & 0x7F),
        Some(entry) => KeyReport::single(0, entry.usage),
        None => KeyReport::release(),
    }
}

/// Recover the character a report produced by [`encode`] types.
pub fn decode(report: &KeyReport) -> Option<u8> {
    let usage = report.keys[0];
    if usage == 0 {
        return None;
    }
    scancode::reverse(ScancodeEntry {
        usage,
        shift: report.modifier & MODIFIER_LEFT_SHIFT != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_has_no_modifier() {
        assert_eq!(encode(b'h'), KeyReport::single(0, 0x0B));
    }

    #[test]
    fn uppercase_sets_left_shift() {
        let report = encode(b'H');
        assert_eq!(report.modifier, MODIFIER_LEFT_SHIFT);
        assert_eq!(report.keys, [0x0B, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn shifted_punctuation() {
        assert_eq!(encode(b'!'), KeyReport::single(MODIFIER_LEFT_SHIFT, 0x1E));
        assert_eq!(encode(b'_'), KeyReport::single(MODIFIER_LEFT_SHIFT, 0x2D));
    }

    #[test]
    fn unmapped_characters_release_all_keys() {
        assert!(encode(b'\r').is_release());
        assert!(encode(0).is_release());
        assert!(encode(0x7F).is_release());
        assert!(encode(0xC3).is_release());
    }

    #[test]
    fn encode_then_decode_recovers_every_mapped_character() {
        for ascii in 0u8..128 {
            let Some(entry) = scancode::lookup(ascii) else {
                continue;
            };
            let decoded = decode(&encode(ascii)).unwrap();
            assert_eq!(scancode::lookup(decoded), Some(entry), "ascii {:#04x}", ascii);
            assert_eq!(decoded, ascii);
        }
    }

    #[test]
    fn decode_release_is_none() {
        assert_eq!(decode(&KeyReport::release()), None);
    }
}
