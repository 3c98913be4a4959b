//! US-QWERTY ASCII to HID usage table.
//!
//! One entry per 7-bit ASCII code point. Control characters other than
//! backspace, tab and line feed have no key and map to `None`, as does DEL.

/// Usage code and shift flag needed to type one ASCII character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScancodeEntry {
    /// HID usage code on the Keyboard/Keypad page.
    pub usage: u8,
    /// Whether the character needs Shift held.
    pub shift: bool,
}

const NONE: Option<ScancodeEntry> = None;

/// Unshifted key.
const fn n(usage: u8) -> Option<ScancodeEntry> {
    Some(ScancodeEntry {
        usage,
        shift: false,
    })
}

/// Shifted key.
const fn s(usage: u8) -> Option<ScancodeEntry> {
    Some(ScancodeEntry { usage, shift: true })
}

static ASCII_TABLE: [Option<ScancodeEntry>; 128] = [
    NONE,    // 0x00 NUL
    NONE,    // 0x01 SOH
    NONE,    // 0x02 STX
    NONE,    // 0x03 ETX
    NONE,    // 0x04 EOT
    NONE,    // 0x05 ENQ
    NONE,    // 0x06 ACK
    NONE,    // 0x07 BEL
    n(0x2a), // 0x08 BS
    n(0x2b), // 0x09 HT
    n(0x28), // 0x0a LF
    NONE,    // 0x0b VT
    NONE,    // 0x0c FF
    NONE,    // 0x0d CR
    NONE,    // 0x0e SO
    NONE,    // 0x0f SI
    NONE,    // 0x10 DLE
    NONE,    // 0x11 DC1
    NONE,    // 0x12 DC2
    NONE,    // 0x13 DC3
    NONE,    // 0x14 DC4
    NONE,    // 0x15 NAK
    NONE,    // 0x16 SYN
    NONE,    // 0x17 ETB
    NONE,    // 0x18 CAN
    NONE,    // 0x19 EM
    NONE,    // 0x1a SUB
    NONE,    // 0x1b ESC
    NONE,    // 0x1c FS
    NONE,    // 0x1d GS
    NONE,    // 0x1e RS
    NONE,    // 0x1f US
    n(0x2c), // 0x20 space
    s(0x1e), // 0x21 !
    s(0x34), // 0x22 "
    s(0x20), // 0x23 #
    s(0x21), // 0x24 $
    s(0x22), // 0x25 %
    s(0x24), // 0x26 &
    n(0x34), // 0x27 '
    s(0x26), // 0x28 (
    s(0x27), // 0x29 )
    s(0x25), // 0x2a *
    s(0x2e), // 0x2b +
    n(0x36), // 0x2c ,
    n(0x2d), // 0x2d -
    n(0x37), // 0x2e .
    n(0x38), // 0x2f /
    n(0x27), // 0x30 0
    n(0x1e), // 0x31 1
    n(0x1f), // 0x32 2
    n(0x20), // 0x33 3
    n(0x21), // 0x34 4
    n(0x22), // 0x35 5
    n(0x23), // 0x36 6
    n(0x24), // 0x37 7
    n(0x25), // 0x38 8
    n(0x26), // 0x39 9
    s(0x33), // 0x3a :
    n(0x33), // 0x3b ;
    s(0x36), // 0x3c <
    n(0x2e), // 0x3d =
    s(0x37), // 0x3e >
    s(0x38), // 0x3f ?
    s(0x1f), // 0x40 @
    s(0x04), // 0x41 A
    s(0x05), // 0x42 B
    s(0x06), // 0x43 C
    s(0x07), // 0x44 D
    s(0x08), // 0x45 E
    s(0x09), // 0x46 F
    s(0x0a), // 0x47 G
    s(0x0b), // 0x48 H
    s(0x0c), // 0x49 I
    s(0x0d), // 0x4a J
    s(0x0e), // 0x4b K
    s(0x0f), // 0x4c L
    s(0x10), // 0x4d M
    s(0x11), // 0x4e N
    s(0x12), // 0x4f O
    s(0x13), // 0x50 P
    s(0x14), // 0x51 Q
    s(0x15), // 0x52 R
    s(0x16), // 0x53 S
    s(0x17), // 0x54 T
    s(0x18), // 0x55 U
    s(0x19), // 0x56 V
    s(0x1a), // 0x57 W
    s(0x1b), // 0x58 X
    s(0x1c), // 0x59 Y
    s(0x1d), // 0x5a Z
    n(0x2f), // 0x5b [
    n(0x31), // 0x5c \
    n(0x30), // 0x5d ]
    s(0x23), // 0x5e ^
    s(0x2d), // 0x5f _
    n(0x35), // 0x60 `
    n(0x04), // 0x61 a
    n(0x05), // 0x62 b
    n(0x06), // 0x63 c
    n(0x07), // 0x64 d
    n(0x08), // 0x65 e
    n(0x09), // 0x66 f
    n(0x0a), // 0x67 g
    n(0x0b), // 0x68 h
    n(0x0c), // 0x69 i
    n(0x0d), // 0x6a j
    n(0x0e), // 0x6b k
    n(0x0f), // 0x6c l
    n(0x10), // 0x6d m
    n(0x11), // 0x6e n
    n(0x12), // 0x6f o
    n(0x13), // 0x70 p
    n(0x14), // 0x71 q
    n(0x15), // 0x72 r
    n(0x16), // 0x73 s
    n(0x17), // 0x74 t
    n(0x18), // 0x75 u
    n(0x19), // 0x76 v
    n(0x1a), // 0x77 w
    n(0x1b), // 0x78 x
    n(0x1c), // 0x79 y
    n(0x1d), // 0x7a z
    s(0x2f), // 0x7b {
    s(0x31), // 0x7c |
    s(0x30), // 0x7d }
    s(0x35), // 0x7e ~
    NONE,    // 0x7f DEL
];

/// Look up the key for an ASCII code point. Values >= 128 have no entry.
pub fn lookup(ascii: u8) -> Option<ScancodeEntry> {
    ASCII_TABLE.get(usize::from(ascii)).copied().flatten()
}

/// Find the lowest ASCII code point typed by `entry`.
pub fn reverse(entry: ScancodeEntry) -> Option<u8> {
    ASCII_TABLE
        .iter()
        .position(|candidate| *candidate == Some(entry))
        .map(|ascii| ascii as u8)
}
