//! HID report types and the ASCII scancode table.

pub mod keyboard;
pub mod mouse;
pub mod scancode;

#[cfg(test)]
mod tests;

pub use keyboard::{KeyReport, KeyboardLeds};
pub use mouse::MouseReport;
pub use scancode::ScancodeEntry;
