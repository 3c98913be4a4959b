//! Fixed-capacity payload text with a typing cursor.

use heapless::Vec;

use crate::config::PAYLOAD_CAPACITY;
use crate::error::{Error, Result};

/// Text to be typed and the position of the next character.
///
/// `cursor` stays within `0..=len()`; `cursor == len()` means every
/// character has been handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadBuffer {
    text: Vec<u8, PAYLOAD_CAPACITY>,
    cursor: usize,
}

impl PayloadBuffer {
    /// Copy `text` into a new buffer with the cursor at the start.
    pub fn new(text: &[u8]) -> Result<Self> {
        let len = text.len();
        let text = Vec::from_slice(text).map_err(|_| Error::PayloadTooLong {
            len,
            capacity: PAYLOAD_CAPACITY,
        })?;
        Ok(Self { text, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Character under the cursor, `None` once the end is reached.
    pub fn peek(&self) -> Option<u8> {
        self.text.get(self.cursor).copied()
    }

    /// Move the cursor one character forward, stopping at the end.
    pub fn advance(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += 1;
        }
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.text.len()
    }
}

impl TryFrom<&str> for PayloadBuffer {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text.as_bytes())
    }
}
