//! DTMF Entry Buffer
//!
//! While DTMF entry mode is active, keypad presses are captured as dialed
//! digits instead of normal navigation. The buffer is a fixed-length
//! character array; erased positions show a `-` placeholder on screen.

use crate::config::DTMF_INPUT_BOX_SIZE;

/// Placeholder glyph shown for erased/unfilled positions
pub const PLACEHOLDER: u8 = b'-';

/// DTMF entry mode state and input buffer
#[derive(Clone, Copy, Debug)]
pub struct DtmfInput {
    /// Entry mode active (intercepts all key dispatch)
    active: bool,
    /// Captured characters; cells at or past `index` hold the placeholder
    buffer: [u8; DTMF_INPUT_BOX_SIZE],
    /// Insertion index (number of captured characters)
    index: usize,
}

impl DtmfInput {
    /// Create an inactive, empty entry buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: false,
            buffer: [PLACEHOLDER; DTMF_INPUT_BOX_SIZE],
            index: 0,
        }
    }

    /// Check whether entry mode is active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Enter DTMF entry mode with an empty buffer
    pub fn activate(&mut self) {
        self.active = true;
        self.clear();
    }

    /// Leave DTMF entry mode (buffer contents kept for display)
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Erase all captured characters
    pub fn clear(&mut self) {
        self.buffer = [PLACEHOLDER; DTMF_INPUT_BOX_SIZE];
        self.index = 0;
    }

    /// Number of captured characters
    #[must_use]
    pub const fn len(&self) -> usize {
        self.index
    }

    /// Check for an empty buffer
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Append a character; full buffer is a silent no-op
    pub fn push(&mut self, c: u8) {
        if self.index < DTMF_INPUT_BOX_SIZE {
            self.buffer[self.index] = c;
            self.index += 1;
        }
    }

    /// Remove the last character, replacing it with the placeholder.
    ///
    /// Returns the number of characters remaining. Empty buffer is a
    /// silent no-op returning zero.
    pub fn backspace(&mut self) -> usize {
        if self.index > 0 {
            self.index -= 1;
            self.buffer[self.index] = PLACEHOLDER;
        }
        self.index
    }

    /// Captured characters (placeholder cells excluded)
    #[must_use]
    pub fn entered(&self) -> &[u8] {
        &self.buffer[..self.index]
    }

    /// Full buffer as displayed, placeholders included
    #[must_use]
    pub const fn display_bytes(&self) -> &[u8; DTMF_INPUT_BOX_SIZE] {
        &self.buffer
    }
}

impl Default for DtmfInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DtmfInput {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Dtmf(active={}, len={})", self.active, self.index);
    }
}
