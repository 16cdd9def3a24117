//! Keypad Driver
//!
//! Scans the 4×4 key matrix and the two side keys, debounces the result,
//! and emits `(key, pressed, held)` events for the dispatcher. Debouncing
//! and long-press detection both live here; the dispatcher never sees a
//! bouncing contact.

use crate::config::KEY_LONG_PRESS_MS;
use crate::types::KeyCode;
use embassy_stm32::gpio::{Input, Output};

/// One debounced key transport event
#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    /// Which key changed or is being held
    pub key: KeyCode,
    /// Key is down
    pub pressed: bool,
    /// Press has lasted past the long-press threshold
    pub held: bool,
}

impl defmt::Format for KeyEvent {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Key({}, pressed={}, held={})",
            self.key,
            self.pressed,
            self.held
        );
    }
}

/// Matrix layout, row-major
const KEY_MATRIX: [[KeyCode; 4]; 4] = [
    [KeyCode::Menu, KeyCode::Up, KeyCode::Down, KeyCode::Exit],
    [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Star],
    [KeyCode::Key4, KeyCode::Key5, KeyCode::Key6, KeyCode::Key0],
    [KeyCode::Key7, KeyCode::Key8, KeyCode::Key9, KeyCode::FKey],
];

/// Key matrix and side-key scanner
pub struct Keypad<'d> {
    rows: [Input<'d>; 4],
    cols: [Output<'d>; 4],
    side1: Input<'d>,
    side2: Input<'d>,
    /// Committed (debounced) key, if any is down
    current: Option<KeyCode>,
    /// Raw key seen on the last scan
    last_raw: Option<KeyCode>,
    /// Consecutive scans the raw key has been stable
    debounce_count: u8,
    /// Press timestamp for long-press detection
    press_start_ms: Option<u32>,
    /// Long-press event already emitted for this press
    held_fired: bool,
}

impl<'d> Keypad<'d> {
    /// Required consecutive scans for debounce
    const DEBOUNCE_THRESHOLD: u8 = 3;

    /// Create a keypad scanner
    #[must_use]
    pub fn new(
        rows: [Input<'d>; 4],
        cols: [Output<'d>; 4],
        side1: Input<'d>,
        side2: Input<'d>,
    ) -> Self {
        Self {
            rows,
            cols,
            side1,
            side2,
            current: None,
            last_raw: None,
            debounce_count: 0,
            press_start_ms: None,
            held_fired: false,
        }
    }

    /// Raw scan: side keys first, then the matrix column by column
    fn scan_raw(&mut self) -> Option<KeyCode> {
        if self.side1.is_low() {
            return Some(KeyCode::Side1);
        }
        if self.side2.is_low() {
            return Some(KeyCode::Side2);
        }

        let mut found = None;
        for col in 0..4 {
            self.cols[col].set_low();
            for (row, input) in self.rows.iter().enumerate() {
                if input.is_low() {
                    found = Some(KEY_MATRIX[row][col]);
                }
            }
            self.cols[col].set_high();
            if found.is_some() {
                break;
            }
        }
        found
    }

    /// Poll for key events (call periodically).
    ///
    /// Emits a press event on the debounced down edge, a single held event
    /// once the press passes the long-press threshold, and a release event
    /// carrying the held flag of the press it ends.
    pub fn poll(&mut self, current_ms: u32) -> Option<KeyEvent> {
        let raw = self.scan_raw();

        if raw == self.last_raw {
            if self.debounce_count < Self::DEBOUNCE_THRESHOLD {
                self.debounce_count += 1;
            }
        } else {
            self.last_raw = raw;
            self.debounce_count = 0;
        }

        if self.debounce_count >= Self::DEBOUNCE_THRESHOLD && raw != self.current {
            // Committed transition: release the old key first; a new key
            // gets its press event on the next poll.
            if let Some(key) = self.current {
                let held = self.held_fired;
                self.current = None;
                self.press_start_ms = None;
                self.held_fired = false;
                return Some(KeyEvent {
                    key,
                    pressed: false,
                    held,
                });
            }
            if let Some(key) = raw {
                self.current = raw;
                self.press_start_ms = Some(current_ms);
                self.held_fired = false;
                return Some(KeyEvent {
                    key,
                    pressed: true,
                    held: false,
                });
            }
        }

        // Long-press detection on the committed key
        if let (Some(key), Some(start)) = (self.current, self.press_start_ms) {
            if !self.held_fired && current_ms.wrapping_sub(start) >= KEY_LONG_PRESS_MS {
                self.held_fired = true;
                return Some(KeyEvent {
                    key,
                    pressed: true,
                    held: true,
                });
            }
        }

        None
    }
}
