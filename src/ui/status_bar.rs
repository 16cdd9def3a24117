//! Status-Bar Renderer
//!
//! Composes battery and charge iconography plus the numeric battery
//! readout into the one-page status strip. Draw order is fixed: battery
//! icon, charge icon, percent digits, percent sign. Every write is
//! bounds-checked; anything that would overflow is skipped silently.

use crate::config::LCD_WIDTH;
use crate::power::BatteryMonitor;
use crate::ui::bitmaps::{
    BATTERY_LEVEL_1, BATTERY_LEVEL_2, BATTERY_LEVEL_3, BATTERY_LEVEL_4, BATTERY_LEVEL_5,
    DIGIT_WIDTH, FONT_SMALL_DIGITS, PERCENT_GLYPH, USB_C,
};
use crate::ui::framebuffer::StatusLine;
use core::fmt::Write as _;
use heapless::String;

/// Column the battery icon starts at
pub const BATTERY_ICON_COLUMN: usize = 110;

/// Column the charge indicator starts at
pub const CHARGE_ICON_COLUMN: usize = 100;

/// Column the percent readout starts at
pub const PERCENT_CURSOR: usize = 70;

/// Cursor advance for a literal space
const SPACE_ADVANCE: usize = 3;

/// Map a discrete battery level (0–6) to a percentage.
///
/// Levels above the table clamp to the last entry.
#[must_use]
pub fn battery_percent(level: u8) -> u8 {
    const LOOKUP: [u8; 7] = [0, 20, 40, 60, 80, 95, 100];
    LOOKUP[usize::from(level).min(LOOKUP.len() - 1)]
}

/// Write digit glyphs left to right from a cursor column.
///
/// A space advances the cursor without drawing; any other non-digit
/// character is skipped. Writing stops at the first glyph that no longer
/// fits, leaving the cursor inside the strip.
pub fn write_digits(line: &mut StatusLine, mut cursor: usize, text: &str) -> usize {
    for &b in text.as_bytes() {
        match b {
            b'0'..=b'9' => {
                let glyph = &FONT_SMALL_DIGITS[usize::from(b - b'0')];
                if !line.blit(cursor, glyph) {
                    break;
                }
                cursor += DIGIT_WIDTH;
            }
            b' ' => {
                if cursor + SPACE_ADVANCE > LCD_WIDTH {
                    break;
                }
                cursor += SPACE_ADVANCE;
            }
            _ => {}
        }
    }
    cursor
}

/// Compose the status strip from the battery state.
///
/// Identical input always produces an identical strip; the caller blits
/// the result to the panel.
pub fn render_status(battery: &BatteryMonitor, line: &mut StatusLine) {
    line.clear();

    let level = battery.display_level();
    if level < 2 {
        // Critical range flashes at the blink rate.
        if battery.blink_on() {
            line.blit(BATTERY_ICON_COLUMN, &BATTERY_LEVEL_1);
        }
    } else {
        let icon = match level {
            2 => &BATTERY_LEVEL_2,
            3 => &BATTERY_LEVEL_3,
            4 => &BATTERY_LEVEL_4,
            _ => &BATTERY_LEVEL_5,
        };
        line.blit(BATTERY_ICON_COLUMN, icon);
    }

    if battery.is_charging() {
        line.blit(CHARGE_ICON_COLUMN, &USB_C);
    }

    let mut text: String<4> = String::new();
    let _ = write!(text, "{}", battery_percent(level));
    let cursor = write_digits(line, PERCENT_CURSOR, &text);
    line.blit(cursor, &PERCENT_GLYPH);
}
