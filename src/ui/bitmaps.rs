//! Status Icon Bitmaps and Glyphs
//!
//! Column-major pixel patterns for the status strip. One byte per column,
//! bit 0 at the top, matching the panel's page layout. Battery icons sit
//! against the right edge; the terminal nub is the leading column.

/// Battery icon width in columns
pub const BATTERY_ICON_WIDTH: usize = 18;

/// Critical battery: empty outline, drawn only during the blink-on phase
pub const BATTERY_LEVEL_1: [u8; BATTERY_ICON_WIDTH] = [
    0x1C, 0x7F, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x7F,
];

/// Battery at one fill bar
pub const BATTERY_LEVEL_2: [u8; BATTERY_ICON_WIDTH] = [
    0x1C, 0x7F, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x5D, 0x5D, 0x5D, 0x5D, 0x7F,
];

/// Battery at two fill bars
pub const BATTERY_LEVEL_3: [u8; BATTERY_ICON_WIDTH] = [
    0x1C, 0x7F, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x5D,
    0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x7F,
];

/// Battery at three fill bars
pub const BATTERY_LEVEL_4: [u8; BATTERY_ICON_WIDTH] = [
    0x1C, 0x7F, 0x41, 0x41, 0x41, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D,
    0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x7F,
];

/// Battery full
pub const BATTERY_LEVEL_5: [u8; BATTERY_ICON_WIDTH] = [
    0x1C, 0x7F, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D,
    0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x5D, 0x7F,
];

/// USB-C charge indicator (lightning bolt)
pub const USB_C: [u8; 9] = [
    0x00, 0x10, 0x18, 0x1C, 0x7E, 0x3F, 0x1C, 0x0C, 0x04,
];

/// Percent sign
pub const PERCENT_GLYPH: [u8; 7] = [0x41, 0xA2, 0x44, 0x08, 0x13, 0x26, 0x44];

/// Digit glyph width in columns (5-pixel pattern plus 2 columns of spacing)
pub const DIGIT_WIDTH: usize = 7;

/// Small digit font for the status strip, indexed by digit value
pub const FONT_SMALL_DIGITS: [[u8; DIGIT_WIDTH]; 10] = [
    [0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00, 0x00], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00, 0x00, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46, 0x00, 0x00], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31, 0x00, 0x00], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10, 0x00, 0x00], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39, 0x00, 0x00], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00, 0x00], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03, 0x00, 0x00], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E, 0x00, 0x00], // 9
];
