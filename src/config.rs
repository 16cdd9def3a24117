//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the transceiver hardware.
//! Display geometry, channel ranges, and timing parameters are centralized
//! here.

use crate::types::Frequency;

/// System clock frequency (STM32G474 @ 170MHz)
pub const SYSTEM_CLOCK_HZ: u32 = 170_000_000;

/// LCD width in pixels (one byte per column per page)
pub const LCD_WIDTH: usize = 128;

/// LCD height in pixels
pub const LCD_HEIGHT: usize = 64;

/// Number of 8-pixel pages in the main frame (status bar owns the top page)
pub const FRAME_PAGES: usize = 7;

/// Main framebuffer size in bytes
pub const FRAME_BUFFER_SIZE: usize = LCD_WIDTH * FRAME_PAGES;

/// Highest memory (MR) channel index
pub const MR_CHANNEL_LAST: u8 = 199;

/// First free-frequency band slot index
pub const FREQ_CHANNEL_FIRST: u8 = 200;

/// Last free-frequency band slot index
pub const FREQ_CHANNEL_LAST: u8 = 206;

/// First weather-alert (NOAA) channel index
pub const NOAA_CHANNEL_FIRST: u8 = 207;

/// Last weather-alert (NOAA) channel index
pub const NOAA_CHANNEL_LAST: u8 = 209;

/// DTMF entry buffer capacity in characters
pub const DTMF_INPUT_BOX_SIZE: usize = 15;

/// Numeric channel-entry box capacity in digits
pub const INPUT_BOX_SIZE: usize = 3;

/// Number of FM broadcast station slots found by auto-scan
pub const FM_CHANNEL_COUNT: usize = 20;

/// FM broadcast band lower limit (100 kHz units, 76.0 MHz)
pub const FM_LOWER_LIMIT: u16 = 760;

/// FM broadcast band upper limit (100 kHz units, 108.0 MHz)
pub const FM_UPPER_LIMIT: u16 = 1080;

/// VOX resume delay after leaving FM mode, in control-loop ticks
pub const VOX_RESUME_TICKS: u8 = 80;

/// Key matrix debounce time in milliseconds
pub const KEY_DEBOUNCE_MS: u32 = 20;

/// Key long-press threshold in milliseconds
pub const KEY_LONG_PRESS_MS: u32 = 500;

/// Default receive frequency (2m band, 10 Hz units)
pub const DEFAULT_FREQUENCY: Frequency = Frequency::from_units(14_650_000);

/// Battery voltage thresholds in millivolts, one per display level step.
///
/// A smoothed battery sample at or above `BATTERY_LEVEL_MV[i]` yields a
/// display level of at least `i + 1`.
pub const BATTERY_LEVEL_MV: [u16; 6] = [6_300, 6_700, 7_100, 7_400, 7_700, 8_000];

/// SPI bus frequency for the ST7565 panel
pub const DISPLAY_SPI_HZ: u32 = 4_000_000;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Backlight control
    pub const BACKLIGHT: &str = "PB6";

    /// ST7565 chip select
    pub const LCD_CS: &str = "PB12";

    /// ST7565 A0 (command/data select)
    pub const LCD_A0: &str = "PB10";

    /// ST7565 reset
    pub const LCD_RES: &str = "PB11";

    /// Keypad row inputs
    pub const KEY_ROWS: [&str; 4] = ["PA4", "PA5", "PA6", "PA7"];

    /// Keypad column outputs
    pub const KEY_COLS: [&str; 4] = ["PB0", "PB1", "PB2", "PB3"];

    /// PTT input (active low)
    pub const PTT_IN: &str = "PC13";

    /// Side key 1 input (active low)
    pub const SIDE1_IN: &str = "PC14";

    /// Side key 2 input (active low)
    pub const SIDE2_IN: &str = "PC15";

    /// USB-C charge sense input
    pub const CHARGE_SENSE: &str = "PA8";

    /// Battery voltage ADC input
    pub const BATTERY_ADC: &str = "PA0";
}
