//! ST7565 Panel Driver
//!
//! Owns the physical transport for the 128×64 monochrome LCD. The panel
//! is page-addressed: the top page carries the status strip, the
//! remaining seven the main frame, matching the in-memory buffer layout
//! byte for byte so a blit is a straight copy.

use crate::config::{FRAME_PAGES, LCD_WIDTH};
use crate::hal::spi::{SpiBus, SpiResult};
use crate::ui::framebuffer::{FrameBuffer, StatusLine};
use embassy_stm32::gpio::Output;

/// ST7565 command bytes
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_START_LINE: u8 = 0x40;
    pub const ADC_SELECT_REVERSE: u8 = 0xA1;
    pub const DISPLAY_NORMAL: u8 = 0xA6;
    pub const ALL_POINTS_OFF: u8 = 0xA4;
    pub const BIAS_1_9: u8 = 0xA2;
    pub const COM_SCAN_NORMAL: u8 = 0xC0;
    pub const POWER_CONTROL: u8 = 0x28;
    pub const REGULATOR_RATIO: u8 = 0x20;
    pub const ELECTRONIC_VOLUME: u8 = 0x81;
    pub const SET_PAGE: u8 = 0xB0;
    pub const SET_COLUMN_HIGH: u8 = 0x10;
    pub const SET_COLUMN_LOW: u8 = 0x00;
}

/// Page index of the status strip
const STATUS_PAGE: u8 = 0;

/// First page of the main frame
const FRAME_FIRST_PAGE: u8 = 1;

/// LCD panel driver
pub struct St7565<'d> {
    bus: SpiBus<'d>,
    /// Command/data select (low = command)
    a0: Output<'d>,
    /// Chip select (active low)
    cs: Output<'d>,
}

impl<'d> St7565<'d> {
    /// Create a new panel driver
    #[must_use]
    pub fn new(bus: SpiBus<'d>, a0: Output<'d>, cs: Output<'d>) -> Self {
        Self { bus, a0, cs }
    }

    /// Initialize the controller
    pub async fn init(&mut self) -> SpiResult<()> {
        let init_cmds = [
            cmd::DISPLAY_OFF,
            cmd::BIAS_1_9,
            cmd::ADC_SELECT_REVERSE,
            cmd::COM_SCAN_NORMAL,
            cmd::SET_START_LINE,
            cmd::POWER_CONTROL | 0x07,
            cmd::REGULATOR_RATIO | 0x05,
            cmd::ELECTRONIC_VOLUME,
            0x1F,
            cmd::ALL_POINTS_OFF,
            cmd::DISPLAY_NORMAL,
            cmd::DISPLAY_ON,
        ];

        self.cs.set_low();
        self.a0.set_low();
        let result = self.bus.write(&init_cmds).await;
        self.cs.set_high();
        result
    }

    /// Set display contrast (electronic volume, 0–63)
    pub async fn set_contrast(&mut self, contrast: u8) -> SpiResult<()> {
        self.command(&[cmd::ELECTRONIC_VOLUME, contrast & 0x3F]).await
    }

    /// Blit the status strip to the top page
    pub async fn blit_status_line(&mut self, line: &StatusLine) -> SpiResult<()> {
        self.write_page(STATUS_PAGE, line.as_bytes()).await
    }

    /// Blit the full main frame below the status strip
    pub async fn blit_full_screen(&mut self, fb: &FrameBuffer) -> SpiResult<()> {
        let bytes = fb.as_bytes();
        for page in 0..FRAME_PAGES {
            let start = page * LCD_WIDTH;
            self.write_page(FRAME_FIRST_PAGE + page as u8, &bytes[start..start + LCD_WIDTH])
                .await?;
        }
        Ok(())
    }

    async fn command(&mut self, bytes: &[u8]) -> SpiResult<()> {
        self.cs.set_low();
        self.a0.set_low();
        let result = self.bus.write(bytes).await;
        self.cs.set_high();
        result
    }

    async fn write_page(&mut self, page: u8, columns: &[u8]) -> SpiResult<()> {
        self.command(&[
            cmd::SET_PAGE | (page & 0x0F),
            cmd::SET_COLUMN_HIGH,
            cmd::SET_COLUMN_LOW,
        ])
        .await?;

        self.cs.set_low();
        self.a0.set_high();
        let result = self.bus.write(columns).await;
        self.cs.set_high();
        result
    }
}
