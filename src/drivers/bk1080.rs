//! BK1080 FM Receiver Driver
//!
//! Narrow contract over the FM broadcast chip: power it up and tune a
//! channel. Seek decisions are made by the control loop from the FM state;
//! the chip only follows.

use crate::config::FM_LOWER_LIMIT;
use crate::hal::i2c::{I2cAddress, I2cBus, I2cResult};

/// BK1080 register addresses
mod reg {
    /// Power configuration
    pub const POWER_CONFIG: u8 = 0x02;
    /// Channel select and tune strobe
    pub const CHANNEL: u8 = 0x03;
    /// System configuration (band, spacing)
    pub const SYS_CONFIG: u8 = 0x05;
}

/// Tune strobe bit in the channel register
const TUNE: u16 = 0x8000;

/// FM broadcast receiver driver
pub struct Bk1080<'d> {
    bus: I2cBus<'d>,
}

impl<'d> Bk1080<'d> {
    /// Create a new FM receiver driver
    #[must_use]
    pub fn new(bus: I2cBus<'d>) -> Self {
        Self { bus }
    }

    /// Power the chip up with the wide band and 100 kHz spacing selected
    pub async fn init(&mut self) -> I2cResult<()> {
        self.bus
            .write_reg16(I2cAddress::BK1080, reg::POWER_CONFIG, 0x0201)
            .await?;
        self.bus
            .write_reg16(I2cAddress::BK1080, reg::SYS_CONFIG, 0x0A5F)
            .await
    }

    /// Tune to a frequency in 100 kHz units
    pub async fn tune(&mut self, frequency: u16) -> I2cResult<()> {
        let channel = frequency.saturating_sub(FM_LOWER_LIMIT);
        self.bus
            .write_reg16(I2cAddress::BK1080, reg::CHANNEL, TUNE | channel)
            .await
    }

    /// Mute or unmute the audio path
    pub async fn set_mute(&mut self, mute: bool) -> I2cResult<()> {
        let value = if mute { 0x4201 } else { 0x0201 };
        self.bus
            .write_reg16(I2cAddress::BK1080, reg::POWER_CONFIG, value)
            .await
    }
}
