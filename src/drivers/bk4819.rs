//! BK4819 Transceiver Driver
//!
//! Narrow contract over the FM transceiver chip: tune the synthesizer and
//! select the PA bias for the output power tier. The control surface never
//! reads the chip back; squelch and RSSI processing belong to the engine
//! serviced by the control loop.

use crate::hal::spi::{SpiBus, SpiResult};
use crate::types::{Frequency, OutputPower};
use embassy_stm32::gpio::Output;

/// BK4819 register addresses
mod reg {
    /// Synthesizer frequency, low 16 bits (10 Hz units)
    pub const FREQ_LOW: u8 = 0x38;
    /// Synthesizer frequency, high 16 bits (10 Hz units)
    pub const FREQ_HIGH: u8 = 0x39;
    /// PA control: enable, bias and gain
    pub const PA_CONTROL: u8 = 0x36;
    /// RX/TX enable control
    pub const CONTROL: u8 = 0x30;
}

/// PA bias values per output power tier
const PA_BIAS: [u16; 3] = [0x1020, 0x2040, 0x30C0];

/// Transceiver chip driver (3-wire serial interface)
pub struct Bk4819<'d> {
    bus: SpiBus<'d>,
    /// Chip select (active low)
    scn: Output<'d>,
}

impl<'d> Bk4819<'d> {
    /// Create a new transceiver driver
    #[must_use]
    pub fn new(bus: SpiBus<'d>, scn: Output<'d>) -> Self {
        Self { bus, scn }
    }

    /// Write a 16-bit register
    pub async fn write_reg(&mut self, reg: u8, value: u16) -> SpiResult<()> {
        let bytes = value.to_be_bytes();
        self.scn.set_low();
        let result = self.bus.write(&[reg & 0x7F, bytes[0], bytes[1]]).await;
        self.scn.set_high();
        result
    }

    /// Tune the synthesizer to a receive/transmit frequency
    pub async fn tune(&mut self, frequency: Frequency) -> SpiResult<()> {
        let units = frequency.as_units();
        self.write_reg(reg::FREQ_LOW, (units & 0xFFFF) as u16).await?;
        self.write_reg(reg::FREQ_HIGH, (units >> 16) as u16).await
    }

    /// Select the PA bias for an output power tier
    pub async fn set_output_power(&mut self, power: OutputPower) -> SpiResult<()> {
        let bias = PA_BIAS[power as usize];
        self.write_reg(reg::PA_CONTROL, bias).await
    }

    /// Enable or disable the receiver path
    pub async fn set_rx(&mut self, enable: bool) -> SpiResult<()> {
        self.write_reg(reg::CONTROL, if enable { 0xBFF1 } else { 0x0000 })
            .await
    }
}
