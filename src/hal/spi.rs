//! SPI Bus Abstractions
//!
//! Provides async SPI communication for the ST7565 panel and the BK4819
//! transceiver chip. Uses the embassy-stm32 async SPI driver with DMA.

use embassy_stm32::mode::Async;
use embassy_stm32::spi::{Error as SpiError, Spi};

/// SPI operation result
pub type SpiResult<T> = Result<T, SpiError>;

/// SPI bus wrapper for shared access
pub struct SpiBus<'d> {
    spi: Spi<'d, Async>,
}

impl<'d> SpiBus<'d> {
    /// Create a new SPI bus wrapper
    #[must_use]
    pub fn new(spi: Spi<'d, Async>) -> Self {
        Self { spi }
    }

    /// Write bytes to the selected device
    pub async fn write(&mut self, data: &[u8]) -> SpiResult<()> {
        self.spi.write(data).await
    }

    /// Full-duplex transfer
    pub async fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> SpiResult<()> {
        self.spi.transfer(read, write).await
    }
}
