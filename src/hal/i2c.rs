//! I2C Bus Abstractions
//!
//! Provides async I2C communication for the BK1080 FM receiver.
//! Uses embassy-stm32 async I2C driver with DMA.

use embassy_stm32::i2c::{Error as I2cError, I2c};
use embassy_stm32::mode::Async;

/// I2C operation result
pub type I2cResult<T> = Result<T, I2cError>;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// BK1080 FM receiver address
    pub const BK1080: Self = Self(0x40);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// I2C bus wrapper for shared access
pub struct I2cBus<'d> {
    i2c: I2c<'d, Async>,
}

impl<'d> I2cBus<'d> {
    /// Create a new I2C bus wrapper
    #[must_use]
    pub fn new(i2c: I2c<'d, Async>) -> Self {
        Self { i2c }
    }

    /// Write bytes to a device
    pub async fn write(&mut self, addr: I2cAddress, data: &[u8]) -> I2cResult<()> {
        self.i2c.write(addr.addr(), data).await
    }

    /// Read bytes from a device
    pub async fn read(&mut self, addr: I2cAddress, buffer: &mut [u8]) -> I2cResult<()> {
        self.i2c.read(addr.addr(), buffer).await
    }

    /// Write then read (combined transaction)
    pub async fn write_read(
        &mut self,
        addr: I2cAddress,
        write: &[u8],
        read: &mut [u8],
    ) -> I2cResult<()> {
        self.i2c.write_read(addr.addr(), write, read).await
    }

    /// Write a 16-bit register
    pub async fn write_reg16(&mut self, addr: I2cAddress, reg: u8, value: u16) -> I2cResult<()> {
        let bytes = value.to_be_bytes();
        self.i2c.write(addr.addr(), &[reg, bytes[0], bytes[1]]).await
    }

    /// Read a 16-bit register
    pub async fn read_reg16(&mut self, addr: I2cAddress, reg: u8) -> I2cResult<u16> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(addr.addr(), &[reg], &mut buf).await?;
        Ok(u16::from_be_bytes(buf))
    }
}
