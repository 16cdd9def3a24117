//! Peripheral Drivers
//!
//! High-level drivers for external ICs (BK4819 transceiver, BK1080 FM
//! receiver, ST7565 panel) and the key matrix.

pub mod bk1080;
pub mod bk4819;
pub mod keypad;
pub mod st7565;
