//! Handheld Transceiver Firmware Library
//!
//! This library provides the control-surface core for a dual-VFO handheld
//! FM transceiver: key-event dispatch, radio mode state, and composition of
//! the monochrome LCD content (main frame plus one-line status bar).
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Action Dispatcher  │  Mode State  │  Pending Requests       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                       UI LAYER                               │
//! │  Label Resolver │ Main-Screen Renderer │ Status-Bar Renderer │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  Keypad  │  ST7565  │  BK4819  │  BK1080  │  GPIO  │  SPI    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Owned state**: the mode state is a context object passed by `&mut`
//!   reference; no package-level mutable globals
//! - **Explicit effects**: every dispatch returns a request record instead
//!   of mutating pending flags in place
//! - **Type-driven design**: custom types enforce invariants at compile time
//! - **No unsafe in application code**: all unsafe isolated in HAL/FFI layers
//! - **Silent degradation**: the UI layer never halts; invalid input is a
//!   no-op, overflowing draws are skipped

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Provides safe abstractions over STM32G4 peripherals.
#[cfg(feature = "embedded")]
pub mod hal;

/// Peripheral Drivers
///
/// High-level drivers for external ICs (BK4819, BK1080, ST7565) and the
/// key matrix.
#[cfg(feature = "embedded")]
pub mod drivers;

/// Application Logic
///
/// The action dispatcher and its outbound request record.
pub mod app;

/// Radio Mode State
///
/// VFO slots, scan/FM/DTMF sub-states, and the owned mode-state context.
pub mod radio;

/// Power Management
///
/// Battery level monitoring and charge detection.
pub mod power;

/// User Interface
///
/// Framebuffers, label resolution, and screen composition.
pub mod ui;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::digital::OutputPin;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
