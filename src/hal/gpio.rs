//! GPIO Abstractions
//!
//! Type-safe GPIO pin wrappers for the transceiver.
//! Provides semantic meaning to pins through the type system.

use embassy_stm32::gpio::{Input, Output};

/// Backlight state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BacklightState {
    /// Backlight is off
    #[default]
    Off,
    /// Backlight is on
    On,
}

impl defmt::Format for BacklightState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// LCD backlight driver
pub struct Backlight<'d> {
    pin: Output<'d>,
    state: BacklightState,
}

impl<'d> Backlight<'d> {
    /// Create a new backlight control (initially off)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self {
            pin,
            state: BacklightState::Off,
        }
    }

    /// Turn the backlight on
    pub fn on(&mut self) {
        self.pin.set_high();
        self.state = BacklightState::On;
    }

    /// Turn the backlight off
    pub fn off(&mut self) {
        self.pin.set_low();
        self.state = BacklightState::Off;
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> BacklightState {
        self.state
    }
}

/// PTT (Push-to-Talk) input
pub struct PttInput<'d> {
    pin: Input<'d>,
}

impl<'d> PttInput<'d> {
    /// Create a new PTT input (active low with internal pull-up)
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Check if PTT is pressed (active low)
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pin.is_low()
    }

    /// Check if PTT is released
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.pin.is_high()
    }
}

/// USB-C charge sense input
pub struct ChargeSense<'d> {
    pin: Input<'d>,
}

impl<'d> ChargeSense<'d> {
    /// Create a new charge-sense input (high while a charger is attached)
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Check if a USB-C charger is attached
    #[must_use]
    pub fn is_charging(&self) -> bool {
        self.pin.is_high()
    }
}

/// Key input state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    /// Key is released
    Released,
    /// Key is pressed
    Pressed,
}

impl defmt::Format for ButtonState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Released => defmt::write!(f, "Released"),
            Self::Pressed => defmt::write!(f, "Pressed"),
        }
    }
}

/// Debounced key input
pub struct DebouncedInput<'d> {
    pin: Input<'d>,
    state: ButtonState,
    last_raw: bool,
    debounce_count: u8,
}

impl<'d> DebouncedInput<'d> {
    /// Required consecutive reads for debounce
    const DEBOUNCE_THRESHOLD: u8 = 3;

    /// Create a debounced input (active low with pull-up)
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self {
            pin,
            state: ButtonState::Released,
            last_raw: true,
            debounce_count: 0,
        }
    }

    /// Update input state (call periodically)
    /// Returns true if state changed
    pub fn update(&mut self) -> bool {
        let current = self.pin.is_low();

        if current == self.last_raw {
            if self.debounce_count < Self::DEBOUNCE_THRESHOLD {
                self.debounce_count += 1;
            }
        } else {
            self.debounce_count = 0;
            self.last_raw = current;
        }

        if self.debounce_count >= Self::DEBOUNCE_THRESHOLD {
            let new_state = if current {
                ButtonState::Pressed
            } else {
                ButtonState::Released
            };

            if new_state != self.state {
                self.state = new_state;
                return true;
            }
        }

        false
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// Check if pressed
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        matches!(self.state, ButtonState::Pressed)
    }
}
