//! VFO Slot Management
//!
//! The radio has two tunable paths (VFO A and B), each independently
//! assignable to transmit and receive. A slot carries the user-visible
//! identity the display derives its labels from.

use crate::config::DEFAULT_FREQUENCY;
use crate::types::{Channel, Frequency, OutputPower};

/// Raw name capacity in bytes, as persisted
pub const NAME_SIZE: usize = 16;

/// Byte value marking unused name cells in erased storage
pub const NAME_ERASED: u8 = 0xFF;

/// One tunable radio path
#[derive(Clone, Copy, Debug)]
pub struct VfoSlot {
    /// Raw display name as persisted (0x00 or 0xFF terminated, unsanitized)
    pub name: [u8; NAME_SIZE],
    /// Assigned channel slot
    pub channel: Channel,
    /// Live receive frequency
    pub frequency: Frequency,
    /// Transmit output power tier
    pub output_power: OutputPower,
}

impl VfoSlot {
    /// Create a slot on a free-frequency channel with an empty name
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self {
            name: [0; NAME_SIZE],
            channel,
            frequency: DEFAULT_FREQUENCY,
            output_power: OutputPower::default(),
        }
    }

    /// Set the raw name (truncated, zero-padded)
    pub fn set_name(&mut self, name: &[u8]) {
        let len = name.len().min(NAME_SIZE);
        self.name[..len].copy_from_slice(&name[..len]);
        if len < NAME_SIZE {
            self.name[len..].fill(0);
        }
    }

    /// Clear the name to the erased-storage pattern
    pub fn clear_name(&mut self) {
        self.name = [NAME_ERASED; NAME_SIZE];
    }

    /// Cycle the output power tier, returning the new value
    pub fn step_power(&mut self) -> OutputPower {
        self.output_power = self.output_power.next();
        self.output_power
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for VfoSlot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Vfo({}, {}, {})", self.channel, self.frequency, self.output_power);
    }
}
