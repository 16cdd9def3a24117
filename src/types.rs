//! Shared types used across the transceiver firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use crate::config;
use core::fmt;

/// Receive/transmit frequency in 10 Hz units
///
/// The tuner chip and the persisted channel records both use 10 Hz
/// resolution, so the value is carried unscaled end to end.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u32);

impl Frequency {
    /// Create from raw 10 Hz units
    #[must_use]
    pub const fn from_units(units: u32) -> Self {
        Self(units)
    }

    /// Create from Hz (truncated to 10 Hz resolution)
    #[must_use]
    pub const fn from_hz(hz: u32) -> Self {
        Self(hz / 10)
    }

    /// Get the raw 10 Hz units
    #[must_use]
    pub const fn as_units(self) -> u32 {
        self.0
    }

    /// Get the frequency in Hz
    #[must_use]
    pub const fn as_hz(self) -> u32 {
        self.0 * 10
    }

    /// Whole-MHz part, for display
    #[must_use]
    pub const fn mhz_whole(self) -> u32 {
        self.0 / 100_000
    }

    /// Fractional-MHz part as three decimal digits (kHz), for display
    #[must_use]
    pub const fn mhz_frac(self) -> u32 {
        (self.0 % 100_000) / 100
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({}.{:03} MHz)", self.mhz_whole(), self.mhz_frac())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Frequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}.{:03} MHz", self.mhz_whole(), self.mhz_frac());
    }
}

/// Channel slot classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    /// Memory (MR) channel
    Memory,
    /// Free-frequency band slot
    Frequency,
    /// Weather-alert (NOAA) channel
    Noaa,
}

/// Validated channel index
///
/// Indices 0–199 are memory channels, 200–206 free-frequency band slots,
/// 207–209 weather-alert channels. Anything else is rejected at
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Channel(u8);

impl Channel {
    /// First memory channel
    pub const FIRST_MEMORY: Self = Self(0);

    /// First free-frequency band slot
    pub const FIRST_FREQUENCY: Self = Self(config::FREQ_CHANNEL_FIRST);

    /// Create a channel from a raw index, `None` if out of range
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index <= config::NOAA_CHANNEL_LAST {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw index
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Classify the slot
    #[must_use]
    pub const fn kind(self) -> ChannelKind {
        if self.0 <= config::MR_CHANNEL_LAST {
            ChannelKind::Memory
        } else if self.0 <= config::FREQ_CHANNEL_LAST {
            ChannelKind::Frequency
        } else {
            ChannelKind::Noaa
        }
    }

    /// Check for a memory (MR) channel
    #[must_use]
    pub const fn is_memory(self) -> bool {
        matches!(self.kind(), ChannelKind::Memory)
    }

    /// Check for a free-frequency band slot
    #[must_use]
    pub const fn is_frequency(self) -> bool {
        matches!(self.kind(), ChannelKind::Frequency)
    }

    /// Check for a weather-alert channel
    #[must_use]
    pub const fn is_noaa(self) -> bool {
        matches!(self.kind(), ChannelKind::Noaa)
    }

    /// 1-based number shown to the user for memory channels
    #[must_use]
    pub const fn display_number(self) -> u16 {
        self.0 as u16 + 1
    }

    /// 1-based ordinal within the weather-alert range
    #[must_use]
    pub const fn noaa_ordinal(self) -> u8 {
        self.0 - config::NOAA_CHANNEL_FIRST + 1
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Channel {
    fn format(&self, f: defmt::Formatter) {
        match self.kind() {
            ChannelKind::Memory => defmt::write!(f, "CH-{:03}", self.display_number()),
            ChannelKind::Frequency => defmt::write!(f, "F{}", self.0),
            ChannelKind::Noaa => defmt::write!(f, "NOAA-{}", self.noaa_ordinal()),
        }
    }
}

/// Transmit output power tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputPower {
    /// Low power
    #[default]
    Low,
    /// Medium power
    Mid,
    /// High power
    High,
}

impl OutputPower {
    /// Cycle to the next tier (LOW → MID → HIGH → LOW)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Low => Self::Mid,
            Self::Mid => Self::High,
            Self::High => Self::Low,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for OutputPower {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Low => defmt::write!(f, "LOW"),
            Self::Mid => defmt::write!(f, "MID"),
            Self::High => defmt::write!(f, "HIGH"),
        }
    }
}

/// Current radio function
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Function {
    /// Idle foreground operation
    #[default]
    Idle,
    /// Squelch opened, receive pending
    Incoming,
    /// Actively receiving
    Receive,
    /// Monitor (squelch forced open)
    Monitor,
    /// Transmitting
    Transmit,
    /// Battery-save sleep between squelch polls
    PowerSave,
}

impl Function {
    /// Check whether the radio path is busy (transmit, receive or monitor)
    ///
    /// Scan and FM transitions are refused while this holds.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Receive | Self::Monitor | Self::Transmit)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Function {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "IDLE"),
            Self::Incoming => defmt::write!(f, "INCOMING"),
            Self::Receive => defmt::write!(f, "RX"),
            Self::Monitor => defmt::write!(f, "MONITOR"),
            Self::Transmit => defmt::write!(f, "TX"),
            Self::PowerSave => defmt::write!(f, "SAVE"),
        }
    }
}

/// Physical key identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    /// Keypad digit 0
    Key0,
    /// Keypad digit 1
    Key1,
    /// Keypad digit 2
    Key2,
    /// Keypad digit 3
    Key3,
    /// Keypad digit 4
    Key4,
    /// Keypad digit 5
    Key5,
    /// Keypad digit 6
    Key6,
    /// Keypad digit 7
    Key7,
    /// Keypad digit 8
    Key8,
    /// Keypad digit 9
    Key9,
    /// Menu / confirm
    Menu,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Exit / back
    Exit,
    /// Star (scan / dual entry)
    Star,
    /// Function shift
    FKey,
    /// Push-to-talk
    Ptt,
    /// Upper side key
    Side1,
    /// Lower side key
    Side2,
}

impl KeyCode {
    /// Digit value for numeric keys, `None` otherwise
    #[must_use]
    pub const fn digit(self) -> Option<u8> {
        match self {
            Self::Key0 => Some(0),
            Self::Key1 => Some(1),
            Self::Key2 => Some(2),
            Self::Key3 => Some(3),
            Self::Key4 => Some(4),
            Self::Key5 => Some(5),
            Self::Key6 => Some(6),
            Self::Key7 => Some(7),
            Self::Key8 => Some(8),
            Self::Key9 => Some(9),
            _ => None,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for KeyCode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Key0 => defmt::write!(f, "0"),
            Self::Key1 => defmt::write!(f, "1"),
            Self::Key2 => defmt::write!(f, "2"),
            Self::Key3 => defmt::write!(f, "3"),
            Self::Key4 => defmt::write!(f, "4"),
            Self::Key5 => defmt::write!(f, "5"),
            Self::Key6 => defmt::write!(f, "6"),
            Self::Key7 => defmt::write!(f, "7"),
            Self::Key8 => defmt::write!(f, "8"),
            Self::Key9 => defmt::write!(f, "9"),
            Self::Menu => defmt::write!(f, "MENU"),
            Self::Up => defmt::write!(f, "UP"),
            Self::Down => defmt::write!(f, "DOWN"),
            Self::Exit => defmt::write!(f, "EXIT"),
            Self::Star => defmt::write!(f, "STAR"),
            Self::FKey => defmt::write!(f, "F"),
            Self::Ptt => defmt::write!(f, "PTT"),
            Self::Side1 => defmt::write!(f, "SIDE1"),
            Self::Side2 => defmt::write!(f, "SIDE2"),
        }
    }
}

/// Display screen selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    /// Main dual-VFO screen
    #[default]
    Main,
    /// FM broadcast receiver screen
    Fm,
    /// Channel scanner screen
    Scanner,
    /// Settings menu screen
    Menu,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Main => defmt::write!(f, "Main"),
            Self::Fm => defmt::write!(f, "FM"),
            Self::Scanner => defmt::write!(f, "Scanner"),
            Self::Menu => defmt::write!(f, "Menu"),
        }
    }
}

/// Beep request identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeepId {
    /// Short 1 kHz confirmation beep (suppressed when beeps are disabled)
    OneKhz60msOptional,
    /// 500 Hz double beep
    FiveHundredHz60msDouble,
}

#[cfg(feature = "embedded")]
impl defmt::Format for BeepId {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::OneKhz60msOptional => defmt::write!(f, "1k60"),
            Self::FiveHundredHz60msDouble => defmt::write!(f, "500x2"),
        }
    }
}

/// Voice prompt identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceId {
    /// "Cancel"
    Cancel,
    /// "Scanning begin"
    ScanningBegin,
    /// "Scanning stop"
    ScanningStop,
    /// "Power"
    Power,
    /// "VOX"
    Vox,
    /// "Channel mode"
    ChannelMode,
    /// "Frequency mode"
    FrequencyMode,
}

#[cfg(feature = "embedded")]
impl defmt::Format for VoiceId {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Cancel => defmt::write!(f, "CANCEL"),
            Self::ScanningBegin => defmt::write!(f, "SCAN-BEGIN"),
            Self::ScanningStop => defmt::write!(f, "SCAN-STOP"),
            Self::Power => defmt::write!(f, "POWER"),
            Self::Vox => defmt::write!(f, "VOX"),
            Self::ChannelMode => defmt::write!(f, "CH-MODE"),
            Self::FrequencyMode => defmt::write!(f, "FREQ-MODE"),
        }
    }
}
