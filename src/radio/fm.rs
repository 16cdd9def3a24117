//! FM Broadcast Receiver State
//!
//! On/off, scan and found-station bookkeeping for the FM broadcast
//! front-end. Frequencies are carried in 100 kHz units, matching the
//! receiver chip's channel spacing. The RF side lives in the receiver
//! driver; this module only tracks what the control surface decides.

use crate::config::{FM_CHANNEL_COUNT, FM_LOWER_LIMIT, FM_UPPER_LIMIT};

/// FM scan run state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FmScanState {
    /// Playing or idle
    #[default]
    Off,
    /// Seeking stations
    Scanning,
}

#[cfg(feature = "embedded")]
impl defmt::Format for FmScanState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::Scanning => defmt::write!(f, "SCAN"),
        }
    }
}

/// FM broadcast receiver bookkeeping
#[derive(Clone, Copy, Debug)]
pub struct FmRadio {
    /// FM front-end selected (keys address FM instead of the transceiver)
    on: bool,
    scan: FmScanState,
    /// Auto-scan populates the station store as it seeks
    auto_scan: bool,
    /// Cursor into the station store
    channel_position: usize,
    /// Stations found by the last auto-scan (100 kHz units)
    channels: [Option<u16>; FM_CHANNEL_COUNT],
    /// Frequency currently tuned (100 kHz units)
    frequency_playing: u16,
    /// Band lower edge (100 kHz units)
    lower_limit: u16,
    /// Band upper edge (100 kHz units)
    upper_limit: u16,
}

impl FmRadio {
    /// Create a switched-off receiver tuned to the band edge
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on: false,
            scan: FmScanState::Off,
            auto_scan: false,
            channel_position: 0,
            channels: [None; FM_CHANNEL_COUNT],
            frequency_playing: FM_LOWER_LIMIT,
            lower_limit: FM_LOWER_LIMIT,
            upper_limit: FM_UPPER_LIMIT,
        }
    }

    /// Check whether the FM front-end is selected
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Current scan state
    #[must_use]
    pub const fn scan_state(&self) -> FmScanState {
        self.scan
    }

    /// Check whether a seek is in progress
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.scan == FmScanState::Scanning
    }

    /// Check whether the running seek is an auto-scan
    #[must_use]
    pub const fn is_auto_scan(&self) -> bool {
        self.auto_scan
    }

    /// Frequency currently tuned (100 kHz units)
    #[must_use]
    pub const fn frequency_playing(&self) -> u16 {
        self.frequency_playing
    }

    /// Station-store cursor
    #[must_use]
    pub const fn channel_position(&self) -> usize {
        self.channel_position
    }

    /// Station found at the given store slot
    #[must_use]
    pub fn station(&self, slot: usize) -> Option<u16> {
        self.channels.get(slot).copied().flatten()
    }

    /// Number of stations in the store
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.channels.iter().filter(|s| s.is_some()).count()
    }

    /// Select the FM front-end
    pub fn start(&mut self) {
        self.on = true;
    }

    /// Deselect the FM front-end, dropping any seek in progress
    pub fn turn_off(&mut self) {
        self.on = false;
        self.scan = FmScanState::Off;
        self.auto_scan = false;
    }

    /// Erase the found-station store
    pub fn erase_channels(&mut self) {
        self.channels = [None; FM_CHANNEL_COUNT];
    }

    /// Begin a seek and return the frequency to tune first.
    ///
    /// A restart clears the station store and starts the auto-scan from the
    /// band's lower edge; a plain start resumes from the frequency last
    /// playing.
    pub fn begin_scan(&mut self, restart: bool) -> u16 {
        self.channel_position = 0;
        let frequency = if restart {
            self.auto_scan = true;
            self.erase_channels();
            self.lower_limit
        } else {
            self.auto_scan = false;
            self.frequency_playing
        };
        self.scan = FmScanState::Scanning;
        self.frequency_playing = frequency;
        frequency
    }

    /// Record a station hit during an auto-scan (engine callback)
    pub fn record_station(&mut self, frequency: u16) {
        if self.auto_scan && self.channel_position < FM_CHANNEL_COUNT {
            self.channels[self.channel_position] = Some(frequency);
            self.channel_position += 1;
        }
    }

    /// Stop the seek and return the frequency to play.
    ///
    /// After an auto-scan, playback lands on the first found station (band
    /// edge when nothing was found); a plain seek keeps whatever is tuned.
    pub fn play_and_update(&mut self) -> u16 {
        self.scan = FmScanState::Off;
        if self.auto_scan {
            self.auto_scan = false;
            self.channel_position = 0;
            self.frequency_playing = self.station(0).unwrap_or(self.lower_limit);
        }
        self.frequency_playing
    }

    /// Tune directly to a frequency, clamped to the band
    pub fn tune(&mut self, frequency: u16) {
        self.frequency_playing = frequency.clamp(self.lower_limit, self.upper_limit);
    }
}

impl Default for FmRadio {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for FmRadio {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Fm(on={}, {}, at {}00kHz)",
            self.on,
            self.scan,
            self.frequency_playing
        );
    }
}
