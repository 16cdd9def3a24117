//! Power Management
//!
//! Battery monitoring and charge detection. The monitor reduces raw ADC
//! samples to the discrete display level the status bar renders from.

use crate::config::BATTERY_LEVEL_MV;
use crate::ui::status_bar::battery_percent;

/// Battery voltage reading
#[derive(Clone, Copy, Debug)]
pub struct BatteryVoltage {
    /// Raw ADC reading (12-bit)
    raw: u16,
    /// Calibration factor: millivolts per 1024 ADC counts
    mv_per_1024: u32,
}

impl BatteryVoltage {
    /// Create from ADC reading
    #[must_use]
    pub const fn from_adc(raw: u16, mv_per_1024: u32) -> Self {
        Self { raw, mv_per_1024 }
    }

    /// Get voltage in millivolts
    #[must_use]
    pub const fn millivolts(&self) -> u16 {
        ((self.raw as u32 * self.mv_per_1024) / 1024) as u16
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BatteryVoltage {
    fn format(&self, f: defmt::Formatter) {
        let mv = self.millivolts();
        defmt::write!(f, "{}.{:03}V", mv / 1000, mv % 1000);
    }
}

/// Battery state monitor
///
/// Owns the smoothed voltage, the charge-sense flag, and the blink phase
/// that gates the flashing low-battery icon.
#[derive(Clone, Copy, Debug)]
pub struct BatteryMonitor {
    /// Smoothed battery voltage in millivolts
    millivolts: u16,
    /// USB-C charger attached
    charging: bool,
    /// Low-battery blink phase (icon drawn only while true)
    blink_on: bool,
}

impl BatteryMonitor {
    /// Smoothing divisor for the exponential voltage filter
    const SMOOTHING: u16 = 4;

    /// Create a monitor with no sample yet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            millivolts: 0,
            charging: false,
            blink_on: false,
        }
    }

    /// Feed a new voltage sample (exponentially smoothed)
    pub fn update(&mut self, sample: BatteryVoltage) {
        let mv = sample.millivolts();
        if self.millivolts == 0 {
            self.millivolts = mv;
        } else {
            // EMA with a power-of-two divisor, integer only
            self.millivolts = self.millivolts - self.millivolts / Self::SMOOTHING
                + mv / Self::SMOOTHING;
        }
    }

    /// Set the USB-C charge-sense state
    pub fn set_charging(&mut self, charging: bool) {
        self.charging = charging;
    }

    /// Check whether a USB-C charger is attached
    #[must_use]
    pub const fn is_charging(&self) -> bool {
        self.charging
    }

    /// Advance the low-battery blink phase (call at the blink rate)
    pub fn tick_blink(&mut self) {
        self.blink_on = !self.blink_on;
    }

    /// Current blink phase
    #[must_use]
    pub const fn blink_on(&self) -> bool {
        self.blink_on
    }

    /// Smoothed voltage in millivolts
    #[must_use]
    pub const fn millivolts(&self) -> u16 {
        self.millivolts
    }

    /// Discrete display level, 0–6
    ///
    /// The level is the number of calibration thresholds the smoothed
    /// voltage meets. Levels 0–1 are the flashing-critical range.
    #[must_use]
    pub fn display_level(&self) -> u8 {
        BATTERY_LEVEL_MV
            .iter()
            .filter(|&&threshold| self.millivolts >= threshold)
            .count() as u8
    }

    /// Battery percentage for the status readout
    #[must_use]
    pub fn percent(&self) -> u8 {
        battery_percent(self.display_level())
    }
}

impl Default for BatteryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BatteryMonitor {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Battery({}mV, level={}, charging={})",
            self.millivolts,
            self.display_level(),
            self.charging
        );
    }
}
