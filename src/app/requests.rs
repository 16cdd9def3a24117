//! Pending Request Record
//!
//! Every dispatcher entry point returns a [`Requests`] value describing the
//! deferred work a key event produced: persistence, VFO reconfiguration,
//! redraws, and audio. The control loop drains each field exactly once
//! before the next dispatch. There is no queue; merging two records
//! coalesces (booleans OR together, single-slot values keep the last
//! write), which matches the one-slot audio and screen channels of the
//! hardware.

use crate::types::{BeepId, Screen, VoiceId};

/// A queued voice announcement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceRequest {
    /// A single prompt by identifier
    Prompt(VoiceId),
    /// Two-part announcement: the channel-mode prompt followed by the
    /// digits of a 1-based channel number
    Channel(u16),
}

#[cfg(feature = "embedded")]
impl defmt::Format for VoiceRequest {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Prompt(id) => defmt::write!(f, "Voice({})", id),
            Self::Channel(n) => defmt::write!(f, "VoiceChannel({})", n),
        }
    }
}

/// Deferred side effects of one dispatch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Requests {
    /// Persist the active channel record
    pub save_channel: bool,
    /// Persist the VFO assignment
    pub save_vfo: bool,
    /// Persist the global settings block
    pub save_settings: bool,
    /// Re-apply VFO configuration to the radio chip
    pub reconfigure_vfos: bool,
    /// Reset derived VFO state before reconfiguring
    pub reset_vfos: bool,
    /// Reload the VFO records from storage in full
    pub vfo_reload: bool,
    /// Redraw the status bar
    pub update_status: bool,
    /// Switch the panel to this screen and redraw it
    pub screen: Option<Screen>,
    /// Voice announcement slot (at most one pending)
    pub voice: Option<VoiceRequest>,
    /// Beep slot (at most one pending)
    pub beep: Option<BeepId>,
}

impl Requests {
    /// An empty record (no side effects)
    #[must_use]
    pub const fn none() -> Self {
        Self {
            save_channel: false,
            save_vfo: false,
            save_settings: false,
            reconfigure_vfos: false,
            reset_vfos: false,
            vfo_reload: false,
            update_status: false,
            screen: None,
            voice: None,
            beep: None,
        }
    }

    /// Check whether any side effect is pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }

    /// Coalesce another record into this one.
    ///
    /// Booleans OR; the single-slot screen/voice/beep values keep the later
    /// write when both are set.
    pub fn merge(&mut self, other: Self) {
        self.save_channel |= other.save_channel;
        self.save_vfo |= other.save_vfo;
        self.save_settings |= other.save_settings;
        self.reconfigure_vfos |= other.reconfigure_vfos;
        self.reset_vfos |= other.reset_vfos;
        self.vfo_reload |= other.vfo_reload;
        self.update_status |= other.update_status;
        if other.screen.is_some() {
            self.screen = other.screen;
        }
        if other.voice.is_some() {
            self.voice = other.voice;
        }
        if other.beep.is_some() {
            self.beep = other.beep;
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Requests {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Requests(ch={} vfo={} set={} cfg={} rst={} reload={} status={})",
            self.save_channel,
            self.save_vfo,
            self.save_settings,
            self.reconfigure_vfos,
            self.reset_vfos,
            self.vfo_reload,
            self.update_status
        );
    }
}
