//! Mode State
//!
//! The owned record of the radio's current operating mode: active function,
//! VFO assignment, dual-receive flags, and the scan/FM/DTMF sub-states.
//! The action dispatcher mutates it; the renderers read it. At most one of
//! {channel scan, FM seek, DTMF entry} drives key interpretation at a time,
//! enforced by the dispatcher's guards before a new one is started.

use crate::config::{INPUT_BOX_SIZE, VOX_RESUME_TICKS};
use crate::radio::dtmf::DtmfInput;
use crate::radio::fm::FmRadio;
use crate::radio::scanner::ChannelScanner;
use crate::radio::vfo::VfoSlot;
use crate::types::{Channel, Function, Screen};

/// Number of VFO slots
pub const VFO_COUNT: usize = 2;

/// Numeric channel-entry box
///
/// Holds up to three typed digits; unfilled positions render as `-`
/// placeholders in the channel string.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputBox {
    digits: [Option<u8>; INPUT_BOX_SIZE],
    index: usize,
}

impl InputBox {
    /// Create an empty entry box
    #[must_use]
    pub const fn new() -> Self {
        Self {
            digits: [None; INPUT_BOX_SIZE],
            index: 0,
        }
    }

    /// Number of typed digits
    #[must_use]
    pub const fn len(&self) -> usize {
        self.index
    }

    /// Check for an empty box
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Append a digit (0–9); full box is a silent no-op
    pub fn push(&mut self, digit: u8) {
        if digit < 10 && self.index < INPUT_BOX_SIZE {
            self.digits[self.index] = Some(digit);
            self.index += 1;
        }
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.digits = [None; INPUT_BOX_SIZE];
        self.index = 0;
    }

    /// Digit at a position, `None` where nothing was typed
    #[must_use]
    pub fn digit(&self, position: usize) -> Option<u8> {
        self.digits.get(position).copied().flatten()
    }

    /// Entered value as a channel number, `None` until all digits are typed
    #[must_use]
    pub fn value(&self) -> Option<u16> {
        if self.index < INPUT_BOX_SIZE {
            return None;
        }
        let mut value: u16 = 0;
        for digit in self.digits.iter().flatten() {
            value = value * 10 + u16::from(*digit);
        }
        Some(value)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for InputBox {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "InputBox(len={})", self.index);
    }
}

/// The radio's complete mode state
///
/// Passed by `&mut` into the dispatcher and by `&` into the renderers.
/// Single-threaded: one event at a time, run to completion; exclusive
/// access is compiler-enforced through the mutable borrow.
#[derive(Clone, Debug)]
pub struct ModeState {
    /// The two tunable paths
    pub vfos: [VfoSlot; VFO_COUNT],
    /// VFO index assigned to transmit
    pub tx_vfo: usize,
    /// VFO index assigned to receive (may equal `tx_vfo`)
    pub rx_vfo: usize,
    /// Current radio function
    pub function: Function,
    /// Screen currently on the panel
    pub screen: Screen,
    /// Dual-watch receive enabled
    pub dual_watch: bool,
    /// Cross-band receive enabled
    pub cross_band: bool,
    /// VOX trigger enabled
    pub vox_enabled: bool,
    /// Key-lock setting
    pub key_lock: bool,
    /// Keypad currently latched locked (lock screen shows)
    pub keypad_locked: bool,
    /// Memory-channel scanner
    pub scanner: ChannelScanner,
    /// FM broadcast receiver
    pub fm: FmRadio,
    /// DTMF entry mode
    pub dtmf: DtmfInput,
    /// Numeric channel entry
    pub input_box: InputBox,
    /// Treat the next PTT poll as released (swallows in-flight transmit)
    pub ptt_was_released: bool,
    /// F-key shift latched by a previous press
    pub f_key_latched: bool,
    /// Ticks until VOX resumes after leaving FM mode
    pub vox_resume_countdown: u8,
}

impl ModeState {
    /// Create the power-on state: both VFOs on free-frequency slots,
    /// VFO A assigned to both transmit and receive.
    #[must_use]
    pub fn new() -> Self {
        let channel = Channel::FIRST_FREQUENCY;
        Self {
            vfos: [VfoSlot::new(channel), VfoSlot::new(channel)],
            tx_vfo: 0,
            rx_vfo: 0,
            function: Function::Idle,
            screen: Screen::Main,
            dual_watch: false,
            cross_band: false,
            vox_enabled: false,
            key_lock: false,
            keypad_locked: false,
            scanner: ChannelScanner::new(Channel::FIRST_MEMORY),
            fm: FmRadio::new(),
            dtmf: DtmfInput::new(),
            input_box: InputBox::new(),
            ptt_was_released: false,
            f_key_latched: false,
            vox_resume_countdown: 0,
        }
    }

    /// Slot assigned to transmit
    #[must_use]
    pub fn tx_slot(&self) -> &VfoSlot {
        &self.vfos[self.tx_vfo]
    }

    /// Mutable slot assigned to transmit
    pub fn tx_slot_mut(&mut self) -> &mut VfoSlot {
        &mut self.vfos[self.tx_vfo]
    }

    /// Slot assigned to receive
    #[must_use]
    pub fn rx_slot(&self) -> &VfoSlot {
        &self.vfos[self.rx_vfo]
    }

    /// Recompute the receive assignment from the dual-receive settings
    pub fn select_vfos(&mut self) {
        self.rx_vfo = if self.cross_band {
            (self.tx_vfo + 1) % VFO_COUNT
        } else {
            self.tx_vfo
        };
    }

    /// Check whether the lock notice preempts the main screen
    #[must_use]
    pub const fn lock_screen_up(&self) -> bool {
        self.key_lock && self.keypad_locked
    }

    /// Arm the post-FM VOX resume delay
    pub fn arm_vox_resume(&mut self) {
        self.vox_resume_countdown = VOX_RESUME_TICKS;
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}
