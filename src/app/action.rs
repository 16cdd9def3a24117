//! Action Dispatcher
//!
//! Interprets debounced key events and higher-level UI actions against the
//! mode state. Each entry point runs to completion, mutates the state it is
//! handed, and returns the deferred side effects as a [`Requests`] record.
//! There is no error channel at this layer: out-of-range targets and
//! conflicting mode requests are silent no-ops, so the UI never halts.

use crate::app::requests::{Requests, VoiceRequest};
use crate::radio::state::{ModeState, VFO_COUNT};
use crate::types::{BeepId, Function, KeyCode, Screen, VoiceId};

/// Dispatch one debounced key event.
///
/// Called once per key transport event, never re-entrant. Only the two
/// side keys are interpreted here; everything else belongs to the keypad
/// and menu handlers.
pub fn handle_key(state: &mut ModeState, key: KeyCode, pressed: bool, held: bool) -> Requests {
    let mut req = Requests::none();

    // DTMF entry swallows all key semantics on the main screen until it is
    // explicitly exited.
    if state.screen == Screen::Main && state.dtmf.is_active() {
        if key == KeyCode::Side1 && pressed && !held {
            req.beep = Some(BeepId::OneKhz60msOptional);
            if !state.dtmf.is_empty() && state.dtmf.backspace() > 0 {
                state.ptt_was_released = true;
                req.screen = Some(Screen::Main);
                return req;
            }
            req.voice = Some(VoiceRequest::Prompt(VoiceId::Cancel));
            req.screen = Some(Screen::Main);
            state.dtmf.deactivate();
        }
        state.ptt_was_released = true;
        return req;
    }

    if matches!(key, KeyCode::Side1 | KeyCode::Side2) {
        let target = usize::from(key == KeyCode::Side2);
        if pressed && !held {
            // The transition commits on release; a held key must not
            // double-trigger.
            req.beep = Some(BeepId::OneKhz60msOptional);
            return req;
        }
        if !pressed {
            return select_vfo(state, target);
        }
        return req;
    }

    req
}

/// Make the target slot both the TX and RX assignment.
///
/// Out-of-range targets are ignored. Reselecting the slot that already
/// holds both assignments requests only a redraw and a status update,
/// leaving every save/reconfigure flag clear.
fn select_vfo(state: &mut ModeState, target: usize) -> Requests {
    let mut req = Requests::none();

    if target >= VFO_COUNT {
        return req;
    }

    if state.scanner.is_running() {
        state.scanner.stop();
        req.voice = Some(VoiceRequest::Prompt(VoiceId::ScanningStop));
    }

    state.f_key_latched = false;
    // Single-VFO selection excludes the dual-receive modes.
    state.cross_band = false;
    state.dual_watch = false;

    if state.tx_vfo == target && state.rx_vfo == target {
        req.screen = Some(Screen::Main);
        req.update_status = true;
        return req;
    }

    state.tx_vfo = target;
    state.rx_vfo = target;

    req.save_vfo = true;
    req.vfo_reload = true;
    req.reset_vfos = true;
    req.reconfigure_vfos = true;
    req.update_status = true;
    req.screen = Some(Screen::Main);

    let channel = state.vfos[target].channel;
    if channel.is_memory() {
        req.voice = Some(VoiceRequest::Channel(channel.display_number()));
    }

    req
}

/// Advance the active TX VFO's output power tier (LOW → MID → HIGH → LOW).
pub fn power_step(state: &mut ModeState) -> Requests {
    let mut req = Requests::none();

    state.tx_slot_mut().step_power();

    req.save_channel = true;
    req.voice = Some(VoiceRequest::Prompt(VoiceId::Power));
    req.screen = Some(state.screen);
    req
}

/// Flip the VOX trigger setting.
pub fn toggle_vox(state: &mut ModeState) -> Requests {
    let mut req = Requests::none();

    state.vox_enabled = !state.vox_enabled;

    req.save_settings = true;
    req.reconfigure_vfos = true;
    req.voice = Some(VoiceRequest::Prompt(VoiceId::Vox));
    req.update_status = true;
    req
}

/// Start or stop scanning on whichever front-end is selected.
///
/// Exactly one of the channel scanner and the FM seek engine is addressed;
/// both are refused while a transmit, receive or monitor is in progress.
/// `restart` begins a fresh scan from the band edge; otherwise a stopped
/// scan resumes from its last position.
pub fn toggle_scan(state: &mut ModeState, restart: bool) -> Requests {
    let mut req = Requests::none();

    if state.fm.is_on() {
        if !state.function.is_active() {
            req.screen = Some(Screen::Fm);
            if state.fm.is_scanning() {
                state.fm.play_and_update();
                req.voice = Some(VoiceRequest::Prompt(VoiceId::ScanningStop));
            } else {
                state.fm.begin_scan(restart);
                req.voice = Some(VoiceRequest::Prompt(VoiceId::ScanningBegin));
            }
        }
        return req;
    }

    if state.screen != Screen::Scanner {
        state.select_vfos();
        // Weather-alert channels are fixed-purpose and never scanned.
        if !state.rx_slot().channel.is_noaa() {
            req.screen = Some(Screen::Main);
            if state.scanner.is_running() {
                state.scanner.stop();
                req.voice = Some(VoiceRequest::Prompt(VoiceId::ScanningStop));
            } else {
                let from = state.rx_slot().channel;
                state.scanner.begin(from);
                req.voice = Some(VoiceRequest::Prompt(VoiceId::ScanningBegin));
            }
        }
    }

    req
}

/// Switch the FM broadcast front-end on or off.
pub fn toggle_fm(state: &mut ModeState) -> Requests {
    let mut req = Requests::none();

    if matches!(state.function, Function::Transmit | Function::Monitor) {
        return req;
    }

    if state.fm.is_on() {
        state.fm.turn_off();
        state.input_box.clear();
        state.arm_vox_resume();
        req.reconfigure_vfos = true;
        req.screen = Some(Screen::Main);
        return req;
    }

    state.select_vfos();
    state.fm.start();
    state.input_box.clear();
    req.screen = Some(Screen::Fm);
    req
}
