//! Tests for the action dispatcher
//!
//! Tests key-event dispatch, VFO selection, DTMF entry interception, and
//! the scan/FM/VOX toggles.
//! Run with: cargo test --test action_tests

use ht_firmware::app::action::{handle_key, power_step, toggle_fm, toggle_scan, toggle_vox};
use ht_firmware::app::requests::{Requests, VoiceRequest};
use ht_firmware::radio::state::ModeState;
use ht_firmware::types::{BeepId, Channel, Function, KeyCode, OutputPower, Screen, VoiceId};

fn press(state: &mut ModeState, key: KeyCode) -> Requests {
    handle_key(state, key, true, false)
}

fn release(state: &mut ModeState, key: KeyCode) -> Requests {
    handle_key(state, key, false, false)
}

// ============================================================================
// DTMF Entry Intercept Tests
// ============================================================================

#[test]
fn dtmf_backspace_trims_then_cancels() {
    let mut state = ModeState::new();
    state.dtmf.activate();
    state.dtmf.push(b'1');
    state.dtmf.push(b'2');

    // First backspace: "12" -> "1", entry mode stays active
    let req = press(&mut state, KeyCode::Side1);
    assert_eq!(state.dtmf.entered(), b"1");
    assert!(state.dtmf.is_active());
    assert!(state.ptt_was_released);
    assert_eq!(req.screen, Some(Screen::Main));
    assert_eq!(req.beep, Some(BeepId::OneKhz60msOptional));
    assert_eq!(req.voice, None);

    // Second backspace: buffer empty, entry mode cleared, cancel queued
    let req = press(&mut state, KeyCode::Side1);
    assert!(state.dtmf.is_empty());
    assert!(!state.dtmf.is_active());
    assert_eq!(req.voice, Some(VoiceRequest::Prompt(VoiceId::Cancel)));
    assert_eq!(req.screen, Some(Screen::Main));
}

#[test]
fn dtmf_backspace_on_empty_buffer_cancels() {
    let mut state = ModeState::new();
    state.dtmf.activate();

    let req = press(&mut state, KeyCode::Side1);
    assert!(!state.dtmf.is_active());
    assert_eq!(req.voice, Some(VoiceRequest::Prompt(VoiceId::Cancel)));
}

#[test]
fn dtmf_intercept_swallows_other_keys() {
    let mut state = ModeState::new();
    state.dtmf.activate();
    state.dtmf.push(b'5');

    let req = press(&mut state, KeyCode::Side2);
    assert!(state.ptt_was_released);
    assert!(state.dtmf.is_active());
    assert_eq!(state.dtmf.entered(), b"5");
    // No dispatch happened: no beep, no VFO change
    assert!(req.is_empty());
    assert_eq!(state.tx_vfo, 0);
}

#[test]
fn dtmf_held_backspace_key_is_swallowed() {
    let mut state = ModeState::new();
    state.dtmf.activate();
    state.dtmf.push(b'1');

    let req = handle_key(&mut state, KeyCode::Side1, true, true);
    assert!(state.ptt_was_released);
    assert_eq!(state.dtmf.entered(), b"1");
    assert!(req.is_empty());
}

#[test]
fn dtmf_intercept_only_on_main_screen() {
    let mut state = ModeState::new();
    state.dtmf.activate();
    state.dtmf.push(b'1');
    state.screen = Screen::Fm;

    // Off the main screen the side key follows VFO-selection semantics
    let req = press(&mut state, KeyCode::Side1);
    assert_eq!(req.beep, Some(BeepId::OneKhz60msOptional));
    assert_eq!(state.dtmf.entered(), b"1");
}

// ============================================================================
// VFO Selection Tests
// ============================================================================

#[test]
fn vfo_press_beeps_without_committing() {
    let mut state = ModeState::new();

    let req = press(&mut state, KeyCode::Side2);
    assert_eq!(req.beep, Some(BeepId::OneKhz60msOptional));
    assert!(!req.save_vfo);
    assert_eq!(state.tx_vfo, 0);
    assert_eq!(state.rx_vfo, 0);
}

#[test]
fn vfo_held_press_is_ignored() {
    let mut state = ModeState::new();

    let req = handle_key(&mut state, KeyCode::Side2, true, true);
    assert!(req.is_empty());
    assert_eq!(state.tx_vfo, 0);
}

#[test]
fn vfo_release_commits_selection() {
    let mut state = ModeState::new();

    let req = release(&mut state, KeyCode::Side2);
    assert_eq!(state.tx_vfo, 1);
    assert_eq!(state.rx_vfo, 1);
    assert!(req.save_vfo);
    assert!(req.vfo_reload);
    assert!(req.reset_vfos);
    assert!(req.reconfigure_vfos);
    assert!(req.update_status);
    assert_eq!(req.screen, Some(Screen::Main));
}

#[test]
fn vfo_reselect_is_a_noop_with_redraw() {
    let mut state = ModeState::new();
    assert_eq!(state.tx_vfo, 0);
    assert_eq!(state.rx_vfo, 0);

    let req = release(&mut state, KeyCode::Side1);
    assert!(!req.save_vfo);
    assert!(!req.reset_vfos);
    assert!(!req.reconfigure_vfos);
    assert!(!req.vfo_reload);
    assert!(!req.save_channel);
    assert!(req.update_status);
    assert_eq!(req.screen, Some(Screen::Main));
}

#[test]
fn vfo_select_clears_dual_receive_modes() {
    let mut state = ModeState::new();
    state.dual_watch = true;
    state.cross_band = true;
    state.f_key_latched = true;

    release(&mut state, KeyCode::Side2);
    assert!(!state.dual_watch);
    assert!(!state.cross_band);
    assert!(!state.f_key_latched);
}

#[test]
fn vfo_select_stops_running_scan() {
    let mut state = ModeState::new();
    state.scanner.begin(Channel::FIRST_MEMORY);
    assert!(state.scanner.is_running());

    // Reselecting the active VFO still stops the scan first
    let req = release(&mut state, KeyCode::Side1);
    assert!(!state.scanner.is_running());
    assert_eq!(req.voice, Some(VoiceRequest::Prompt(VoiceId::ScanningStop)));
}

#[test]
fn vfo_select_announces_memory_channel() {
    let mut state = ModeState::new();
    state.vfos[1].channel = Channel::new(4).unwrap();

    let req = release(&mut state, KeyCode::Side2);
    assert_eq!(req.voice, Some(VoiceRequest::Channel(5)));
}

#[test]
fn vfo_select_no_announcement_for_free_frequency() {
    let mut state = ModeState::new();

    let req = release(&mut state, KeyCode::Side2);
    assert_eq!(req.voice, None);
}

#[test]
fn other_keys_are_not_interpreted() {
    let mut state = ModeState::new();

    let req = press(&mut state, KeyCode::Menu);
    assert!(req.is_empty());
    let req = press(&mut state, KeyCode::Key5);
    assert!(req.is_empty());
}

// ============================================================================
// Power Step Tests
// ============================================================================

#[test]
fn power_step_advances_tier() {
    let mut state = ModeState::new();
    assert_eq!(state.tx_slot().output_power, OutputPower::Low);

    let req = power_step(&mut state);
    assert_eq!(state.tx_slot().output_power, OutputPower::Mid);
    assert!(req.save_channel);
    assert_eq!(req.voice, Some(VoiceRequest::Prompt(VoiceId::Power)));
}

#[test]
fn power_step_cycles_back_to_low() {
    let mut state = ModeState::new();

    power_step(&mut state);
    power_step(&mut state);
    power_step(&mut state);
    assert_eq!(state.tx_slot().output_power, OutputPower::Low);
}

#[test]
fn power_step_redraws_current_screen() {
    let mut state = ModeState::new();
    state.screen = Screen::Menu;

    let req = power_step(&mut state);
    assert_eq!(req.screen, Some(Screen::Menu));
}

// ============================================================================
// VOX Toggle Tests
// ============================================================================

#[test]
fn vox_toggle_flips_and_persists() {
    let mut state = ModeState::new();

    let req = toggle_vox(&mut state);
    assert!(state.vox_enabled);
    assert!(req.save_settings);
    assert!(req.reconfigure_vfos);
    assert!(req.update_status);
    assert_eq!(req.voice, Some(VoiceRequest::Prompt(VoiceId::Vox)));

    toggle_vox(&mut state);
    assert!(!state.vox_enabled);
}

// ============================================================================
// Scan Toggle Tests
// ============================================================================

#[test]
fn scan_toggle_starts_channel_scan() {
    let mut state = ModeState::new();
    state.vfos[0].channel = Channel::new(12).unwrap();

    let req = toggle_scan(&mut state, true);
    assert!(state.scanner.is_running());
    assert_eq!(req.screen, Some(Screen::Main));
    assert_eq!(req.voice, Some(VoiceRequest::Prompt(VoiceId::ScanningBegin)));
}

#[test]
fn scan_toggle_stops_running_scan() {
    let mut state = ModeState::new();
    toggle_scan(&mut state, true);

    let req = toggle_scan(&mut state, false);
    assert!(!state.scanner.is_running());
    assert_eq!(req.voice, Some(VoiceRequest::Prompt(VoiceId::ScanningStop)));
}

#[test]
fn scan_toggle_refused_on_scanner_screen() {
    let mut state = ModeState::new();
    state.screen = Screen::Scanner;

    let req = toggle_scan(&mut state, true);
    assert!(!state.scanner.is_running());
    assert!(req.is_empty());
}

#[test]
fn scan_toggle_refuses_weather_alert_channel() {
    let mut state = ModeState::new();
    state.vfos[0].channel = Channel::new(207).unwrap();

    let req = toggle_scan(&mut state, true);
    assert!(!state.scanner.is_running());
    assert!(req.is_empty());
}

#[test]
fn scan_toggle_addresses_fm_when_fm_selected() {
    let mut state = ModeState::new();
    state.fm.start();

    let req = toggle_scan(&mut state, true);
    assert!(state.fm.is_scanning());
    assert!(!state.scanner.is_running());
    assert_eq!(req.screen, Some(Screen::Fm));
    assert_eq!(req.voice, Some(VoiceRequest::Prompt(VoiceId::ScanningBegin)));

    let req = toggle_scan(&mut state, false);
    assert!(!state.fm.is_scanning());
    assert_eq!(req.voice, Some(VoiceRequest::Prompt(VoiceId::ScanningStop)));
}

#[test]
fn fm_scan_refused_while_function_active() {
    let mut state = ModeState::new();
    state.fm.start();

    for function in [Function::Receive, Function::Monitor, Function::Transmit] {
        state.function = function;
        let req = toggle_scan(&mut state, true);
        assert!(!state.fm.is_scanning());
        assert!(req.is_empty());
    }
}

// ============================================================================
// FM Toggle Tests
// ============================================================================

#[test]
fn fm_toggle_switches_front_end_on() {
    let mut state = ModeState::new();
    state.input_box.push(3);

    let req = toggle_fm(&mut state);
    assert!(state.fm.is_on());
    assert!(state.input_box.is_empty());
    assert_eq!(req.screen, Some(Screen::Fm));
}

#[test]
fn fm_toggle_switches_front_end_off() {
    let mut state = ModeState::new();
    toggle_fm(&mut state);

    let req = toggle_fm(&mut state);
    assert!(!state.fm.is_on());
    assert!(state.vox_resume_countdown > 0);
    assert!(req.reconfigure_vfos);
    assert_eq!(req.screen, Some(Screen::Main));
}

#[test]
fn fm_toggle_refused_while_transmitting_or_monitoring() {
    let mut state = ModeState::new();

    for function in [Function::Transmit, Function::Monitor] {
        state.function = function;
        let req = toggle_fm(&mut state);
        assert!(!state.fm.is_on());
        assert!(req.is_empty());
    }
}

#[test]
fn fm_toggle_allowed_while_receiving() {
    let mut state = ModeState::new();
    state.function = Function::Receive;

    let req = toggle_fm(&mut state);
    assert!(state.fm.is_on());
    assert_eq!(req.screen, Some(Screen::Fm));
}
