//! Tests for mode state and its sub-states
//!
//! Tests channel classification, VFO slots, the DTMF and numeric entry
//! buffers, scanner and FM bookkeeping, and request coalescing.
//! Run with: cargo test --test state_tests

use ht_firmware::app::requests::{Requests, VoiceRequest};
use ht_firmware::config::{FM_LOWER_LIMIT, FM_UPPER_LIMIT};
use ht_firmware::radio::dtmf::{DtmfInput, PLACEHOLDER};
use ht_firmware::radio::fm::FmRadio;
use ht_firmware::radio::scanner::ChannelScanner;
use ht_firmware::radio::state::{InputBox, ModeState};
use ht_firmware::radio::vfo::{VfoSlot, NAME_ERASED};
use ht_firmware::types::{
    BeepId, Channel, ChannelKind, Frequency, OutputPower, Screen, VoiceId,
};

// ============================================================================
// Channel Classification Tests
// ============================================================================

#[test]
fn channel_kinds_by_range() {
    assert_eq!(Channel::new(0).unwrap().kind(), ChannelKind::Memory);
    assert_eq!(Channel::new(199).unwrap().kind(), ChannelKind::Memory);
    assert_eq!(Channel::new(200).unwrap().kind(), ChannelKind::Frequency);
    assert_eq!(Channel::new(206).unwrap().kind(), ChannelKind::Frequency);
    assert_eq!(Channel::new(207).unwrap().kind(), ChannelKind::Noaa);
    assert_eq!(Channel::new(209).unwrap().kind(), ChannelKind::Noaa);
}

#[test]
fn channel_rejects_out_of_range() {
    assert!(Channel::new(210).is_none());
    assert!(Channel::new(255).is_none());
}

#[test]
fn channel_display_number_is_one_based() {
    assert_eq!(Channel::new(0).unwrap().display_number(), 1);
    assert_eq!(Channel::new(41).unwrap().display_number(), 42);
}

#[test]
fn channel_noaa_ordinal() {
    assert_eq!(Channel::new(207).unwrap().noaa_ordinal(), 1);
    assert_eq!(Channel::new(209).unwrap().noaa_ordinal(), 3);
}

// ============================================================================
// Frequency Tests
// ============================================================================

#[test]
fn frequency_display_parts() {
    let f = Frequency::from_units(14_650_000);
    assert_eq!(f.mhz_whole(), 146);
    assert_eq!(f.mhz_frac(), 500);
    assert_eq!(f.as_hz(), 146_500_000);
}

#[test]
fn frequency_from_hz_truncates() {
    assert_eq!(Frequency::from_hz(146_500_005).as_units(), 14_650_000);
}

// ============================================================================
// VFO Slot Tests
// ============================================================================

#[test]
fn vfo_slot_name_truncates_and_pads() {
    let mut slot = VfoSlot::new(Channel::FIRST_FREQUENCY);
    slot.set_name(b"abc");
    assert_eq!(&slot.name[..3], b"abc");
    assert_eq!(slot.name[3], 0);

    slot.set_name(b"a name much longer than sixteen");
    assert_eq!(&slot.name, b"a name much long");
}

#[test]
fn vfo_slot_clear_name_erases() {
    let mut slot = VfoSlot::new(Channel::FIRST_FREQUENCY);
    slot.set_name(b"x");
    slot.clear_name();
    assert!(slot.name.iter().all(|&b| b == NAME_ERASED));
}

#[test]
fn vfo_slot_power_cycles() {
    let mut slot = VfoSlot::new(Channel::FIRST_FREQUENCY);
    assert_eq!(slot.output_power, OutputPower::Low);
    assert_eq!(slot.step_power(), OutputPower::Mid);
    assert_eq!(slot.step_power(), OutputPower::High);
    assert_eq!(slot.step_power(), OutputPower::Low);
}

// ============================================================================
// Numeric Entry Box Tests
// ============================================================================

#[test]
fn input_box_collects_digits() {
    let mut input_box = InputBox::new();
    assert!(input_box.is_empty());
    assert_eq!(input_box.value(), None);

    input_box.push(1);
    input_box.push(2);
    assert_eq!(input_box.len(), 2);
    assert_eq!(input_box.digit(0), Some(1));
    assert_eq!(input_box.digit(2), None);
    assert_eq!(input_box.value(), None);

    input_box.push(3);
    assert_eq!(input_box.value(), Some(123));
}

#[test]
fn input_box_ignores_overflow_and_bad_digits() {
    let mut input_box = InputBox::new();
    input_box.push(10);
    assert!(input_box.is_empty());

    input_box.push(9);
    input_box.push(9);
    input_box.push(9);
    input_box.push(1);
    assert_eq!(input_box.value(), Some(999));
}

#[test]
fn input_box_clear_resets() {
    let mut input_box = InputBox::new();
    input_box.push(5);
    input_box.clear();
    assert!(input_box.is_empty());
    assert_eq!(input_box.digit(0), None);
}

// ============================================================================
// DTMF Buffer Tests
// ============================================================================

#[test]
fn dtmf_push_and_backspace() {
    let mut dtmf = DtmfInput::new();
    dtmf.activate();
    dtmf.push(b'1');
    dtmf.push(b'2');
    assert_eq!(dtmf.entered(), b"12");

    assert_eq!(dtmf.backspace(), 1);
    assert_eq!(dtmf.entered(), b"1");
    assert_eq!(dtmf.display_bytes()[1], PLACEHOLDER);

    assert_eq!(dtmf.backspace(), 0);
    assert!(dtmf.is_empty());

    // Backspace on empty stays empty
    assert_eq!(dtmf.backspace(), 0);
}

#[test]
fn dtmf_push_stops_at_capacity() {
    let mut dtmf = DtmfInput::new();
    for _ in 0..20 {
        dtmf.push(b'9');
    }
    assert_eq!(dtmf.len(), 15);
}

#[test]
fn dtmf_activate_clears_previous_entry() {
    let mut dtmf = DtmfInput::new();
    dtmf.activate();
    dtmf.push(b'7');
    dtmf.deactivate();

    dtmf.activate();
    assert!(dtmf.is_empty());
}

// ============================================================================
// Channel Scanner Tests
// ============================================================================

#[test]
fn scanner_begin_stop_resume() {
    let mut scanner = ChannelScanner::new(Channel::FIRST_MEMORY);
    assert!(!scanner.is_running());

    scanner.begin(Channel::new(10).unwrap());
    assert!(scanner.is_running());
    assert_eq!(scanner.current().index(), 10);

    scanner.advance(Channel::new(11).unwrap());
    scanner.stop();
    assert!(!scanner.is_running());

    scanner.resume();
    assert!(scanner.is_running());
    assert_eq!(scanner.current().index(), 11);
}

#[test]
fn scanner_advance_ignored_while_stopped() {
    let mut scanner = ChannelScanner::new(Channel::FIRST_MEMORY);
    scanner.advance(Channel::new(50).unwrap());
    assert_eq!(scanner.current().index(), 0);
}

// ============================================================================
// FM Receiver Tests
// ============================================================================

#[test]
fn fm_restart_scans_from_band_edge() {
    let mut fm = FmRadio::new();
    fm.start();
    fm.tune(989);

    let frequency = fm.begin_scan(true);
    assert_eq!(frequency, FM_LOWER_LIMIT);
    assert!(fm.is_scanning());
    assert!(fm.is_auto_scan());
    assert_eq!(fm.station_count(), 0);
}

#[test]
fn fm_resume_scans_from_last_position() {
    let mut fm = FmRadio::new();
    fm.start();
    fm.tune(989);

    let frequency = fm.begin_scan(false);
    assert_eq!(frequency, 989);
    assert!(!fm.is_auto_scan());
}

#[test]
fn fm_auto_scan_collects_stations() {
    let mut fm = FmRadio::new();
    fm.start();
    fm.begin_scan(true);

    fm.record_station(893);
    fm.record_station(1015);
    assert_eq!(fm.station_count(), 2);
    assert_eq!(fm.station(0), Some(893));
    assert_eq!(fm.station(1), Some(1015));

    // Playback lands on the first found station
    assert_eq!(fm.play_and_update(), 893);
    assert!(!fm.is_scanning());
    assert_eq!(fm.frequency_playing(), 893);
}

#[test]
fn fm_auto_scan_without_hits_lands_on_band_edge() {
    let mut fm = FmRadio::new();
    fm.start();
    fm.begin_scan(true);

    assert_eq!(fm.play_and_update(), FM_LOWER_LIMIT);
}

#[test]
fn fm_plain_scan_keeps_tuned_frequency() {
    let mut fm = FmRadio::new();
    fm.start();
    fm.tune(950);
    fm.begin_scan(false);

    assert_eq!(fm.play_and_update(), 950);
}

#[test]
fn fm_record_ignored_outside_auto_scan() {
    let mut fm = FmRadio::new();
    fm.start();
    fm.begin_scan(false);
    fm.record_station(900);
    assert_eq!(fm.station_count(), 0);
}

#[test]
fn fm_turn_off_drops_scan() {
    let mut fm = FmRadio::new();
    fm.start();
    fm.begin_scan(true);
    fm.turn_off();

    assert!(!fm.is_on());
    assert!(!fm.is_scanning());
    assert!(!fm.is_auto_scan());
}

#[test]
fn fm_tune_clamps_to_band() {
    let mut fm = FmRadio::new();
    fm.tune(100);
    assert_eq!(fm.frequency_playing(), FM_LOWER_LIMIT);
    fm.tune(2000);
    assert_eq!(fm.frequency_playing(), FM_UPPER_LIMIT);
}

// ============================================================================
// Mode State Tests
// ============================================================================

#[test]
fn mode_state_power_on_defaults() {
    let state = ModeState::new();
    assert_eq!(state.tx_vfo, 0);
    assert_eq!(state.rx_vfo, 0);
    assert_eq!(state.screen, Screen::Main);
    assert!(!state.fm.is_on());
    assert!(!state.dtmf.is_active());
}

#[test]
fn select_vfos_follows_cross_band() {
    let mut state = ModeState::new();
    state.tx_vfo = 0;
    state.cross_band = true;
    state.select_vfos();
    assert_eq!(state.rx_vfo, 1);

    state.cross_band = false;
    state.select_vfos();
    assert_eq!(state.rx_vfo, 0);
}

#[test]
fn lock_screen_needs_both_flags() {
    let mut state = ModeState::new();
    assert!(!state.lock_screen_up());
    state.key_lock = true;
    assert!(!state.lock_screen_up());
    state.keypad_locked = true;
    assert!(state.lock_screen_up());
}

// ============================================================================
// Request Coalescing Tests
// ============================================================================

#[test]
fn requests_merge_ors_booleans() {
    let mut first = Requests::none();
    first.save_vfo = true;

    let mut second = Requests::none();
    second.update_status = true;

    first.merge(second);
    assert!(first.save_vfo);
    assert!(first.update_status);
}

#[test]
fn requests_merge_last_write_wins_for_slots() {
    let mut first = Requests::none();
    first.voice = Some(VoiceRequest::Prompt(VoiceId::ScanningStop));
    first.screen = Some(Screen::Fm);

    let mut second = Requests::none();
    second.voice = Some(VoiceRequest::Channel(3));

    first.merge(second);
    assert_eq!(first.voice, Some(VoiceRequest::Channel(3)));
    // Slots the later record leaves empty keep the earlier value
    assert_eq!(first.screen, Some(Screen::Fm));
}

#[test]
fn requests_none_is_empty() {
    assert!(Requests::none().is_empty());

    let mut req = Requests::none();
    req.beep = Some(BeepId::OneKhz60msOptional);
    assert!(!req.is_empty());
}
