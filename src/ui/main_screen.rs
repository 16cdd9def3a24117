//! Main-Screen Renderer
//!
//! Resolves each VFO slot to a printable label and a one-character marker,
//! then composes the two VFO lines into the main framebuffer. The lock
//! notice fully preempts normal content while the keypad is latched
//! locked. Rendering is deterministic: identical mode state always
//! produces a byte-identical frame.

use crate::config::INPUT_BOX_SIZE;
use crate::radio::state::{InputBox, ModeState, VFO_COUNT};
use crate::radio::vfo::{NAME_ERASED, NAME_SIZE};
use crate::types::Function;
use crate::ui::framebuffer::FrameBuffer;
use core::fmt::Write as _;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

/// Maximum label length in characters
pub const LABEL_LEN: usize = 17;

/// Vertical pixel offset of each VFO line within the main frame
const VFO_LINE_Y: [i32; VFO_COUNT] = [16, 40];

/// Sanitize a raw persisted name.
///
/// Reads up to 16 bytes, stopping at a NUL or erased-storage byte; drops
/// anything outside printable ASCII and folds lowercase to uppercase.
fn sanitized_name(raw: &[u8; NAME_SIZE]) -> String<LABEL_LEN> {
    let mut name: String<LABEL_LEN> = String::new();
    for &b in raw {
        if b == 0x00 || b == NAME_ERASED {
            break;
        }
        if !(0x20..=0x7E).contains(&b) {
            continue;
        }
        let _ = name.push(b.to_ascii_uppercase() as char);
    }
    name
}

/// Channel string for an in-progress numeric entry: typed digits with `-`
/// placeholders in the unfilled positions.
fn entry_channel_string(input_box: &InputBox) -> String<LABEL_LEN> {
    let mut label: String<LABEL_LEN> = String::new();
    let _ = label.push_str("CH-");
    for position in 0..INPUT_BOX_SIZE {
        let c = input_box
            .digit(position)
            .map_or('-', |d| (b'0' + d) as char);
        let _ = label.push(c);
    }
    label
}

/// Resolve the printable label for a VFO slot.
///
/// Precedence, first match wins: custom name, memory-channel string,
/// formatted free frequency, weather-alert ordinal, the literal `VFO`.
/// A name that sanitizes to nothing but blanks falls through to channel
/// resolution.
#[must_use]
pub fn vfo_label(state: &ModeState, vfo: usize) -> String<LABEL_LEN> {
    let Some(slot) = state.vfos.get(vfo) else {
        return String::new();
    };

    let name = sanitized_name(&slot.name);
    if name.chars().any(|c| c != ' ') {
        return name;
    }

    let channel = slot.channel;
    if channel.is_memory() {
        if !state.input_box.is_empty() && state.tx_vfo == vfo {
            return entry_channel_string(&state.input_box);
        }
        let mut label: String<LABEL_LEN> = String::new();
        let _ = write!(label, "CH-{:03}", channel.display_number());
        return label;
    }

    if channel.is_frequency() {
        let mut label: String<LABEL_LEN> = String::new();
        let f = slot.frequency;
        let _ = write!(label, "{}.{:03} MHZ", f.mhz_whole(), f.mhz_frac());
        return label;
    }

    if channel.is_noaa() {
        let mut label: String<LABEL_LEN> = String::new();
        let _ = write!(label, "NOAA {}", channel.noaa_ordinal());
        return label;
    }

    let mut label: String<LABEL_LEN> = String::new();
    let _ = label.push_str("VFO");
    label
}

/// Resolve the one-character marker for a VFO slot.
///
/// `T` while this slot transmits, `R` while it receives or monitors, `>`
/// for the idle TX assignment, blank otherwise. The TX and RX assignments
/// are single indices, so at most one slot shows `T` and at most one `R`.
#[must_use]
pub fn vfo_marker(state: &ModeState, vfo: usize) -> char {
    if state.function == Function::Transmit && state.tx_vfo == vfo {
        return 'T';
    }
    if matches!(state.function, Function::Receive | Function::Monitor) && state.rx_vfo == vfo {
        return 'R';
    }
    if state.tx_vfo == vfo {
        return '>';
    }
    ' '
}

/// Compose the main screen into the framebuffer.
///
/// The caller blits the finished frame to the panel.
pub fn render_main(state: &ModeState, fb: &mut FrameBuffer) {
    fb.clear();

    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    if state.lock_screen_up() {
        let _ = Text::with_baseline("Long Press #", Point::new(0, 8), style, Baseline::Top)
            .draw(fb);
        let _ = Text::with_baseline("To Unlock", Point::new(0, 24), style, Baseline::Top)
            .draw(fb);
        return;
    }

    for vfo in 0..VFO_COUNT {
        let label = vfo_label(state, vfo);
        let mut line: String<24> = String::new();
        let _ = write!(
            line,
            "{}{} {}",
            vfo_marker(state, vfo),
            if vfo == 0 { 'A' } else { 'B' },
            label
        );
        let _ = Text::with_baseline(&line, Point::new(0, VFO_LINE_Y[vfo]), style, Baseline::Top)
            .draw(fb);
    }
}
