//! Handheld Transceiver Main Application
//!
//! Entry point for the STM32G4-based handheld radio firmware.
//! Initializes hardware, then runs the control loop: poll keys, dispatch,
//! drain the returned requests, and redraw.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::adc::Adc;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::Hertz;
use embassy_time::{Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use ht_firmware::app::action;
use ht_firmware::app::requests::Requests;
use ht_firmware::config::DISPLAY_SPI_HZ;
use ht_firmware::drivers::keypad::Keypad;
use ht_firmware::drivers::st7565::St7565;
use ht_firmware::hal::spi::SpiBus;
use ht_firmware::power::{BatteryMonitor, BatteryVoltage};
use ht_firmware::prelude::*;
use ht_firmware::radio::state::ModeState;
use ht_firmware::ui::framebuffer::{FrameBuffer, StatusLine};
use ht_firmware::ui::{main_screen, status_bar};

/// Control loop period
const TICK_MS: u64 = 10;

/// Battery sample interval in control ticks
const BATTERY_SAMPLE_TICKS: u32 = 100;

/// Low-battery blink interval in control ticks
const BLINK_TICKS: u32 = 50;

/// ADC calibration: millivolts per 1024 counts for the battery divider
const BATTERY_MV_PER_1024: u32 = 2200;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("HT Firmware v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Display SPI on SPI2
    let mut spi_config = spi::Config::default();
    spi_config.frequency = Hertz(DISPLAY_SPI_HZ);
    let spi = Spi::new(
        p.SPI2,
        p.PB13, // SCK
        p.PB15, // MOSI
        p.PB14, // MISO
        p.DMA1_CH3,
        p.DMA1_CH4,
        spi_config,
    );

    let lcd_a0 = Output::new(p.PB10, Level::Low, Speed::High);
    let lcd_cs = Output::new(p.PB12, Level::High, Speed::High);
    let mut display = St7565::new(SpiBus::new(spi), lcd_a0, lcd_cs);
    if display.init().await.is_err() {
        defmt::error!("display init failed");
    }

    // Key matrix plus side keys
    let rows = [
        Input::new(p.PA4, Pull::Up),
        Input::new(p.PA5, Pull::Up),
        Input::new(p.PA6, Pull::Up),
        Input::new(p.PA7, Pull::Up),
    ];
    let cols = [
        Output::new(p.PB0, Level::High, Speed::Low),
        Output::new(p.PB1, Level::High, Speed::Low),
        Output::new(p.PB2, Level::High, Speed::Low),
        Output::new(p.PB3, Level::High, Speed::Low),
    ];
    let side1 = Input::new(p.PC14, Pull::Up);
    let side2 = Input::new(p.PC15, Pull::Up);
    let mut keypad = Keypad::new(rows, cols, side1, side2);

    let charge_sense = Input::new(p.PA8, Pull::Down);
    let mut adc = Adc::new(p.ADC1);
    let mut battery_pin = p.PA0;

    let mut state = ModeState::new();
    let mut battery = BatteryMonitor::new();
    let mut frame = FrameBuffer::new();
    let mut status = StatusLine::new();

    // First paint
    main_screen::render_main(&state, &mut frame);
    status_bar::render_status(&battery, &mut status);
    let _ = display.blit_full_screen(&frame).await;
    let _ = display.blit_status_line(&status).await;

    info!("Entering control loop");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));
    let mut tick: u32 = 0;

    loop {
        ticker.next().await;
        tick = tick.wrapping_add(1);

        let now_ms = Instant::now().as_millis() as u32;
        let mut pending = Requests::none();

        if let Some(event) = keypad.poll(now_ms) {
            defmt::debug!("{}", event);
            pending.merge(action::handle_key(
                &mut state,
                event.key,
                event.pressed,
                event.held,
            ));
        }

        if tick % BATTERY_SAMPLE_TICKS == 0 {
            let raw = adc.blocking_read(&mut battery_pin);
            battery.update(BatteryVoltage::from_adc(raw, BATTERY_MV_PER_1024));
            battery.set_charging(charge_sense.is_high());
            pending.update_status = true;
        }

        if tick % BLINK_TICKS == 0 && battery.display_level() < 2 {
            battery.tick_blink();
            pending.update_status = true;
        }

        // Drain the request record: each slot serviced exactly once.
        if pending.is_empty() {
            continue;
        }

        if pending.save_channel || pending.save_vfo || pending.save_settings {
            // The storage task owns the EEPROM; hand it the dirty flags.
            info!(
                "persist: channel={} vfo={} settings={}",
                pending.save_channel, pending.save_vfo, pending.save_settings
            );
        }

        if pending.reconfigure_vfos || pending.reset_vfos || pending.vfo_reload {
            info!(
                "vfo config: reset={} reload={}",
                pending.reset_vfos, pending.vfo_reload
            );
        }

        if let Some(voice) = pending.voice {
            info!("voice: {}", voice);
        }
        if let Some(beep) = pending.beep {
            info!("beep: {}", beep);
        }

        if let Some(screen) = pending.screen {
            state.screen = screen;
            main_screen::render_main(&state, &mut frame);
            let _ = display.blit_full_screen(&frame).await;
        }

        if pending.update_status {
            status_bar::render_status(&battery, &mut status);
            let _ = display.blit_status_line(&status).await;
        }
    }
}
