//! segclock - Stopwatch / voltmeter firmware
//!
//! Runs on a Nucleo-F401RE carrying the Arduino multifunction shield.
//! The four-digit display shows elapsed time as MM.SS; holding S3 shows
//! the potentiometer voltage as V.VV instead. S1 resets the clock.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::adc::{Adc, AdcChannel};
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::interrupt;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use segclock_core::display::ValueFormatter;
use segclock_core::state::{InputHandlers, SharedState};
use segclock_drivers::display::Multiplexer;
use segclock_drivers::sensor::Potentiometer;
use segclock_hal_stm32::adc::AdcConfig;
use segclock_hal_stm32::shield;
use segclock_hal_stm32::StmAdcReader;

use crate::config::BOARD_CONFIG;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    EXTI0 => exti::InterruptHandler<interrupt::typelevel::EXTI0>;
    EXTI1 => exti::InterruptHandler<interrupt::typelevel::EXTI1>;
});

/// Clock and mode shared by the input and display tasks
static STATE: StaticCell<SharedState> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("segclock starting...");

    let p = embassy_stm32::init(Default::default());

    let board = BOARD_CONFIG;
    if let Err(e) = board.validate() {
        defmt::panic!("Invalid board configuration: {:?}", e);
    }
    info!(
        "Config: {} us hold ({} Hz), {} ms tick, {} mV / {} bit",
        board.digit_hold_us,
        board.refresh_hz(),
        board.tick_period_ms,
        board.reference_mv,
        board.adc_bits
    );

    let state: &'static SharedState = STATE.init(SharedState::new());
    let handlers = InputHandlers::new(state);

    // Display: 74HC595 pair (PA9 data, PA8 clock, PB5 latch)
    let register = shield::shift_register(p.PA9, p.PA8, p.PB5);
    let display = Multiplexer::from_config(register, Delay, &board);

    // Potentiometer wiper on PA0 / ADC1_IN0
    let adc = StmAdcReader::new(Adc::new(p.ADC1), p.PA0.degrade_adc(), AdcConfig::default());
    let pot = Potentiometer::from_config(adc, &board);

    // Buttons: S1 reset on PA1, S3 mode on PB0
    let reset_button = ExtiInput::new(p.PA1, p.EXTI1, shield::BUTTON_PULL, Irqs);
    let mode_button = ExtiInput::new(p.PB0, p.EXTI0, shield::BUTTON_PULL, Irqs);

    spawner.spawn(unwrap!(tasks::input_task(handlers)));
    spawner.spawn(unwrap!(tasks::tick_task(board.tick_period_ms)));
    spawner.spawn(unwrap!(tasks::reset_button_task(reset_button)));
    spawner.spawn(unwrap!(tasks::mode_button_task(mode_button)));
    spawner.spawn(unwrap!(tasks::display_task(
        display,
        pot,
        ValueFormatter::new(&board),
        state
    )));

    info!("All tasks spawned");
}
