//! Arduino multifunction shield wiring
//!
//! | Function            | Shield | Nucleo |
//! |---------------------|--------|--------|
//! | 74HC595 latch       | D4     | PB5    |
//! | 74HC595 clock       | D7     | PA8    |
//! | 74HC595 data        | D8     | PA9    |
//! | S1 (reset)          | A1     | PA1    |
//! | S3 (mode)           | A3     | PB0    |
//! | Potentiometer wiper | A0     | PA0    |
//!
//! Buttons short to ground, so they need pull-ups and are active-low.

use embassy_stm32::gpio::{Level, Output, Pin, Pull, Speed};
use embassy_stm32::Peri;
use segclock_drivers::shift_register::Hc595;

/// Pull configuration for the shield buttons
pub const BUTTON_PULL: Pull = Pull::Up;

/// Shift register driven by three push-pull outputs
pub type ShieldRegister<'d> = Hc595<Output<'d>, Output<'d>, Output<'d>>;

/// Build the display shift register from its three pins
///
/// Clock and latch idle low, matching the first edge each write drives.
pub fn shift_register<'d>(
    data: Peri<'d, impl Pin>,
    clock: Peri<'d, impl Pin>,
    latch: Peri<'d, impl Pin>,
) -> ShieldRegister<'d> {
    Hc595::new(
        Output::new(data, Level::Low, Speed::Low),
        Output::new(clock, Level::Low, Speed::Low),
        Output::new(latch, Level::Low, Speed::Low),
    )
}
