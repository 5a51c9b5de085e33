//! Display refresh task
//!
//! Redraws the whole frame forever. The frame contents are derived again
//! before every pass, so a mode change or a new second shows up within
//! one frame period (4 ms at the default hold).

use defmt::*;
use embassy_stm32::gpio::Output;
use embassy_stm32::peripherals::ADC1;
use embassy_time::Delay;

use segclock_core::display::{DigitQuad, ValueFormatter};
use segclock_core::state::SharedState;
use segclock_drivers::display::Multiplexer;
use segclock_drivers::sensor::Potentiometer;
use segclock_hal_stm32::StmAdcReader;

/// Multiplexed display on the shield's shift register pins
pub type ShieldDisplay = Multiplexer<Output<'static>, Output<'static>, Output<'static>, Delay>;

/// Shield potentiometer on ADC1
pub type ShieldPotentiometer = Potentiometer<StmAdcReader<'static, ADC1>>;

#[embassy_executor::task]
pub async fn display_task(
    mut display: ShieldDisplay,
    mut pot: ShieldPotentiometer,
    formatter: ValueFormatter,
    state: &'static SharedState,
) {
    info!("Display task started ({} us hold)", display.hold_us());

    if let Err(e) = display.clear() {
        error!("Failed to clear display: {:?}", e);
    }

    let mut shown = DigitQuad::BLANK;

    loop {
        let quad = formatter.format(state, &mut pot);

        if quad != shown {
            trace!("Display: {}", quad.render().as_str());
            shown = quad;
        }

        if let Err(e) = display.refresh_frame(&quad).await {
            warn!("Display refresh failed: {:?}", e);
        }
    }
}
