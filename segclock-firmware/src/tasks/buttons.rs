//! Shield button tasks
//!
//! Both buttons are active-low with pull-ups: pressing produces a falling
//! edge, releasing a rising edge.

use defmt::*;
use embassy_stm32::exti::ExtiInput;

use segclock_core::state::InputEvent;

use crate::channels::INPUT_CHANNEL;

/// Reset button (S1) - zeroes the clock on every press
#[embassy_executor::task]
pub async fn reset_button_task(mut button: ExtiInput<'static>) {
    info!("Reset button task started");

    loop {
        button.wait_for_falling_edge().await;
        debug!("Reset pressed");
        INPUT_CHANNEL.send(InputEvent::ResetPressed).await;
    }
}

/// Mode button (S3) - voltage mode while held
///
/// Waits for the low and high levels alternately, so the mode always
/// follows the last level seen. A button already held at boot counts as
/// pressed.
#[embassy_executor::task]
pub async fn mode_button_task(mut button: ExtiInput<'static>) {
    info!("Mode button task started");

    loop {
        button.wait_for_low().await;
        debug!("Mode pressed");
        INPUT_CHANNEL.send(InputEvent::ModePressed).await;

        button.wait_for_high().await;
        debug!("Mode released");
        INPUT_CHANNEL.send(InputEvent::ModeReleased).await;
    }
}
