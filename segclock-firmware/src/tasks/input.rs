//! Input task - applies ticks and button events to the shared state

use defmt::*;

use segclock_core::state::InputHandlers;

use crate::channels::INPUT_CHANNEL;

#[embassy_executor::task]
pub async fn input_task(handlers: InputHandlers<'static>) {
    info!("Input task started");

    loop {
        let event = INPUT_CHANNEL.receive().await;
        handlers.dispatch(event);

        if event.is_button_event() {
            debug!("{} -> mode {}", event, handlers.state().mode());
        }
    }
}
