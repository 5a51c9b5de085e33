//! Tick task for the elapsed-seconds counter

use defmt::*;
use embassy_time::{Duration, Ticker};

use segclock_core::state::InputEvent;

use crate::channels::INPUT_CHANNEL;

/// Tick task - emits one `Tick` per configured period
///
/// The ticker schedules against absolute deadlines, so a late wakeup does
/// not push every later tick back.
#[embassy_executor::task]
pub async fn tick_task(period_ms: u32) {
    info!("Tick task started ({} ms)", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));

    loop {
        ticker.next().await;
        INPUT_CHANNEL.send(InputEvent::Tick).await;
    }
}
