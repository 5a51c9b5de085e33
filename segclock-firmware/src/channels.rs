//! Inter-task communication channels
//!
//! Button and tick tasks only produce events. The input task is the single
//! consumer that applies them to the shared state.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use segclock_core::state::InputEvent;

/// Channel capacity for input events
const INPUT_CHANNEL_SIZE: usize = 8;

/// Ticks and button edges, in the order they happened
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();
