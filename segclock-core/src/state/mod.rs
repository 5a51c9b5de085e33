//! Interrupt-shared state
//!
//! The elapsed-seconds counter and the display mode are written from
//! interrupt context and read by the display refresh loop. Each field
//! is an atomic cell with a single writing interrupt source per concern,
//! so no lock is needed.

pub mod events;
pub mod handlers;
pub mod shared;

pub use events::InputEvent;
pub use handlers::InputHandlers;
pub use shared::{DisplayMode, SharedState, SECONDS_WRAP};
