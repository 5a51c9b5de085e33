//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels or the
//! shared state.

pub mod buttons;
pub mod display;
pub mod input;
pub mod tick;

pub use buttons::{mode_button_task, reset_button_task};
pub use display::{display_task, ShieldDisplay, ShieldPotentiometer};
pub use input::input_task;
pub use tick::tick_task;
