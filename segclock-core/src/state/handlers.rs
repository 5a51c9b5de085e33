//! Interrupt handlers bound to the shared state
//!
//! Each handler is one atomic operation that never blocks, so it can be
//! called straight from an interrupt or from the task draining input
//! events. Anything heavier belongs in the refresh loop.
//!
//! Writers per field:
//! - seconds: tick (increment) and reset button (store zero)
//! - mode: mode button falling edge (set) and rising edge (clear); the
//!   two edges of one button cannot fire concurrently

use super::events::InputEvent;
use super::shared::SharedState;

/// Handler set bound to one [`SharedState`]
#[derive(Debug, Clone, Copy)]
pub struct InputHandlers<'a> {
    state: &'a SharedState,
}

impl<'a> InputHandlers<'a> {
    /// Bind the handlers to the state they mutate
    pub const fn new(state: &'a SharedState) -> Self {
        Self { state }
    }

    /// The state these handlers write to
    pub fn state(&self) -> &'a SharedState {
        self.state
    }

    /// Periodic timer fired
    pub fn on_tick(&self) {
        self.state.increment_seconds();
    }

    /// Reset button pressed (falling edge)
    pub fn on_reset_pressed(&self) {
        self.state.reset_seconds();
    }

    /// Mode button pressed (falling edge)
    pub fn on_mode_pressed(&self) {
        self.state.set_voltage_mode(true);
    }

    /// Mode button released (rising edge)
    pub fn on_mode_released(&self) {
        self.state.set_voltage_mode(false);
    }

    /// Route an event to its handler
    pub fn dispatch(&self, event: InputEvent) {
        match event {
            InputEvent::Tick => self.on_tick(),
            InputEvent::ResetPressed => self.on_reset_pressed(),
            InputEvent::ModePressed => self.on_mode_pressed(),
            InputEvent::ModeReleased => self.on_mode_released(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DisplayMode, SECONDS_WRAP};

    #[test]
    fn test_tick_and_reset() {
        let state = SharedState::new();
        let handlers = InputHandlers::new(&state);

        for _ in 0..125 {
            handlers.on_tick();
        }
        assert_eq!(state.read_seconds(), 125);

        handlers.on_reset_pressed();
        assert_eq!(state.read_seconds(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_zero() {
        let state = SharedState::new();
        let handlers = InputHandlers::new(&state);

        for _ in 0..SECONDS_WRAP {
            handlers.dispatch(InputEvent::Tick);
        }
        assert_eq!(state.read_seconds(), 0);
    }

    #[test]
    fn test_mode_press_release() {
        let state = SharedState::new();
        let handlers = InputHandlers::new(&state);

        handlers.on_mode_pressed();
        assert_eq!(state.mode(), DisplayMode::Voltage);

        handlers.on_mode_released();
        assert_eq!(state.mode(), DisplayMode::Time);
    }

    #[test]
    fn test_mode_does_not_touch_counter() {
        let state = SharedState::new();
        let handlers = InputHandlers::new(&state);

        handlers.dispatch(InputEvent::Tick);
        handlers.dispatch(InputEvent::ModePressed);
        handlers.dispatch(InputEvent::Tick);
        assert_eq!(state.snapshot(), (2, DisplayMode::Voltage));

        handlers.dispatch(InputEvent::ResetPressed);
        assert_eq!(state.snapshot(), (0, DisplayMode::Voltage));

        handlers.dispatch(InputEvent::ModeReleased);
        assert_eq!(state.snapshot(), (0, DisplayMode::Time));
    }

    #[test]
    fn test_handlers_are_copyable() {
        let state = SharedState::new();
        let tick = InputHandlers::new(&state);
        let buttons = tick;

        tick.on_tick();
        buttons.on_mode_pressed();
        assert!(core::ptr::eq(tick.state(), buttons.state()));
        assert_eq!(state.snapshot(), (1, DisplayMode::Voltage));
    }
}
