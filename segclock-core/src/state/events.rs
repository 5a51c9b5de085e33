//! Interrupt sources that mutate the shared state

/// One invocation of an interrupt source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Periodic one-second timer
    Tick,
    /// Falling edge of the reset button
    ResetPressed,
    /// Falling edge of the mode button
    ModePressed,
    /// Rising edge of the mode button
    ModeReleased,
}

impl InputEvent {
    /// Check if this event comes from a button edge
    pub fn is_button_event(&self) -> bool {
        matches!(
            self,
            InputEvent::ResetPressed | InputEvent::ModePressed | InputEvent::ModeReleased
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_events() {
        assert!(InputEvent::ResetPressed.is_button_event());
        assert!(InputEvent::ModePressed.is_button_event());
        assert!(InputEvent::ModeReleased.is_button_event());
        assert!(!InputEvent::Tick.is_button_event());
    }
}
