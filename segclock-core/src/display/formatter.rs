//! Digit derivation for the time and voltage modes
//!
//! All arithmetic is integer after the centivolt conversion, and both paths
//! are pre-clamped, so every digit produced is in 0-9 or blank.

use crate::config::DisplayConfig;
use crate::segment::Digit;
use crate::state::SharedState;
use crate::traits::VoltageSource;

use super::quad::DigitQuad;

/// Builds the frame contents for the current mode
#[derive(Debug, Clone, Copy)]
pub struct ValueFormatter {
    /// Voltage display saturation point (centivolts)
    max_centivolts: u16,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(&DisplayConfig::DEFAULT)
    }
}

impl ValueFormatter {
    /// Create a formatter for the given board configuration
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            max_centivolts: config.max_centivolts(),
        }
    }

    /// Derive the frame for whatever mode the state is in
    ///
    /// Only samples the voltage source in voltage mode.
    pub fn format<V>(&self, state: &SharedState, source: &mut V) -> DigitQuad
    where
        V: VoltageSource + ?Sized,
    {
        if state.is_voltage_mode() {
            self.voltage_digits(source.read_volts())
        } else {
            Self::time_digits(state.read_seconds())
        }
    }

    /// MM.SS layout for an elapsed-seconds total
    pub fn time_digits(total: u16) -> DigitQuad {
        let minutes = total / 60;
        let seconds = total % 60;

        DigitQuad {
            digits: [
                digit((minutes / 10) % 10),
                digit(minutes % 10),
                digit(seconds / 10),
                digit(seconds % 10),
            ],
            dp_after_0: false,
            dp_after_1: true,
        }
    }

    /// V.VV layout for a voltage sample, fourth digit blank
    pub fn voltage_digits(&self, volts: f32) -> DigitQuad {
        let val = self.centivolts(volts);

        DigitQuad {
            digits: [
                digit(val / 100),
                digit((val % 100) / 10),
                digit(val % 10),
                Digit::Blank,
            ],
            dp_after_0: true,
            dp_after_1: false,
        }
    }

    /// Round to centivolts and saturate at the display limit
    ///
    /// Negative and NaN samples saturate to zero.
    pub fn centivolts(&self, volts: f32) -> u16 {
        // Float to int casts saturate, and NaN becomes 0
        let rounded = (volts * 100.0 + 0.5) as i32;
        rounded.clamp(0, self.max_centivolts as i32) as u16
    }
}

/// Digits above 9 cannot occur after clamping; map them to blank anyway
fn digit(value: u16) -> Digit {
    u8::try_from(value).map_or(Digit::Blank, Digit::from_value)
}
