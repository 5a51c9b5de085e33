//! Four-digit time-division multiplexer
//!
//! Only one digit module is powered at a time. Each position gets its
//! segment byte and select byte latched together, then stays lit for the
//! hold time before the next position takes over. With a 1 ms hold the
//! whole frame repeats at 250 Hz, fast enough to look steady.
//!
//! The hold is an async [`DelayNs`] so other tasks run while a digit is
//! lit, and tests can substitute a delay that returns immediately.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use segclock_core::config::{DisplayConfig, DIGIT_COUNT};
use segclock_core::display::DigitQuad;
use segclock_core::segment::BLANK_SEGMENTS;

use crate::shift_register::{Hc595, ShiftRegisterError};

/// Digit select bytes for positions 0-3
pub const SELECT_MAP: [u8; DIGIT_COUNT] = [0xF1, 0xF2, 0xF4, 0xF8];

/// Multiplexed 4-digit display behind a segment + select register pair
pub struct Multiplexer<DATA, CLOCK, LATCH, D> {
    register: Hc595<DATA, CLOCK, LATCH>,
    delay: D,
    /// Time each digit stays powered (µs)
    hold_us: u32,
}

impl<DATA, CLOCK, LATCH, D> Multiplexer<DATA, CLOCK, LATCH, D>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
    D: DelayNs,
{
    /// Create a multiplexer with an explicit per-digit hold
    pub fn new(register: Hc595<DATA, CLOCK, LATCH>, delay: D, hold_us: u32) -> Self {
        Self {
            register,
            delay,
            hold_us,
        }
    }

    /// Create a multiplexer using the configured hold time
    pub fn from_config(
        register: Hc595<DATA, CLOCK, LATCH>,
        delay: D,
        config: &DisplayConfig,
    ) -> Self {
        Self::new(register, delay, config.digit_hold_us)
    }

    /// Select byte that powers a position (all off for out-of-range)
    pub fn select_byte(pos: usize) -> u8 {
        SELECT_MAP.get(pos).copied().unwrap_or(0xF0)
    }

    /// Per-digit hold time (µs)
    pub fn hold_us(&self) -> u32 {
        self.hold_us
    }

    /// Render every position once, left to right
    ///
    /// The caller loops this forever. A pin failure aborts the rest of the
    /// frame; the next call starts again from position 0.
    pub async fn refresh_frame(&mut self, quad: &DigitQuad) -> Result<(), ShiftRegisterError> {
        for pos in 0..DIGIT_COUNT {
            self.show_digit(pos, quad.segment_byte(pos)).await?;
        }
        Ok(())
    }

    /// Latch one position and keep it lit for the hold time
    async fn show_digit(&mut self, pos: usize, segments: u8) -> Result<(), ShiftRegisterError> {
        self.register.write(&[segments, Self::select_byte(pos)])?;
        self.delay.delay_us(self.hold_us).await;
        Ok(())
    }

    /// Latch an all-segments-off pattern
    ///
    /// The register powers up with arbitrary contents.
    pub fn clear(&mut self) -> Result<(), ShiftRegisterError> {
        self.register.write(&[BLANK_SEGMENTS, SELECT_MAP[0]])
    }

    /// Give back the register and delay
    pub fn release(self) -> (Hc595<DATA, CLOCK, LATCH>, D) {
        (self.register, self.delay)
    }
}
