//! 74HC595 serial-in parallel-out shift register
//!
//! Bits are clocked in on the rising edge of the shift clock, most
//! significant bit first. Outputs only change on the rising edge of the
//! latch, so several chained bytes appear at the outputs together.

use embedded_hal::digital::{OutputPin, PinState};

use super::ShiftRegisterError;

/// Bit-banged 74HC595 chain
pub struct Hc595<DATA, CLOCK, LATCH> {
    data: DATA,
    clock: CLOCK,
    latch: LATCH,
}

impl<DATA, CLOCK, LATCH> Hc595<DATA, CLOCK, LATCH>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
{
    /// Create a new shift register driver
    ///
    /// # Arguments
    /// - `data`: serial data input (DS)
    /// - `clock`: shift register clock (SH_CP)
    /// - `latch`: storage register clock (ST_CP)
    pub fn new(data: DATA, clock: CLOCK, latch: LATCH) -> Self {
        Self { data, clock, latch }
    }

    /// Shift out bytes and latch them to the outputs together
    ///
    /// The first byte ends up furthest down the chain.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), ShiftRegisterError> {
        self.latch
            .set_low()
            .map_err(|_| ShiftRegisterError::Latch)?;

        for &byte in bytes {
            self.shift_byte(byte)?;
        }

        self.latch
            .set_high()
            .map_err(|_| ShiftRegisterError::Latch)
    }

    /// Clock one byte in, MSB first, without latching
    pub fn shift_byte(&mut self, byte: u8) -> Result<(), ShiftRegisterError> {
        for bit in (0..8).rev() {
            self.clock
                .set_low()
                .map_err(|_| ShiftRegisterError::Clock)?;
            self.data
                .set_state(PinState::from((byte >> bit) & 1 == 1))
                .map_err(|_| ShiftRegisterError::Data)?;
            self.clock
                .set_high()
                .map_err(|_| ShiftRegisterError::Clock)?;
        }
        Ok(())
    }

    /// Give the pins back
    pub fn release(self) -> (DATA, CLOCK, LATCH) {
        (self.data, self.clock, self.latch)
    }
}
