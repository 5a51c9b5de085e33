//! Configuration types
//!
//! Board tunables for the display, clock and voltage paths. The firmware
//! gets these from `board.toml`, validated at build time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of multiplexed digit positions
pub const DIGIT_COUNT: usize = 4;

/// Shortest allowed per-digit hold (µs)
pub const MIN_DIGIT_HOLD_US: u32 = 100;

/// Longest per-digit hold (µs) that still refreshes a frame at 200 Hz
pub const MAX_DIGIT_HOLD_US: u32 = 1_250;

/// Highest reference voltage the V.VV layout can show (mV)
pub const MAX_REFERENCE_MV: u16 = 9_990;

/// Supported ADC resolutions (bits)
pub const ADC_BITS_RANGE: core::ops::RangeInclusive<u8> = 8..=16;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Digit hold outside the flicker-free window
    DigitHoldOutOfRange,
    /// Tick period of zero
    ZeroTickPeriod,
    /// Reference voltage zero or too large to display
    ReferenceOutOfRange,
    /// ADC resolution not supported
    AdcBitsOutOfRange,
}

/// Display, clock and voltage settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Time each digit stays powered per refresh (µs)
    pub digit_hold_us: u32,
    /// Period of the seconds tick (ms)
    pub tick_period_ms: u32,
    /// Full-scale voltage of the analog input (mV)
    pub reference_mv: u16,
    /// ADC resolution (bits)
    pub adc_bits: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl DisplayConfig {
    /// 1 ms hold, 1 s tick, 3.3 V reference, 12-bit ADC
    pub const DEFAULT: Self = Self {
        digit_hold_us: 1_000,
        tick_period_ms: 1_000,
        reference_mv: 3_300,
        adc_bits: 12,
    };

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIGIT_HOLD_US..=MAX_DIGIT_HOLD_US).contains(&self.digit_hold_us) {
            return Err(ConfigError::DigitHoldOutOfRange);
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.reference_mv == 0 || self.reference_mv > MAX_REFERENCE_MV {
            return Err(ConfigError::ReferenceOutOfRange);
        }
        if !ADC_BITS_RANGE.contains(&self.adc_bits) {
            return Err(ConfigError::AdcBitsOutOfRange);
        }
        Ok(())
    }

    /// Saturation point of the voltage display in centivolts (330 for 3.3 V)
    pub const fn max_centivolts(&self) -> u16 {
        self.reference_mv / 10
    }

    /// Time to cycle through all digit positions (µs), saturating
    pub const fn frame_period_us(&self) -> u32 {
        self.digit_hold_us.saturating_mul(DIGIT_COUNT as u32)
    }

    /// Full-frame refresh rate (Hz), 0 for a zero hold
    pub const fn refresh_hz(&self) -> u32 {
        match 1_000_000u32.checked_div(self.frame_period_us()) {
            Some(hz) => hz,
            None => 0,
        }
    }

    /// Largest raw ADC reading
    pub const fn adc_max(&self) -> u16 {
        let bits = if self.adc_bits > 16 { 16 } else { self.adc_bits };
        (1u32 << bits).saturating_sub(1) as u16
    }
}
