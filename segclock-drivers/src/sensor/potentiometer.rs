//! Potentiometer on an ADC channel
//!
//! The wiper voltage is sampled as a raw count, normalized to [0, 1] and
//! scaled by the ADC reference voltage.

use segclock_core::config::DisplayConfig;
use segclock_core::traits::VoltageSource;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Start a conversion and return the raw count
    fn read_raw(&mut self) -> u16;
}

/// Potentiometer wiper read through an ADC
pub struct Potentiometer<ADC> {
    adc: ADC,
    /// Largest raw reading (4095 for 12-bit)
    adc_max: u16,
    /// ADC reference voltage in mV
    reference_mv: u16,
}

impl<ADC> Potentiometer<ADC> {
    /// Create a new potentiometer reader
    ///
    /// # Arguments
    /// - `adc`: ADC channel wired to the wiper
    /// - `adc_max`: largest raw reading
    /// - `reference_mv`: full-scale voltage in millivolts (typically 3300)
    pub fn new(adc: ADC, adc_max: u16, reference_mv: u16) -> Self {
        Self {
            adc,
            adc_max: adc_max.max(1),
            reference_mv,
        }
    }

    /// Create a reader from the board configuration
    pub fn from_config(adc: ADC, config: &DisplayConfig) -> Self {
        Self::new(adc, config.adc_max(), config.reference_mv)
    }

    /// Raw count as a fraction of full scale, saturating at 1.0
    pub fn normalize(&self, raw: u16) -> f32 {
        raw.min(self.adc_max) as f32 / self.adc_max as f32
    }

    /// Raw count in volts
    pub fn raw_to_volts(&self, raw: u16) -> f32 {
        self.normalize(raw) * self.reference_mv as f32 / 1000.0
    }
}

impl<ADC: AdcReader> VoltageSource for Potentiometer<ADC> {
    fn read_volts(&mut self) -> f32 {
        let raw = self.adc.read_raw();
        self.raw_to_volts(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segclock_core::display::ValueFormatter;
    use segclock_core::state::SharedState;

    /// Mock ADC returning a fixed count
    struct MockAdc {
        raw: u16,
        reads: u32,
    }

    impl MockAdc {
        fn new(raw: u16) -> Self {
            Self { raw, reads: 0 }
        }
    }

    impl AdcReader for MockAdc {
        fn read_raw(&mut self) -> u16 {
            self.reads += 1;
            self.raw
        }
    }

    fn pot(raw: u16) -> Potentiometer<MockAdc> {
        Potentiometer::from_config(MockAdc::new(raw), &DisplayConfig::DEFAULT)
    }

    #[test]
    fn test_full_scale() {
        let mut p = pot(4095);
        let volts = p.read_volts();
        assert!((volts - 3.3).abs() < 1e-4);
    }

    #[test]
    fn test_zero() {
        assert_eq!(pot(0).read_volts(), 0.0);
    }

    #[test]
    fn test_mid_scale() {
        let p = pot(0);
        assert!((p.normalize(2048) - 0.5).abs() < 1e-3);
        assert!((p.raw_to_volts(2048) - 1.65).abs() < 1e-3);
    }

    #[test]
    fn test_over_range_saturates() {
        let p = pot(0);
        assert_eq!(p.normalize(u16::MAX), 1.0);
    }

    #[test]
    fn test_zero_adc_max_does_not_divide_by_zero() {
        let p = Potentiometer::new(MockAdc::new(0), 0, 3300);
        assert_eq!(p.normalize(0), 0.0);
    }

    #[test]
    fn test_fresh_sample_per_read() {
        let mut p = pot(100);
        p.read_volts();
        p.read_volts();
        assert_eq!(p.adc.reads, 2);
    }

    #[test]
    fn test_full_scale_displays_limit() {
        let state = SharedState::new();
        state.set_voltage_mode(true);
        let mut p = pot(4095);

        let quad = ValueFormatter::default().format(&state, &mut p);
        assert_eq!(quad.render().as_str(), "3.30 ");
    }

    #[test]
    fn test_low_reading_displays() {
        let state = SharedState::new();
        state.set_voltage_mode(true);
        // 0.45 V of 3.3 V on 12 bits
        let mut p = pot(558);

        let quad = ValueFormatter::default().format(&state, &mut p);
        assert_eq!(quad.render().trim_end(), "0.45");
    }
}
