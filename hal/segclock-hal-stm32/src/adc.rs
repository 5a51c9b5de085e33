//! ADC adapter for STM32F4
//!
//! Implements the drivers' [`AdcReader`] on top of a blocking embassy ADC
//! conversion so the potentiometer can be sampled from the refresh loop.

use embassy_stm32::adc::{Adc, AnyAdcChannel, BasicAdcRegs, BasicInstance, Instance, SampleTime};
use segclock_drivers::sensor::AdcReader;

/// ADC configuration
#[derive(Debug, Clone, Copy)]
pub struct AdcConfig {
    /// Sampling time per conversion
    pub sample_time: SampleTime,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            // Long sampling for the high-impedance pot wiper
            sample_time: SampleTime::CYCLES480,
        }
    }
}

/// One ADC channel read with blocking conversions
pub struct StmAdcReader<'d, T: Instance> {
    adc: Adc<'d, T>,
    channel: AnyAdcChannel<'d, T>,
    sample_time: SampleTime,
}

impl<'d, T: Instance> StmAdcReader<'d, T> {
    /// Create a reader for one channel
    pub fn new(adc: Adc<'d, T>, channel: AnyAdcChannel<'d, T>, config: AdcConfig) -> Self {
        Self { adc, channel, sample_time: config.sample_time }
    }
}

impl<T: Instance> AdcReader for StmAdcReader<'_, T>
where
    <T as BasicInstance>::Regs: BasicAdcRegs<SampleTime = SampleTime>,
{
    fn read_raw(&mut self) -> u16 {
        self.adc.blocking_read(&mut self.channel, self.sample_time)
    }
}
