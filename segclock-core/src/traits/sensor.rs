//! Analog sensor traits

/// Trait for analog voltage sources
///
/// Every call triggers a fresh measurement; readings are never cached.
/// Takes `&mut self` because ADC reads typically require mutable access.
pub trait VoltageSource {
    /// Read the instantaneous voltage in volts
    fn read_volts(&mut self) -> f32;
}

/// Closures stand in for the analog collaborator (tests, simulated boards)
impl<F: FnMut() -> f32> VoltageSource for F {
    fn read_volts(&mut self) -> f32 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_twice<V: VoltageSource>(source: &mut V) -> (f32, f32) {
        (source.read_volts(), source.read_volts())
    }

    #[test]
    fn test_closure_source_is_sampled_on_every_read() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            calls as f32 * 0.5
        };

        let (first, second) = read_twice(&mut source);
        assert_eq!(first, 0.5);
        assert_eq!(second, 1.0);
    }
}
