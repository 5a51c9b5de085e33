//! Atomic state cells shared between interrupt handlers and the main loop

use portable_atomic::{AtomicBool, AtomicU16, Ordering};

/// The counter wraps to zero after 99:59
pub const SECONDS_WRAP: u16 = 6000;

/// What the display is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Elapsed time as MM.SS
    #[default]
    Time,
    /// Potentiometer voltage as V.VV
    Voltage,
}

impl DisplayMode {
    /// Map the stored flag onto a mode
    pub const fn from_voltage_flag(voltage: bool) -> Self {
        if voltage {
            DisplayMode::Voltage
        } else {
            DisplayMode::Time
        }
    }

    /// Check if the voltage is shown
    pub const fn is_voltage(&self) -> bool {
        matches!(self, DisplayMode::Voltage)
    }
}

/// State written by interrupt handlers and read by the refresh loop
///
/// Every accessor is a single atomic operation, so a reader never sees a
/// torn value. There is no cross-field consistency: a snapshot may pair a
/// mode with a counter value from a different instant, which is at most
/// one refresh frame stale.
#[derive(Debug)]
pub struct SharedState {
    /// Elapsed seconds, always in `0..SECONDS_WRAP`
    seconds: AtomicU16,
    /// True while the mode button is held
    voltage_mode: AtomicBool,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    /// Create the state with the counter at zero in time mode
    pub const fn new() -> Self {
        Self {
            seconds: AtomicU16::new(0),
            voltage_mode: AtomicBool::new(false),
        }
    }

    /// Advance the counter by one second, wrapping at [`SECONDS_WRAP`]
    ///
    /// Uses a read-modify-write so a reset that lands mid-update is
    /// never overwritten by a stale increment.
    pub fn increment_seconds(&self) {
        let _ = self
            .seconds
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |s| {
                Some(next_second(s))
            });
    }

    /// Set the counter back to zero
    pub fn reset_seconds(&self) {
        self.seconds.store(0, Ordering::Release);
    }

    /// Current counter value, already wrapped
    pub fn read_seconds(&self) -> u16 {
        self.seconds.load(Ordering::Acquire)
    }

    /// Switch between voltage (true) and time (false) display
    pub fn set_voltage_mode(&self, voltage: bool) {
        self.voltage_mode.store(voltage, Ordering::Release);
    }

    /// Check if the voltage should be displayed
    pub fn is_voltage_mode(&self) -> bool {
        self.voltage_mode.load(Ordering::Acquire)
    }

    /// Current display mode
    pub fn mode(&self) -> DisplayMode {
        DisplayMode::from_voltage_flag(self.is_voltage_mode())
    }

    /// Load both fields (each atomically, not jointly)
    pub fn snapshot(&self) -> (u16, DisplayMode) {
        (self.read_seconds(), self.mode())
    }
}

/// Counter value after one tick
const fn next_second(seconds: u16) -> u16 {
    // Values at or above the wrap point cannot be stored, but fold them anyway
    (seconds % SECONDS_WRAP + 1) % SECONDS_WRAP
}
