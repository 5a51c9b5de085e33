//! Shift register drivers

pub mod hc595;

pub use hc595::Hc595;

/// Which line failed while shifting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftRegisterError {
    /// Serial data line
    Data,
    /// Shift clock line
    Clock,
    /// Storage latch line
    Latch,
}
