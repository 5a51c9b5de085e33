//! Analog sensors

pub mod potentiometer;

pub use potentiometer::{AdcReader, Potentiometer};
