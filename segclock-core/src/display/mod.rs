//! Display content derivation
//!
//! Turns the shared state (or a fresh voltage sample) into the four digits
//! and decimal points of one refresh frame.

pub mod formatter;
pub mod quad;

pub use formatter::ValueFormatter;
pub use quad::DigitQuad;
