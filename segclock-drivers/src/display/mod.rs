//! Seven-segment display drivers

pub mod multiplexer;

pub use multiplexer::{Multiplexer, SELECT_MAP};
