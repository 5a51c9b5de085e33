//! Board-agnostic core logic for the segclock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Seven-segment encoding tables
//! - Interrupt-shared state and the handlers that mutate it
//! - Digit formatting for the time and voltage modes
//! - Hardware abstraction traits (voltage source)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod display;
pub mod segment;
pub mod state;
pub mod traits;
