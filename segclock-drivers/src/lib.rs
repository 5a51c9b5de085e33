//! Hardware driver implementations
//!
//! This crate provides concrete drivers for the segclock shield built on
//! `embedded-hal` pins and delays:
//!
//! - 74HC595 serial-to-parallel shift register (bit-banged)
//! - Four-digit time-division multiplexer
//! - Potentiometer voltage reading from a raw ADC channel

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod sensor;
pub mod shift_register;

#[cfg(test)]
pub(crate) mod mock;
