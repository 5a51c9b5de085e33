//! STM32-specific glue for the segclock firmware
//!
//! This crate wires embassy-stm32 peripherals to the board-agnostic
//! drivers. It supports the STM32F4 Nucleo-64 boards carrying the
//! Arduino multifunction shield:
//!
//! - STM32F401RE
//! - STM32F411RE
//!
//! # Features
//!
//! - `stm32f401re`, `stm32f411re` - Select the chip
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod adc;
pub mod shield;

pub use adc::StmAdcReader;
