//! Board configuration
//!
//! `board.toml` is validated by build.rs and compiled in as a constant, so
//! a bad value fails the build instead of the boot.

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
