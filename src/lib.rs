//! LED blinker firmware for 8-bit AVR targets.
//!
//! Three firmware variants share this library, one per target chip, selected
//! by a Cargo feature. Each binary configures a single pin as output and
//! drives it in a fixed on/off pattern forever; see `src/bin/`.

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "atmega328p", feature = "atmega4809"))]
compile_error!("select exactly one chip feature");
#[cfg(all(feature = "atmega328p", feature = "attiny816"))]
compile_error!("select exactly one chip feature");
#[cfg(all(feature = "atmega4809", feature = "attiny816"))]
compile_error!("select exactly one chip feature");

pub mod blink;
pub mod config;
#[cfg(any(feature = "atmega328p", feature = "atmega4809", feature = "attiny816"))]
pub mod hal;

pub use blink::{SetClearBlinker, ToggleBlinker};
