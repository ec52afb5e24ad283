//! Blink an LED on PB0 (D8 on the Arduino Uno) once per second.
//!
//! PB0 -> resistor -> LED -> GND

#![no_std]
#![no_main]

use panic_halt as _;

use avr_blink::blink::ToggleBlinker;
use avr_blink::config;
use avr_blink::hal::{board, Delay};

#[avr_device::entry]
fn main() -> ! {
    let mut led = board::Led::new().into_output();

    // Known level before the first toggle, so the first half-period is dark.
    led.set_low();

    ToggleBlinker::new(led, Delay, config::BLINK_HALF_PERIOD_MS).run()
}
