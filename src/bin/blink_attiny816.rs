//! Blink an LED on PB0 of the ATtiny816: 200 ms on, 200 ms off.
//!
//! PB0 -> resistor -> LED -> GND

#![no_std]
#![no_main]

use panic_halt as _;

use avr_blink::blink::SetClearBlinker;
use avr_blink::config;
use avr_blink::hal::{board, Delay};

#[avr_device::entry]
fn main() -> ! {
    let led = board::Led::new().into_output();

    SetClearBlinker::new(led, Delay, config::BLINK_ON_MS, config::BLINK_OFF_MS).run()
}
