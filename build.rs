use std::env;

fn main() {
    // Host builds (cargo test) get no MCU flags.
    let target = env::var("TARGET").unwrap();
    if !target.contains("avr") {
        return;
    }

    let mcu = if env::var("CARGO_FEATURE_ATMEGA328P").is_ok() {
        "atmega328p"
    } else if env::var("CARGO_FEATURE_ATMEGA4809").is_ok() {
        "atmega4809"
    } else if env::var("CARGO_FEATURE_ATTINY816").is_ok() {
        "attiny816"
    } else {
        panic!("Select a chip feature: atmega328p, atmega4809 or attiny816");
    };

    println!("cargo:rustc-link-arg=-mmcu={}", mcu);
}
