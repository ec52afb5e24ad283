//! Host-side tests driving the blink logic through embedded-hal mocks.

use avr_blink::blink::SetClearBlinker;
use embedded_hal_mock::delay::MockNoop;
use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use embedded_hal_mock::MockError;
use std::io::ErrorKind;

#[test]
fn set_clear_cycle_is_high_then_low() {
    let expectations = [
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
    ];
    let pin = PinMock::new(&expectations);

    let mut blinker = SetClearBlinker::new(pin, MockNoop::new(), 200, 200);
    blinker.step().unwrap();
    blinker.step().unwrap();

    let (mut pin, _) = blinker.free();
    pin.done();
}

#[test]
fn step_propagates_pin_errors() {
    let expectations =
        [PinTransaction::set(PinState::High).with_error(MockError::Io(ErrorKind::NotConnected))];
    let pin = PinMock::new(&expectations);

    let mut blinker = SetClearBlinker::new(pin, MockNoop::new(), 200, 200);
    assert!(blinker.step().is_err());

    let (mut pin, _) = blinker.free();
    pin.done();
}
