//! The two blink strategies, free of hardware dependencies.
//!
//! Both drivers work against the `embedded-hal` traits, so the firmware
//! binaries hand them a real pin while host tests hand them mocks.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{OutputPin, ToggleableOutputPin};

/// Flips the pin once per step, then waits one half-period.
///
/// Produces a symmetric square wave with period twice the half-period. The
/// level of the very first half-period depends on whatever state the pin was
/// in when the driver took it over.
pub struct ToggleBlinker<P, D> {
    pin: P,
    delay: D,
    half_period_ms: u16,
}

impl<P, D> ToggleBlinker<P, D>
where
    P: ToggleableOutputPin,
    D: DelayMs<u16>,
{
    pub fn new(pin: P, delay: D, half_period_ms: u16) -> Self {
        Self {
            pin,
            delay,
            half_period_ms,
        }
    }

    /// One half-period: flip the pin, then wait.
    pub fn step(&mut self) -> Result<(), P::Error> {
        self.pin.toggle()?;
        self.delay.delay_ms(self.half_period_ms);
        Ok(())
    }

    /// Blink forever. There is no exit condition.
    pub fn run(&mut self) -> ! {
        loop {
            self.step().ok();
        }
    }

    /// Release the pin and the delay provider.
    pub fn free(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

/// Drives the pin through an explicit high/wait/low/wait cycle each step.
///
/// Unlike the toggle strategy, the output sequence does not depend on the
/// pin's level at start; an unknown initial state is corrected within one
/// cycle.
pub struct SetClearBlinker<P, D> {
    pin: P,
    delay: D,
    on_ms: u16,
    off_ms: u16,
}

impl<P, D> SetClearBlinker<P, D>
where
    P: OutputPin,
    D: DelayMs<u16>,
{
    pub fn new(pin: P, delay: D, on_ms: u16, off_ms: u16) -> Self {
        Self {
            pin,
            delay,
            on_ms,
            off_ms,
        }
    }

    /// One full cycle: high for `on_ms`, low for `off_ms`.
    pub fn step(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()?;
        self.delay.delay_ms(self.on_ms);
        self.pin.set_low()?;
        self.delay.delay_ms(self.off_ms);
        Ok(())
    }

    /// Blink forever. There is no exit condition.
    pub fn run(&mut self) -> ! {
        loop {
            self.step().ok();
        }
    }

    /// Release the pin and the delay provider.
    pub fn free(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    // Records every level transition the driver causes, like the mock
    // writers the integration tests use, but with an adjustable starting
    // level so initial-state behavior can be checked.
    struct RecordingPin {
        level: bool,
        transitions: Vec<bool>,
    }

    impl RecordingPin {
        fn starting(level: bool) -> Self {
            Self {
                level,
                transitions: Vec::new(),
            }
        }
    }

    impl OutputPin for RecordingPin {
        type Error = Infallible;

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level = true;
            self.transitions.push(true);
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level = false;
            self.transitions.push(false);
            Ok(())
        }
    }

    impl ToggleableOutputPin for RecordingPin {
        type Error = Infallible;

        fn toggle(&mut self) -> Result<(), Infallible> {
            self.level = !self.level;
            self.transitions.push(self.level);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        calls: Vec<u16>,
    }

    impl DelayMs<u16> for RecordingDelay {
        fn delay_ms(&mut self, ms: u16) {
            self.calls.push(ms);
        }
    }

    #[test]
    fn toggle_flips_exactly_once_per_step() {
        let mut blinker =
            ToggleBlinker::new(RecordingPin::starting(false), RecordingDelay::default(), 1000);

        for _ in 0..4 {
            blinker.step().unwrap();
        }

        let (pin, delay) = blinker.free();
        assert_eq!(pin.transitions, vec![true, false, true, false]);
        assert_eq!(delay.calls, vec![1000, 1000, 1000, 1000]);
    }

    #[test]
    fn toggle_first_half_period_depends_on_initial_level() {
        let mut from_low =
            ToggleBlinker::new(RecordingPin::starting(false), RecordingDelay::default(), 1000);
        let mut from_high =
            ToggleBlinker::new(RecordingPin::starting(true), RecordingDelay::default(), 1000);

        from_low.step().unwrap();
        from_high.step().unwrap();

        assert_eq!(from_low.free().0.transitions, vec![true]);
        assert_eq!(from_high.free().0.transitions, vec![false]);
    }

    #[test]
    fn set_clear_produces_high_then_low_each_cycle() {
        let mut blinker = SetClearBlinker::new(
            RecordingPin::starting(false),
            RecordingDelay::default(),
            200,
            200,
        );

        blinker.step().unwrap();
        blinker.step().unwrap();

        let (pin, delay) = blinker.free();
        assert_eq!(pin.transitions, vec![true, false, true, false]);
        assert_eq!(delay.calls, vec![200, 200, 200, 200]);
    }

    #[test]
    fn set_clear_self_corrects_unknown_initial_level() {
        // Same observable sequence no matter where the pin started.
        for initial in [false, true] {
            let mut blinker = SetClearBlinker::new(
                RecordingPin::starting(initial),
                RecordingDelay::default(),
                200,
                200,
            );

            blinker.step().unwrap();

            let (pin, _) = blinker.free();
            assert_eq!(pin.transitions, vec![true, false]);
            assert!(!pin.level);
        }
    }

    #[test]
    fn asymmetric_on_off_times_are_respected() {
        let mut blinker = SetClearBlinker::new(
            RecordingPin::starting(false),
            RecordingDelay::default(),
            100,
            800,
        );

        blinker.step().unwrap();

        let (_, delay) = blinker.free();
        assert_eq!(delay.calls, vec![100, 800]);
    }
}
