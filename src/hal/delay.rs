use embedded_hal::blocking::delay::DelayMs;

use crate::config::CPU_FREQ_HZ;

// Approximate cost of one spin iteration in CPU cycles (nop, counter
// decrement, compare, branch).
const CYCLES_PER_ITER: u32 = 4;

/// Busy-wait for `ms` milliseconds.
///
/// Calibrated against [`CPU_FREQ_HZ`]. The processor is fully occupied for
/// the whole duration; no timer and no sleep state is involved. If the real
/// clock differs from the configured one, the delay is proportionally off and
/// nothing detects it.
pub fn delay_ms(ms: u16) {
    let iters_per_ms = CPU_FREQ_HZ / 1_000 / CYCLES_PER_ITER;
    for _ in 0..ms {
        spin(iters_per_ms);
    }
}

#[inline(always)]
fn spin(iters: u32) {
    let mut n = iters;
    while n > 0 {
        avr_device::asm::nop();
        n -= 1;
    }
}

/// Busy-wait delay provider for the blink drivers.
pub struct Delay;

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        delay_ms(ms);
    }
}
