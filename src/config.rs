//! Compile-time configuration for the blinker variants.
//!
//! The clock constants are per-board calibration facts; they are close to one
//! another but intentionally not unified.

/// Assumed CPU frequency in Hz. Delay calibration trusts this blindly; if the
/// hardware clock differs, the only symptom is wrong blink timing.
#[cfg(feature = "atmega328p")]
pub const CPU_FREQ_HZ: u32 = 3_000_000;

#[cfg(feature = "atmega4809")]
pub const CPU_FREQ_HZ: u32 = 3_333_333;

#[cfg(feature = "attiny816")]
pub const CPU_FREQ_HZ: u32 = 3_330_000;

/// Blink half-period in milliseconds (toggle strategy).
#[cfg(feature = "atmega328p")]
pub const BLINK_HALF_PERIOD_MS: u16 = 1_000;

/// LED on time in milliseconds (set/clear strategy).
#[cfg(any(feature = "atmega4809", feature = "attiny816"))]
pub const BLINK_ON_MS: u16 = 200;

/// LED off time in milliseconds (set/clear strategy).
#[cfg(any(feature = "atmega4809", feature = "attiny816"))]
pub const BLINK_OFF_MS: u16 = 200;
