use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_hal::digital::v2::{OutputPin, ToggleableOutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Debug)]
pub struct Pin<PORT, const P: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8> Pin<PORT, P, Input> {
    /// Pins come out of reset as inputs.
    pub const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

// Classic AVR ports: DDRx selects direction, PORTx drives the output level.
#[cfg(feature = "atmega328p")]
macro_rules! classic_port {
    ($PORT:ty, $ddr:ident, $out:ident) => {
        impl<const P: u8> Pin<$PORT, P, Input> {
            /// Set the DDR bit. Setting an already-set bit is a no-op.
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                unsafe {
                    (*<$PORT>::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin {
                    _port: PhantomData,
                    _mode: PhantomData,
                }
            }
        }

        impl<const P: u8> Pin<$PORT, P, Output> {
            #[inline]
            pub fn set_high(&mut self) {
                unsafe {
                    (*<$PORT>::ptr()).$out.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
            }

            #[inline]
            pub fn set_low(&mut self) {
                unsafe {
                    (*<$PORT>::ptr()).$out.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
            }

            #[inline]
            pub fn toggle(&mut self) {
                unsafe {
                    (*<$PORT>::ptr()).$out.modify(|r, w| w.bits(r.bits() ^ (1 << P)));
                }
            }
        }

        impl<const P: u8> OutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            fn set_high(&mut self) -> Result<(), Self::Error> {
                Self::set_high(self);
                Ok(())
            }

            fn set_low(&mut self) -> Result<(), Self::Error> {
                Self::set_low(self);
                Ok(())
            }
        }

        impl<const P: u8> ToggleableOutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            fn toggle(&mut self) -> Result<(), Self::Error> {
                Self::toggle(self);
                Ok(())
            }
        }
    };
}

#[cfg(feature = "atmega328p")]
classic_port!(avr_device::atmega328p::PORTB, ddrb, portb);
#[cfg(feature = "atmega328p")]
classic_port!(avr_device::atmega328p::PORTC, ddrc, portc);
#[cfg(feature = "atmega328p")]
classic_port!(avr_device::atmega328p::PORTD, ddrd, portd);

// Modern AVR ports (megaAVR 0-series, tinyAVR 1-series): DIRSET/OUTSET/
// OUTCLR/OUTTGL strobe registers touch only the written bits, so no
// read-modify-write is needed.
#[cfg(any(feature = "atmega4809", feature = "attiny816"))]
macro_rules! xmega_port {
    ($PORT:ty) => {
        impl<const P: u8> Pin<$PORT, P, Input> {
            /// Strobe the DIRSET bit. Repeating the strobe is a no-op.
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                unsafe {
                    (*<$PORT>::ptr()).dirset.write(|w| w.bits(1 << P));
                }
                Pin {
                    _port: PhantomData,
                    _mode: PhantomData,
                }
            }
        }

        impl<const P: u8> Pin<$PORT, P, Output> {
            #[inline]
            pub fn set_high(&mut self) {
                unsafe {
                    (*<$PORT>::ptr()).outset.write(|w| w.bits(1 << P));
                }
            }

            #[inline]
            pub fn set_low(&mut self) {
                unsafe {
                    (*<$PORT>::ptr()).outclr.write(|w| w.bits(1 << P));
                }
            }

            #[inline]
            pub fn toggle(&mut self) {
                unsafe {
                    (*<$PORT>::ptr()).outtgl.write(|w| w.bits(1 << P));
                }
            }
        }

        impl<const P: u8> OutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            fn set_high(&mut self) -> Result<(), Self::Error> {
                Self::set_high(self);
                Ok(())
            }

            fn set_low(&mut self) -> Result<(), Self::Error> {
                Self::set_low(self);
                Ok(())
            }
        }

        impl<const P: u8> ToggleableOutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            fn toggle(&mut self) -> Result<(), Self::Error> {
                Self::toggle(self);
                Ok(())
            }
        }
    };
}

#[cfg(feature = "atmega4809")]
xmega_port!(avr_device::atmega4809::PORTA);
#[cfg(feature = "atmega4809")]
xmega_port!(avr_device::atmega4809::PORTB);
#[cfg(feature = "atmega4809")]
xmega_port!(avr_device::atmega4809::PORTC);
#[cfg(feature = "atmega4809")]
xmega_port!(avr_device::atmega4809::PORTD);
#[cfg(feature = "atmega4809")]
xmega_port!(avr_device::atmega4809::PORTE);
#[cfg(feature = "atmega4809")]
xmega_port!(avr_device::atmega4809::PORTF);

#[cfg(feature = "attiny816")]
xmega_port!(avr_device::attiny816::PORTA);
#[cfg(feature = "attiny816")]
xmega_port!(avr_device::attiny816::PORTB);
#[cfg(feature = "attiny816")]
xmega_port!(avr_device::attiny816::PORTC);

// Board-specific pin definitions. The LED is wired from the pin through a
// series resistor to ground.
pub mod board {
    use super::{Input, Pin};

    /// PB0, D8 on the Arduino Uno.
    #[cfg(feature = "atmega328p")]
    pub type Led = Pin<avr_device::atmega328p::PORTB, 0, Input>;

    /// PF5, A7 on the Arduino Nano Every.
    #[cfg(feature = "atmega4809")]
    pub type Led = Pin<avr_device::atmega4809::PORTF, 5, Input>;

    /// PB0.
    #[cfg(feature = "attiny816")]
    pub type Led = Pin<avr_device::attiny816::PORTB, 0, Input>;
}
