//! General Purpose Input / Output

use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_hal::digital::v2::{toggleable, OutputPin, StatefulOutputPin};

use cortex_m::interrupt::CriticalSection;

use crate::pac::{RegisterBlock, PORT};

/// Extension trait to split the port peripheral into independent pins
pub trait GpioExt {
    /// The parts to split the port into
    type Parts;

    /// Splits the port into independent pins
    fn split(self) -> Self::Parts;
}

trait GpioRegExt {
    fn is_set_low(&self, pos: u8) -> bool;
    fn set_high(&self, pos: u8);
    fn set_low(&self, pos: u8);
    fn set_dir_output(&self, pos: u8);
}

/// Input mode (type state)
pub struct Input<MODE> {
    _mode: PhantomData<MODE>,
}

/// Floating input (type state)
pub struct Floating;

/// Output mode (type state)
pub struct Output<MODE> {
    _mode: PhantomData<MODE>,
}

/// Push pull output (type state)
pub struct PushPull;

// The port has no write-1-to-set/clear registers, so level changes are
// plain read-modify-write on the output data register. The port is owned
// by a single thread of control (see `GpioExt::split`), which serializes
// these accesses.
impl GpioRegExt for RegisterBlock {
    fn is_set_low(&self, pos: u8) -> bool {
        self.odr.read() & (1 << pos) == 0
    }

    fn set_high(&self, pos: u8) {
        self.odr.modify(|r| r | (1 << pos));
    }

    fn set_low(&self, pos: u8) {
        self.odr.modify(|r| r & !(1 << pos));
    }

    fn set_dir_output(&self, pos: u8) {
        self.dir.modify(|r| r | (1 << pos));
    }
}

/// GPIO parts
pub struct Parts {
    /// Pin 0
    pub p0: P0<Input<Floating>>,
}

impl GpioExt for PORT {
    type Parts = Parts;

    fn split(self) -> Parts {
        Parts {
            p0: P0 { _mode: PhantomData },
        }
    }
}

/// Pin 0 of the port
pub struct P0<MODE> {
    _mode: PhantomData<MODE>,
}

impl<MODE> P0<MODE> {
    /// Configures the pin to operate as a push pull output pin.
    ///
    /// The output data bit is left untouched: the pin drives whatever
    /// level the output register already held until the first call to
    /// `set_high`/`set_low` defines it.
    pub fn into_push_pull_output(self, _cs: &CriticalSection) -> P0<Output<PushPull>> {
        unsafe { (*PORT::ptr()).set_dir_output(0) };
        P0 { _mode: PhantomData }
    }
}

impl<MODE> StatefulOutputPin for P0<Output<MODE>> {
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        self.is_set_low().map(|v| !v)
    }

    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(unsafe { (*PORT::ptr()).is_set_low(0) })
    }
}

impl<MODE> OutputPin for P0<Output<MODE>> {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(unsafe { (*PORT::ptr()).set_high(0) })
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(unsafe { (*PORT::ptr()).set_low(0) })
    }
}

impl<MODE> toggleable::Default for P0<Output<MODE>> {}
