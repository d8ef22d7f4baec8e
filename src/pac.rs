//! Peripheral access for the LED port
//!
//! The device exposes a single byte-wide GPIO port as three consecutive
//! 8-bit registers starting at the port base address. No vendor PAC exists
//! for this part, so the register block is written out by hand in the
//! svd2rust style.

use core::cell::UnsafeCell;
use core::marker::PhantomData;
use core::ops::Deref;
use core::ptr::{read_volatile, write_volatile};

/// Base address of the port register block.
const PORT_BASE: usize = 0x5000_0000;

/// An 8-bit memory mapped register.
#[repr(transparent)]
pub struct Reg(UnsafeCell<u8>);

impl Reg {
    pub(crate) const fn new(bits: u8) -> Self {
        Reg(UnsafeCell::new(bits))
    }

    /// Reads the current register value.
    #[inline(always)]
    pub fn read(&self) -> u8 {
        // NOTE(unsafe) atomic read with no side effects
        unsafe { read_volatile(self.0.get()) }
    }

    /// Writes `bits` to the register.
    #[inline(always)]
    pub fn write(&self, bits: u8) {
        // NOTE(unsafe) the register belongs to an owned peripheral
        unsafe { write_volatile(self.0.get(), bits) }
    }

    /// Reads the register, transforms the value and writes it back.
    #[inline(always)]
    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        self.write(f(self.read()));
    }
}

/// Register block of the port.
#[repr(C)]
pub struct RegisterBlock {
    /// Input data register
    pub idr: Reg,
    /// Direction control register
    pub dir: Reg,
    /// Output data register
    pub odr: Reg,
}

/// The port peripheral.
pub struct PORT {
    _marker: PhantomData<*const ()>,
}

unsafe impl Send for PORT {}

impl PORT {
    /// Returns a pointer to the register block.
    pub fn ptr() -> *const RegisterBlock {
        PORT_BASE as *const _
    }
}

impl Deref for PORT {
    type Target = RegisterBlock;

    fn deref(&self) -> &RegisterBlock {
        unsafe { &*PORT::ptr() }
    }
}

/// All the device peripherals.
#[allow(non_snake_case)]
pub struct Peripherals {
    /// The LED port
    pub PORT: PORT,
}

static mut DEVICE_PERIPHERALS: bool = false;

impl Peripherals {
    /// Returns all the peripherals the first time it is called, `None` on
    /// any later call.
    pub fn take() -> Option<Peripherals> {
        cortex_m::interrupt::free(|_| {
            if unsafe { DEVICE_PERIPHERALS } {
                None
            } else {
                Some(unsafe { Peripherals::steal() })
            }
        })
    }

    /// Unchecked version of [`Peripherals::take`].
    ///
    /// # Safety
    ///
    /// Creates a second handle to the hardware if the peripherals have
    /// already been taken.
    pub unsafe fn steal() -> Peripherals {
        DEVICE_PERIPHERALS = true;

        Peripherals {
            PORT: PORT {
                _marker: PhantomData,
            },
        }
    }
}
