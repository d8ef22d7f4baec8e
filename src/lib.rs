#![no_std]
#![allow(non_camel_case_types)]

#[cfg(test)]
extern crate std;

pub mod blink;
pub mod clock;
pub mod delay;
pub mod gpio;
pub mod pac;
pub mod prelude;
pub mod time;

pub use embedded_hal::prelude::*;

pub use crate::gpio::GpioExt as _blink_hal_gpio_GpioExt;
pub use crate::time::U32Ext as _blink_hal_time_U32Ext;
