pub use embedded_hal::prelude::*;

pub use crate::gpio::GpioExt as _blink_hal_gpio_GpioExt;
pub use crate::time::U32Ext as _blink_hal_time_U32Ext;
