//! API for busy-wait delays calibrated against the core clock
//!
//! The wait is a pure cycle-counting loop: the core does no other work
//! while a delay is in progress and there is no way to cancel one.
//!
//! Please be aware of potential overflows.
//!
//! # Example
//!
//! ``` no_run
//! use blink_hal as hal;
//!
//! use hal::clock::Config;
//! use hal::delay::Delay;
//! use hal::prelude::*;
//!
//! let clocks = Config::internal_rc().freeze();
//! let mut delay = Delay::new(clocks);
//! loop {
//!     delay.delay_ms(1_000_u16);
//! }
//! ```

use cast::{u16, u32};
use cortex_m::asm;

use crate::clock::Clocks;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};

/// Cycle-counting loop as a delay provider
#[derive(Clone)]
pub struct Delay {
    scale: Scale,
}

#[derive(Clone)]
enum Scale {
    Mult(u32),
    Div(u32),
}

impl Delay {
    /// Configures a delay provider calibrated against the frozen core
    /// clock
    pub fn new(clocks: Clocks) -> Delay {
        let scale = if clocks.sysclk().0 < 1_000_000 {
            Scale::Div(1_000_000 / clocks.sysclk().0)
        } else {
            Scale::Mult(clocks.sysclk().0 / 1_000_000)
        };

        Delay { scale }
    }
}

impl DelayMs<u32> for Delay {
    // At 8 MHz, calling delay_us with ms * 1_000 directly overflows above
    // 0x7FFFF ms, so longer waits are chunked
    fn delay_ms(&mut self, mut ms: u32) {
        const MAX_MS: u32 = 0x0000_FFFF;
        while ms != 0 {
            let current_ms = if ms <= MAX_MS { ms } else { MAX_MS };
            self.delay_us(current_ms * 1_000);
            ms -= current_ms;
        }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        self.delay_us(u32::from(ms) * 1_000);
    }
}

impl DelayMs<u8> for Delay {
    fn delay_ms(&mut self, ms: u8) {
        self.delay_ms(u16(ms));
    }
}

impl DelayUs<u32> for Delay {
    fn delay_us(&mut self, us: u32) {
        let cycles = match self.scale {
            Scale::Div(x) => us / x,
            Scale::Mult(x) => us * x,
        };

        asm::delay(cycles);
    }
}

impl DelayUs<u16> for Delay {
    fn delay_us(&mut self, us: u16) {
        self.delay_us(u32(us))
    }
}

impl DelayUs<u8> for Delay {
    fn delay_us(&mut self, us: u8) {
        self.delay_us(u32(us))
    }
}
