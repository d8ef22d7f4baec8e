//! Core clock description
//!
//! The clock tree of this device is fixed in hardware: after reset the
//! core runs from the internal RC oscillator and nothing can be
//! reconfigured at runtime. The types here only record the frequency the
//! core actually runs at, so that software (notably [`crate::delay`]) can
//! calibrate against it.

use crate::time::Hertz;

/// Frequency of the internal RC oscillator the core runs from after reset
const INTERNAL_RC: u32 = 8_000_000; // Hz

/// Clock configuration
pub struct Config {
    sysclk: Hertz,
}

impl Config {
    /// Configuration for a core running from the internal RC oscillator
    pub fn internal_rc() -> Config {
        Config {
            sysclk: Hertz(INTERNAL_RC),
        }
    }

    /// Overrides the recorded core frequency for boards clocked from an
    /// external source
    pub fn sysclk<F>(mut self, freq: F) -> Config
    where
        F: Into<Hertz>,
    {
        self.sysclk = freq.into();
        self
    }

    /// Freezes the clock configuration
    pub fn freeze(self) -> Clocks {
        Clocks {
            sysclk: self.sysclk,
        }
    }
}

/// Frozen core clock frequencies
///
/// The existence of this value indicates that the clock description can
/// no longer be changed.
#[derive(Clone, Copy)]
pub struct Clocks {
    sysclk: Hertz,
}

impl Clocks {
    /// Returns the frequency of the system clock
    pub fn sysclk(&self) -> Hertz {
        self.sysclk
    }
}
