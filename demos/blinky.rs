#![no_main]
#![no_std]

use panic_halt as _;

use blink_hal as hal;

use crate::hal::{blink::Blinker, clock::Config, delay::Delay, pac, prelude::*};

use cortex_m_rt::entry;

#[entry]
fn main() -> ! {
    if let Some(p) = pac::Peripherals::take() {
        // The core runs from the internal 8 MHz RC oscillator
        let clocks = Config::internal_rc().freeze();

        let port = p.PORT.split();

        // (Re-)configure P0 as output
        let led = cortex_m::interrupt::free(|cs| port.p0.into_push_pull_output(cs));

        let delay = Delay::new(clocks);
        let mut blinker = Blinker::new(led, delay);

        loop {
            // On for a second, off for a second
            blinker.blink_once().ok();
        }
    }

    loop {
        continue;
    }
}
