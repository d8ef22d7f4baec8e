//! Fixed-rate blinking of an output pin
//!
//! [`Blinker`] owns an output pin and a delay provider and drives one
//! complete on/off cycle per call. Repeating the call in an unbounded
//! loop yields a 1 Hz square wave with a 50% duty cycle on the pin.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

/// Time the pin spends at each level during one cycle
pub const HALF_PERIOD_MS: u16 = 1_000;

/// Drives one on/off cycle per call on an output pin
pub struct Blinker<LED, D> {
    led: LED,
    delay: D,
}

impl<LED, D> Blinker<LED, D>
where
    LED: OutputPin,
    D: DelayMs<u16>,
{
    /// Pairs an output pin with a delay provider.
    ///
    /// The pin is not touched until the first call to
    /// [`blink_once`](Blinker::blink_once); until then it keeps driving
    /// whatever level it held when it was configured.
    pub fn new(led: LED, delay: D) -> Self {
        Blinker { led, delay }
    }

    /// Drives the pin high, blocks for [`HALF_PERIOD_MS`], drives it low
    /// and blocks for [`HALF_PERIOD_MS`] again.
    ///
    /// The calling context is blocked for the whole cycle; there is no
    /// suspension point other than the delays and no way to cancel one
    /// once it has started.
    pub fn blink_once(&mut self) -> Result<(), LED::Error> {
        self.led.set_high()?;
        self.delay.delay_ms(HALF_PERIOD_MS);
        self.led.set_low()?;
        self.delay.delay_ms(HALF_PERIOD_MS);
        Ok(())
    }

    /// Releases the pin and the delay provider
    pub fn free(self) -> (LED, D) {
        (self.led, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::{Blinker, HALF_PERIOD_MS};

    use core::cell::RefCell;
    use core::convert::Infallible;

    use std::rc::Rc;
    use std::vec::Vec;

    use embedded_hal::blocking::delay::DelayMs;
    use embedded_hal::digital::v2::OutputPin;

    #[derive(Debug, PartialEq, Clone, Copy)]
    enum Event {
        High,
        Low,
        Wait(u16),
    }

    struct MockPin {
        log: Rc<RefCell<Vec<Event>>>,
    }

    impl OutputPin for MockPin {
        type Error = Infallible;

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::High);
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Low);
            Ok(())
        }
    }

    struct MockDelay {
        log: Rc<RefCell<Vec<Event>>>,
    }

    impl DelayMs<u16> for MockDelay {
        fn delay_ms(&mut self, ms: u16) {
            self.log.borrow_mut().push(Event::Wait(ms));
        }
    }

    fn blinker_with_log() -> (Blinker<MockPin, MockDelay>, Rc<RefCell<Vec<Event>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let pin = MockPin { log: Rc::clone(&log) };
        let delay = MockDelay { log: Rc::clone(&log) };
        (Blinker::new(pin, delay), log)
    }

    #[test]
    fn one_cycle_is_high_wait_low_wait() {
        let (mut blinker, log) = blinker_with_log();

        blinker.blink_once().unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::High,
                Event::Wait(HALF_PERIOD_MS),
                Event::Low,
                Event::Wait(HALF_PERIOD_MS),
            ]
        );
    }

    #[test]
    fn n_cycles_produce_n_pulses() {
        let (mut blinker, log) = blinker_with_log();

        for _ in 0..3 {
            blinker.blink_once().unwrap();
        }

        let log = log.borrow();
        assert_eq!(log.len(), 12);
        let pulses = log.iter().filter(|e| **e == Event::High).count();
        assert_eq!(pulses, 3);
        let elapsed: u32 = log
            .iter()
            .filter_map(|e| match e {
                Event::Wait(ms) => Some(u32::from(*ms)),
                _ => None,
            })
            .sum();
        assert_eq!(elapsed, 3 * 2 * u32::from(HALF_PERIOD_MS));
    }

    #[test]
    fn construction_is_side_effect_free() {
        // The level driven before the first cycle is a hardware-level
        // gap: nothing defines it until `blink_once` runs.
        let (blinker, log) = blinker_with_log();

        assert!(log.borrow().is_empty());
        drop(blinker);
    }

    #[test]
    fn free_returns_the_parts_untouched() {
        let (blinker, log) = blinker_with_log();

        let (_pin, _delay) = blinker.free();

        assert!(log.borrow().is_empty());
    }

    #[derive(Debug, PartialEq)]
    struct PinStuck;

    struct BrokenPin;

    impl OutputPin for BrokenPin {
        type Error = PinStuck;

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(PinStuck)
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(PinStuck)
        }
    }

    #[test]
    fn pin_error_aborts_the_cycle_before_any_delay() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let delay = MockDelay { log: Rc::clone(&log) };
        let mut blinker = Blinker::new(BrokenPin, delay);

        assert_eq!(blinker.blink_once(), Err(PinStuck));
        assert!(log.borrow().is_empty());
    }
}
