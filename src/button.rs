//! Debounced push-button used to skip to the next pattern.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Interval between pin reads while waiting.
const POLL_MS: u32 = 10;

/// Time a press must hold before it counts.
const DEBOUNCE_MS: u32 = 20;

/// Describes how the button is physically wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressedTo {
    /// Button connects pin to voltage when pressed. Pin reads HIGH when pressed.
    Voltage,
    /// Button connects pin to ground when pressed. Pin reads LOW when pressed.
    Ground,
}

/// A polled, debounced button on any `embedded-hal` input pin.
///
/// Pull resistors are the caller's job: configure the pin for
/// [`PressedTo::Ground`] with a pull-up, [`PressedTo::Voltage`] with a pull-down.
#[derive(Debug)]
pub struct Button<P> {
    pin: P,
    pressed_to: PressedTo,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P, pressed_to: PressedTo) -> Self {
        Self { pin, pressed_to }
    }

    /// Raw, undebounced state.
    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        match self.pressed_to {
            PressedTo::Voltage => self.pin.is_high(),
            PressedTo::Ground => self.pin.is_low(),
        }
    }

    /// Block until a full press-and-release, ignoring contact bounce.
    pub fn wait_for_press(&mut self, delay: &mut impl DelayNs) -> Result<(), P::Error> {
        loop {
            if !self.is_pressed()? {
                delay.delay_ms(POLL_MS);
                continue;
            }

            delay.delay_ms(DEBOUNCE_MS);
            if !self.is_pressed()? {
                continue;
            }

            while self.is_pressed()? {
                delay.delay_ms(POLL_MS);
            }
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, StripEvent, Timeline};
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Pin that replays a fixed sequence of levels (`true` = high).
    struct ScriptedPin {
        levels: VecDeque<bool>,
    }

    impl ScriptedPin {
        fn new(levels: &[bool]) -> Self {
            Self {
                levels: levels.iter().copied().collect(),
            }
        }

        fn next_level(&mut self) -> bool {
            self.levels.pop_front().expect("pin read past end of script")
        }
    }

    impl ErrorType for ScriptedPin {
        type Error = Infallible;
    }

    impl InputPin for ScriptedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.next_level())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.next_level())
        }
    }

    const H: bool = true;
    const L: bool = false;

    #[test]
    fn test_ground_press_reads_low() {
        let mut button = Button::new(ScriptedPin::new(&[L, H]), PressedTo::Ground);
        assert_eq!(button.is_pressed(), Ok(true));
        assert_eq!(button.is_pressed(), Ok(false));
    }

    #[test]
    fn test_voltage_press_reads_high() {
        let mut button = Button::new(ScriptedPin::new(&[H]), PressedTo::Voltage);
        assert_eq!(button.is_pressed(), Ok(true));
    }

    #[test]
    fn test_wait_for_press_ignores_bounce() {
        let timeline = Timeline::new();
        let mut delay = MockDelay::new(timeline.clone());
        let levels = [H, L, H, H, L, L, L, H];
        let mut button = Button::new(ScriptedPin::new(&levels), PressedTo::Ground);

        button.wait_for_press(&mut delay).unwrap();

        assert!(button.pin.levels.is_empty(), "every level should be read");
        let debounces = timeline.count(|e| *e == StripEvent::Wait(Duration::from_millis(20)));
        assert_eq!(debounces, 2, "bounce and real press both debounce");
    }
}
