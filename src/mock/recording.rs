use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use thiserror::Error;

use crate::stop::StopToken;
use crate::{LedStrip, RGB8};

/// One observable action on a strip or delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripEvent {
    Set { index: usize, color: RGB8 },
    Show,
    Clear,
    Wait(Duration),
}

/// Shared, ordered log of [`StripEvent`]s.
///
/// Hand clones to a [`MockStrip`] and a [`MockDelay`] to see pixel writes
/// and waits interleaved in the order they happened.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    events: Rc<RefCell<Vec<StripEvent>>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<StripEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&StripEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }

    /// Forget recorded events.
    pub fn reset(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: StripEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Error type for mock strip operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MockStripError {
    #[error("pixel {index} out of range for {len} LEDs")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("show failed")]
    ShowFailed,
}

/// In-memory strip that records every call on a [`Timeline`].
#[derive(Debug, Clone)]
pub struct MockStrip {
    pixels: Vec<RGB8>,
    timeline: Timeline,
    fail_on_show: bool,
}

impl MockStrip {
    /// Creates a black strip of `len` LEDs.
    pub fn new(len: usize, timeline: Timeline) -> Self {
        Self {
            pixels: vec![RGB8::default(); len],
            timeline,
            fail_on_show: false,
        }
    }

    /// Make every [`show`](LedStrip::show) fail with [`MockStripError::ShowFailed`].
    pub fn fail_on_show(mut self) -> Self {
        self.fail_on_show = true;
        self
    }

    /// Current buffer contents.
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }
}

impl LedStrip for MockStrip {
    type Error = MockStripError;

    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), Self::Error> {
        let len = self.pixels.len();
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(MockStripError::IndexOutOfRange { index, len })?;
        *pixel = color;
        self.timeline.push(StripEvent::Set { index, color });
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        if self.fail_on_show {
            return Err(MockStripError::ShowFailed);
        }
        self.timeline.push(StripEvent::Show);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.pixels.fill(RGB8::default());
        self.timeline.push(StripEvent::Clear);
        Ok(())
    }
}

/// Delay that returns immediately and records the requested wait.
#[derive(Debug, Clone)]
pub struct MockDelay {
    timeline: Timeline,
    stop_after: Option<(usize, StopToken)>,
    waits: usize,
}

impl MockDelay {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            stop_after: None,
            waits: 0,
        }
    }

    /// Request a stop on `token` once `waits` delays have elapsed.
    ///
    /// Simulates an input arriving while the player sleeps between frames.
    pub fn stop_after(mut self, waits: usize, token: StopToken) -> Self {
        self.stop_after = Some((waits, token));
        self
    }

    fn record(&mut self, duration: Duration) {
        self.timeline.push(StripEvent::Wait(duration));
        self.waits += 1;
        if let Some((after, token)) = &self.stop_after
            && self.waits == *after
        {
            token.request_stop();
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(Duration::from_millis(u64::from(ms)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_strip_black_on_creation() {
        let strip = MockStrip::new(4, Timeline::new());
        assert_eq!(strip.len(), 4);
        assert!(!strip.is_empty());
        assert!(MockStrip::new(0, Timeline::new()).is_empty());
        assert!(strip.pixels().iter().all(|&p| p == RGB8::default()));
    }

    #[test]
    fn test_mock_strip_rejects_out_of_range() {
        let timeline = Timeline::new();
        let mut strip = MockStrip::new(2, timeline.clone());

        let result = strip.set_pixel(2, RGB8::new(1, 1, 1));

        assert_eq!(
            result,
            Err(MockStripError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(timeline.events().is_empty());
    }

    #[test]
    fn test_mock_strip_clear_blacks_out_buffer() {
        let mut strip = MockStrip::new(2, Timeline::new());
        strip.set_pixel(1, RGB8::new(9, 9, 9)).unwrap();

        strip.clear().unwrap();

        assert_eq!(strip.pixels(), &[RGB8::default(); 2]);
    }

    #[test]
    fn test_mock_delay_stops_after_wait_count() {
        let token = StopToken::new();
        let mut delay = MockDelay::new(Timeline::new()).stop_after(2, token.clone());

        delay.delay_ms(1);
        assert!(!token.is_stop_requested());
        delay.delay_ms(1);
        assert!(token.is_stop_requested());
    }
}
