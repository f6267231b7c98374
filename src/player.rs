use embedded_hal::delay::DelayNs;
use log::{debug, info, trace};
use thiserror::Error;

use crate::LedStrip;
use crate::pattern::{Pattern, PatternError};
use crate::stop::StopToken;

/// How a call to [`PatternPlayer::play`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Every frame was shown.
    Completed,
    /// A stop was requested; the strip was cleared and the token reset.
    Interrupted,
}

/// Error returned when a pattern cannot be played.
#[derive(Debug, Error)]
pub enum PlayError<E> {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("LED strip error: {0}")]
    Strip(E),
}

/// Plays [`Pattern`]s on an owned LED strip.
///
/// Generic over the strip driver and the delay provider, so the same loop
/// runs on the WS2812 hardware, in the terminal and against recording mocks.
#[derive(Debug)]
pub struct PatternPlayer<S, D> {
    strip: S,
    delay: D,
}

impl<S, D> PatternPlayer<S, D>
where
    S: LedStrip,
    D: DelayNs,
{
    pub fn new(strip: S, delay: D) -> Self {
        Self { strip, delay }
    }

    #[inline]
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Give back the strip and delay.
    pub fn into_parts(self) -> (S, D) {
        (self.strip, self.delay)
    }

    /// Play every frame of `pattern` once.
    ///
    /// `stop` is checked before each pixel write, and once more after the
    /// last frame's delay. When a stop is seen the strip is cleared and
    /// pushed, the token is reset and [`PlayOutcome::Interrupted`] is
    /// returned; pixels already written in the current frame stay in the
    /// buffer until that clear. The token is reset even if the clear fails.
    pub fn play(
        &mut self,
        pattern: &Pattern,
        stop: &StopToken,
    ) -> Result<PlayOutcome, PlayError<S::Error>> {
        pattern.validate(self.strip.len())?;
        debug!(
            "Playing '{}': {} frames x {} LEDs",
            pattern.name(),
            pattern.frame_count(),
            pattern.led_count()
        );

        let delay_us = u32::try_from(pattern.delay().as_micros()).unwrap_or(u32::MAX);

        for (frame_index, frame) in pattern.frames().iter().enumerate() {
            trace!("'{}' frame {frame_index}", pattern.name());

            for (index, color) in frame.colors().enumerate() {
                if stop.is_stop_requested() {
                    return self.interrupt(pattern, frame_index, stop);
                }
                self.strip
                    .set_pixel(index, color)
                    .map_err(PlayError::Strip)?;
            }

            self.strip.show().map_err(PlayError::Strip)?;
            self.delay.delay_us(delay_us);
        }

        // A stop during the final delay belongs to this play, not the next.
        if stop.is_stop_requested() {
            return self.interrupt(pattern, pattern.frame_count(), stop);
        }

        info!("'{}' completed", pattern.name());
        Ok(PlayOutcome::Completed)
    }

    fn interrupt(
        &mut self,
        pattern: &Pattern,
        frame_index: usize,
        stop: &StopToken,
    ) -> Result<PlayOutcome, PlayError<S::Error>> {
        let blanked = self.blank();
        stop.reset();
        blanked.map_err(PlayError::Strip)?;
        info!("'{}' interrupted at frame {frame_index}", pattern.name());
        Ok(PlayOutcome::Interrupted)
    }

    /// Clear the strip and push the blank buffer.
    pub fn blank(&mut self) -> Result<(), S::Error> {
        self.strip.clear()?;
        self.strip.show()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RGB8;
    use crate::mock::{MockDelay, MockStrip, StripEvent, Timeline};
    use crate::pattern::Frame;
    use core::time::Duration;

    const RED: Frame = Frame::new(&[0xFF0000, 0xFF0000, 0xFF0000]);
    const GREEN: Frame = Frame::new(&[0x00FF00, 0x00FF00, 0x00FF00]);
    const RED_GREEN: Pattern = Pattern::new("red-green", Duration::from_millis(10), &[RED, GREEN]);

    fn player(len: usize) -> (PatternPlayer<MockStrip, MockDelay>, Timeline) {
        let timeline = Timeline::new();
        let strip = MockStrip::new(len, timeline.clone());
        let delay = MockDelay::new(timeline.clone());
        (PatternPlayer::new(strip, delay), timeline)
    }

    fn sets(color: RGB8) -> Vec<StripEvent> {
        (0..3).map(|index| StripEvent::Set { index, color }).collect()
    }

    #[test]
    fn test_play_without_stop_writes_every_frame() {
        let (mut player, timeline) = player(3);
        let stop = StopToken::new();

        let outcome = player.play(&RED_GREEN, &stop).unwrap();

        let mut expected = sets(RGB8::new(255, 0, 0));
        expected.push(StripEvent::Show);
        expected.push(StripEvent::Wait(Duration::from_millis(10)));
        expected.extend(sets(RGB8::new(0, 255, 0)));
        expected.push(StripEvent::Show);
        expected.push(StripEvent::Wait(Duration::from_millis(10)));

        assert_eq!(outcome, PlayOutcome::Completed);
        assert_eq!(timeline.events(), expected);
        assert!(!stop.is_stop_requested());
    }

    #[test]
    fn test_stop_before_second_frame_clears_strip() {
        let timeline = Timeline::new();
        let stop = StopToken::new();
        let strip = MockStrip::new(3, timeline.clone());
        let delay = MockDelay::new(timeline.clone()).stop_after(1, stop.clone());
        let mut player = PatternPlayer::new(strip, delay);

        let outcome = player.play(&RED_GREEN, &stop).unwrap();

        let mut expected = sets(RGB8::new(255, 0, 0));
        expected.push(StripEvent::Show);
        expected.push(StripEvent::Wait(Duration::from_millis(10)));
        expected.push(StripEvent::Clear);
        expected.push(StripEvent::Show);

        assert_eq!(outcome, PlayOutcome::Interrupted);
        assert_eq!(timeline.events(), expected);
        assert!(!stop.is_stop_requested());
        assert!(player.strip().pixels().iter().all(|&p| p == RGB8::default()));
    }

    #[test]
    fn test_stop_before_play_writes_nothing_but_clear() {
        let (mut player, timeline) = player(3);
        let stop = StopToken::new();
        stop.request_stop();

        let outcome = player.play(&RED_GREEN, &stop).unwrap();

        assert_eq!(outcome, PlayOutcome::Interrupted);
        assert_eq!(timeline.events(), vec![StripEvent::Clear, StripEvent::Show]);
    }

    #[test]
    fn test_play_after_interrupt_runs_to_completion() {
        let (mut player, timeline) = player(3);
        let stop = StopToken::new();
        stop.request_stop();
        player.play(&RED_GREEN, &stop).unwrap();
        timeline.reset();

        let outcome = player.play(&RED_GREEN, &stop).unwrap();

        assert_eq!(outcome, PlayOutcome::Completed);
        assert_eq!(timeline.count(|e| matches!(e, StripEvent::Show)), 2);
    }

    #[test]
    fn test_invalid_pattern_is_rejected_before_writing() {
        let (mut player, timeline) = player(2);
        let stop = StopToken::new();

        let result = player.play(&RED_GREEN, &stop);

        assert!(matches!(
            result,
            Err(PlayError::Pattern(PatternError::TooLong {
                led_count: 3,
                strip_len: 2
            }))
        ));
        assert!(timeline.events().is_empty());
    }

    #[test]
    fn test_stop_during_final_delay_interrupts_this_play() {
        let timeline = Timeline::new();
        let stop = StopToken::new();
        let strip = MockStrip::new(3, timeline.clone());
        let delay = MockDelay::new(timeline.clone()).stop_after(2, stop.clone());
        let mut player = PatternPlayer::new(strip, delay);

        let outcome = player.play(&RED_GREEN, &stop).unwrap();

        let events = timeline.events();
        assert_eq!(outcome, PlayOutcome::Interrupted);
        assert_eq!(events[events.len() - 2..], [StripEvent::Clear, StripEvent::Show]);
        assert_eq!(timeline.count(|e| matches!(e, StripEvent::Set { .. })), 6);
        assert!(!stop.is_stop_requested());

        // The stop is not carried into the next play.
        timeline.reset();
        assert_eq!(player.play(&RED_GREEN, &stop).unwrap(), PlayOutcome::Completed);
        assert_eq!(timeline.count(|e| matches!(e, StripEvent::Clear)), 0);
    }

    #[test]
    fn test_sub_millisecond_delay_is_kept() {
        const QUICK: Pattern = Pattern::new("quick", Duration::from_micros(500), &[RED]);
        let (mut player, timeline) = player(3);

        player.play(&QUICK, &StopToken::new()).unwrap();

        assert_eq!(
            timeline.events().last(),
            Some(&StripEvent::Wait(Duration::from_micros(500)))
        );
    }

    #[test]
    fn test_failed_clear_still_resets_token() {
        let timeline = Timeline::new();
        let strip = MockStrip::new(3, timeline.clone()).fail_on_show();
        let mut player = PatternPlayer::new(strip, MockDelay::new(timeline.clone()));
        let stop = StopToken::new();
        stop.request_stop();

        let result = player.play(&RED_GREEN, &stop);

        assert!(matches!(result, Err(PlayError::Strip(_))));
        assert!(!stop.is_stop_requested());
    }

    #[test]
    fn test_strip_error_aborts_play() {
        let timeline = Timeline::new();
        let strip = MockStrip::new(3, timeline.clone()).fail_on_show();
        let mut player = PatternPlayer::new(strip, MockDelay::new(timeline.clone()));

        let result = player.play(&RED_GREEN, &StopToken::new());

        assert!(matches!(result, Err(PlayError::Strip(_))));
        assert_eq!(timeline.count(|e| matches!(e, StripEvent::Wait(_))), 0);
    }
}
