use core::time::Duration;

use thiserror::Error;

use crate::RGB8;
use crate::color::unpack;

/// Reasons a pattern cannot be played on a given strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern has no frames")]
    Empty,

    #[error("pattern frames have no LEDs")]
    NoLeds,

    #[error("frame {frame} has {len} LEDs, expected {expected}")]
    RaggedFrame {
        frame: usize,
        len: usize,
        expected: usize,
    },

    #[error("pattern needs {led_count} LEDs but the strip has {strip_len}")]
    TooLong { led_count: usize, strip_len: usize },
}

/// One snapshot of packed `0xRRGGBB` colors, indexed by LED position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame(&'static [u32]);

impl Frame {
    #[inline]
    pub const fn new(colors: &'static [u32]) -> Self {
        Self(colors)
    }

    /// Number of LED positions in this frame.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw packed colors.
    #[inline]
    pub const fn packed(&self) -> &'static [u32] {
        self.0
    }

    /// Decoded colors in LED order.
    pub fn colors(&self) -> impl Iterator<Item = RGB8> + '_ {
        self.0.iter().map(|&packed| unpack(packed))
    }
}

/// An animation: frames shown in order, each held for `delay` after it is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    delay: Duration,
    frames: &'static [Frame],
}

impl Pattern {
    pub const fn new(name: &'static str, delay: Duration, frames: &'static [Frame]) -> Self {
        Self {
            name,
            delay,
            frames,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    #[inline]
    pub const fn frames(&self) -> &'static [Frame] {
        self.frames
    }

    #[inline]
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// LED count the pattern was authored for, taken from its first frame.
    pub fn led_count(&self) -> usize {
        self.frames.first().map_or(0, Frame::len)
    }

    /// Check that every frame has the same length and fits a strip of `strip_len` LEDs.
    pub fn validate(&self, strip_len: usize) -> Result<(), PatternError> {
        if self.frames.is_empty() {
            return Err(PatternError::Empty);
        }

        let expected = self.led_count();

        if let Some((frame, f)) = self
            .frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.len() != expected)
        {
            return Err(PatternError::RaggedFrame {
                frame,
                len: f.len(),
                expected,
            });
        }

        if expected == 0 {
            return Err(PatternError::NoLeds);
        }

        if expected > strip_len {
            return Err(PatternError::TooLong {
                led_count: expected,
                strip_len,
            });
        }

        Ok(())
    }
}
