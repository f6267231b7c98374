use core::fmt::{Debug, Display};

use smart_leds::SmartLedsWrite;
use thiserror::Error;

use crate::{LedStrip, RGB8};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StripError<E> {
    #[error("pixel {index} out of range for {len} LEDs")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("LED driver write failed: {0}")]
    Write(E),
}

/// [`LedStrip`] over any `smart-leds` driver.
///
/// Pixels are staged in an `N`-LED buffer and the whole buffer is written
/// to the driver on [`show`](LedStrip::show).
#[derive(Debug)]
pub struct BufferedStrip<W, const N: usize> {
    driver: W,
    buffer: [RGB8; N],
}

impl<W, const N: usize> BufferedStrip<W, N> {
    pub fn new(driver: W) -> Self {
        Self {
            driver,
            buffer: [RGB8::default(); N],
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[RGB8; N] {
        &self.buffer
    }

    #[inline]
    pub fn driver(&self) -> &W {
        &self.driver
    }
}

impl<W, const N: usize> LedStrip for BufferedStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug + Display,
{
    type Error = StripError<W::Error>;

    fn len(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), Self::Error> {
        let pixel = self
            .buffer
            .get_mut(index)
            .ok_or(StripError::IndexOutOfRange { index, len: N })?;
        *pixel = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.driver
            .write(self.buffer.iter().copied())
            .map_err(StripError::Write)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.buffer = [RGB8::default(); N];
        Ok(())
    }
}
