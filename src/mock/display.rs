use std::io::{self, Write};

use crate::{LedStrip, RGB8};

/// Terminal-based LED strip for development and testing.
///
/// Keeps a pixel buffer and, on every [`show`](LedStrip::show), redraws it
/// as one row of 24-bit ANSI colored cells.
#[derive(Debug)]
pub struct TerminalStrip<W = io::Stdout> {
    pixels: Vec<RGB8>,
    out: W,
}

impl TerminalStrip {
    /// Create a strip of `len` LEDs drawn to stdout.
    pub fn new(len: usize) -> Self {
        Self::with_writer(len, io::stdout())
    }
}

impl<W: Write> TerminalStrip<W> {
    pub fn with_writer(len: usize, out: W) -> Self {
        Self {
            pixels: vec![RGB8::default(); len],
            out,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

/// Error type for terminal strip operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
    #[error("pixel {index} out of range for {len} LEDs")]
    IndexOutOfRange { index: usize, len: usize },
}

impl<W: Write> LedStrip for TerminalStrip<W> {
    type Error = DisplayError;

    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), Self::Error> {
        let len = self.pixels.len();
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(DisplayError::IndexOutOfRange { index, len })?;
        *pixel = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        render_pixels(&mut self.out, &self.pixels)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.pixels.fill(RGB8::default());
        Ok(())
    }
}

/// Render pixels to any writer. Extracted for testability.
///
/// Starts with a carriage return so successive frames overwrite each other.
fn render_pixels(w: &mut impl Write, pixels: &[RGB8]) -> Result<(), DisplayError> {
    write!(w, "\r")?;
    for pixel in pixels {
        write!(w, "{}", format_pixel(*pixel))?;
    }
    write!(w, "\x1b[0m")?;
    w.flush()?;
    Ok(())
}

/// Map a color to a two-character ANSI truecolor background cell.
fn format_pixel(color: RGB8) -> String {
    format!("\x1b[48;2;{};{};{}m  ", color.r, color.g, color.b)
}
