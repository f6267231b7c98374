//! Frame-table animations for addressable LED strips.
//!
//! Patterns are compiled-in tables of packed `0xRRGGBB` colors, one table
//! per frame. A [`player::PatternPlayer`] writes each frame to an
//! [`LedStrip`], pushes it and waits for the pattern's delay, checking a
//! [`stop::StopToken`] before every pixel write.

pub use smart_leds::RGB8;

pub mod buffered;
pub mod button;
pub mod color;
pub mod config;
pub mod pattern;
pub mod patterns;
pub mod player;
pub mod playlist;
pub mod stop;

/// Trait for writing pixel colors to an addressable LED strip.
///
/// Abstracts over the WS2812 driver (ESP32) and host-side strips
/// (recording, terminal), providing the uniform capability set the
/// player needs.
pub trait LedStrip {
    /// Error type for driver failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Number of addressable LEDs on the strip.
    fn len(&self) -> usize;

    /// Returns `true` if the strip has no LEDs. Pairs with `len` for
    /// clippy's `len_without_is_empty`; strips rarely need to override it.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set one pixel in the strip's buffer. Nothing is sent until [`show`](Self::show).
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), Self::Error>;

    /// Push the buffer to the physical device.
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Set every pixel in the buffer to black.
    fn clear(&mut self) -> Result<(), Self::Error>;
}

#[cfg(target_os = "espidf")]
pub mod esp32;

#[cfg(not(target_os = "espidf"))]
pub mod mock;
