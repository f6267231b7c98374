use thiserror::Error;

use crate::pattern::Pattern;
use crate::patterns::ELEMENTS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("playlist has no patterns")]
    Empty,
    #[error("unknown pattern: '{0}'")]
    UnknownPattern(String),
}

/// Cycles through a fixed list of patterns.
#[derive(Debug, Clone)]
pub struct Playlist {
    patterns: &'static [Pattern],
    position: usize,
}

impl Playlist {
    pub fn new(patterns: &'static [Pattern]) -> Result<Self, PlaylistError> {
        if patterns.is_empty() {
            return Err(PlaylistError::Empty);
        }
        Ok(Self {
            patterns,
            position: 0,
        })
    }

    /// Playlist over the built-in element patterns.
    pub fn elements() -> Self {
        Self {
            patterns: &ELEMENTS,
            position: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &'static Pattern {
        let patterns = self.patterns;
        &patterns[self.position]
    }

    /// Move to the next pattern, wrapping to the first after the last.
    pub fn advance(&mut self) -> &'static Pattern {
        self.position = (self.position + 1) % self.patterns.len();
        self.current()
    }

    /// Jump to the pattern named `name`, ignoring ASCII case.
    pub fn select(&mut self, name: &str) -> Result<&'static Pattern, PlaylistError> {
        let position = self
            .patterns
            .iter()
            .position(|pattern| pattern.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| PlaylistError::UnknownPattern(name.to_string()))?;
        self.position = position;
        Ok(self.current())
    }
}
