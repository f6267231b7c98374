use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation for a running pattern.
///
/// Clones share one flag: hand a clone to the input side (a button task,
/// a stdin reader) and pass this token to
/// [`PatternPlayer::play`](crate::player::PatternPlayer::play). The player
/// checks the flag before every pixel write and resets it once it has
/// cleared the strip.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    requested: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the running pattern to stop at its next pixel.
    #[inline]
    pub fn request_stop(&self) {
        // The flag carries no data, so ordering with other memory is irrelevant.
        self.requested.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_stop_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }

    /// Clear a pending request.
    #[inline]
    pub fn reset(&self) {
        self.requested.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_clear() {
        assert!(!StopToken::new().is_stop_requested());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let token = StopToken::new();
        let remote = token.clone();

        remote.request_stop();
        assert!(token.is_stop_requested());

        token.reset();
        assert!(!remote.is_stop_requested());
    }

    #[test]
    fn test_request_from_another_thread() {
        let token = StopToken::new();
        let remote = token.clone();

        std::thread::spawn(move || remote.request_stop())
            .join()
            .expect("stop thread should not panic");

        assert!(token.is_stop_requested());
    }
}
