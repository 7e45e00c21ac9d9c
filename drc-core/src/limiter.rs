//! Outbound frame rate limiter.
//!
//! The remote desktop can update faster than the GamePad link can
//! carry. [`FrameLimiter`] lets at most one frame through per
//! `1000 / rate` milliseconds.

use std::time::{Duration, Instant};

/// Wall-clock gate on pushed frames.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Duration,
    /// Time of the last accepted frame; `None` until the first call.
    last: Option<Instant>,
}

impl FrameLimiter {
    /// Create a limiter for `rate` frames per second (minimum 1).
    pub fn new(rate: u32) -> Self {
        let rate = rate.max(1);
        Self {
            interval: Duration::from_millis(u64::from(1000 / rate)),
            last: None,
        }
    }

    /// Minimum time between accepted frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a frame produced now should be pushed.
    pub fn try_accept(&mut self) -> bool {
        self.try_accept_at(Instant::now())
    }

    /// [`try_accept`](Self::try_accept) with an explicit timestamp.
    ///
    /// The first call only sets the baseline and rejects.
    pub fn try_accept_at(&mut self, now: Instant) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            return false;
        };
        if now.saturating_duration_since(last) >= self.interval {
            self.last = Some(now);
            true
        } else {
            false
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────
