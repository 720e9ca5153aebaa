// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge throttle for playback-progress callbacks.
//!
//! Bounds update frequency without dropping the final sample of a burst:
//! the first sample in a window is applied immediately, later samples are
//! held, and the most recent held sample is applied once the window
//! elapses. Callers pass `now` explicitly so the policy is testable
//! without sleeping.

use std::time::{Duration, Instant};

/// Rate limiter with a trailing-edge flush.
#[derive(Debug)]
pub struct TrailingThrottle {
    window: Duration,
    last_emit: Option<Instant>,
    pending: Option<f32>,
}

impl TrailingThrottle {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_emit: None,
            pending: None,
        }
    }

    /// Offers a sample. Returns the value to apply now, or `None` if it is
    /// held for the trailing edge of the current window.
    pub fn offer(&mut self, value: f32, now: Instant) -> Option<f32> {
        match self.last_emit {
            Some(last) if now.duration_since(last) < self.window => {
                self.pending = Some(value);
                None
            }
            _ => {
                self.last_emit = Some(now);
                self.pending = None;
                Some(value)
            }
        }
    }

    /// Releases the held sample once the window has elapsed.
    ///
    /// Driven by the session's periodic tick; guarantees the last value of
    /// a burst is eventually applied.
    pub fn flush(&mut self, now: Instant) -> Option<f32> {
        let pending = self.pending?;
        match self.last_emit {
            Some(last) if now.duration_since(last) < self.window => None,
            _ => {
                self.last_emit = Some(now);
                self.pending = None;
                Some(pending)
            }
        }
    }

    /// Drops any held sample and restarts the window, e.g. on selection
    /// change so a stale sample cannot leak into the new clip.
    pub fn reset(&mut self) {
        self.last_emit = None;
        self.pending = None;
    }
}
