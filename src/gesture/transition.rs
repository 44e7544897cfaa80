// SPDX-License-Identifier: MPL-2.0
//! Fixed-duration linear transitions driven by an external clock.

use std::time::{Duration, Instant};

/// Linear interpolation of a single offset between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    /// Animates from `from` to `to` over `duration`, starting at `started_at`.
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Progress in `0.0..=1.0` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Offset at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.progress(now)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

}
