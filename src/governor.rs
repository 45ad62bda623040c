//! Frame-rate governor
//!
//! Bounds the draw cadence to a configured cap using one-second counting
//! windows. Throttling keys off the previous window's frame count, so it
//! reacts one window late: a brief overshoot at startup is possible, which
//! is acceptable for bounding a casual draw loop. Time is injected by the
//! caller so tests can drive a simulated clock.

use std::time::Duration;

/// What `attempt_frame` did with the offered tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered,
    /// Draw skipped because the previous window hit the cap
    Skipped,
}

/// Approximate, self-correcting frame-rate limiter.
#[derive(Debug, Clone)]
pub struct FrameGovernor {
    cap: u32,
    /// Frames rendered in completed windows
    total_frames: u64,
    /// Frames rendered in the current one-second window
    window_frames: u32,
    window_start: Duration,
    /// Count from the most recently completed window
    last_window: u32,
    throttled: bool,
}

impl FrameGovernor {
    pub fn new(cap: u32) -> Self {
        Self {
            cap,
            total_frames: 0,
            window_frames: 0,
            window_start: Duration::ZERO,
            last_window: 0,
            throttled: false,
        }
    }

    /// Offer a render tick at `now` (time since session start).
    ///
    /// Rolls the counting window when a full second has elapsed, then either
    /// invokes `draw` or skips it if the previous window already reached the
    /// cap. A `draw` error is surfaced unchanged; governor state is still
    /// consistent afterwards.
    pub fn attempt_frame<E>(
        &mut self,
        now: Duration,
        draw: impl FnOnce() -> Result<(), E>,
    ) -> Result<FrameOutcome, E> {
        if now.saturating_sub(self.window_start) >= Duration::from_secs(1) {
            self.total_frames += self.window_frames as u64;
            self.last_window = self.window_frames;
            self.window_frames = 0;
            self.window_start = now;
            self.throttled = self.last_window >= self.cap;
            if self.throttled {
                log::debug!(
                    "throttling: {} frames last window, cap {}",
                    self.last_window,
                    self.cap
                );
            }
        }

        if self.throttled {
            return Ok(FrameOutcome::Skipped);
        }

        draw()?;
        self.window_frames += 1;
        Ok(FrameOutcome::Rendered)
    }

    /// Lifetime average frame rate: total frames over total elapsed time.
    ///
    /// A smoothed metric, not an instantaneous one.
    pub fn fps(&self, now: Duration) -> f32 {
        let secs = now.as_secs_f32();
        if secs <= 0.0 {
            return 0.0;
        }
        (self.total_frames + self.window_frames as u64) as f32 / secs
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames + self.window_frames as u64
    }
}
