#![forbid(unsafe_code)]

//! Frame clock: monotonic dt between frames.
//!
//! State machines are dt-driven; hosts that already have frame timing can
//! feed their own deltas. [`FrameClock`] is for hosts that do not: it
//! measures the elapsed time since the previous `tick()` call.

use std::time::{Duration, Instant};

/// Measures the time between successive frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_frame: Instant,
}

impl FrameClock {
    /// Create a clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Elapsed time since the previous `tick()` (or construction), and
    /// re-anchor to now.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        dt
    }

    /// Re-anchor to now without reporting a delta. Call after a pause so the
    /// gap is not delivered as one giant frame.
    pub fn resync(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
