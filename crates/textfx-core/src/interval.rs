#![forbid(unsafe_code)]

//! Fixed-delay step accumulator.
//!
//! [`Interval`] is the substrate for every discrete-step style (typing,
//! revealing, blinking, frame cycling): it accumulates frame deltas and pays
//! out whole elapsed steps, carrying the remainder so long-running animations
//! do not drift.
//!
//! # Invariants
//!
//! 1. Steps are only produced once at least `delay` has accumulated.
//! 2. Remainder time below one `delay` is carried into the next call.
//! 3. A zero `delay` pays out the full `cap` immediately (instant stepping).
//! 4. `advance(.., 0)` is a no-op that still accumulates time.

use std::time::Duration;

/// Accumulates elapsed time and yields whole fixed-delay steps.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    delay: Duration,
    acc: Duration,
}

impl Interval {
    /// Create an interval stepper with the given per-step delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            acc: Duration::ZERO,
        }
    }

    /// The configured per-step delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Advance by `dt` and return the number of whole steps elapsed, at most
    /// `cap`. Surplus steps beyond `cap` remain banked in the accumulator.
    pub fn advance(&mut self, dt: Duration, cap: u32) -> u32 {
        self.acc = self.acc.saturating_add(dt);
        if cap == 0 {
            return 0;
        }
        if self.delay.is_zero() {
            // Instant stepping: drain the accumulator, pay out everything.
            self.acc = Duration::ZERO;
            return cap;
        }
        let mut steps = 0;
        while steps < cap && self.acc >= self.delay {
            self.acc -= self.delay;
            steps += 1;
        }
        steps
    }

    /// Drop any banked time and start accumulating from zero.
    pub fn reset(&mut self) {
        self.acc = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_10: Duration = Duration::from_millis(10);

    #[test]
    fn no_steps_before_delay() {
        let mut iv = Interval::new(MS_10);
        assert_eq!(iv.advance(Duration::from_millis(9), u32::MAX), 0);
    }

    #[test]
    fn one_step_at_delay() {
        let mut iv = Interval::new(MS_10);
        assert_eq!(iv.advance(MS_10, u32::MAX), 1);
    }

    #[test]
    fn remainder_carries() {
        let mut iv = Interval::new(MS_10);
        assert_eq!(iv.advance(Duration::from_millis(9), u32::MAX), 0);
        assert_eq!(iv.advance(Duration::from_millis(1), u32::MAX), 1);
    }

    #[test]
    fn large_dt_pays_multiple_steps() {
        let mut iv = Interval::new(MS_10);
        assert_eq!(iv.advance(Duration::from_millis(35), u32::MAX), 3);
        // 5ms remainder banked.
        assert_eq!(iv.advance(Duration::from_millis(5), u32::MAX), 1);
    }

    #[test]
    fn cap_limits_payout_and_banks_surplus() {
        let mut iv = Interval::new(MS_10);
        assert_eq!(iv.advance(Duration::from_millis(50), 2), 2);
        // Remaining 30ms still banked.
        assert_eq!(iv.advance(Duration::ZERO, 5), 3);
    }

    #[test]
    fn zero_cap_accumulates() {
        let mut iv = Interval::new(MS_10);
        assert_eq!(iv.advance(Duration::from_millis(25), 0), 0);
        assert_eq!(iv.advance(Duration::ZERO, 10), 2);
    }

    #[test]
    fn zero_delay_pays_cap() {
        let mut iv = Interval::new(Duration::ZERO);
        assert_eq!(iv.advance(Duration::ZERO, 7), 7);
        assert_eq!(iv.advance(Duration::from_millis(1), 3), 3);
    }

    #[test]
    fn reset_drops_banked_time() {
        let mut iv = Interval::new(MS_10);
        iv.advance(Duration::from_millis(9), u32::MAX);
        iv.reset();
        assert_eq!(iv.advance(Duration::from_millis(9), u32::MAX), 0);
    }

    #[test]
    fn many_small_ticks_do_not_drift() {
        let mut iv = Interval::new(MS_10);
        let mut total = 0;
        for _ in 0..1000 {
            total += iv.advance(Duration::from_millis(1), u32::MAX);
        }
        assert_eq!(total, 100);
    }
}
