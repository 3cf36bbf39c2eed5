//! Property-based invariant tests for the timing primitives.
//!
//! These verify structural invariants that must hold for any inputs:
//!
//! 1. A ramp's value is always in [0.0, 1.0] and never regresses.
//! 2. Splitting a tick into pieces never changes a ramp's final state.
//! 3. An interval pays out exactly floor(total / delay) steps overall,
//!    however the total is sliced.
//! 4. An interval never pays more than its cap.

use std::time::Duration;

use proptest::prelude::*;
use textfx_core::{Animation, Interval, Ramp};

proptest! {
    #[test]
    fn ramp_value_bounded_and_monotonic(
        duration_ms in 1u64..5_000,
        ticks in prop::collection::vec(0u64..200, 0..100),
    ) {
        let mut ramp = Ramp::new(Duration::from_millis(duration_ms));
        let mut prev = ramp.value();
        for t in ticks {
            ramp.tick(Duration::from_millis(t));
            let v = ramp.value();
            prop_assert!((0.0..=1.0).contains(&v));
            prop_assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn ramp_is_tick_split_invariant(
        duration_ms in 1u64..2_000,
        total_ms in 0u64..4_000,
        split_ms in 0u64..4_000,
    ) {
        let split_ms = split_ms.min(total_ms);
        let mut whole = Ramp::new(Duration::from_millis(duration_ms));
        whole.tick(Duration::from_millis(total_ms));

        let mut halves = Ramp::new(Duration::from_millis(duration_ms));
        halves.tick(Duration::from_millis(split_ms));
        halves.tick(Duration::from_millis(total_ms - split_ms));

        prop_assert_eq!(whole.is_complete(), halves.is_complete());
        prop_assert!((whole.value() - halves.value()).abs() < 1e-6);
    }

    #[test]
    fn interval_total_steps_match_elapsed_time(
        delay_ms in 1u64..100,
        ticks in prop::collection::vec(0u64..50, 1..200),
    ) {
        let mut iv = Interval::new(Duration::from_millis(delay_ms));
        let mut paid: u64 = 0;
        let mut total_ms: u64 = 0;
        for t in &ticks {
            paid += iv.advance(Duration::from_millis(*t), u32::MAX) as u64;
            total_ms += t;
        }
        prop_assert_eq!(paid, total_ms / delay_ms);
    }

    #[test]
    fn interval_respects_the_cap(
        delay_ms in 1u64..50,
        dt_ms in 0u64..10_000,
        cap in 0u32..20,
    ) {
        let mut iv = Interval::new(Duration::from_millis(delay_ms));
        prop_assert!(iv.advance(Duration::from_millis(dt_ms), cap) <= cap);
    }
}
