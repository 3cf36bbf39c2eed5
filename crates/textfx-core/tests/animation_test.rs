//! Integration tests for the animation primitives.

use std::time::Duration;

use textfx_core::{Animation, Delayed, Interval, Ramp, Repeat, ease_in_out};

const MS_100: Duration = Duration::from_millis(100);
const SEC_1: Duration = Duration::from_secs(1);

#[test]
fn ramp_duration_tracking() {
    let mut ramp = Ramp::new(SEC_1);
    for _ in 0..1000 {
        ramp.tick(Duration::from_millis(1));
    }
    assert!(ramp.is_complete(), "1000x1ms should complete a 1s ramp");
}

#[test]
fn delayed_ramp_completes_in_one_big_tick() {
    let mut d = Delayed::new(MS_100, Ramp::new(MS_100));
    d.tick(Duration::from_millis(200));
    assert!(
        d.is_complete(),
        "200ms tick should complete a 100ms delay plus 100ms ramp"
    );
}

#[test]
fn delayed_overshoot_reaches_the_inner_ramp() {
    let mut d = Delayed::new(MS_100, Ramp::new(SEC_1));
    d.tick(Duration::from_millis(600));
    // 500ms of the tick lands inside the ramp.
    assert!((d.value() - 0.5).abs() < 0.01);
}

#[test]
fn eased_ramp_stays_monotonic() {
    let mut ramp = Ramp::new(SEC_1).easing(ease_in_out);
    let mut prev = ramp.value();
    for _ in 0..100 {
        ramp.tick(Duration::from_millis(10));
        let v = ramp.value();
        assert!(v >= prev, "eased value regressed: {prev} -> {v}");
        prev = v;
    }
}

#[test]
fn interval_and_ramp_agree_on_elapsed_time() {
    // An interval at 10ms and a 1s ramp fed the same deltas should agree
    // that one second has passed.
    let mut iv = Interval::new(Duration::from_millis(10));
    let mut ramp = Ramp::new(SEC_1);
    let mut steps = 0;
    for _ in 0..125 {
        let dt = Duration::from_millis(8);
        steps += iv.advance(dt, u32::MAX);
        ramp.tick(dt);
    }
    assert_eq!(steps, 100);
    assert!(ramp.is_complete());
}

#[test]
fn repeat_policies_disagree_only_where_expected() {
    let once = Repeat::Once;
    let forever = Repeat::Continuous;
    assert!(once.should_continue(SEC_1, 0));
    assert!(!once.should_continue(SEC_1, 1));
    assert!(forever.should_continue(SEC_1, u32::MAX));
}
