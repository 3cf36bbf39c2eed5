#![forbid(unsafe_code)]

//! Sliding and scrolling: whole-text travel across a container.
//!
//! Both styles share one travel core: a per-pass ramp from just off one edge
//! (progress 0) to just off the opposite edge (progress 1), layered under a
//! repeat policy. The pass boundary is where everything happens: `Completed`
//! is queued per finished pass, the repeat policy is consulted there (a
//! `TimeBound` window is checked at the boundary, so a pass in flight always
//! finishes), and overshoot is forwarded into the next pass so back-to-back
//! passes do not stutter.
//!
//! When a bounded run ends, `show_after_complete` decides the resting state:
//! true parks the text at its natural position (no offset, regardless of
//! travel direction), false freezes it off-screen at the exit edge. `Once` is
//! a fly-through and always ends off-screen.

use std::time::Duration;

use textfx_core::{Animation, EasingFn, Ramp, Repeat, Snapshot, linear};

use crate::machine::{StyleEvent, StyleMachine};
use crate::style::{HorizontalDirection, ScrollingParams, SlidingParams, VerticalDirection};

/// Floor for the per-pass duration. A zero duration would make the pass loop
/// spin once per nanosecond of overshoot.
const MIN_PASS: Duration = Duration::from_millis(1);

/// The 1-D travel span: container size and content size along the travel
/// axis, in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Container size along the travel axis.
    pub container: f32,
    /// Content size along the travel axis.
    pub content: f32,
}

impl Span {
    /// Create a span.
    pub const fn new(container: f32, content: f32) -> Self {
        Self { container, content }
    }

    /// Displacement at eased progress `p`, oriented forward: from `-content`
    /// (off-screen before the start edge) to `container` (off-screen past the
    /// end edge).
    fn forward(&self, p: f32) -> f32 {
        p * (self.container + self.content) - self.content
    }
}

/// Pass/repeat bookkeeping shared by both travel machines.
#[derive(Debug, Clone)]
struct Travel {
    ramp: Ramp,
    repeat: Repeat,
    /// Wall-clock time since start, across all passes.
    clock: Duration,
    cycles: u32,
    finished: bool,
    at_rest: bool,
    events: Vec<StyleEvent>,
}

impl Travel {
    fn new(duration: Duration, repeat: Repeat, easing: EasingFn) -> Self {
        let mut t = Self {
            ramp: Ramp::new(duration.max(MIN_PASS)).easing(easing),
            repeat,
            clock: Duration::ZERO,
            cycles: 0,
            finished: false,
            at_rest: false,
            events: Vec::new(),
        };
        if !repeat.should_continue(Duration::ZERO, 0) {
            // Zero count or zero window: no pass runs at all.
            t.settle();
        }
        t
    }

    fn settle(&mut self) {
        self.finished = true;
        self.at_rest = !matches!(self.repeat, Repeat::Once) && self.repeat.terminal_visibility();
        self.events.push(StyleEvent::Completed);
    }

    fn tick(&mut self, dt: Duration) {
        if self.finished {
            return;
        }
        self.clock = self.clock.saturating_add(dt);
        let mut dt = dt;
        loop {
            self.ramp.tick(dt);
            if !self.ramp.is_complete() {
                return;
            }
            let overshoot = self.ramp.overshoot();
            self.cycles = self.cycles.saturating_add(1);
            self.events.push(StyleEvent::Completed);

            // The policy sees time as of the pass boundary, not the end of
            // this frame.
            let boundary = self.clock.saturating_sub(overshoot);
            if !self.repeat.should_continue(boundary, self.cycles) {
                self.finished = true;
                self.at_rest = !matches!(self.repeat, Repeat::Once)
                    && self.repeat.terminal_visibility();
                return;
            }
            self.ramp.reset();
            if overshoot.is_zero() {
                return;
            }
            dt = overshoot;
        }
    }

    /// Eased progress through the current pass; pinned at 1.0 once finished.
    fn progress(&self) -> f32 {
        self.ramp.value()
    }
}

// ---------------------------------------------------------------------------
// Sliding (horizontal)
// ---------------------------------------------------------------------------

/// Slides text horizontally across the container.
#[derive(Debug, Clone)]
pub struct SlidingMachine {
    text: String,
    span: Span,
    direction: HorizontalDirection,
    travel: Travel,
}

impl SlidingMachine {
    /// Start sliding `text` over the horizontal `span` (container width and
    /// content width).
    pub fn new(text: impl Into<String>, span: Span, params: SlidingParams) -> Self {
        Self {
            text: text.into(),
            span,
            direction: params.direction,
            travel: Travel::new(params.duration, params.repeat, linear),
        }
    }

    /// Replace the default linear pass easing.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.travel.ramp = self.travel.ramp.easing(easing);
        self
    }

    /// Current horizontal displacement.
    pub fn offset_x(&self) -> f32 {
        let p = self.travel.progress();
        match self.direction {
            HorizontalDirection::TowardsEnd => self.span.forward(p),
            HorizontalDirection::TowardsStart => self.span.forward(1.0 - p),
        }
    }
}

impl StyleMachine for SlidingMachine {
    fn tick(&mut self, dt: Duration) {
        self.travel.tick(dt);
    }

    fn snapshot(&self) -> Snapshot {
        if self.travel.at_rest {
            return Snapshot::text(&self.text);
        }
        Snapshot::text(&self.text).with_offset(self.offset_x(), 0.0)
    }

    fn is_finished(&self) -> bool {
        self.travel.finished
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        std::mem::take(&mut self.travel.events)
    }
}

// ---------------------------------------------------------------------------
// Scrolling (vertical)
// ---------------------------------------------------------------------------

/// Scrolls text vertically across the container.
#[derive(Debug, Clone)]
pub struct ScrollingMachine {
    text: String,
    span: Span,
    direction: VerticalDirection,
    travel: Travel,
}

impl ScrollingMachine {
    /// Start scrolling `text` over the vertical `span` (container height and
    /// content height).
    pub fn new(text: impl Into<String>, span: Span, params: ScrollingParams) -> Self {
        Self {
            text: text.into(),
            span,
            direction: params.direction,
            travel: Travel::new(params.duration, params.repeat, linear),
        }
    }

    /// Replace the default linear pass easing.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.travel.ramp = self.travel.ramp.easing(easing);
        self
    }

    /// Current vertical displacement.
    pub fn offset_y(&self) -> f32 {
        let p = self.travel.progress();
        match self.direction {
            VerticalDirection::TowardsBottom => self.span.forward(p),
            VerticalDirection::TowardsTop => self.span.forward(1.0 - p),
        }
    }
}

impl StyleMachine for ScrollingMachine {
    fn tick(&mut self, dt: Duration) {
        self.travel.tick(dt);
    }

    fn snapshot(&self) -> Snapshot {
        if self.travel.at_rest {
            return Snapshot::text(&self.text);
        }
        Snapshot::text(&self.text).with_offset(0.0, self.offset_y())
    }

    fn is_finished(&self) -> bool {
        self.travel.finished
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        std::mem::take(&mut self.travel.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC_1: Duration = Duration::from_secs(1);
    const SPAN: Span = Span::new(100.0, 20.0);

    fn slider(repeat: Repeat) -> SlidingMachine {
        SlidingMachine::new(
            "news",
            SPAN,
            SlidingParams {
                direction: HorizontalDirection::TowardsEnd,
                duration: SEC_1,
                repeat,
            },
        )
    }

    #[test]
    fn towards_end_starts_off_screen_before_start() {
        let m = slider(Repeat::Once);
        assert!((m.offset_x() - -20.0).abs() < 1e-4);
    }

    #[test]
    fn towards_end_crosses_to_the_far_edge() {
        let mut m = slider(Repeat::Once);
        m.tick(SEC_1);
        assert!((m.offset_x() - 100.0).abs() < 1e-4);
        assert!(m.is_finished());
    }

    #[test]
    fn towards_start_is_the_mirror_pass() {
        let mut m = SlidingMachine::new(
            "news",
            SPAN,
            SlidingParams {
                direction: HorizontalDirection::TowardsStart,
                duration: SEC_1,
                repeat: Repeat::Once,
            },
        );
        assert!((m.offset_x() - 100.0).abs() < 1e-4);
        m.tick(SEC_1);
        assert!((m.offset_x() - -20.0).abs() < 1e-4);
    }

    #[test]
    fn midpass_offset_is_linear() {
        let mut m = slider(Repeat::Once);
        m.tick(Duration::from_millis(500));
        // 0.5 * 120 - 20 = 40.
        assert!((m.offset_x() - 40.0).abs() < 0.1);
    }

    #[test]
    fn once_ends_off_screen() {
        let mut m = slider(Repeat::Once);
        m.tick(Duration::from_secs(5));
        assert!(m.is_finished());
        let snap = m.snapshot();
        assert!((snap.offset.unwrap().x - 100.0).abs() < 1e-4);
    }

    #[test]
    fn completed_fires_once_per_pass() {
        let mut m = slider(Repeat::Continuous);
        // 3.5 passes in one dt.
        m.tick(Duration::from_millis(3500));
        let completions = m
            .drain_events()
            .iter()
            .filter(|e| **e == StyleEvent::Completed)
            .count();
        assert_eq!(completions, 3);
        assert!(!m.is_finished());
    }

    #[test]
    fn continuous_restart_forwards_overshoot() {
        let mut m = slider(Repeat::Continuous);
        // 1.25 passes: the new pass should already be 25% in.
        m.tick(Duration::from_millis(1250));
        assert!((m.offset_x() - (0.25 * 120.0 - 20.0)).abs() < 0.1);
    }

    #[test]
    fn count_bound_show_parks_at_rest() {
        let mut m = slider(Repeat::CountBound {
            count: 2,
            show_after_complete: true,
        });
        m.tick(Duration::from_secs(2));
        assert!(m.is_finished());
        let snap = m.snapshot();
        assert_eq!(snap.offset, None);
        assert_eq!(snap.text, "news");
    }

    #[test]
    fn rest_position_ignores_travel_direction() {
        let mut m = SlidingMachine::new(
            "news",
            SPAN,
            SlidingParams {
                direction: HorizontalDirection::TowardsStart,
                duration: SEC_1,
                repeat: Repeat::CountBound {
                    count: 1,
                    show_after_complete: true,
                },
            },
        );
        m.tick(Duration::from_secs(2));
        assert!(m.is_finished());
        // Same natural position as a TowardsEnd run.
        assert_eq!(m.snapshot().offset, None);
    }

    #[test]
    fn count_bound_hide_parks_off_screen() {
        let mut m = slider(Repeat::CountBound {
            count: 1,
            show_after_complete: false,
        });
        m.tick(Duration::from_secs(2));
        assert!(m.is_finished());
        assert!((m.snapshot().offset.unwrap().x - 100.0).abs() < 1e-4);
    }

    #[test]
    fn time_bound_lets_the_pass_in_flight_finish() {
        let mut m = slider(Repeat::TimeBound {
            duration: Duration::from_millis(1500),
            show_after_complete: true,
        });
        // First boundary at 1s is inside the window, second at 2s is not.
        m.tick(Duration::from_secs(3));
        assert!(m.is_finished());
        let completions = m
            .drain_events()
            .iter()
            .filter(|e| **e == StyleEvent::Completed)
            .count();
        assert_eq!(completions, 2);
    }

    #[test]
    fn zero_count_settles_immediately() {
        let mut m = slider(Repeat::CountBound {
            count: 0,
            show_after_complete: true,
        });
        assert!(m.is_finished());
        assert_eq!(m.snapshot().offset, None);
        assert_eq!(m.drain_events(), vec![StyleEvent::Completed]);
    }

    #[test]
    fn scrolling_towards_bottom_travels_down() {
        let mut m = ScrollingMachine::new(
            "a\nb",
            Span::new(10.0, 2.0),
            ScrollingParams {
                direction: VerticalDirection::TowardsBottom,
                duration: SEC_1,
                repeat: Repeat::Once,
            },
        );
        assert!((m.offset_y() - -2.0).abs() < 1e-4);
        m.tick(SEC_1);
        assert!((m.offset_y() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn scrolling_towards_top_travels_up() {
        let mut m = ScrollingMachine::new(
            "a",
            Span::new(10.0, 1.0),
            ScrollingParams {
                direction: VerticalDirection::TowardsTop,
                duration: SEC_1,
                repeat: Repeat::Once,
            },
        );
        let start = m.offset_y();
        m.tick(Duration::from_millis(500));
        assert!(m.offset_y() < start);
    }

    #[test]
    fn ticks_after_finish_are_noops() {
        let mut m = slider(Repeat::Once);
        m.tick(Duration::from_secs(2));
        let _ = m.drain_events();
        m.tick(Duration::from_secs(2));
        assert!(m.drain_events().is_empty());
    }
}
