#![forbid(unsafe_code)]

//! Repeat policies: how many cycles an animation loop runs and what it
//! leaves on screen once exhausted.
//!
//! # Invariants
//!
//! 1. `Once` permits exactly one cycle.
//! 2. `Continuous` never stops; its terminal state is unreachable.
//! 3. `TimeBound` stops at a wall-clock budget measured from cycle zero.
//! 4. `CountBound` stops after a fixed number of completed cycles.
//! 5. A zero `count` or zero `duration` permits no cycles at all; the
//!    terminal state applies immediately.

use std::time::Duration;

/// How many times an animation's base cycle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// Run exactly one cycle.
    Once,
    /// Loop forever.
    Continuous,
    /// Loop until `duration` of wall-clock time has elapsed.
    TimeBound {
        /// Total time budget across all cycles.
        duration: Duration,
        /// Whether the completed state stays visible after the budget runs out.
        show_after_complete: bool,
    },
    /// Loop a fixed number of cycles.
    CountBound {
        /// Number of cycles to run.
        count: u32,
        /// Whether the completed state stays visible after the last cycle.
        show_after_complete: bool,
    },
}

impl Repeat {
    /// Whether another cycle may run given total elapsed time and the number
    /// of cycles already completed.
    pub fn should_continue(&self, elapsed: Duration, cycles_completed: u32) -> bool {
        match *self {
            Repeat::Once => cycles_completed == 0,
            Repeat::Continuous => true,
            Repeat::TimeBound { duration, .. } => elapsed < duration,
            Repeat::CountBound { count, .. } => cycles_completed < count,
        }
    }

    /// Whether the finished animation leaves its completed state visible.
    ///
    /// `Once` conventionally shows its end state; `Continuous` never reaches
    /// a terminal state, so the answer is moot but defined.
    pub fn terminal_visibility(&self) -> bool {
        match *self {
            Repeat::Once | Repeat::Continuous => true,
            Repeat::TimeBound {
                show_after_complete,
                ..
            }
            | Repeat::CountBound {
                show_after_complete,
                ..
            } => show_after_complete,
        }
    }

    /// Whether this policy can ever stop.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Repeat::Continuous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC_1: Duration = Duration::from_secs(1);

    #[test]
    fn once_runs_single_cycle() {
        let r = Repeat::Once;
        assert!(r.should_continue(Duration::ZERO, 0));
        assert!(!r.should_continue(Duration::ZERO, 1));
        assert!(r.terminal_visibility());
    }

    #[test]
    fn continuous_never_stops() {
        let r = Repeat::Continuous;
        assert!(r.should_continue(Duration::from_secs(3600), u32::MAX));
        assert!(!r.is_bounded());
    }

    #[test]
    fn time_bound_stops_at_deadline() {
        let r = Repeat::TimeBound {
            duration: SEC_1,
            show_after_complete: true,
        };
        assert!(r.should_continue(Duration::from_millis(999), 50));
        assert!(!r.should_continue(SEC_1, 0));
        assert!(r.terminal_visibility());
    }

    #[test]
    fn count_bound_stops_at_count() {
        let r = Repeat::CountBound {
            count: 3,
            show_after_complete: false,
        };
        assert!(r.should_continue(Duration::ZERO, 2));
        assert!(!r.should_continue(Duration::ZERO, 3));
        assert!(!r.terminal_visibility());
    }

    #[test]
    fn zero_count_runs_no_cycles() {
        let r = Repeat::CountBound {
            count: 0,
            show_after_complete: true,
        };
        assert!(!r.should_continue(Duration::ZERO, 0));
    }

    #[test]
    fn zero_duration_runs_no_cycles() {
        let r = Repeat::TimeBound {
            duration: Duration::ZERO,
            show_after_complete: false,
        };
        assert!(!r.should_continue(Duration::ZERO, 0));
    }
}
