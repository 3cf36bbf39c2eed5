#![forbid(unsafe_code)]

//! The contract every style state machine fulfils.
//!
//! Machines are synchronous and dt-driven. Lifecycle notifications are
//! queued as [`StyleEvent`]s during `tick` and collected by the owner via
//! [`StyleMachine::drain_events`]; the machine itself never holds a callback.
//! A session that is torn down before draining simply drops its queue, which
//! is what makes cancellation airtight: no stale hook can fire.
//!
//! # Invariants
//!
//! 1. `snapshot()` is pure and repeatable between ticks.
//! 2. Once `is_finished()` returns true, further ticks are no-ops and the
//!    snapshot is frozen.
//! 3. `Completed` is queued in the same tick its boundary falls in, even
//!    when a single large dt covers several boundaries.

use std::time::Duration;

use textfx_core::Snapshot;

/// A lifecycle notification queued by a machine during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleEvent {
    /// An animation pass (or, for frame cycling, the whole bounded run)
    /// finished. Never queued again after the machine finishes.
    Completed,
    /// Visibility toggled to visible (blinking only).
    Blink,
}

/// A running animation: consumes frame deltas, produces snapshots, queues
/// lifecycle events.
pub trait StyleMachine {
    /// Advance by the elapsed time since the previous frame.
    fn tick(&mut self, dt: Duration);

    /// The current renderable state.
    fn snapshot(&self) -> Snapshot;

    /// Whether the machine has reached a terminal state. Infinite styles
    /// (loading, live clocks, continuous repeats) always return false.
    fn is_finished(&self) -> bool;

    /// Take all events queued since the last drain, in order.
    fn drain_events(&mut self) -> Vec<StyleEvent>;
}
