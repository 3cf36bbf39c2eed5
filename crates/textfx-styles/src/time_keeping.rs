#![forbid(unsafe_code)]

//! TimeKeeping: a clock rendered through the pattern engine.
//!
//! The clock is sampled once at construction; with `live_update` it is
//! re-sampled on the update interval, otherwise the first render is frozen.
//! A live clock never finishes. Malformed patterns render their error marker
//! (see [`Pattern`]) instead of failing construction, so a typo shows up on
//! screen where it gets noticed.

use std::time::Duration;

use chrono::Local;

use textfx_core::{Interval, Snapshot};

use crate::format::Pattern;
use crate::machine::{StyleEvent, StyleMachine};
use crate::style::TimeKeepingParams;

/// Renders the local time through a [`Pattern`], optionally re-sampling on a
/// timer.
#[derive(Debug, Clone)]
pub struct TimeKeepingMachine {
    pattern: Pattern,
    live: bool,
    interval: Interval,
    rendered: String,
}

impl TimeKeepingMachine {
    /// Start the clock under `params`, sampling immediately.
    pub fn new(params: TimeKeepingParams) -> Self {
        let pattern = Pattern::parse(&params.format);
        let rendered = pattern.render(&Local::now().naive_local());
        Self {
            pattern,
            live: params.live_update,
            // A zero interval would re-sample every tick anyway; clamp so
            // the stepper stays well-defined.
            interval: Interval::new(params.update_interval.max(Duration::from_millis(1))),
            rendered,
        }
    }

    /// The parsed pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl StyleMachine for TimeKeepingMachine {
    fn tick(&mut self, dt: Duration) {
        if !self.live {
            return;
        }
        if self.interval.advance(dt, u32::MAX) > 0 {
            self.rendered = self.pattern.render(&Local::now().naive_local());
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::text(&self.rendered)
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        Vec::new()
    }
}
