#![forbid(unsafe_code)]

//! Blinking: visibility toggles every half interval.
//!
//! The text starts visible and flips at `interval / 2` boundaries, so one
//! full `interval` covers a hidden-then-visible round trip. A "blink" is a
//! transition back to visible; that is what `CountBound` counts and what the
//! [`StyleEvent::Blink`] event marks.
//!
//! Toggle scheduling is arithmetic over idealized toggle times (`k * half`),
//! not a per-toggle loop, so a single large dt settles in O(1) no matter how
//! many periods it spans.

use std::time::Duration;

use textfx_core::{Repeat, Snapshot};

use crate::machine::{StyleEvent, StyleMachine};
use crate::style::BlinkingParams;

/// Minimum half-period. A zero interval would otherwise toggle infinitely
/// fast; clamping keeps the math finite and the event queue bounded.
const MIN_HALF: Duration = Duration::from_millis(1);

/// Toggles text visibility on a fixed half-interval timer.
#[derive(Debug, Clone)]
pub struct BlinkingMachine {
    text: String,
    repeat: Repeat,
    half: Duration,
    acc: Duration,
    /// Total toggles applied since start. Parity gives visibility: even means
    /// visible (the starting state).
    toggles: u64,
    finished: bool,
    /// Forced visibility after a bounded run ends, overriding parity.
    final_visible: Option<bool>,
    events: Vec<StyleEvent>,
}

impl BlinkingMachine {
    /// Start blinking `text` under `params`.
    pub fn new(text: impl Into<String>, params: BlinkingParams) -> Self {
        let half = (params.interval / 2).max(MIN_HALF);
        let mut m = Self {
            text: text.into(),
            repeat: params.repeat,
            half,
            acc: Duration::ZERO,
            toggles: 0,
            finished: false,
            final_visible: None,
            events: Vec::new(),
        };
        // Degenerate bounds finish before the first toggle.
        if m.allowed_toggles() == Some(0) {
            m.finish();
        }
        m
    }

    /// Whether the text is currently visible.
    pub fn is_visible(&self) -> bool {
        match self.final_visible {
            Some(v) => v,
            None => self.toggles % 2 == 0,
        }
    }

    /// Maximum toggles the repeat policy permits; `None` means unbounded.
    fn allowed_toggles(&self) -> Option<u64> {
        match self.repeat {
            // One round trip: hidden, then back to visible.
            Repeat::Once => Some(2),
            Repeat::Continuous => None,
            // Toggle k happens at idealized time k * half; it runs only if
            // that instant falls strictly inside the window.
            Repeat::TimeBound { duration, .. } => {
                if duration.is_zero() {
                    Some(0)
                } else {
                    Some(((duration.as_nanos() - 1) / self.half.as_nanos()) as u64)
                }
            }
            // Blink j lands on toggle 2j.
            Repeat::CountBound { count, .. } => Some(2 * count as u64),
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.final_visible = Some(match self.repeat {
            Repeat::Once | Repeat::Continuous => true,
            Repeat::TimeBound {
                show_after_complete,
                ..
            }
            | Repeat::CountBound {
                show_after_complete,
                ..
            } => show_after_complete,
        });
        self.events.push(StyleEvent::Completed);
    }
}

impl StyleMachine for BlinkingMachine {
    fn tick(&mut self, dt: Duration) {
        if self.finished {
            return;
        }
        self.acc = self.acc.saturating_add(dt);
        let mut steps = (self.acc.as_nanos() / self.half.as_nanos()) as u64;
        self.acc -= self.half * steps as u32;

        let hit_bound = match self.allowed_toggles() {
            Some(max) => {
                let remaining = max.saturating_sub(self.toggles);
                if steps >= remaining {
                    steps = remaining;
                    true
                } else {
                    false
                }
            }
            None => false,
        };

        // Transitions back to visible among `steps` toggles from the current
        // parity: starting visible they land on every second toggle, starting
        // hidden on the first and every second after.
        let blinks = if self.toggles % 2 == 0 {
            steps / 2
        } else {
            steps.div_ceil(2)
        };
        self.toggles += steps;
        for _ in 0..blinks {
            self.events.push(StyleEvent::Blink);
        }

        if hit_bound {
            self.finish();
        }
    }

    fn snapshot(&self) -> Snapshot {
        if self.is_visible() {
            Snapshot::text(&self.text)
        } else {
            Snapshot::empty()
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        std::mem::take(&mut self.events)
    }
}
