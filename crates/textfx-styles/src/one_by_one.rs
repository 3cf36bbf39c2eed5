#![forbid(unsafe_code)]

//! OneByOne: items from a list take the stage one after another.
//!
//! Each item runs enter, hold, exit. The enter transition budget is divided
//! evenly across the item's grapheme clusters; the exit mirrors the enter in
//! reverse. `Reveal` keeps the item's full width while entering by padding
//! the unrevealed tail with spaces; `Typing` lets the prefix grow bare;
//! `None` swaps instantly and skips both transition phases.
//!
//! The repeat policy is consulted at full-list boundaries only. When the
//! final pass is knowable up front (`Once`, `CountBound`) and the terminal
//! state is visible, the last item skips its exit so the run ends on a shown
//! item instead of fading it away first.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use textfx_core::{Repeat, Snapshot};

use crate::StyleError;
use crate::machine::{StyleEvent, StyleMachine};
use crate::style::{ItemTransition, OneByOneParams};

/// Floor for the hold time, so a fully zero-cost cycle cannot spin forever.
const MIN_HOLD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Entering; `shown` clusters visible.
    In { shown: usize },
    Hold,
    /// Exiting; `shown` clusters still visible.
    Out { shown: usize },
}

/// Walks the item list with per-item enter/hold/exit phases.
#[derive(Debug, Clone)]
pub struct OneByOneMachine {
    items: Vec<String>,
    transition: ItemTransition,
    in_duration: Duration,
    hold: Duration,
    repeat: Repeat,
    item: usize,
    phase: Phase,
    next_in: Duration,
    /// Time consumed since start; repeat windows are checked against the
    /// exact boundary instant.
    elapsed: Duration,
    passes: u32,
    finished: bool,
    final_text: Option<String>,
    events: Vec<StyleEvent>,
}

impl OneByOneMachine {
    /// Start walking `items` under `params`.
    ///
    /// Fails with [`StyleError::EmptyFrames`] when `items` is empty.
    pub fn new(items: Vec<String>, params: OneByOneParams) -> Result<Self, StyleError> {
        if items.is_empty() {
            return Err(StyleError::EmptyFrames { what: "items" });
        }
        let mut m = Self {
            items,
            transition: params.transition,
            in_duration: params.transition_in_duration,
            hold: params.display_duration.max(MIN_HOLD),
            repeat: params.repeat,
            item: 0,
            phase: Phase::Hold,
            next_in: Duration::ZERO,
            elapsed: Duration::ZERO,
            passes: 0,
            finished: false,
            final_text: None,
            events: Vec::new(),
        };
        if !m.repeat.should_continue(Duration::ZERO, 0) {
            m.finish();
            m.events.push(StyleEvent::Completed);
        } else {
            m.enter_item(0);
        }
        Ok(m)
    }

    fn cluster_count(&self, item: usize) -> usize {
        self.items[item].graphemes(true).count()
    }

    /// Per-cluster transition delay for `item`.
    fn per_char(&self, item: usize) -> Duration {
        let n = self.cluster_count(item) as u32;
        if n == 0 {
            Duration::ZERO
        } else {
            self.in_duration / n
        }
    }

    fn enter_item(&mut self, item: usize) {
        self.item = item;
        if self.transition == ItemTransition::None || self.cluster_count(item) == 0 {
            self.phase = Phase::Hold;
            self.next_in = self.hold;
        } else {
            self.phase = Phase::In { shown: 0 };
            self.next_in = self.per_char(item);
        }
    }

    /// Whether the current pass is known to be the last one.
    fn on_final_pass(&self) -> bool {
        match self.repeat {
            Repeat::Once => true,
            Repeat::CountBound { count, .. } => self.passes + 1 >= count,
            Repeat::Continuous | Repeat::TimeBound { .. } => false,
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.final_text = Some(if self.repeat.terminal_visibility() {
            self.items[self.items.len() - 1].clone()
        } else {
            String::new()
        });
    }

    /// Advance past the current item; handles the pass boundary.
    fn next_item(&mut self) {
        if self.item + 1 < self.items.len() {
            self.enter_item(self.item + 1);
            return;
        }
        self.passes = self.passes.saturating_add(1);
        self.events.push(StyleEvent::Completed);
        if self.repeat.should_continue(self.elapsed, self.passes) {
            self.enter_item(0);
        } else {
            self.finish();
        }
    }

    /// One phase boundary reached; decide what comes next.
    fn advance(&mut self) {
        let n = self.cluster_count(self.item);
        match self.phase {
            Phase::In { shown } => {
                if shown + 1 < n {
                    self.phase = Phase::In { shown: shown + 1 };
                    self.next_in = self.per_char(self.item);
                } else {
                    self.phase = Phase::Hold;
                    self.next_in = self.hold;
                }
            }
            Phase::Hold => {
                let last_item = self.item + 1 == self.items.len();
                let skip_out = last_item
                    && self.on_final_pass()
                    && self.repeat.terminal_visibility();
                if skip_out || self.transition == ItemTransition::None || n == 0 {
                    if skip_out {
                        self.passes = self.passes.saturating_add(1);
                        self.events.push(StyleEvent::Completed);
                        self.finish();
                    } else {
                        self.next_item();
                    }
                } else {
                    self.phase = Phase::Out { shown: n };
                    self.next_in = self.per_char(self.item);
                }
            }
            Phase::Out { shown } => {
                if shown > 1 {
                    self.phase = Phase::Out { shown: shown - 1 };
                    self.next_in = self.per_char(self.item);
                } else {
                    self.next_item();
                }
            }
        }
    }

    /// Visible text for a partially transitioned item.
    fn partial(&self, shown: usize) -> String {
        let clusters: Vec<&str> = self.items[self.item].graphemes(true).collect();
        let mut out: String = clusters[..shown].concat();
        if self.transition == ItemTransition::Reveal {
            for _ in shown..clusters.len() {
                out.push(' ');
            }
        }
        out
    }
}

impl StyleMachine for OneByOneMachine {
    fn tick(&mut self, mut dt: Duration) {
        while !self.finished {
            if dt < self.next_in {
                self.next_in -= dt;
                self.elapsed = self.elapsed.saturating_add(dt);
                return;
            }
            dt -= self.next_in;
            self.elapsed = self.elapsed.saturating_add(self.next_in);
            self.next_in = Duration::ZERO;
            self.advance();
        }
    }

    fn snapshot(&self) -> Snapshot {
        if let Some(text) = &self.final_text {
            return Snapshot::text(text);
        }
        match self.phase {
            Phase::Hold => Snapshot::text(&self.items[self.item]),
            Phase::In { shown } | Phase::Out { shown } => Snapshot::text(self.partial(shown)),
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        std::mem::take(&mut self.events)
    }
}
