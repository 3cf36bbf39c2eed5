#![forbid(unsafe_code)]

//! Revealing: the text starts fully masked by a cover, then true characters
//! swap in step by step in a configurable order.
//!
//! The reveal plan is precomputed at construction as a list of steps, each
//! naming the cluster positions it uncovers. The two center-anchored patterns
//! uncover a mirrored pair per step, so every text of length `n` takes
//! `ceil(n / 2)` steps and exactly `n` replacements regardless of pattern.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use textfx_core::{Interval, Snapshot};

use crate::machine::{StyleEvent, StyleMachine};
use crate::style::{Cover, RevealPace, RevealPattern, RevealingParams};

/// Cover glyph used when no custom cover is given (or a custom cover is
/// unusable).
pub const DEFAULT_COVER: &str = "█";

/// Swaps cover glyphs for true characters on a fixed-step timer.
#[derive(Debug, Clone)]
pub struct RevealingMachine {
    clusters: Vec<String>,
    cover: Vec<String>,
    steps: Vec<Vec<usize>>,
    applied: usize,
    revealed: Vec<bool>,
    delay_left: Duration,
    interval: Interval,
    finished: bool,
    events: Vec<StyleEvent>,
}

impl RevealingMachine {
    /// Start revealing `text` under `params`.
    ///
    /// Empty text completes immediately, with `Completed` already queued.
    pub fn new(text: impl Into<String>, params: RevealingParams) -> Self {
        let text = text.into();
        let clusters: Vec<String> = text.graphemes(true).map(str::to_string).collect();
        let n = clusters.len();
        let cover = build_cover(&params.cover, &clusters);
        let steps = build_steps(params.pattern, n);
        let delay = step_delay(params.pace, n);
        let finished = n == 0;
        Self {
            revealed: vec![false; n],
            clusters,
            cover,
            steps,
            applied: 0,
            delay_left: params.delay_before_revealing,
            interval: Interval::new(delay),
            finished,
            events: if finished {
                vec![StyleEvent::Completed]
            } else {
                Vec::new()
            },
        }
    }

    /// Number of reveal steps remaining.
    pub fn steps_remaining(&self) -> usize {
        self.steps.len() - self.applied
    }
}

impl StyleMachine for RevealingMachine {
    fn tick(&mut self, mut dt: Duration) {
        if self.finished {
            return;
        }
        if !self.delay_left.is_zero() {
            if dt < self.delay_left {
                self.delay_left -= dt;
                return;
            }
            dt -= self.delay_left;
            self.delay_left = Duration::ZERO;
        }
        let remaining = (self.steps.len() - self.applied) as u32;
        let paid = self.interval.advance(dt, remaining) as usize;
        for step in &self.steps[self.applied..self.applied + paid] {
            for &idx in step {
                self.revealed[idx] = true;
            }
        }
        self.applied += paid;
        if self.applied == self.steps.len() {
            self.finished = true;
            self.events.push(StyleEvent::Completed);
        }
    }

    fn snapshot(&self) -> Snapshot {
        let mut out = String::new();
        for (i, cluster) in self.clusters.iter().enumerate() {
            if self.revealed[i] {
                out.push_str(cluster);
            } else {
                out.push_str(&self.cover[i]);
            }
        }
        Snapshot::text(out)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Per-position cover clusters, same length as the text.
///
/// A one-cluster custom cover is repeated; a full-length one is used
/// verbatim; anything else falls back to its first non-space cluster (or the
/// default glyph).
fn build_cover(cover: &Cover, clusters: &[String]) -> Vec<String> {
    let n = clusters.len();
    match cover {
        Cover::Default => vec![DEFAULT_COVER.to_string(); n],
        Cover::Custom(s) => {
            let cover_clusters: Vec<String> = s.graphemes(true).map(str::to_string).collect();
            match cover_clusters.len() {
                1 => vec![cover_clusters[0].clone(); n],
                len if len == n => cover_clusters,
                _ => {
                    let glyph = cover_clusters
                        .iter()
                        .find(|c| !c.trim().is_empty())
                        .cloned()
                        .unwrap_or_else(|| DEFAULT_COVER.to_string());
                    vec![glyph; n]
                }
            }
        }
    }
}

/// The reveal plan: cluster indices uncovered per step.
fn build_steps(pattern: RevealPattern, n: usize) -> Vec<Vec<usize>> {
    match pattern {
        RevealPattern::StartToEnd => (0..n).map(|i| vec![i]).collect(),
        RevealPattern::EndToStart => (0..n).rev().map(|i| vec![i]).collect(),
        RevealPattern::CenterToSides => {
            // Mirrored pair expanding outward; for even n the two centermost
            // positions go first, together.
            (0..n.div_ceil(2))
                .map(|i| {
                    let lo = (n - 1) / 2 - i;
                    let hi = n / 2 + i;
                    if lo == hi { vec![lo] } else { vec![lo, hi] }
                })
                .collect()
        }
        RevealPattern::SidesToCenter => (0..n.div_ceil(2))
            .map(|i| {
                let (lo, hi) = (i, n - 1 - i);
                if lo == hi { vec![lo] } else { vec![lo, hi] }
            })
            .collect(),
    }
}

/// Per-step delay from the pace. A total-time budget is divided by the
/// character count in whole milliseconds; the remainder is dropped.
fn step_delay(pace: RevealPace, n: usize) -> Duration {
    match pace {
        RevealPace::ByEachCharacter { delay } => delay,
        RevealPace::ByTotalTime { duration } => {
            if n == 0 {
                Duration::ZERO
            } else {
                Duration::from_millis((duration.as_millis() / n as u128) as u64)
            }
        }
    }
}
