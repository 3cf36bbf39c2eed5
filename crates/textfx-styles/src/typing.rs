#![forbid(unsafe_code)]

//! Typing: characters appear one at a time, then a final beat before
//! completion.
//!
//! The visible text is always a grapheme-cluster prefix of the full text, so
//! multi-byte and combining characters never render half-formed. After the
//! last character appears, one more delay elapses before the machine
//! completes, matching the rhythm of the preceding keystrokes.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use textfx_core::{Interval, Snapshot};

use crate::machine::{StyleEvent, StyleMachine};
use crate::style::TypingParams;

/// Reveals a grapheme-cluster prefix of the text, one cluster per delay.
#[derive(Debug, Clone)]
pub struct TypingMachine {
    /// Byte offset of each prefix boundary; `boundaries[k]` ends a k-cluster
    /// prefix. Length is cluster count + 1.
    boundaries: Vec<usize>,
    text: String,
    shown: usize,
    interval: Interval,
    finished: bool,
    events: Vec<StyleEvent>,
}

impl TypingMachine {
    /// Start typing `text` with the given per-character delay.
    ///
    /// Empty text completes immediately, with `Completed` already queued.
    pub fn new(text: impl Into<String>, params: TypingParams) -> Self {
        let text = text.into();
        let mut boundaries = vec![0];
        for (idx, g) in text.grapheme_indices(true) {
            boundaries.push(idx + g.len());
        }
        let finished = boundaries.len() == 1;
        Self {
            boundaries,
            text,
            shown: 0,
            interval: Interval::new(params.delay_per_char),
            finished,
            events: if finished {
                vec![StyleEvent::Completed]
            } else {
                Vec::new()
            },
        }
    }

    fn cluster_count(&self) -> usize {
        self.boundaries.len() - 1
    }
}

impl StyleMachine for TypingMachine {
    fn tick(&mut self, dt: Duration) {
        if self.finished {
            return;
        }
        // One step per character, plus a trailing step that fires completion.
        let remaining = (self.cluster_count() - self.shown + 1) as u32;
        let steps = self.interval.advance(dt, remaining) as usize;
        if steps == 0 {
            return;
        }
        let visible_steps = steps.min(self.cluster_count() - self.shown);
        self.shown += visible_steps;
        if steps > visible_steps {
            self.finished = true;
            self.events.push(StyleEvent::Completed);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::text(&self.text[..self.boundaries[self.shown]])
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);

    fn machine(text: &str) -> TypingMachine {
        TypingMachine::new(text, TypingParams { delay_per_char: MS_50 })
    }

    #[test]
    fn starts_empty() {
        let m = machine("Hi");
        assert_eq!(m.snapshot().text, "");
        assert!(!m.is_finished());
    }

    #[test]
    fn reveals_one_char_per_delay() {
        let mut m = machine("Hi");
        m.tick(MS_50);
        assert_eq!(m.snapshot().text, "H");
        m.tick(MS_50);
        assert_eq!(m.snapshot().text, "Hi");
        assert!(!m.is_finished());
    }

    #[test]
    fn completes_one_delay_after_last_char() {
        let mut m = machine("Hi");
        m.tick(MS_50);
        m.tick(MS_50);
        assert!(m.drain_events().is_empty());
        m.tick(MS_50);
        assert!(m.is_finished());
        assert_eq!(m.drain_events(), vec![StyleEvent::Completed]);
    }

    #[test]
    fn large_dt_covers_the_whole_run() {
        let mut m = machine("abc");
        m.tick(Duration::from_secs(1));
        assert_eq!(m.snapshot().text, "abc");
        assert!(m.is_finished());
        assert_eq!(m.drain_events(), vec![StyleEvent::Completed]);
    }

    #[test]
    fn ticks_after_finish_are_noops() {
        let mut m = machine("a");
        m.tick(Duration::from_secs(1));
        let _ = m.drain_events();
        m.tick(Duration::from_secs(1));
        assert!(m.drain_events().is_empty());
        assert_eq!(m.snapshot().text, "a");
    }

    #[test]
    fn grapheme_clusters_stay_whole() {
        // "e" + combining acute forms one cluster.
        let mut m = machine("e\u{301}x");
        m.tick(MS_50);
        assert_eq!(m.snapshot().text, "e\u{301}");
        m.tick(MS_50);
        assert_eq!(m.snapshot().text, "e\u{301}x");
    }

    #[test]
    fn empty_text_completes_immediately() {
        let mut m = machine("");
        assert!(m.is_finished());
        assert_eq!(m.drain_events(), vec![StyleEvent::Completed]);
        assert_eq!(m.snapshot().text, "");
    }

    #[test]
    fn zero_delay_finishes_on_first_tick() {
        let mut m = TypingMachine::new(
            "hey",
            TypingParams {
                delay_per_char: Duration::ZERO,
            },
        );
        m.tick(Duration::from_nanos(1));
        assert!(m.is_finished());
        assert_eq!(m.snapshot().text, "hey");
    }

    #[test]
    fn partial_tick_carries_remainder() {
        let mut m = machine("ab");
        m.tick(Duration::from_millis(49));
        assert_eq!(m.snapshot().text, "");
        m.tick(Duration::from_millis(1));
        assert_eq!(m.snapshot().text, "a");
    }
}
