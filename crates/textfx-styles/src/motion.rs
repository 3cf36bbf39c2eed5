#![forbid(unsafe_code)]

//! Motion: cycle through a list of frames on a fixed hold time.
//!
//! A pass shows every frame once; the repeat policy is consulted at the pass
//! boundary (the wrap back to frame zero). A continuous loop cycles silently;
//! a bounded run queues `Completed` once, when it exhausts its policy. A
//! `TimeBound` window is measured against idealized step times (`k * delay`),
//! so frame-rate jitter does not change how many passes run.

use std::time::Duration;

use textfx_core::{Interval, Repeat, Snapshot};

use crate::StyleError;
use crate::machine::{StyleEvent, StyleMachine};
use crate::style::MotionParams;

/// Floor for the per-frame hold. A zero hold would step infinitely fast.
const MIN_HOLD: Duration = Duration::from_millis(1);

/// Steps through frames; finishes (or not) per the repeat policy.
#[derive(Debug, Clone)]
pub struct MotionMachine {
    frames: Vec<String>,
    repeat: Repeat,
    interval: Interval,
    /// Total steps applied since start; the current frame and the completed
    /// pass count both derive from it.
    total_steps: u64,
    finished: bool,
    /// Overrides the frame display once finished.
    final_text: Option<String>,
    events: Vec<StyleEvent>,
}

impl MotionMachine {
    /// Start cycling `frames` under `params`.
    ///
    /// Fails with [`StyleError::EmptyFrames`] when `frames` is empty.
    pub fn new(frames: Vec<String>, params: MotionParams) -> Result<Self, StyleError> {
        if frames.is_empty() {
            return Err(StyleError::EmptyFrames { what: "frames" });
        }
        let mut m = Self {
            frames,
            repeat: params.repeat,
            interval: Interval::new(params.delay_before_next.max(MIN_HOLD)),
            total_steps: 0,
            finished: false,
            final_text: None,
            events: Vec::new(),
        };
        if m.allowed_steps() == Some(0) {
            m.finish();
        }
        Ok(m)
    }

    /// The frame currently showing (before any terminal override).
    pub fn current_frame(&self) -> &str {
        &self.frames[(self.total_steps % self.frames.len() as u64) as usize]
    }

    /// Maximum steps the policy permits; `None` means unbounded.
    fn allowed_steps(&self) -> Option<u64> {
        let len = self.frames.len() as u64;
        match self.repeat {
            Repeat::Once => Some(len),
            Repeat::Continuous => None,
            Repeat::CountBound { count, .. } => Some(count as u64 * len),
            // Pass p ends at p * len * delay; another pass runs only while
            // that instant falls inside the window.
            Repeat::TimeBound { duration, .. } => {
                let pass = self.interval.delay().as_nanos() * len as u128;
                let passes = duration.as_nanos().div_ceil(pass) as u64;
                Some(passes * len)
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.final_text = Some(if self.repeat.terminal_visibility() {
            self.frames[self.frames.len() - 1].clone()
        } else {
            String::new()
        });
        self.events.push(StyleEvent::Completed);
    }
}

impl StyleMachine for MotionMachine {
    fn tick(&mut self, dt: Duration) {
        if self.finished {
            return;
        }
        let cap = match self.allowed_steps() {
            Some(max) => (max - self.total_steps).min(u32::MAX as u64) as u32,
            None => u32::MAX,
        };
        let steps = self.interval.advance(dt, cap) as u64;
        self.total_steps += steps;
        if self.allowed_steps() == Some(self.total_steps) {
            self.finish();
        }
    }

    fn snapshot(&self) -> Snapshot {
        match &self.final_text {
            Some(text) => Snapshot::text(text),
            None => Snapshot::text(self.current_frame()),
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        std::mem::take(&mut self.events)
    }
}
