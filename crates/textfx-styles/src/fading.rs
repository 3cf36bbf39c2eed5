#![forbid(unsafe_code)]

//! Fading: a linear opacity ramp over the full text.

use std::time::Duration;

use textfx_core::{Animation, Ramp, Snapshot};

use crate::machine::{StyleEvent, StyleMachine};
use crate::style::{FadeDirection, FadingParams};

/// Ramps opacity from transparent to opaque (`In`) or back (`Out`).
#[derive(Debug, Clone)]
pub struct FadingMachine {
    text: String,
    direction: FadeDirection,
    ramp: Ramp,
    finished: bool,
    events: Vec<StyleEvent>,
}

impl FadingMachine {
    /// Start fading `text` under `params`.
    pub fn new(text: impl Into<String>, params: FadingParams) -> Self {
        Self {
            text: text.into(),
            direction: params.direction,
            ramp: Ramp::new(params.duration),
            finished: false,
            events: Vec::new(),
        }
    }

    /// Current opacity in [0.0, 1.0].
    pub fn opacity(&self) -> f32 {
        match self.direction {
            FadeDirection::In => self.ramp.value(),
            FadeDirection::Out => 1.0 - self.ramp.value(),
        }
    }
}

impl StyleMachine for FadingMachine {
    fn tick(&mut self, dt: Duration) {
        if self.finished {
            return;
        }
        self.ramp.tick(dt);
        if self.ramp.is_complete() {
            self.finished = true;
            self.events.push(StyleEvent::Completed);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::text(&self.text).with_opacity(self.opacity())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        std::mem::take(&mut self.events)
    }
}
