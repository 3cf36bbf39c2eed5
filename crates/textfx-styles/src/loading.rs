#![forbid(unsafe_code)]

//! Loading indicators: infinite by construction.
//!
//! Neither variant ever finishes, queues `Completed`, or takes a repeat
//! policy; a loading indicator stops by being dropped. The cross-fade blends
//! the outgoing and incoming glyphs through the snapshot overlay channel; the
//! bar group renders one glyph per bar, each bar riding a phase-shifted
//! triangle wave through the glyph sequence.

use std::time::Duration;

use textfx_core::Snapshot;

use crate::StyleError;
use crate::machine::{StyleEvent, StyleMachine};
use crate::style::LoadingParams;

/// Braille spinner frames, the stock cross-fade sequence.
pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Block-height frames, the stock bar-group sequence.
pub const LINE: &[&str] = &["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

#[derive(Debug, Clone)]
enum Mode {
    CrossFade,
    Bars { bar_count: u32 },
}

/// An endless loading indicator.
#[derive(Debug, Clone)]
pub struct LoadingMachine {
    glyphs: Vec<String>,
    cycle: Duration,
    mode: Mode,
    elapsed: Duration,
}

impl LoadingMachine {
    /// Build an indicator from `params`.
    ///
    /// Fails with [`StyleError::EmptyFrames`] on an empty glyph sequence and
    /// [`StyleError::ZeroBars`] on a zero-bar group.
    pub fn new(params: LoadingParams) -> Result<Self, StyleError> {
        let (glyphs, cycle, mode) = match params {
            LoadingParams::CrossFade {
                glyphs,
                cycle_duration,
            } => (glyphs, cycle_duration, Mode::CrossFade),
            LoadingParams::Bars {
                glyphs,
                bar_count,
                cycle_duration,
            } => {
                if bar_count == 0 {
                    return Err(StyleError::ZeroBars);
                }
                (glyphs, cycle_duration, Mode::Bars { bar_count })
            }
        };
        if glyphs.is_empty() {
            return Err(StyleError::EmptyFrames { what: "glyphs" });
        }
        Ok(Self {
            glyphs,
            // A zero cycle would divide by zero; one millisecond is as good
            // as instant.
            cycle: cycle.max(Duration::from_millis(1)),
            mode,
            elapsed: Duration::ZERO,
        })
    }

    /// Convenience: the stock braille cross-fade.
    pub fn dots(cycle_duration: Duration) -> Self {
        // Infallible: the stock sequence is non-empty.
        Self::new(LoadingParams::CrossFade {
            glyphs: DOTS.iter().map(|s| s.to_string()).collect(),
            cycle_duration,
        })
        .unwrap_or_else(|_| unreachable!())
    }

    /// Convenience: a stock block-glyph bar group.
    pub fn line(bar_count: u32, cycle_duration: Duration) -> Result<Self, StyleError> {
        Self::new(LoadingParams::Bars {
            glyphs: LINE.iter().map(|s| s.to_string()).collect(),
            bar_count,
            cycle_duration,
        })
    }

    fn cross_fade_snapshot(&self) -> Snapshot {
        let len = self.glyphs.len();
        // Sawtooth position: whole part picks the glyph, fraction blends
        // toward the next one.
        let pos = self.elapsed.as_secs_f64() / self.cycle.as_secs_f64();
        let idx = (pos as u64 % len as u64) as usize;
        let frac = (pos.fract()) as f32;
        let next = (idx + 1) % len;
        Snapshot::text(&self.glyphs[idx])
            .with_opacity(1.0 - frac)
            .with_overlay(&self.glyphs[next], frac)
    }

    fn bars_snapshot(&self, bar_count: u32) -> Snapshot {
        let len = self.glyphs.len();
        let cycle = self.cycle.as_secs_f64();
        let mut out = String::new();
        for bar in 0..bar_count {
            let shift = cycle * bar as f64 / bar_count as f64;
            let t = ((self.elapsed.as_secs_f64() + shift) / cycle).fract();
            // Triangle wave 0 -> 1 -> 0 across one cycle.
            let tri = 1.0 - (2.0 * t - 1.0).abs();
            let idx = (tri * (len - 1) as f64).round() as usize;
            out.push_str(&self.glyphs[idx]);
        }
        Snapshot::text(out)
    }
}

impl StyleMachine for LoadingMachine {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn snapshot(&self) -> Snapshot {
        match self.mode {
            Mode::CrossFade => self.cross_fade_snapshot(),
            Mode::Bars { bar_count } => self.bars_snapshot(bar_count),
        }
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        Vec::new()
    }
}
