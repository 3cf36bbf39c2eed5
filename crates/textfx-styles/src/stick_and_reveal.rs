#![forbid(unsafe_code)]

//! StickAndReveal: starting from a blank area, the cover progressively
//! sticks into place, holds, then the true characters progressively replace
//! it.
//!
//! The text is treated as a grid of grapheme cells, padded with spaces to a
//! rectangle so column steps are well-defined. Both phases walk the grid one
//! line or one column at a time in their own direction; whitespace cells
//! stay blank throughout. Timing runs on a carry loop, so one large dt can
//! cross phase boundaries without losing time.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use textfx_core::Snapshot;

use crate::machine::{StyleEvent, StyleMachine};
use crate::style::{GridDirection, StickAndRevealParams};

/// One grid step: a whole line or a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Line(usize),
    Column(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Sticking,
    Pause,
    Revealing,
    Done,
}

/// What a grid cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellView {
    Blank,
    Covered,
    Shown,
}

/// Runs the cover-then-reveal sequence over a multi-line frame.
#[derive(Debug, Clone)]
pub struct StickAndRevealMachine {
    /// Grapheme cells, padded to a rectangle.
    grid: Vec<Vec<String>>,
    view: Vec<Vec<CellView>>,
    cover: char,
    stick_order: Vec<Step>,
    reveal_order: Vec<Step>,
    stick_delay: Duration,
    pause: Duration,
    reveal_delay: Duration,
    phase: Phase,
    /// Steps applied in the current walking phase.
    applied: usize,
    /// Time left until the next step (or until the pause ends).
    next_in: Duration,
    events: Vec<StyleEvent>,
}

impl StickAndRevealMachine {
    /// Start the sequence over `text` under `params`.
    pub fn new(text: impl Into<String>, params: StickAndRevealParams) -> Self {
        let text = text.into();
        let mut grid: Vec<Vec<String>> = text
            .split('\n')
            .map(|line| line.graphemes(true).map(str::to_string).collect())
            .collect();
        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut grid {
            row.resize(width, " ".to_string());
        }
        let rows = grid.len();

        let empty = width == 0;
        let phase = if empty { Phase::Done } else { Phase::Sticking };
        Self {
            view: vec![vec![CellView::Blank; width]; rows],
            grid,
            cover: params.cover,
            stick_order: walk(params.sticking_direction, rows, width),
            reveal_order: walk(params.revealing_direction, rows, width),
            stick_delay: params.cover_sticking_delay,
            pause: params.delay_before_reveal,
            reveal_delay: params.revealing_delay,
            phase,
            applied: 0,
            next_in: params.cover_sticking_delay,
            events: if empty {
                vec![StyleEvent::Completed]
            } else {
                Vec::new()
            },
        }
    }

    fn apply(&mut self, step: Step, view: CellView) {
        match step {
            Step::Line(r) => {
                for c in 0..self.grid[r].len() {
                    self.set_cell(r, c, view);
                }
            }
            Step::Column(c) => {
                for r in 0..self.grid.len() {
                    self.set_cell(r, c, view);
                }
            }
        }
    }

    fn set_cell(&mut self, r: usize, c: usize, view: CellView) {
        // Whitespace stays blank in both phases.
        if !self.grid[r][c].trim().is_empty() {
            self.view[r][c] = view;
        }
    }
}

impl StyleMachine for StickAndRevealMachine {
    fn tick(&mut self, mut dt: Duration) {
        loop {
            match self.phase {
                Phase::Done => return,
                Phase::Pause => {
                    if dt < self.next_in {
                        self.next_in -= dt;
                        return;
                    }
                    dt -= self.next_in;
                    self.phase = Phase::Revealing;
                    self.applied = 0;
                    self.next_in = self.reveal_delay;
                }
                Phase::Sticking | Phase::Revealing => {
                    if dt < self.next_in {
                        self.next_in -= dt;
                        return;
                    }
                    dt -= self.next_in;
                    let sticking = self.phase == Phase::Sticking;
                    let order = if sticking {
                        &self.stick_order
                    } else {
                        &self.reveal_order
                    };
                    let step = order[self.applied];
                    let view = if sticking {
                        CellView::Covered
                    } else {
                        CellView::Shown
                    };
                    self.apply(step, view);
                    self.applied += 1;

                    let len = if sticking {
                        self.stick_order.len()
                    } else {
                        self.reveal_order.len()
                    };
                    if self.applied < len {
                        self.next_in = if sticking {
                            self.stick_delay
                        } else {
                            self.reveal_delay
                        };
                    } else if sticking {
                        self.phase = Phase::Pause;
                        self.next_in = self.pause;
                    } else {
                        self.phase = Phase::Done;
                        self.events.push(StyleEvent::Completed);
                        return;
                    }
                }
            }
        }
    }

    fn snapshot(&self) -> Snapshot {
        let mut out = String::new();
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                out.push('\n');
            }
            for (c, cell) in row.iter().enumerate() {
                match self.view[r][c] {
                    CellView::Blank => {
                        // Whitespace cells show themselves; anything else is
                        // not on screen yet.
                        if cell.trim().is_empty() {
                            out.push_str(cell);
                        } else {
                            out.push(' ');
                        }
                    }
                    CellView::Covered => out.push(self.cover),
                    CellView::Shown => out.push_str(cell),
                }
            }
        }
        Snapshot::text(out)
    }

    fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    fn drain_events(&mut self) -> Vec<StyleEvent> {
        std::mem::take(&mut self.events)
    }
}

/// The step sequence a direction produces over a `rows` by `width` grid.
fn walk(direction: GridDirection, rows: usize, width: usize) -> Vec<Step> {
    match direction {
        GridDirection::TopToBottom => (0..rows).map(Step::Line).collect(),
        GridDirection::BottomToTop => (0..rows).rev().map(Step::Line).collect(),
        GridDirection::LeftToRight => (0..width).map(Step::Column).collect(),
        GridDirection::RightToLeft => (0..width).rev().map(Step::Column).collect(),
    }
}
