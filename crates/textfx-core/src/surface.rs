#![forbid(unsafe_code)]

//! Render surface contract.
//!
//! The host UI tree is an external collaborator: it receives snapshots and
//! paints them, and answers the text-measurement queries the sliding and
//! scrolling machines need before they can compute offsets. Everything else
//! about layout, theming, and widget chrome is the host's business.

use unicode_width::UnicodeWidthStr;

use crate::snapshot::Snapshot;

/// Measured content size in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    /// Content width.
    pub width: f32,
    /// Content height.
    pub height: f32,
}

impl Extent {
    /// Create an extent.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Where snapshots get painted and how text is measured.
pub trait RenderSurface {
    /// Measure the extent `text` would occupy if drawn.
    fn measure(&self, text: &str) -> Extent;

    /// Paint a snapshot.
    fn draw(&mut self, snapshot: &Snapshot);
}

/// A recording surface with fixed per-cell metrics.
///
/// Measures text by display-cell count (wide glyphs count double) and records
/// every draw. Useful in tests and as a reference implementation of the
/// measurement contract.
#[derive(Debug, Clone)]
pub struct StringSurface {
    cell_width: f32,
    cell_height: f32,
    /// Every snapshot drawn, in order.
    pub draws: Vec<Snapshot>,
}

impl StringSurface {
    /// Create a surface with the given per-cell metrics.
    pub fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
            draws: Vec::new(),
        }
    }

    /// The most recent draw, if any.
    pub fn last(&self) -> Option<&Snapshot> {
        self.draws.last()
    }
}

impl Default for StringSurface {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl RenderSurface for StringSurface {
    fn measure(&self, text: &str) -> Extent {
        let mut width = 0usize;
        let mut lines = 0usize;
        for line in text.split('\n') {
            width = width.max(UnicodeWidthStr::width(line));
            lines += 1;
        }
        Extent::new(
            width as f32 * self.cell_width,
            lines.max(1) as f32 * self.cell_height,
        )
    }

    fn draw(&mut self, snapshot: &Snapshot) {
        self.draws.push(snapshot.clone());
    }
}
