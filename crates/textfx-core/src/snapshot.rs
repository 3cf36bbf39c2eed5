#![forbid(unsafe_code)]

//! The instantaneous renderable output of a style state machine.

/// A 2D offset in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    /// Horizontal displacement.
    pub x: f32,
    /// Vertical displacement.
    pub y: f32,
}

impl Offset {
    /// Create an offset.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A secondary glyph drawn over the primary text with its own opacity.
///
/// Only the loading cross-fade produces this: the outgoing and incoming
/// glyphs overlap while their opacities swap.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// The overlaid text.
    pub text: String,
    /// Overlay opacity in [0.0, 1.0].
    pub opacity: f32,
}

/// What a style state machine wants painted right now.
///
/// Always consistent with the machine's current phase: a revealing machine
/// never emits a cover of the wrong length, a typing machine only ever emits
/// prefixes of its text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// The visible text (possibly empty).
    pub text: String,
    /// Opacity in [0.0, 1.0]; `None` means fully opaque.
    pub opacity: Option<f32>,
    /// Positional offset; `None` means unshifted.
    pub offset: Option<Offset>,
    /// Optional cross-fade overlay.
    pub overlay: Option<Overlay>,
}

impl Snapshot {
    /// A plain, unshifted, fully opaque snapshot.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// An empty (nothing visible) snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the opacity (builder).
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Set the offset (builder).
    #[must_use]
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Some(Offset::new(x, y));
        self
    }

    /// Set a cross-fade overlay (builder).
    #[must_use]
    pub fn with_overlay(mut self, text: impl Into<String>, opacity: f32) -> Self {
        self.overlay = Some(Overlay {
            text: text.into(),
            opacity: opacity.clamp(0.0, 1.0),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_snapshot_defaults() {
        let s = Snapshot::text("hi");
        assert_eq!(s.text, "hi");
        assert_eq!(s.opacity, None);
        assert_eq!(s.offset, None);
        assert_eq!(s.overlay, None);
    }

    #[test]
    fn opacity_clamped() {
        assert_eq!(Snapshot::text("x").with_opacity(1.5).opacity, Some(1.0));
        assert_eq!(Snapshot::text("x").with_opacity(-0.5).opacity, Some(0.0));
    }

    #[test]
    fn empty_snapshot_has_no_text() {
        assert!(Snapshot::empty().text.is_empty());
    }

    #[test]
    fn overlay_opacity_clamped() {
        let s = Snapshot::text("a").with_overlay("b", 2.0);
        assert_eq!(s.overlay.unwrap().opacity, 1.0);
    }
}
