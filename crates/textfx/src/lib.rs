#![forbid(unsafe_code)]

//! textfx public facade crate.
//!
//! Re-exports the animation primitives, style machines, and session layer
//! from the internal crates, plus a prelude for day-to-day usage. Most
//! callers only need a [`Mount`], a [`DisplayStyle`], and a
//! [`RenderSurface`] implementation for their UI.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use textfx_core::{
    Animation, Delayed, EasingFn, Ramp, ease_in, ease_in_out, ease_out, linear,
};
pub use textfx_core::{Extent, FrameClock, Interval, Repeat, StringSurface};
pub use textfx_core::{Offset, Overlay, RenderSurface, Snapshot};

// --- Style re-exports ------------------------------------------------------

pub use textfx_styles::{
    BlinkingMachine, FadingMachine, LoadingMachine, MotionMachine, OneByOneMachine,
    RevealingMachine, ScrollingMachine, SlidingMachine, StickAndRevealMachine,
    TimeKeepingMachine, TypingMachine,
};
pub use textfx_styles::{
    BlinkingParams, Cover, DisplayStyle, FadeDirection, FadingParams, GridDirection,
    HorizontalDirection, ItemTransition, LoadingParams, MotionParams, OneByOneParams,
    RestartKey, RevealPace, RevealPattern, RevealingParams, ScrollingListParams,
    ScrollingParams, SlidingListParams, SlidingParams, StickAndRevealParams, TextInput,
    TimeKeepingParams, TypingParams, VerticalDirection,
};
pub use textfx_styles::{DOTS, LINE, Pattern, StyleEvent, StyleMachine};
pub use textfx_styles::{Hooks, Mount, Session, StyleError};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for textfx.
#[derive(Debug)]
pub enum Error {
    /// A style was configured in a way no machine can run.
    Style(StyleError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Style(err) => Some(err),
        }
    }
}

impl From<StyleError> for Error {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}

/// Standard result type for textfx APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DisplayStyle, Error, Extent, FrameClock, Hooks, Mount, Repeat, Result, Session, Snapshot,
        StyleMachine, TextInput,
    };
}
