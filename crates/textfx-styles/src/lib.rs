#![forbid(unsafe_code)]

//! Display-style state machines for animated text.
//!
//! Each style consumes frame deltas and produces a renderable
//! [`Snapshot`](textfx_core::Snapshot); sessions own a running machine, fire
//! lifecycle hooks, and cancel cleanly when the style's restart key changes.

use std::fmt;

pub mod blinking;
pub mod fading;
pub mod format;
pub mod list;
pub mod loading;
pub mod machine;
pub mod motion;
pub mod one_by_one;
pub mod revealing;
pub mod session;
pub mod sliding;
pub mod stick_and_reveal;
pub mod style;
pub mod time_keeping;
pub mod typing;

pub use blinking::BlinkingMachine;
pub use fading::FadingMachine;
pub use format::Pattern;
pub use list::{join_items, stack_items};
pub use loading::{DOTS, LINE, LoadingMachine};
pub use machine::{StyleEvent, StyleMachine};
pub use motion::MotionMachine;
pub use one_by_one::OneByOneMachine;
pub use revealing::RevealingMachine;
pub use session::{Hooks, Mount, Session};
pub use sliding::{ScrollingMachine, SlidingMachine};
pub use stick_and_reveal::StickAndRevealMachine;
pub use style::{
    BlinkingParams, Cover, DisplayStyle, FadeDirection, FadingParams, GridDirection,
    HorizontalDirection, ItemTransition, LoadingParams, MotionParams, OneByOneParams, RestartKey,
    RevealPace, RevealPattern, RevealingParams, ScrollingListParams, ScrollingParams,
    SlidingListParams, SlidingParams, StickAndRevealParams, TextInput, TimeKeepingParams,
    TypingParams, VerticalDirection,
};
pub use time_keeping::TimeKeepingMachine;
pub use typing::TypingMachine;

/// Errors reported at the style construction boundary.
///
/// These are caller contract violations; running animations never error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A frame/glyph/item sequence was empty where at least one entry is required.
    EmptyFrames {
        /// Which sequence was empty.
        what: &'static str,
    },
    /// A bar-group loading indicator was configured with zero bars.
    ZeroBars,
    /// The input kind does not match the style (single text vs. list).
    InputMismatch {
        /// What the style expected.
        expected: &'static str,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFrames { what } => write!(f, "{what} must not be empty"),
            Self::ZeroBars => write!(f, "bar count must be at least 1"),
            Self::InputMismatch { expected } => {
                write!(f, "input mismatch: this style expects {expected}")
            }
        }
    }
}

impl std::error::Error for StyleError {}
