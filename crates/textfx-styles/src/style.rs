#![forbid(unsafe_code)]

//! Display styles: the declarative parameter records callers hand to a mount.
//!
//! Each style variant carries only immutable, comparable parameters;
//! lifecycle hooks live in [`Hooks`](crate::session::Hooks) so every
//! parameter struct stays `Clone + PartialEq`. The restart key derived from
//! a style (and its input text) decides whether a running session survives a
//! re-render or is torn down and rebuilt.
//!
//! # Restart keys, per style
//!
//! | Style          | Key fields                                     |
//! |----------------|------------------------------------------------|
//! | Typing         | text only (delay changes do not restart)       |
//! | Revealing      | text, pattern, pace (cover/initial delay don't)|
//! | everything else| input text/list + all structural parameters    |

use std::time::Duration;

use textfx_core::Repeat;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// What gets animated: a single string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextInput {
    /// A single text (multi-line allowed; StickAndReveal treats it as a grid).
    Text(String),
    /// An ordered sequence of items/frames.
    List(Vec<String>),
}

impl From<&str> for TextInput {
    fn from(s: &str) -> Self {
        TextInput::Text(s.to_string())
    }
}

impl From<String> for TextInput {
    fn from(s: String) -> Self {
        TextInput::Text(s)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(items: Vec<String>) -> Self {
        TextInput::List(items)
    }
}

// ---------------------------------------------------------------------------
// Per-style parameters
// ---------------------------------------------------------------------------

/// Typing: one character appended per delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypingParams {
    /// Delay before each appended character.
    pub delay_per_char: Duration,
}

/// Which way a fade runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FadeDirection {
    /// Transparent to opaque.
    In,
    /// Opaque to transparent.
    Out,
}

/// Fading: opacity ramp over a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FadingParams {
    /// Fade direction.
    pub direction: FadeDirection,
    /// Ramp duration.
    pub duration: Duration,
}

/// Blinking: visibility toggled every `interval / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlinkingParams {
    /// Full blink cycle length; the toggle period is half of this.
    pub interval: Duration,
    /// How many blinks run.
    pub repeat: Repeat,
}

/// Horizontal travel direction for sliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalDirection {
    /// Enter at the end edge, exit at the start edge.
    TowardsStart,
    /// Enter at the start edge, exit at the end edge.
    TowardsEnd,
}

/// Vertical travel direction for scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalDirection {
    /// Enter at the bottom, exit at the top.
    TowardsTop,
    /// Enter at the top, exit at the bottom.
    TowardsBottom,
}

/// Sliding: horizontal pass across the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlidingParams {
    /// Travel direction.
    pub direction: HorizontalDirection,
    /// Duration of one pass.
    pub duration: Duration,
    /// How many passes run.
    pub repeat: Repeat,
}

/// Scrolling: vertical pass across the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollingParams {
    /// Travel direction.
    pub direction: VerticalDirection,
    /// Duration of one pass.
    pub duration: Duration,
    /// How many passes run.
    pub repeat: Repeat,
}

/// What masks not-yet-revealed characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cover {
    /// The default filler glyph (`'█'`) repeated to the text length.
    Default,
    /// A custom cover. Length 1: repeated. Length equal to the text:
    /// used verbatim. Anything else: its first non-space character repeated.
    Custom(String),
}

/// The order positions get revealed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealPattern {
    /// Index 0 to n-1.
    StartToEnd,
    /// Index n-1 down to 0.
    EndToStart,
    /// Mirrored pair expanding outward from the center.
    CenterToSides,
    /// Mirrored pair contracting inward from both edges.
    SidesToCenter,
}

/// How reveal step timing is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealPace {
    /// A fixed delay before each reveal step.
    ByEachCharacter {
        /// Per-step delay.
        delay: Duration,
    },
    /// A total budget divided by the character count. The division works in
    /// whole milliseconds and drops the remainder.
    ByTotalTime {
        /// Total reveal budget.
        duration: Duration,
    },
}

/// Revealing: cover first, then swap in true characters step by step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevealingParams {
    /// The cover specification.
    pub cover: Cover,
    /// Reveal order.
    pub pattern: RevealPattern,
    /// Step timing.
    pub pace: RevealPace,
    /// Pause before the first reveal step, with the full cover showing.
    pub delay_before_revealing: Duration,
}

/// Directional order for grid (line/column) phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridDirection {
    /// One line at a time, top first.
    TopToBottom,
    /// One line at a time, bottom first.
    BottomToTop,
    /// One column at a time across all lines, leftmost first.
    LeftToRight,
    /// One column at a time across all lines, rightmost first.
    RightToLeft,
}

/// StickAndReveal: cover a multi-line frame progressively, pause, then
/// reveal the true characters progressively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickAndRevealParams {
    /// Glyph the non-whitespace characters are masked with.
    pub cover: char,
    /// Order the cover appears in.
    pub sticking_direction: GridDirection,
    /// Delay before each sticking step.
    pub cover_sticking_delay: Duration,
    /// Pause between the two phases.
    pub delay_before_reveal: Duration,
    /// Order the true characters appear in.
    pub revealing_direction: GridDirection,
    /// Delay before each revealing step.
    pub revealing_delay: Duration,
}

/// Motion: cycle through a list of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotionParams {
    /// How long each frame holds.
    pub delay_before_next: Duration,
    /// How many full passes run.
    pub repeat: Repeat,
}

/// How OneByOne items enter and leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemTransition {
    /// Instant swap.
    None,
    /// Characters appear in place (padded to full width while entering).
    Reveal,
    /// Typing-style prefix growth.
    Typing,
}

/// OneByOne: items shown sequentially with in/out transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneByOneParams {
    /// Transition used for both entry and (mirrored) exit.
    pub transition: ItemTransition,
    /// Total entry-transition time per item, divided across its characters.
    pub transition_in_duration: Duration,
    /// How long each item holds fully visible.
    pub display_duration: Duration,
    /// How many full list passes run (checked between passes, not per item).
    pub repeat: Repeat,
}

/// Loading indicators. Infinite by construction: no repeat policy, no
/// completion callback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadingParams {
    /// Cycle a glyph sequence with a cross-fade between current and next.
    CrossFade {
        /// Glyph sequence (must be non-empty).
        glyphs: Vec<String>,
        /// Time per glyph.
        cycle_duration: Duration,
    },
    /// A group of bars, each ping-ponging through the glyph sequence with a
    /// phase shift of `i * cycle_duration / bar_count`.
    Bars {
        /// Glyph sequence (must be non-empty).
        glyphs: Vec<String>,
        /// Number of bars (must be at least 1).
        bar_count: u32,
        /// Full oscillation period.
        cycle_duration: Duration,
    },
}

/// TimeKeeping: a live clock rendered through the format engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeKeepingParams {
    /// Pattern string (`yyyy`, `MM`, `dd`, `HH`, `mm`, `ss`, `SSS`,
    /// `EEEE`, `EEE`, quoted literals).
    pub format: String,
    /// Whether to re-sample the clock on a timer.
    pub live_update: bool,
    /// Re-sample period when live.
    pub update_interval: Duration,
}

/// SlidingList: join items with a separator, then slide the joined string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlidingListParams {
    /// Separator between items (a single space by default).
    pub separator: String,
    /// The sliding pass underneath.
    pub sliding: SlidingParams,
}

impl SlidingListParams {
    /// Join with the default single-space separator.
    pub fn new(sliding: SlidingParams) -> Self {
        Self {
            separator: " ".to_string(),
            sliding,
        }
    }
}

/// ScrollingList: stack items into one block, then scroll the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollingListParams {
    /// The scrolling pass underneath.
    pub scrolling: ScrollingParams,
}

// ---------------------------------------------------------------------------
// The tagged union
// ---------------------------------------------------------------------------

/// One variant per animation kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayStyle {
    /// Characters appear one at a time.
    Typing(TypingParams),
    /// Visibility toggles on a timer.
    Blinking(BlinkingParams),
    /// Opacity ramps in or out.
    Fading(FadingParams),
    /// Horizontal pass across the container.
    Sliding(SlidingParams),
    /// Vertical pass across the container.
    Scrolling(ScrollingParams),
    /// Cover swapped for true characters step by step.
    Revealing(RevealingParams),
    /// Two-phase cover-then-reveal over a multi-line frame.
    StickAndReveal(StickAndRevealParams),
    /// Frame cycling over a list.
    Motion(MotionParams),
    /// Sequential item display with transitions.
    OneByOne(OneByOneParams),
    /// Infinite loading indicator.
    Loading(LoadingParams),
    /// Live clock.
    TimeKeeping(TimeKeepingParams),
    /// Join a list, then slide it.
    SlidingList(SlidingListParams),
    /// Stack a list, then scroll it.
    ScrollingList(ScrollingListParams),
}

/// The fields whose change forces a session restart.
///
/// Compared with `==` by the mount before re-using a running session.
#[derive(Debug, Clone, PartialEq)]
pub enum RestartKey {
    /// Typing restarts only when the text changes.
    Typing {
        /// The typed text.
        text: String,
    },
    /// Revealing restarts on text, pattern, or pace changes; a new cover or
    /// initial delay does not interrupt a run in flight.
    Revealing {
        /// The revealed text.
        text: String,
        /// Reveal order.
        pattern: RevealPattern,
        /// Step timing.
        pace: RevealPace,
    },
    /// All other styles restart when the input or any structural parameter
    /// changes.
    Structural {
        /// The input text or list.
        input: TextInput,
        /// The full style parameters.
        style: DisplayStyle,
    },
}

impl DisplayStyle {
    /// Derive the restart key for this style over `input`.
    pub fn restart_key(&self, input: &TextInput) -> RestartKey {
        match self {
            DisplayStyle::Typing(_) => RestartKey::Typing {
                text: match input {
                    TextInput::Text(t) => t.clone(),
                    TextInput::List(items) => items.join("\n"),
                },
            },
            DisplayStyle::Revealing(p) => RestartKey::Revealing {
                text: match input {
                    TextInput::Text(t) => t.clone(),
                    TextInput::List(items) => items.join("\n"),
                },
                pattern: p.pattern,
                pace: p.pace,
            },
            _ => RestartKey::Structural {
                input: input.clone(),
                style: self.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typing() -> DisplayStyle {
        DisplayStyle::Typing(TypingParams {
            delay_per_char: Duration::from_millis(50),
        })
    }

    #[test]
    fn typing_key_ignores_delay() {
        let a = typing().restart_key(&"hi".into());
        let b = DisplayStyle::Typing(TypingParams {
            delay_per_char: Duration::from_millis(999),
        })
        .restart_key(&"hi".into());
        assert_eq!(a, b);
    }

    #[test]
    fn typing_key_tracks_text() {
        let a = typing().restart_key(&"hi".into());
        let b = typing().restart_key(&"ho".into());
        assert_ne!(a, b);
    }

    #[test]
    fn revealing_key_ignores_cover() {
        let base = RevealingParams {
            cover: Cover::Default,
            pattern: RevealPattern::StartToEnd,
            pace: RevealPace::ByEachCharacter {
                delay: Duration::from_millis(10),
            },
            delay_before_revealing: Duration::ZERO,
        };
        let mut other = base.clone();
        other.cover = Cover::Custom("*".to_string());
        other.delay_before_revealing = Duration::from_secs(1);

        let a = DisplayStyle::Revealing(base).restart_key(&"abc".into());
        let b = DisplayStyle::Revealing(other).restart_key(&"abc".into());
        assert_eq!(a, b);
    }

    #[test]
    fn revealing_key_tracks_pattern() {
        let mk = |pattern| {
            DisplayStyle::Revealing(RevealingParams {
                cover: Cover::Default,
                pattern,
                pace: RevealPace::ByEachCharacter {
                    delay: Duration::from_millis(10),
                },
                delay_before_revealing: Duration::ZERO,
            })
            .restart_key(&"abc".into())
        };
        assert_ne!(mk(RevealPattern::StartToEnd), mk(RevealPattern::EndToStart));
    }

    #[test]
    fn structural_key_tracks_every_field() {
        let mk = |ms| {
            DisplayStyle::Fading(FadingParams {
                direction: FadeDirection::In,
                duration: Duration::from_millis(ms),
            })
            .restart_key(&"x".into())
        };
        assert_eq!(mk(100), mk(100));
        assert_ne!(mk(100), mk(200));
    }
}
