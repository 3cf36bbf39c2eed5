#![forbid(unsafe_code)]

//! Sessions and mounts: the lifecycle layer over the style machines.
//!
//! A [`Session`] owns one running machine plus the caller's hooks; its
//! `tick` drains the machine's queued events and dispatches them to the
//! hooks synchronously, on the caller's thread. A [`Mount`] owns at most one
//! session and decides, on every render, whether the running session
//! survives: the style's restart key is compared against the running one,
//! and only a changed key tears the session down.
//!
//! # Invariants
//!
//! 1. A torn-down session never dispatches again: undrained events are
//!    dropped with the machine, so a hook can never fire for a style that is
//!    no longer mounted.
//! 2. Re-rendering with an unchanged key preserves machine state (a typing
//!    run keeps its progress) but adopts the new hooks.
//! 3. Hooks run synchronously inside `tick`, after the machine has settled,
//!    in queue order.

use std::time::Duration;

use textfx_core::{Extent, RenderSurface, Snapshot};

use crate::StyleError;
use crate::blinking::BlinkingMachine;
use crate::fading::FadingMachine;
use crate::list::{join_items, stack_items};
use crate::loading::LoadingMachine;
use crate::machine::{StyleEvent, StyleMachine};
use crate::motion::MotionMachine;
use crate::one_by_one::OneByOneMachine;
use crate::revealing::RevealingMachine;
use crate::sliding::{ScrollingMachine, SlidingMachine, Span};
use crate::stick_and_reveal::StickAndRevealMachine;
use crate::style::{DisplayStyle, RestartKey, TextInput};
use crate::time_keeping::TimeKeepingMachine;
use crate::typing::TypingMachine;

/// Caller lifecycle hooks. All optional; dispatched synchronously from
/// [`Session::tick`].
#[derive(Default)]
pub struct Hooks {
    on_complete: Option<Box<dyn FnMut()>>,
    on_blink: Option<Box<dyn FnMut()>>,
}

impl Hooks {
    /// No hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once per completed animation pass.
    #[must_use]
    pub fn on_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Called on each return to visibility while blinking.
    #[must_use]
    pub fn on_blink(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_blink = Some(Box::new(f));
        self
    }
}

/// One running animation with its hooks.
pub struct Session {
    machine: Box<dyn StyleMachine>,
    key: RestartKey,
    hooks: Hooks,
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session").field("key", &self.key).finish_non_exhaustive()
    }
}

impl Session {
    /// Advance the machine and dispatch whatever it queued.
    pub fn tick(&mut self, dt: Duration) {
        self.machine.tick(dt);
        for event in self.machine.drain_events() {
            match event {
                StyleEvent::Completed => {
                    if let Some(f) = &mut self.hooks.on_complete {
                        f();
                    }
                }
                StyleEvent::Blink => {
                    if let Some(f) = &mut self.hooks.on_blink {
                        f();
                    }
                }
            }
        }
    }

    /// The machine's current renderable state.
    pub fn snapshot(&self) -> Snapshot {
        self.machine.snapshot()
    }

    /// Whether the underlying machine has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.machine.is_finished()
    }

    /// The restart key this session was mounted with.
    pub fn key(&self) -> &RestartKey {
        &self.key
    }
}

/// Owns at most one session; the attach point for a widget slot.
#[derive(Default)]
pub struct Mount {
    session: Option<Session>,
}

impl Mount {
    /// An empty mount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `style` over `input`, reusing or replacing the running session.
    ///
    /// If the running session's restart key matches, it is kept (machine
    /// state intact) and merely adopts `hooks`. Otherwise the old session is
    /// dropped, with its undispatched events, and a fresh machine is built.
    /// `surface` and `container` feed the geometry the travel styles need.
    pub fn update<S: RenderSurface>(
        &mut self,
        input: &TextInput,
        style: &DisplayStyle,
        hooks: Hooks,
        surface: &S,
        container: Extent,
    ) -> Result<&mut Session, StyleError> {
        let key = style.restart_key(input);
        match &mut self.session {
            Some(session) if session.key == key => {
                session.hooks = hooks;
            }
            _ => {
                textfx_core::debug!(replacing = self.session.is_some(), "mounting style session");
                let machine = build_machine(input, style, surface, container)?;
                self.session = Some(Session {
                    machine,
                    key,
                    hooks,
                });
            }
        }
        Ok(self.session.as_mut().unwrap_or_else(|| unreachable!()))
    }

    /// Drive the running session forward, dispatching hooks. A no-op on an
    /// empty mount.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(session) = &mut self.session {
            session.tick(dt);
        }
    }

    /// The running session's current renderable state.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.session.as_ref().map(Session::snapshot)
    }

    /// Draw the current snapshot onto `surface`, if a session is mounted.
    pub fn render_to<S: RenderSurface>(&self, surface: &mut S) {
        if let Some(session) = &self.session {
            surface.draw(&session.snapshot());
        }
    }

    /// Tear down the running session, if any. Its undispatched events die
    /// with it.
    pub fn clear(&mut self) {
        textfx_core::trace!("session cleared");
        self.session = None;
    }

    /// The running session.
    pub fn session(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Whether a session is mounted.
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }
}

fn require_text<'a>(input: &'a TextInput) -> Result<&'a str, StyleError> {
    match input {
        TextInput::Text(t) => Ok(t),
        TextInput::List(_) => Err(StyleError::InputMismatch {
            expected: "a single text",
        }),
    }
}

fn require_list(input: &TextInput) -> Result<&[String], StyleError> {
    match input {
        TextInput::List(items) => Ok(items),
        TextInput::Text(_) => Err(StyleError::InputMismatch {
            expected: "a list of items",
        }),
    }
}

fn horizontal_span<S: RenderSurface>(surface: &S, container: Extent, text: &str) -> Span {
    Span::new(container.width, surface.measure(text).width)
}

fn vertical_span<S: RenderSurface>(surface: &S, container: Extent, text: &str) -> Span {
    Span::new(container.height, surface.measure(text).height)
}

fn build_machine<S: RenderSurface>(
    input: &TextInput,
    style: &DisplayStyle,
    surface: &S,
    container: Extent,
) -> Result<Box<dyn StyleMachine>, StyleError> {
    Ok(match style {
        DisplayStyle::Typing(p) => Box::new(TypingMachine::new(require_text(input)?, *p)),
        DisplayStyle::Blinking(p) => Box::new(BlinkingMachine::new(require_text(input)?, *p)),
        DisplayStyle::Fading(p) => Box::new(FadingMachine::new(require_text(input)?, *p)),
        DisplayStyle::Sliding(p) => {
            let text = require_text(input)?;
            Box::new(SlidingMachine::new(
                text,
                horizontal_span(surface, container, text),
                *p,
            ))
        }
        DisplayStyle::Scrolling(p) => {
            let text = require_text(input)?;
            Box::new(ScrollingMachine::new(
                text,
                vertical_span(surface, container, text),
                *p,
            ))
        }
        DisplayStyle::Revealing(p) => {
            Box::new(RevealingMachine::new(require_text(input)?, p.clone()))
        }
        DisplayStyle::StickAndReveal(p) => {
            Box::new(StickAndRevealMachine::new(require_text(input)?, p.clone()))
        }
        DisplayStyle::Motion(p) => Box::new(MotionMachine::new(require_list(input)?.to_vec(), *p)?),
        DisplayStyle::OneByOne(p) => {
            Box::new(OneByOneMachine::new(require_list(input)?.to_vec(), *p)?)
        }
        DisplayStyle::Loading(p) => Box::new(LoadingMachine::new(p.clone())?),
        DisplayStyle::TimeKeeping(p) => Box::new(TimeKeepingMachine::new(p.clone())),
        DisplayStyle::SlidingList(p) => {
            let joined = join_items(require_list(input)?, &p.separator);
            let span = horizontal_span(surface, container, &joined);
            Box::new(SlidingMachine::new(joined, span, p.sliding))
        }
        DisplayStyle::ScrollingList(p) => {
            let stacked = stack_items(require_list(input)?);
            let span = vertical_span(surface, container, &stacked);
            Box::new(ScrollingMachine::new(stacked, span, p.scrolling))
        }
    })
}
