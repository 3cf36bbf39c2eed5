//! End-to-end session lifecycle: mounting, restart keys, hook dispatch, and
//! cancellation through the public API.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use textfx_core::{Extent, Repeat, StringSurface};
use textfx_styles::{
    BlinkingParams, DisplayStyle, Hooks, Mount, RevealPace, RevealPattern, TypingParams,
};
use textfx_styles::{Cover, RevealingParams};

const MS_50: Duration = Duration::from_millis(50);

fn typing() -> DisplayStyle {
    DisplayStyle::Typing(TypingParams { delay_per_char: MS_50 })
}

fn container() -> Extent {
    Extent::new(80.0, 24.0)
}

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    (count, move || inner.set(inner.get() + 1))
}

#[test]
fn full_typing_run_through_a_mount() {
    let (count, hook) = counter();
    let surface = StringSurface::default();
    let mut mount = Mount::new();
    let session = mount
        .update(
            &"Hi".into(),
            &typing(),
            Hooks::new().on_complete(hook),
            &surface,
            container(),
        )
        .unwrap();

    let mut frames = Vec::new();
    for _ in 0..4 {
        frames.push(session.snapshot().text);
        session.tick(MS_50);
    }
    assert_eq!(frames, vec!["", "H", "Hi", "Hi"]);
    assert_eq!(count.get(), 1);
}

#[test]
fn replacing_the_style_cancels_pending_hooks() {
    let (stale, stale_hook) = counter();
    let surface = StringSurface::default();
    let mut mount = Mount::new();
    mount
        .update(
            &"a".into(),
            &typing(),
            Hooks::new().on_complete(stale_hook),
            &surface,
            container(),
        )
        .unwrap();

    // Replace before any tick; the old session dies with its hook unfired.
    let session = mount
        .update(
            &"a".into(),
            &DisplayStyle::Blinking(BlinkingParams {
                interval: Duration::from_millis(100),
                repeat: Repeat::Continuous,
            }),
            Hooks::new(),
            &surface,
            container(),
        )
        .unwrap();
    session.tick(Duration::from_secs(10));
    assert_eq!(stale.get(), 0);
}

#[test]
fn revealing_key_survives_a_cover_change() {
    let surface = StringSurface::default();
    let mut mount = Mount::new();
    let style = |cover: Cover| {
        DisplayStyle::Revealing(RevealingParams {
            cover,
            pattern: RevealPattern::StartToEnd,
            pace: RevealPace::ByEachCharacter {
                delay: Duration::from_millis(10),
            },
            delay_before_revealing: Duration::ZERO,
        })
    };
    mount
        .update(
            &"abc".into(),
            &style(Cover::Default),
            Hooks::new(),
            &surface,
            container(),
        )
        .unwrap()
        .tick(Duration::from_millis(10));

    // A new cover does not restart the run in flight; one step stays paid.
    let session = mount
        .update(
            &"abc".into(),
            &style(Cover::Custom("*".to_string())),
            Hooks::new(),
            &surface,
            container(),
        )
        .unwrap();
    assert_eq!(session.snapshot().text, "a██");
}

#[test]
fn changing_the_pattern_restarts_the_reveal() {
    let surface = StringSurface::default();
    let mut mount = Mount::new();
    let style = |pattern: RevealPattern| {
        DisplayStyle::Revealing(RevealingParams {
            cover: Cover::Default,
            pattern,
            pace: RevealPace::ByEachCharacter {
                delay: Duration::from_millis(10),
            },
            delay_before_revealing: Duration::ZERO,
        })
    };
    mount
        .update(
            &"abc".into(),
            &style(RevealPattern::StartToEnd),
            Hooks::new(),
            &surface,
            container(),
        )
        .unwrap()
        .tick(Duration::from_millis(10));

    let session = mount
        .update(
            &"abc".into(),
            &style(RevealPattern::EndToStart),
            Hooks::new(),
            &surface,
            container(),
        )
        .unwrap();
    assert_eq!(session.snapshot().text, "███");
}
