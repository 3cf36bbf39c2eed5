#![forbid(unsafe_code)]

//! Core: animation primitives, repeat policies, snapshots, and the render
//! surface contract for textfx.

pub mod animation;
pub mod clock;
pub mod interval;
pub mod logging;
pub mod repeat;
pub mod snapshot;
pub mod surface;

pub use animation::{Animation, Delayed, EasingFn, Ramp, ease_in, ease_in_out, ease_out, linear};
pub use clock::FrameClock;
pub use interval::Interval;
pub use repeat::Repeat;
pub use snapshot::{Offset, Overlay, Snapshot};
pub use surface::{Extent, RenderSurface, StringSurface};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn, warn_span};
