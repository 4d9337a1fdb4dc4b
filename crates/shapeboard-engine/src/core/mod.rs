//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the app on
//! top of it: input is delivered event by event, frames are drawn on demand.

mod app;
pub(crate) mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, FrameOutcome, WindowCtx};
