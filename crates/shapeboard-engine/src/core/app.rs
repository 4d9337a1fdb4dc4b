use crate::coords::Viewport;
use crate::input::{InputEvent, InputState};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Redraws are invalidation-based: after every input or resize callback the
/// runtime asks [`needs_redraw`](App::needs_redraw) and only then schedules
/// [`on_frame`](App::on_frame).
pub trait App {
    /// Called for every translated input event, in arrival order. `input`
    /// already reflects the event.
    fn on_input(&mut self, event: &InputEvent, input: &InputState) -> AppControl {
        let _ = (event, input);
        AppControl::Continue
    }

    /// Called when the drawable size changes (logical px). Also called once
    /// before the first frame.
    fn on_resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Whether the app has changes that are not on screen yet.
    fn needs_redraw(&self) -> bool {
        true
    }

    /// Called for every redraw the runtime performs. A frame that was not
    /// presented (see [`FrameOutcome`](super::FrameOutcome)) leaves the app's
    /// changes pending.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
