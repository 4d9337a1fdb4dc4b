//! 2D drawing surface the board renders into.
//!
//! The operation set is the immediate-mode canvas vocabulary: clear, path
//! building with a solid fill, and axis-aligned rectangle fill/stroke.

mod draw_list;
mod recording;

pub use draw_list::DrawListSurface;
pub use recording::{RecordingSurface, SurfaceOp};

use shapeboard_engine::coords::{Rect, Vec2};
use shapeboard_engine::paint::Color;

pub trait Surface {
    /// Drawable size in canvas-local px.
    fn size(&self) -> Vec2;

    fn resize(&mut self, size: Vec2);

    fn clear_rect(&mut self, rect: Rect);

    /// Starts a new path, discarding the current one.
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);

    /// Circular arc from `start` to `end` (radians, clockwise on screen).
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32);
    fn close_path(&mut self);

    /// Fills the current path. The path is kept until the next `begin_path`.
    fn fill(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// The whole surface as a rectangle at the origin.
    fn bounds(&self) -> Rect {
        let size = self.size();
        Rect::new(0.0, 0.0, size.x, size.y)
    }
}
