//! Shapeboard canvas: the drawing-board core on top of `shapeboard-engine`.
//!
//! Shapes are placed at the canvas center, dragged with the pointer, and the
//! whole canvas is repainted (fills, then bounding frames) after every change.
//!
//! ```rust,ignore
//! use shapeboard_canvas::prelude::*;
//!
//! let mut board = Board::new(RecordingSurface::new(400.0, 300.0), BoardConfig::default());
//! board.add_shape(ShapeKind::Circle, 5.0)?;
//! board.pointer_down(Vec2::new(200.0, 150.0));
//! board.pointer_move(Vec2::new(220.0, 160.0));
//! board.pointer_up();
//! ```

pub mod app;
pub mod board;
pub mod config;
pub mod drag;
pub mod error;
pub mod hit;
pub mod render;
pub mod scene;
pub mod shape;
pub mod surface;

pub use app::{BoardApp, BoardWindow};
pub use board::Board;
pub use error::BoardError;

/// Everything needed to drive a board.
pub mod prelude {
    pub use crate::app::{BoardApp, BoardWindow};
    pub use crate::board::Board;
    pub use crate::config::{BoardConfig, HexagonFrame, HitRegion, PALETTE};
    pub use crate::error::BoardError;
    pub use crate::scene::Scene;
    pub use crate::shape::{Shape, ShapeKind};
    pub use crate::surface::{DrawListSurface, RecordingSurface, Surface, SurfaceOp};

    pub use shapeboard_engine::coords::{Rect, Vec2};
    pub use shapeboard_engine::paint::Color;
}
