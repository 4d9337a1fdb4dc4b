mod circle;
mod polygon;
mod rect;

pub use circle::CircleCmd;
pub use polygon::PolygonCmd;
pub use rect::{RectCmd, StrokeRectCmd};
