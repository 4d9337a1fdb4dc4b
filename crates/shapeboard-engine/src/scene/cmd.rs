use crate::scene::shapes::{CircleCmd, PolygonCmd, RectCmd, StrokeRectCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::tessellate` to turn it into triangles
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    StrokeRect(StrokeRectCmd),
    Circle(CircleCmd),
    Polygon(PolygonCmd),
}
