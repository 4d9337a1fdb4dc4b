use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled convex polygon payload.
///
/// Points are listed in path order; the outline closes back to the first
/// point. Concave input is not rejected but fills as a triangle fan from the
/// first point.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl DrawList {
    /// Records a solid convex polygon.
    #[inline]
    pub fn push_polygon(&mut self, points: Vec<Vec2>, color: Color) {
        self.push(DrawCmd::Polygon(PolygonCmd { points, color }));
    }
}
