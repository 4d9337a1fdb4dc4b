use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

/// Rectangle outline payload.
///
/// The stroke is centered on the rectangle's edges, half inside and half
/// outside, like a 2D canvas `strokeRect`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRectCmd {
    pub rect: Rect,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, color)));
    }

    /// Records a rectangle outline of `width` logical pixels.
    #[inline]
    pub fn push_stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        self.push(DrawCmd::StrokeRect(StrokeRectCmd { rect, width, color }));
    }
}
