use shapeboard_engine::coords::{Rect, Vec2};
use shapeboard_engine::paint::Color;

use super::Surface;

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    ClearRect(Rect),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc { center: Vec2, radius: f32, start: f32, end: f32 },
    ClosePath,
    Fill(Color),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f32 },
}

/// Headless surface that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height), ops: Vec::new() }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Returns the recorded calls and starts over.
    pub fn take(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Calls recorded since the last full-surface clear.
    pub fn last_frame(&self) -> &[SurfaceOp] {
        let bounds = self.bounds();
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::ClearRect(r) if r.covers(bounds)))
            .unwrap_or(0);
        &self.ops[start..]
    }

    /// Frame rectangles stroked in the last frame, in paint order.
    pub fn stroked_rects(&self) -> Vec<Rect> {
        self.last_frame()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::StrokeRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::ClearRect(rect));
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.ops.push(SurfaceOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.ops.push(SurfaceOp::LineTo(p));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        self.ops.push(SurfaceOp::Arc { center, radius, start, end });
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(SurfaceOp::Fill(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(SurfaceOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.ops.push(SurfaceOp::StrokeRect { rect, color, width });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.begin_path();
        s.move_to(Vec2::new(1.0, 1.0));
        s.fill(Color::white());
        assert_eq!(
            s.ops(),
            &[
                SurfaceOp::BeginPath,
                SurfaceOp::MoveTo(Vec2::new(1.0, 1.0)),
                SurfaceOp::Fill(Color::white()),
            ]
        );
    }

    #[test]
    fn last_frame_starts_at_latest_full_clear() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.clear_rect(s.bounds());
        s.stroke_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::white(), 1.0);
        s.clear_rect(s.bounds());
        s.stroke_rect(Rect::new(5.0, 5.0, 1.0, 1.0), Color::white(), 1.0);

        assert_eq!(s.last_frame().len(), 2);
        assert_eq!(s.stroked_rects(), vec![Rect::new(5.0, 5.0, 1.0, 1.0)]);
    }

    #[test]
    fn take_drains() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        s.close_path();
        assert_eq!(s.take().len(), 1);
        assert!(s.ops().is_empty());
    }
}
