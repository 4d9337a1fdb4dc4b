use std::f32::consts::TAU;

use shapeboard_engine::coords::{Rect, Vec2};
use shapeboard_engine::paint::Color;
use shapeboard_engine::render::tessellate::circle_segments;
use shapeboard_engine::scene::DrawList;

use super::Surface;

#[derive(Debug, Copy, Clone, PartialEq)]
enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc { center: Vec2, radius: f32, start: f32, end: f32 },
    Close,
}

/// Surface that records into an engine [`DrawList`] for the mesh renderer.
///
/// A path consisting of one full-turn arc becomes a circle command; every
/// other path is flattened into one convex polygon per subpath.
#[derive(Debug)]
pub struct DrawListSurface {
    size: Vec2,
    background: Color,
    draw_list: DrawList,
    path: Vec<PathEl>,
}

impl DrawListSurface {
    pub fn new(size: Vec2, background: Color) -> Self {
        Self {
            size,
            background,
            draw_list: DrawList::new(),
            path: Vec::new(),
        }
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    fn full_circle(&self) -> Option<(Vec2, f32)> {
        match self.path.as_slice() {
            [PathEl::Arc { center, radius, start, end }]
            | [PathEl::Arc { center, radius, start, end }, PathEl::Close]
                if (end - start).abs() >= TAU - 1e-4 =>
            {
                Some((*center, *radius))
            }
            _ => None,
        }
    }

    /// Splits the current path into flattened subpaths.
    fn flatten(&self) -> Vec<Vec<Vec2>> {
        let mut subpaths: Vec<Vec<Vec2>> = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();

        for el in &self.path {
            match *el {
                PathEl::MoveTo(p) => {
                    if !current.is_empty() {
                        subpaths.push(std::mem::take(&mut current));
                    }
                    current.push(p);
                }
                PathEl::LineTo(p) => current.push(p),
                PathEl::Arc { center, radius, start, end } => {
                    flatten_arc(center, radius, start, end, &mut current);
                }
                PathEl::Close => {
                    if !current.is_empty() {
                        subpaths.push(std::mem::take(&mut current));
                    }
                }
            }
        }

        if !current.is_empty() {
            subpaths.push(current);
        }
        subpaths
    }
}

fn flatten_arc(center: Vec2, radius: f32, start: f32, end: f32, out: &mut Vec<Vec2>) {
    let sweep = end - start;
    let full = circle_segments(radius) as f32;
    let n = ((full * sweep.abs() / TAU).ceil() as usize).max(1);

    for i in 0..=n {
        let t = i as f32 / n as f32;
        out.push(Vec2::polar(center, radius, start + sweep * t));
    }
}

impl Surface for DrawListSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    fn clear_rect(&mut self, rect: Rect) {
        if rect.covers(self.bounds()) {
            self.draw_list.clear();
        } else {
            self.draw_list.push_solid_rect(rect, self.background);
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.push(PathEl::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.path.push(PathEl::LineTo(p));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        if radius.is_nan() || radius <= 0.0 {
            log::trace!("skipping arc with radius {radius}");
            return;
        }
        self.path.push(PathEl::Arc { center, radius, start, end });
    }

    fn close_path(&mut self) {
        self.path.push(PathEl::Close);
    }

    fn fill(&mut self, color: Color) {
        if let Some((center, radius)) = self.full_circle() {
            self.draw_list.push_solid_circle(center, radius, color);
            return;
        }

        for points in self.flatten() {
            if points.len() < 3 {
                log::trace!("skipping degenerate subpath ({} points)", points.len());
                continue;
            }
            self.draw_list.push_polygon(points, color);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_solid_rect(rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.draw_list.push_stroke_rect(rect, width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeboard_engine::scene::DrawCmd;

    fn surface() -> DrawListSurface {
        DrawListSurface::new(Vec2::new(400.0, 300.0), Color::white())
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn full_clear_empties_list() {
        let mut s = surface();
        s.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());
        s.clear_rect(s.bounds());
        assert!(s.draw_list().is_empty());
    }

    #[test]
    fn partial_clear_paints_background() {
        let mut s = surface();
        s.clear_rect(Rect::new(10.0, 10.0, 20.0, 20.0));
        assert_eq!(s.draw_list().len(), 1);
        assert!(matches!(s.draw_list().items()[0], DrawCmd::Rect(_)));
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn full_arc_becomes_circle() {
        let mut s = surface();
        s.begin_path();
        s.arc(Vec2::new(200.0, 150.0), 30.0, 0.0, TAU);
        s.fill(Color::white());
        s.close_path();

        match &s.draw_list().items()[0] {
            DrawCmd::Circle(c) => {
                assert_eq!(c.center, Vec2::new(200.0, 150.0));
                assert_eq!(c.radius, 30.0);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn line_path_becomes_polygon() {
        let mut s = surface();
        s.begin_path();
        s.move_to(Vec2::new(0.0, 0.0));
        s.line_to(Vec2::new(10.0, 0.0));
        s.line_to(Vec2::new(0.0, 10.0));
        s.close_path();
        s.fill(Color::white());

        match &s.draw_list().items()[0] {
            DrawCmd::Polygon(p) => assert_eq!(p.points.len(), 3),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn half_arc_is_flattened() {
        let mut s = surface();
        s.begin_path();
        s.arc(Vec2::zero(), 50.0, 0.0, TAU / 2.0);
        s.fill(Color::white());
        assert!(matches!(s.draw_list().items()[0], DrawCmd::Polygon(_)));
    }

    #[test]
    fn begin_path_discards_previous_path() {
        let mut s = surface();
        s.move_to(Vec2::new(0.0, 0.0));
        s.line_to(Vec2::new(10.0, 0.0));
        s.begin_path();
        s.fill(Color::white());
        assert!(s.draw_list().is_empty());
    }

    #[test]
    fn degenerate_path_draws_nothing() {
        let mut s = surface();
        s.begin_path();
        s.move_to(Vec2::new(0.0, 0.0));
        s.line_to(Vec2::new(10.0, 0.0));
        s.fill(Color::white());
        assert!(s.draw_list().is_empty());
    }

    #[test]
    fn non_positive_arc_draws_nothing() {
        for radius in [0.0, -30.0] {
            let mut s = surface();
            s.begin_path();
            s.arc(Vec2::new(200.0, 150.0), radius, 0.0, TAU);
            s.fill(Color::white());
            assert!(s.draw_list().is_empty(), "radius {radius}");
        }
    }

    #[test]
    fn stroke_rect_keeps_width() {
        let mut s = surface();
        s.stroke_rect(Rect::new(1.0, 2.0, 3.0, 4.0), Color::white(), 1.0);
        match &s.draw_list().items()[0] {
            DrawCmd::StrokeRect(r) => assert_eq!(r.width, 1.0),
            other => panic!("expected stroke rect, got {other:?}"),
        }
    }
}
