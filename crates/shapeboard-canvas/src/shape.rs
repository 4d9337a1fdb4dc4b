use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use shapeboard_engine::coords::{Rect, Vec2};
use shapeboard_engine::paint::Color;

use crate::config::{HexagonFrame, HitRegion};
use crate::error::BoardError;
use crate::surface::Surface;

/// Closed set of shapes the board can place.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// Disc; size is the diameter.
    Circle,
    /// Axis-aligned square; size is the side length.
    Square,
    /// Upward equilateral triangle; size is the side length.
    Triangle,
    /// Regular hexagon with a vertex on +x; size is the circumradius.
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = BoardError;

    /// Accepts the lowercase names, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| BoardError::UnknownKind(name.to_string()))
    }
}

/// A placed shape.
///
/// Identity is its index in the [`Scene`](crate::scene::Scene); only
/// `center` changes after placement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub center: Vec2,
    pub size: f32,
    pub color: Color,
}

impl Shape {
    pub fn new(kind: ShapeKind, center: Vec2, size: f32, color: Color) -> Self {
        Self { kind, center, size, color }
    }

    /// A shape with no positive size has no area: it paints nothing and
    /// cannot be picked.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.size.is_nan() || self.size <= 0.0
    }

    /// Height of an equilateral triangle with side `size`.
    #[inline]
    fn h(&self) -> f32 {
        self.size * 3f32.sqrt() / 2.0
    }

    fn triangle_vertices(&self) -> [Vec2; 3] {
        let (c, s, h) = (self.center, self.size, self.h());
        [
            Vec2::new(c.x, c.y - h / 2.0),
            Vec2::new(c.x - s / 2.0, c.y + h / 2.0),
            Vec2::new(c.x + s / 2.0, c.y + h / 2.0),
        ]
    }

    fn hexagon_vertex(&self, k: usize) -> Vec2 {
        Vec2::polar(self.center, self.size, k as f32 * TAU / 6.0)
    }

    /// Outermost points of the filled shape: polygon vertices, or the four
    /// axis extremes of a circle.
    pub fn extent_points(&self) -> Vec<Vec2> {
        let (c, s) = (self.center, self.size);
        match self.kind {
            ShapeKind::Circle => {
                let r = s / 2.0;
                vec![
                    Vec2::new(c.x + r, c.y),
                    Vec2::new(c.x, c.y + r),
                    Vec2::new(c.x - r, c.y),
                    Vec2::new(c.x, c.y - r),
                ]
            }
            ShapeKind::Square => Rect::from_center_size(c, Vec2::new(s, s)).corners().to_vec(),
            ShapeKind::Triangle => self.triangle_vertices().to_vec(),
            ShapeKind::Hexagon => (0..6).map(|k| self.hexagon_vertex(k)).collect(),
        }
    }

    /// Axis-aligned bounding frame `(x, y, width, height)`. Zero-sized at
    /// the center for a degenerate shape.
    pub fn frame(&self, hexagon: HexagonFrame) -> Rect {
        let (c, s) = (self.center, self.size);
        if self.is_degenerate() {
            return Rect::new(c.x, c.y, 0.0, 0.0);
        }
        match self.kind {
            ShapeKind::Circle | ShapeKind::Square => Rect::from_center_size(c, Vec2::new(s, s)),
            ShapeKind::Triangle => Rect::new(c.x - s / 2.0, c.y - self.h() / 2.0, s, self.h()),
            ShapeKind::Hexagon => match hexagon {
                HexagonFrame::Exact => {
                    Rect::new(c.x - s, c.y - self.h(), 2.0 * s, 2.0 * self.h())
                }
                HexagonFrame::Circumscribed => Rect::new(c.x - s, c.y - s, 2.0 * s, 2.0 * s),
            },
        }
    }

    /// Box a pointer-down is tested against.
    pub fn hit_box(&self, region: HitRegion, hexagon: HexagonFrame) -> Rect {
        match region {
            HitRegion::Frame => self.frame(hexagon),
            HitRegion::HalfSize => Rect::from_center_size(self.center, Vec2::new(self.size, self.size)),
        }
    }

    /// Paints the shape body in its own color.
    pub fn fill<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.is_degenerate() {
            return;
        }
        match self.kind {
            ShapeKind::Circle => {
                surface.begin_path();
                surface.arc(self.center, self.size / 2.0, 0.0, TAU);
                surface.fill(self.color);
                surface.close_path();
            }
            ShapeKind::Square => {
                let rect = Rect::from_center_size(self.center, Vec2::new(self.size, self.size));
                surface.fill_rect(rect, self.color);
            }
            ShapeKind::Triangle => {
                let [a, b, c] = self.triangle_vertices();
                surface.begin_path();
                surface.move_to(a);
                surface.line_to(b);
                surface.line_to(c);
                surface.close_path();
                surface.fill(self.color);
            }
            ShapeKind::Hexagon => {
                surface.begin_path();
                surface.move_to(self.hexagon_vertex(0));
                for k in 1..=6 {
                    surface.line_to(self.hexagon_vertex(k));
                }
                surface.close_path();
                surface.fill(self.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};

    const EPS: f32 = 1e-3;

    fn shape(kind: ShapeKind, x: f32, y: f32, s: f32) -> Shape {
        Shape::new(kind, Vec2::new(x, y), s, Color::white())
    }

    fn inflate(r: Rect, by: f32) -> Rect {
        Rect::new(r.origin.x - by, r.origin.y - by, r.size.x + 2.0 * by, r.size.y + 2.0 * by)
    }

    fn close(a: Rect, b: Rect) -> bool {
        (a.origin.x - b.origin.x).abs() < EPS
            && (a.origin.y - b.origin.y).abs() < EPS
            && (a.size.x - b.size.x).abs() < EPS
            && (a.size.y - b.size.y).abs() < EPS
    }

    // ── ShapeKind ─────────────────────────────────────────────────────────

    #[test]
    fn kind_parses_names() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
        assert_eq!(" Hexagon ".parse::<ShapeKind>().unwrap(), ShapeKind::Hexagon);
    }

    #[test]
    fn kind_rejects_unknown() {
        assert_eq!(
            "star".parse::<ShapeKind>(),
            Err(BoardError::UnknownKind("star".into()))
        );
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn frames_are_positive_and_contain_extents() {
        for kind in ShapeKind::ALL {
            for s in [0.5, 1.0, 60.0, 333.3] {
                let sh = shape(kind, 37.0, -12.0, s);
                for hex in [HexagonFrame::Exact, HexagonFrame::Circumscribed] {
                    let f = sh.frame(hex);
                    assert!(f.size.x > 0.0 && f.size.y > 0.0, "{kind} {s}");
                    for p in sh.extent_points() {
                        assert!(inflate(f, EPS).contains(p), "{kind} {s} {p:?} outside {f:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn circle_frame_is_diameter_box() {
        let f = shape(ShapeKind::Circle, 200.0, 150.0, 60.0).frame(HexagonFrame::Exact);
        assert_eq!(f, Rect::new(170.0, 120.0, 60.0, 60.0));
    }

    #[test]
    fn square_frame_is_the_square() {
        let f = shape(ShapeKind::Square, 200.0, 150.0, 100.0).frame(HexagonFrame::Exact);
        assert_eq!(f, Rect::new(150.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn triangle_frame_is_tight() {
        let s = 100.0;
        let h = s * 3f32.sqrt() / 2.0;
        let f = shape(ShapeKind::Triangle, 0.0, 0.0, s).frame(HexagonFrame::Exact);
        assert!(close(f, Rect::new(-50.0, -h / 2.0, 100.0, h)));
    }

    #[test]
    fn hexagon_frames() {
        let s = 40.0;
        let h = s * 3f32.sqrt() / 2.0;
        let hex = shape(ShapeKind::Hexagon, 100.0, 100.0, s);
        assert!(close(hex.frame(HexagonFrame::Exact), Rect::new(60.0, 100.0 - h, 80.0, 2.0 * h)));
        assert_eq!(hex.frame(HexagonFrame::Circumscribed), Rect::new(60.0, 60.0, 80.0, 80.0));
    }

    #[test]
    fn non_positive_sizes_are_empty() {
        for kind in ShapeKind::ALL {
            for s in [0.0, -10.0, f32::NAN] {
                let sh = shape(kind, 5.0, 5.0, s);
                assert!(sh.is_degenerate());
                for hex in [HexagonFrame::Exact, HexagonFrame::Circumscribed] {
                    assert_eq!(sh.frame(hex), Rect::new(5.0, 5.0, 0.0, 0.0), "{kind} {s}");
                }
                let mut surf = RecordingSurface::new(10.0, 10.0);
                sh.fill(&mut surf);
                assert!(surf.ops().is_empty(), "{kind} {s}");
            }
        }
    }

    // ── hit box ───────────────────────────────────────────────────────────

    #[test]
    fn half_size_box_ignores_kind() {
        let hex = shape(ShapeKind::Hexagon, 0.0, 0.0, 40.0);
        assert_eq!(
            hex.hit_box(HitRegion::HalfSize, HexagonFrame::Exact),
            Rect::new(-20.0, -20.0, 40.0, 40.0)
        );
        assert_eq!(
            hex.hit_box(HitRegion::Frame, HexagonFrame::Circumscribed),
            Rect::new(-40.0, -40.0, 80.0, 80.0)
        );
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn circle_fill_is_one_full_arc() {
        let mut surf = RecordingSurface::new(400.0, 300.0);
        shape(ShapeKind::Circle, 200.0, 150.0, 60.0).fill(&mut surf);
        assert_eq!(
            surf.ops(),
            &[
                SurfaceOp::BeginPath,
                SurfaceOp::Arc { center: Vec2::new(200.0, 150.0), radius: 30.0, start: 0.0, end: TAU },
                SurfaceOp::Fill(Color::white()),
                SurfaceOp::ClosePath,
            ]
        );
    }

    #[test]
    fn square_fill_is_a_rect() {
        let mut surf = RecordingSurface::new(400.0, 300.0);
        shape(ShapeKind::Square, 200.0, 150.0, 100.0).fill(&mut surf);
        assert_eq!(
            surf.ops(),
            &[SurfaceOp::FillRect { rect: Rect::new(150.0, 100.0, 100.0, 100.0), color: Color::white() }]
        );
    }

    #[test]
    fn hexagon_path_returns_to_first_vertex() {
        let mut surf = RecordingSurface::new(400.0, 300.0);
        shape(ShapeKind::Hexagon, 0.0, 0.0, 10.0).fill(&mut surf);

        let lines: Vec<Vec2> = surf
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 6);
        let last = lines[5];
        assert!((last.x - 10.0).abs() < EPS && last.y.abs() < EPS);
        assert_eq!(surf.ops().last(), Some(&SurfaceOp::Fill(Color::white())));
    }
}
