use std::str::FromStr;

use shapeboard_engine::coords::Vec2;
use shapeboard_engine::paint::Color;

use crate::config::BoardConfig;
use crate::drag::DragController;
use crate::error::BoardError;
use crate::render::render_scene;
use crate::scene::Scene;
use crate::shape::{Shape, ShapeKind};
use crate::surface::Surface;

/// The drawing board: a surface, the shapes on it and the drag session.
///
/// Every mutation repaints the whole surface before returning, so the surface
/// always shows the current scene. Pointer positions passed in are in window
/// coordinates.
pub struct Board<S: Surface> {
    surface: S,
    scene: Scene,
    drag: DragController,
    config: BoardConfig,
}

impl<S: Surface> Board<S> {
    pub fn new(surface: S, config: BoardConfig) -> Self {
        Self {
            surface,
            scene: Scene::new(),
            drag: DragController::new(),
            config,
        }
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Current fill for new shapes.
    #[inline]
    pub fn color(&self) -> Color {
        self.config.fill_color
    }

    /// Canvas center in canvas-local px.
    pub fn center(&self) -> Vec2 {
        let size = self.surface.size();
        Vec2::new(size.x / 2.0, size.y / 2.0)
    }

    /// Places a `kind` at the canvas center with size
    /// `min(width, height) / scale`.
    pub fn add_shape(&mut self, kind: ShapeKind, scale: f32) -> Result<usize, BoardError> {
        if !scale.is_finite() || scale <= 0.0 {
            log::warn!("rejected {kind}: {}", BoardError::InvalidScale(scale));
            return Err(BoardError::InvalidScale(scale));
        }

        let size = self.surface.size();
        let side = size.x.min(size.y) / scale;
        Ok(self.push(Shape::new(kind, self.center(), side, self.config.fill_color)))
    }

    /// Like [`add_shape`](Self::add_shape) with the kind given by name.
    /// Unknown names add nothing.
    pub fn add_shape_named(&mut self, name: &str, scale: f32) -> Result<usize, BoardError> {
        let kind = ShapeKind::from_str(name).inspect_err(|e| log::warn!("{e}"))?;
        self.add_shape(kind, scale)
    }

    /// Appends an already built shape and repaints.
    pub fn push(&mut self, shape: Shape) -> usize {
        let index = self.scene.push(shape);
        log::debug!(
            "added {} #{index} at ({}, {}) size {}",
            shape.kind,
            shape.center.x,
            shape.center.y,
            shape.size
        );
        self.redraw();
        index
    }

    /// Sets the fill for shapes added from now on. Placed shapes keep theirs.
    pub fn set_color(&mut self, color: &str) -> Result<(), BoardError> {
        let parsed = Color::from_hex(color).map_err(|e| {
            log::warn!("{e}");
            BoardError::from(e)
        })?;
        self.set_fill(parsed);
        Ok(())
    }

    pub fn set_fill(&mut self, color: Color) {
        self.config.fill_color = color;
    }

    /// Window coordinates to canvas-local coordinates.
    #[inline]
    pub fn to_local(&self, window: Vec2) -> Vec2 {
        window - self.config.canvas_origin
    }

    /// Returns `true` when a drag started.
    pub fn pointer_down(&mut self, window: Vec2) -> bool {
        let p = self.to_local(window);
        self.drag
            .pointer_down(&self.scene, p, self.config.hit_region, self.config.hexagon_frame)
            .is_some()
    }

    /// Returns `true` when a shape moved.
    pub fn pointer_move(&mut self, window: Vec2) -> bool {
        let p = self.to_local(window);
        let moved = self.drag.pointer_move(&mut self.scene, p);
        if moved {
            self.redraw();
        }
        moved
    }

    /// Returns `true` when a drag ended.
    pub fn pointer_up(&mut self) -> bool {
        let released = self.drag.pointer_up();
        if released {
            self.redraw();
        }
        released
    }

    /// Adopts a new canvas size and repaints.
    pub fn resize(&mut self, size: Vec2) {
        self.surface.resize(size);
        self.redraw();
    }

    /// Clears the surface and paints every shape with its frame.
    pub fn redraw(&mut self) {
        render_scene(&mut self.surface, &self.scene, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    use shapeboard_engine::coords::Rect;

    use crate::config::{default_fill, HexagonFrame, HitRegion};
    use crate::drag::DragState;
    use crate::surface::{DrawListSurface, RecordingSurface, SurfaceOp};

    fn board(w: f32, h: f32) -> Board<RecordingSurface> {
        Board::new(RecordingSurface::new(w, h), BoardConfig::default())
    }

    // ── add_shape ─────────────────────────────────────────────────────────

    #[test]
    fn add_places_at_center_with_scaled_size() {
        let mut b = board(400.0, 300.0);
        b.add_shape(ShapeKind::Square, 5.0).unwrap();
        let s = b.scene().get(0).copied().unwrap();
        assert_eq!(s.center, Vec2::new(200.0, 150.0));
        assert_eq!(s.size, 60.0);
        assert_eq!(s.color, default_fill());
    }

    #[test]
    fn add_repaints() {
        let mut b = board(400.0, 300.0);
        b.add_shape(ShapeKind::Circle, 5.0).unwrap();
        assert_eq!(b.surface().stroked_rects().len(), 1);
    }

    #[test]
    fn add_named_unknown_adds_nothing() {
        let mut b = board(400.0, 300.0);
        let err = b.add_shape_named("star", 5.0).unwrap_err();
        assert_eq!(err, BoardError::UnknownKind("star".into()));
        assert!(b.scene().is_empty());
        assert!(b.surface().ops().is_empty());
    }

    #[test]
    fn add_named_known() {
        let mut b = board(400.0, 300.0);
        assert_eq!(b.add_shape_named("hexagon", 3.0), Ok(0));
        assert_eq!(b.scene().get(0).map(|s| s.kind), Some(ShapeKind::Hexagon));
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let mut b = board(400.0, 300.0);
        for scale in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(b.add_shape(ShapeKind::Circle, scale), Err(BoardError::InvalidScale(_))));
        }
        assert!(b.scene().is_empty());
    }

    #[test]
    fn zero_size_canvas_gives_degenerate_shape() {
        let mut b = board(0.0, 300.0);
        assert_eq!(b.add_shape(ShapeKind::Triangle, 5.0), Ok(0));
        assert_eq!(b.scene().get(0).map(|s| s.size), Some(0.0));
    }

    #[test]
    fn negative_size_draws_and_picks_nothing() {
        use shapeboard_engine::render::tessellate::tessellate;

        let surface = DrawListSurface::new(Vec2::new(400.0, 300.0), Color::white());
        let mut b = Board::new(surface, BoardConfig::default());
        for kind in ShapeKind::ALL {
            b.push(Shape::new(kind, Vec2::new(200.0, 150.0), -60.0, default_fill()));
        }
        assert_eq!(b.scene().len(), 4);
        assert!(b.surface().draw_list().is_empty());

        let mut verts = Vec::new();
        tessellate(b.surface().draw_list(), &mut verts);
        assert!(verts.is_empty());

        assert!(!b.pointer_down(Vec2::new(200.0, 150.0)));
        assert!(!b.pointer_down(Vec2::new(185.0, 140.0)));
    }

    // ── set_color ─────────────────────────────────────────────────────────

    #[test]
    fn set_color_applies_to_new_shapes_only() {
        let mut b = board(400.0, 300.0);
        b.add_shape(ShapeKind::Square, 5.0).unwrap();
        b.set_color("#ff0000").unwrap();
        b.add_shape(ShapeKind::Square, 5.0).unwrap();

        let red = Color::from_hex("#ff0000").unwrap();
        assert_eq!(b.scene().get(0).map(|s| s.color), Some(default_fill()));
        assert_eq!(b.scene().get(1).map(|s| s.color), Some(red));
    }

    #[test]
    fn bad_color_keeps_current() {
        let mut b = board(400.0, 300.0);
        assert!(matches!(b.set_color("purple"), Err(BoardError::InvalidColor(_))));
        assert_eq!(b.color(), default_fill());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_is_made_canvas_local() {
        let config = BoardConfig::default().with_canvas_origin(Vec2::new(100.0, 50.0));
        let mut b = Board::new(RecordingSurface::new(400.0, 300.0), config);
        b.add_shape(ShapeKind::Square, 3.0).unwrap(); // 100 at (200, 150)

        assert!(!b.pointer_down(Vec2::new(151.0, 101.0)));
        assert!(b.pointer_down(Vec2::new(251.0, 151.0)));
        assert_eq!(b.to_local(Vec2::new(251.0, 151.0)), Vec2::new(151.0, 101.0));
    }

    #[test]
    fn pointer_down_alone_does_not_repaint() {
        let mut b = board(400.0, 300.0);
        b.add_shape(ShapeKind::Square, 3.0).unwrap();
        let before = b.surface().ops().len();
        assert!(b.pointer_down(Vec2::new(200.0, 150.0)));
        assert_eq!(b.surface().ops().len(), before);
    }

    #[test]
    fn idle_move_and_up_do_not_repaint() {
        let mut b = board(400.0, 300.0);
        b.add_shape(ShapeKind::Square, 3.0).unwrap();
        let before = b.surface().ops().len();
        assert!(!b.pointer_move(Vec2::new(10.0, 10.0)));
        assert!(!b.pointer_up());
        assert_eq!(b.surface().ops().len(), before);
    }

    #[test]
    fn resize_repaints_with_new_bounds() {
        let mut b = board(400.0, 300.0);
        b.resize(Vec2::new(800.0, 600.0));
        assert_eq!(
            b.surface().ops().last(),
            Some(&SurfaceOp::ClearRect(Rect::new(0.0, 0.0, 800.0, 600.0)))
        );
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn drag_circle_scenario() {
        let mut b = board(400.0, 300.0);
        b.push(Shape::new(ShapeKind::Circle, Vec2::new(200.0, 150.0), 60.0, default_fill()));

        assert!(b.pointer_down(Vec2::new(200.0, 150.0)));
        assert_eq!(b.drag().selected(), Some(0));

        assert!(b.pointer_move(Vec2::new(220.0, 160.0)));
        assert_eq!(b.scene().get(0).map(|s| s.center), Some(Vec2::new(220.0, 160.0)));

        assert!(b.pointer_up());
        assert_eq!(b.drag().state(), DragState::Idle);

        let frame = b.surface().last_frame();
        let arcs: Vec<&SurfaceOp> = frame.iter().filter(|op| matches!(op, SurfaceOp::Arc { .. })).collect();
        assert_eq!(
            arcs,
            vec![&SurfaceOp::Arc { center: Vec2::new(220.0, 160.0), radius: 30.0, start: 0.0, end: TAU }]
        );
        assert_eq!(b.surface().stroked_rects(), vec![Rect::new(190.0, 130.0, 60.0, 60.0)]);
    }

    #[test]
    fn square_pick_scenario() {
        let mut b = board(400.0, 300.0);
        b.push(Shape::new(ShapeKind::Square, Vec2::new(200.0, 150.0), 100.0, default_fill()));
        assert_eq!(b.surface().stroked_rects(), vec![Rect::new(150.0, 100.0, 100.0, 100.0)]);

        assert!(b.pointer_down(Vec2::new(151.0, 101.0)));
        assert!(b.pointer_up());
        assert!(!b.pointer_down(Vec2::new(149.0, 99.0)));
        assert_eq!(b.drag().selected(), None);
    }

    #[test]
    fn drag_keeps_offset_and_repaints_each_move() {
        let mut b = board(400.0, 300.0);
        b.add_shape(ShapeKind::Triangle, 4.0).unwrap();
        let start = b.scene().get(0).map(|s| s.center).unwrap();

        let grab = start + Vec2::new(3.0, 5.0);
        assert!(b.pointer_down(grab));
        for step in 1..=5 {
            let p = grab + Vec2::new(step as f32 * 7.0, step as f32 * -4.0);
            assert!(b.pointer_move(p));
            let center = b.scene().get(0).map(|s| s.center).unwrap();
            assert_eq!(p - center, Vec2::new(3.0, 5.0));
            assert_eq!(b.surface().stroked_rects().len(), 1);
        }
    }

    #[test]
    fn half_size_region_is_configurable() {
        let config = BoardConfig::default()
            .with_hit_region(HitRegion::HalfSize)
            .with_hexagon_frame(HexagonFrame::Circumscribed);
        let mut b = Board::new(RecordingSurface::new(400.0, 300.0), config);
        b.push(Shape::new(ShapeKind::Hexagon, Vec2::new(200.0, 150.0), 40.0, default_fill()));

        assert!(!b.pointer_down(Vec2::new(235.0, 150.0)));
        assert!(b.pointer_down(Vec2::new(219.0, 150.0)));
        assert_eq!(
            b.surface().stroked_rects(),
            vec![Rect::new(160.0, 110.0, 80.0, 80.0)]
        );
    }
}
