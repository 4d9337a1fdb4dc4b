use shapeboard_engine::coords::Vec2;

use crate::config::{HexagonFrame, HitRegion};
use crate::scene::Scene;

/// Index of the topmost shape whose hit box contains `point`.
///
/// Bounds are inclusive. When boxes overlap, the shape drawn last wins.
/// Degenerate shapes are never hit.
pub fn hit_test(scene: &Scene, point: Vec2, region: HitRegion, hexagon: HexagonFrame) -> Option<usize> {
    scene
        .as_slice()
        .iter()
        .rposition(|shape| !shape.is_degenerate() && shape.hit_box(region, hexagon).contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Shape, ShapeKind};
    use shapeboard_engine::paint::Color;

    fn scene(shapes: &[(ShapeKind, f32, f32, f32)]) -> Scene {
        let mut s = Scene::new();
        for &(kind, x, y, size) in shapes {
            s.push(Shape::new(kind, Vec2::new(x, y), size, Color::white()));
        }
        s
    }

    fn hit(scene: &Scene, x: f32, y: f32) -> Option<usize> {
        hit_test(scene, Vec2::new(x, y), HitRegion::Frame, HexagonFrame::Exact)
    }

    #[test]
    fn square_inside_and_outside() {
        let s = scene(&[(ShapeKind::Square, 200.0, 150.0, 100.0)]);
        assert_eq!(hit(&s, 151.0, 101.0), Some(0));
        assert_eq!(hit(&s, 149.0, 99.0), None);
    }

    #[test]
    fn edges_are_inclusive() {
        let s = scene(&[(ShapeKind::Square, 200.0, 150.0, 100.0)]);
        assert_eq!(hit(&s, 150.0, 100.0), Some(0));
        assert_eq!(hit(&s, 250.0, 200.0), Some(0));
        assert_eq!(hit(&s, 250.0, 150.0), Some(0));
        assert_eq!(hit(&s, 250.01, 150.0), None);
    }

    #[test]
    fn degenerate_shapes_are_never_hit() {
        let s = scene(&[
            (ShapeKind::Circle, 200.0, 150.0, -60.0),
            (ShapeKind::Square, 200.0, 150.0, 0.0),
        ]);
        for (x, y) in [(200.0, 150.0), (185.0, 140.0), (230.0, 180.0)] {
            assert_eq!(hit(&s, x, y), None);
        }
    }

    #[test]
    fn last_drawn_wins() {
        let s = scene(&[
            (ShapeKind::Square, 100.0, 100.0, 50.0),
            (ShapeKind::Circle, 110.0, 110.0, 50.0),
            (ShapeKind::Square, 500.0, 500.0, 10.0),
        ]);
        assert_eq!(hit(&s, 105.0, 105.0), Some(1));
        assert_eq!(hit(&s, 80.0, 80.0), Some(0));
    }

    #[test]
    fn empty_scene_hits_nothing() {
        assert_eq!(hit(&Scene::new(), 0.0, 0.0), None);
    }

    #[test]
    fn half_size_region_misses_hexagon_corner() {
        let s = scene(&[(ShapeKind::Hexagon, 0.0, 0.0, 40.0)]);
        let p = Vec2::new(35.0, 0.0);
        assert_eq!(hit_test(&s, p, HitRegion::Frame, HexagonFrame::Exact), Some(0));
        assert_eq!(hit_test(&s, p, HitRegion::HalfSize, HexagonFrame::Exact), None);
    }
}
