use shapeboard_engine::coords::Vec2;

use crate::shape::Shape;

/// Placed shapes in paint order.
///
/// Append-only: shapes are never removed or reordered, so an index stays
/// valid for the lifetime of the scene.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `shape` on top of everything else and returns its index.
    pub fn push(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Shapes back to front.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    /// Moves the shape at `index`. Returns `false` if there is none.
    pub(crate) fn set_center(&mut self, index: usize, center: Vec2) -> bool {
        match self.shapes.get_mut(index) {
            Some(shape) => {
                shape.center = center;
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;
    use shapeboard_engine::paint::Color;

    fn circle(x: f32) -> Shape {
        Shape::new(ShapeKind::Circle, Vec2::new(x, 0.0), 10.0, Color::white())
    }

    #[test]
    fn push_returns_insertion_index() {
        let mut scene = Scene::new();
        assert_eq!(scene.push(circle(1.0)), 0);
        assert_eq!(scene.push(circle(2.0)), 1);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn iteration_is_insertion_order() {
        let mut scene = Scene::new();
        for x in [3.0, 1.0, 2.0] {
            scene.push(circle(x));
        }
        let xs: Vec<f32> = scene.iter().map(|s| s.center.x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut scene = Scene::new();
        scene.push(circle(1.0));
        scene.push(circle(1.0));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn set_center_out_of_range() {
        let mut scene = Scene::new();
        assert!(!scene.set_center(0, Vec2::zero()));
        scene.push(circle(1.0));
        assert!(scene.set_center(0, Vec2::new(9.0, 9.0)));
        assert_eq!(scene.get(0).map(|s| s.center), Some(Vec2::new(9.0, 9.0)));
    }
}
