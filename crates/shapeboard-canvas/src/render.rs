use shapeboard_engine::coords::{Rect, Vec2};

use crate::config::BoardConfig;
use crate::scene::Scene;
use crate::shape::Shape;
use crate::surface::Surface;

/// Clears the whole surface and repaints every shape back to front.
///
/// Each shape is filled, then its bounding frame is stroked on top of it,
/// then (when enabled) the frame's corner handles are filled. Output depends
/// only on `scene`, `config` and the surface size.
pub fn render_scene<S: Surface + ?Sized>(surface: &mut S, scene: &Scene, config: &BoardConfig) {
    let bounds = surface.bounds();
    surface.clear_rect(bounds);

    for shape in scene.iter().filter(|s| !s.is_degenerate()) {
        shape.fill(surface);
        draw_frame(surface, shape, config);
    }

    log::trace!("rendered {} shapes", scene.len());
}

fn draw_frame<S: Surface + ?Sized>(surface: &mut S, shape: &Shape, config: &BoardConfig) {
    let frame = shape.frame(config.hexagon_frame);
    surface.stroke_rect(frame, config.frame_color, config.frame_width);

    if config.show_handles {
        let size = Vec2::new(config.handle_size, config.handle_size);
        for corner in frame.corners() {
            surface.fill_rect(Rect::from_center_size(corner, size), config.frame_color);
        }
    }
}
