//! CPU tessellation of draw commands into colored triangle lists.
//!
//! Everything here is plain math so it runs (and is tested) without a GPU.

use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{CircleCmd, DrawCmd, DrawList, PolygonCmd, RectCmd, StrokeRectCmd};

/// Maximum distance (logical px) between a true circle and its polygon.
const CIRCLE_TOLERANCE: f32 = 0.25;
const MIN_CIRCLE_SEGMENTS: usize = 12;
const MAX_CIRCLE_SEGMENTS: usize = 256;

/// One vertex of the triangle list uploaded to the mesh renderer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in logical pixels.
    pub pos: [f32; 2],
    /// Linear premultiplied RGBA.
    pub color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Appends triangles for every command in `list` to `out`, in paint order.
///
/// Degenerate commands (zero radius, empty rect, fewer than three points,
/// non-finite coordinates) contribute nothing.
pub fn tessellate(list: &DrawList, out: &mut Vec<MeshVertex>) {
    for cmd in list.items() {
        match cmd {
            DrawCmd::Rect(c) => fill_rect(c, out),
            DrawCmd::StrokeRect(c) => stroke_rect(c, out),
            DrawCmd::Circle(c) => fill_circle(c, out),
            DrawCmd::Polygon(c) => fill_polygon(c, out),
        }
    }
}

/// Number of segments used to approximate a circle of `radius`.
pub fn circle_segments(radius: f32) -> usize {
    if radius <= CIRCLE_TOLERANCE {
        return MIN_CIRCLE_SEGMENTS;
    }
    let step = (1.0 - CIRCLE_TOLERANCE / radius).acos();
    let n = (PI / step).ceil() as usize;
    n.clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

fn fill_rect(cmd: &RectCmd, out: &mut Vec<MeshVertex>) {
    push_quad(cmd.rect, cmd.color, out);
}

fn stroke_rect(cmd: &StrokeRectCmd, out: &mut Vec<MeshVertex>) {
    if cmd.width <= 0.0 || !cmd.width.is_finite() || !cmd.rect.is_finite() {
        return;
    }

    let r = cmd.rect.normalized();
    let half = cmd.width / 2.0;
    let outer = Rect::from_min_max(
        r.min() - Vec2::new(half, half),
        r.max() + Vec2::new(half, half),
    );

    let inner_w = r.size.x - cmd.width;
    let inner_h = r.size.y - cmd.width;
    if inner_w <= 0.0 || inner_h <= 0.0 {
        // Stroke swallows the interior.
        push_quad(outer, cmd.color, out);
        return;
    }

    let inner = Rect::new(r.origin.x + half, r.origin.y + half, inner_w, inner_h);
    let (o0, o1) = (outer.min(), outer.max());
    let (i0, i1) = (inner.min(), inner.max());

    // Top and bottom bands span the full width; sides fill the gap between.
    push_quad(Rect::from_min_max(o0, Vec2::new(o1.x, i0.y)), cmd.color, out);
    push_quad(Rect::from_min_max(Vec2::new(o0.x, i1.y), o1), cmd.color, out);
    push_quad(Rect::from_min_max(Vec2::new(o0.x, i0.y), Vec2::new(i0.x, i1.y)), cmd.color, out);
    push_quad(Rect::from_min_max(Vec2::new(i1.x, i0.y), Vec2::new(o1.x, i1.y)), cmd.color, out);
}

fn fill_circle(cmd: &CircleCmd, out: &mut Vec<MeshVertex>) {
    if cmd.radius <= 0.0 || !cmd.radius.is_finite() || !cmd.center.is_finite() {
        return;
    }

    let n = circle_segments(cmd.radius);
    let rim: Vec<Vec2> = (0..n)
        .map(|i| Vec2::polar(cmd.center, cmd.radius, i as f32 * TAU / n as f32))
        .collect();

    push_fan(&rim, cmd.color, out);
}

fn fill_polygon(cmd: &PolygonCmd, out: &mut Vec<MeshVertex>) {
    if cmd.points.iter().any(|p| !p.is_finite()) {
        return;
    }
    push_fan(&cmd.points, cmd.color, out);
}

fn push_quad(rect: Rect, color: Color, out: &mut Vec<MeshVertex>) {
    let r = rect.normalized();
    if r.is_empty() || !r.is_finite() {
        return;
    }
    let [a, b, c, d] = r.corners();
    push_triangle(a, b, c, color, out);
    push_triangle(a, c, d, color, out);
}

fn push_fan(points: &[Vec2], color: Color, out: &mut Vec<MeshVertex>) {
    if points.len() < 3 {
        return;
    }
    let first = points[0];
    for pair in points[1..].windows(2) {
        push_triangle(first, pair[0], pair[1], color, out);
    }
}

#[inline]
fn push_triangle(a: Vec2, b: Vec2, c: Vec2, color: Color, out: &mut Vec<MeshVertex>) {
    let color = color.to_array();
    out.extend([a, b, c].map(|p| MeshVertex { pos: [p.x, p.y], color }));
}
