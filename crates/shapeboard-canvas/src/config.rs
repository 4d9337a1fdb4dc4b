use shapeboard_engine::coords::Vec2;
use shapeboard_engine::paint::Color;

/// Fill used for new shapes until `set_color` is called.
pub const DEFAULT_FILL_HEX: &str = "#a8b6fb";

/// Stroke color of every bounding frame.
pub const FRAME_COLOR_HEX: &str = "#5900EB";

/// Swatches the studio cycles through. The first entry is the default fill.
pub const PALETTE: [&str; 6] = [
    DEFAULT_FILL_HEX,
    "#fbb6a8",
    "#a8fbc4",
    "#f7e08a",
    "#d8a8fb",
    "#8ad4f7",
];

pub fn default_fill() -> Color {
    Color::from_srgb_u8(0xa8, 0xb6, 0xfb, 0xff)
}

pub fn frame_color() -> Color {
    Color::from_srgb_u8(0x59, 0x00, 0xeb, 0xff)
}

/// Which box a pointer-down is tested against.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum HitRegion {
    /// The shape's bounding frame.
    #[default]
    Frame,
    /// `center ± size/2` on both axes regardless of kind. Smaller than the
    /// frame for hexagons, taller than it for triangles.
    HalfSize,
}

/// Bounding frame used for hexagons.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum HexagonFrame {
    /// Tight box `(x − s, y − h, 2s, 2h)`, `h = s·√3/2`.
    #[default]
    Exact,
    /// Box of the circumscribed circle `(x − s, y − s, 2s, 2s)`.
    Circumscribed,
}

/// Board appearance and interaction settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub fill_color: Color,
    pub frame_color: Color,
    pub frame_width: f32,

    /// Draw four corner handles on every frame.
    pub show_handles: bool,
    pub handle_size: f32,

    pub hit_region: HitRegion,
    pub hexagon_frame: HexagonFrame,

    /// Canvas top-left in window coordinates. Pointer positions are made
    /// canvas-local by subtracting it.
    pub canvas_origin: Vec2,
    pub background: Color,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            fill_color: default_fill(),
            frame_color: frame_color(),
            frame_width: 1.0,
            show_handles: true,
            handle_size: 6.0,
            hit_region: HitRegion::Frame,
            hexagon_frame: HexagonFrame::Exact,
            canvas_origin: Vec2::zero(),
            background: Color::white(),
        }
    }
}

impl BoardConfig {
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_handles(mut self, show: bool) -> Self {
        self.show_handles = show;
        self
    }

    pub fn with_hit_region(mut self, region: HitRegion) -> Self {
        self.hit_region = region;
        self
    }

    pub fn with_hexagon_frame(mut self, frame: HexagonFrame) -> Self {
        self.hexagon_frame = frame;
        self
    }

    pub fn with_canvas_origin(mut self, origin: Vec2) -> Self {
        self.canvas_origin = origin;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_constants_match_hex() {
        assert_eq!(default_fill(), Color::from_hex(DEFAULT_FILL_HEX).unwrap());
        assert_eq!(frame_color(), Color::from_hex(FRAME_COLOR_HEX).unwrap());
    }

    #[test]
    fn palette_entries_parse() {
        for hex in PALETTE {
            assert!(Color::from_hex(hex).is_ok(), "{hex}");
        }
        assert_eq!(PALETTE[0], DEFAULT_FILL_HEX);
    }

    #[test]
    fn defaults() {
        let c = BoardConfig::default();
        assert_eq!(c.frame_width, 1.0);
        assert!(c.show_handles);
        assert_eq!(c.handle_size, 6.0);
        assert_eq!(c.hit_region, HitRegion::Frame);
        assert_eq!(c.hexagon_frame, HexagonFrame::Exact);
        assert_eq!(c.canvas_origin, Vec2::zero());
        assert_eq!(c.background, Color::white());
    }
}
