use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use shapeboard_engine::coords::{Vec2, Viewport};
use shapeboard_engine::core::{App as EngineApp, AppControl, FrameCtx, FrameOutcome};
use shapeboard_engine::device::GpuInit;
use shapeboard_engine::input::{
    InputEvent, InputState, Key, KeyState, Modifiers, MouseButton, MouseButtonState,
    PointerButtonEvent,
};
use shapeboard_engine::render::MeshRenderer;
use shapeboard_engine::window::{Runtime, RuntimeConfig};

use crate::board::Board;
use crate::config::{BoardConfig, PALETTE};
use crate::shape::ShapeKind;
use crate::surface::DrawListSurface;

/// Size scale for shapes added from the keyboard.
pub const DEFAULT_SCALE: f32 = 5.0;
/// Size scale used while Shift is held.
pub const LARGE_SCALE: f32 = 3.0;

// ── BoardWindow ───────────────────────────────────────────────────────────

/// Opens a native window hosting a [`Board`].
///
/// ```rust,ignore
/// BoardWindow::new()
///     .title("shapeboard")
///     .size(1024.0, 768.0)
///     .run()?;
/// ```
pub struct BoardWindow {
    title: String,
    width: f64,
    height: f64,
    config: BoardConfig,
    gpu: GpuInit,
}

impl BoardWindow {
    pub fn new() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            title: runtime.title,
            width: runtime.initial_size.width,
            height: runtime.initial_size.height,
            config: BoardConfig::default(),
            gpu: GpuInit::default(),
        }
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }

    /// Runs until the window closes or Escape is pressed.
    pub fn run(self) -> Result<()> {
        let runtime = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };
        Runtime::run(runtime, self.gpu, BoardApp::new(self.config)).context("shapeboard runtime failed")
    }
}

impl Default for BoardWindow {
    fn default() -> Self {
        Self::new()
    }
}

// ── BoardApp ──────────────────────────────────────────────────────────────

/// Engine app driving a [`Board`] from window input.
///
/// - `1`–`4`: add circle, square, triangle, hexagon (Shift: larger)
/// - `C`: next palette color
/// - `Escape`: quit
/// - left button: drag shapes
pub struct BoardApp {
    board: Board<DrawListSurface>,
    renderer: MeshRenderer,
    palette_index: usize,
    dirty: bool,
}

impl BoardApp {
    pub fn new(config: BoardConfig) -> Self {
        let surface = DrawListSurface::new(Vec2::zero(), config.background);
        Self {
            board: Board::new(surface, config),
            renderer: MeshRenderer::new(),
            palette_index: 0,
            dirty: true,
        }
    }

    pub fn board(&self) -> &Board<DrawListSurface> {
        &self.board
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> AppControl {
        match key {
            Key::Escape => return AppControl::Exit,
            Key::C => self.next_color(),
            _ => {
                let Some(kind) = key
                    .digit()
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(|i| ShapeKind::ALL.get(i).copied())
                else {
                    return AppControl::Continue;
                };
                let scale = if modifiers.shift { LARGE_SCALE } else { DEFAULT_SCALE };
                if self.board.add_shape(kind, scale).is_ok() {
                    self.dirty = true;
                }
            }
        }
        AppControl::Continue
    }

    fn next_color(&mut self) {
        self.palette_index = (self.palette_index + 1) % PALETTE.len();
        let hex = PALETTE[self.palette_index];
        match self.board.set_color(hex) {
            Ok(()) => log::info!("fill color {hex}"),
            Err(e) => log::warn!("palette entry rejected: {e}"),
        }
    }

    fn on_button(&mut self, ev: &PointerButtonEvent) {
        if ev.button != MouseButton::Left {
            return;
        }
        match ev.state {
            MouseButtonState::Pressed => {
                self.board.pointer_down(ev.pos);
            }
            MouseButtonState::Released => self.dirty |= self.board.pointer_up(),
        }
    }

    /// Changes stay pending until a frame actually reaches the screen.
    fn finish_frame(&mut self, outcome: FrameOutcome) -> AppControl {
        if outcome.presented() {
            self.dirty = false;
        } else {
            log::debug!("frame {outcome:?}; redraw still pending");
        }
        outcome.control()
    }
}

impl EngineApp for BoardApp {
    fn on_input(&mut self, event: &InputEvent, _input: &InputState) -> AppControl {
        match event {
            InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat: false } => {
                return self.on_key(*key, *modifiers);
            }
            InputEvent::PointerButton(ev) => self.on_button(ev),
            InputEvent::PointerMoved(p) => self.dirty |= self.board.pointer_move(*p),
            // The release may never arrive once focus is gone.
            InputEvent::Focused(false) => self.dirty |= self.board.pointer_up(),
            _ => {}
        }
        AppControl::Continue
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.board.resize(Vec2::new(viewport.width, viewport.height));
        self.dirty = true;
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let surface = self.board.surface();
        let clear = surface.background();
        let draw_list = surface.draw_list();
        let renderer = &mut self.renderer;

        let outcome = ctx.render(clear, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        });
        self.finish_frame(outcome)
    }
}
