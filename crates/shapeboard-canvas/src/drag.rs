use shapeboard_engine::coords::Vec2;

use crate::config::{HexagonFrame, HitRegion};
use crate::hit::hit_test;
use crate::scene::Scene;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        index: usize,
        /// `pointer − center` at pick time; held fixed for the whole session.
        offset: Vec2,
    },
}

/// Pointer-drag state machine over a [`Scene`].
///
/// One persistent handler for down/move/up; at most one session at a time.
/// Every method reports whether the scene or the selection changed so the
/// caller knows when to redraw.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Index of the shape being dragged.
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { index, .. } => Some(index),
            DragState::Idle => None,
        }
    }

    /// Picks the topmost shape under `pointer` and starts dragging it.
    ///
    /// Ignored while a drag is already in progress.
    pub fn pointer_down(
        &mut self,
        scene: &Scene,
        pointer: Vec2,
        region: HitRegion,
        hexagon: HexagonFrame,
    ) -> Option<usize> {
        if let DragState::Dragging { index, .. } = self.state {
            log::debug!("pointer down during drag of #{index}; ignored");
            return None;
        }

        let index = hit_test(scene, pointer, region, hexagon)?;
        let shape = scene.get(index)?;
        let offset = pointer - shape.center;
        self.state = DragState::Dragging { index, offset };

        log::debug!("picked {} #{index} at ({}, {})", shape.kind, pointer.x, pointer.y);
        Some(index)
    }

    /// Moves the dragged shape so that `pointer − center` stays equal to the
    /// captured offset. No-op while idle.
    pub fn pointer_move(&mut self, scene: &mut Scene, pointer: Vec2) -> bool {
        let DragState::Dragging { index, offset } = self.state else {
            return false;
        };

        let moved = scene.set_center(index, pointer - offset);
        if moved {
            log::trace!("moved #{index} to ({}, {})", pointer.x - offset.x, pointer.y - offset.y);
        }
        moved
    }

    /// Ends the current session. Returns `false` if there was none.
    pub fn pointer_up(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { index, .. } => {
                log::debug!("released #{index}");
                true
            }
            DragState::Idle => false,
        }
    }
}
