use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
};

/// Current input state for the board window.
///
/// Holds "is down" information and the last known pointer position.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in window logical pixels.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds `ev` into the current state.
    ///
    /// Returns `false` for transitions that change nothing (a release of a
    /// button that was never seen pressed, a repeated press); the runtime
    /// drops those instead of forwarding them.
    pub fn apply_event(&mut self, ev: &InputEvent) -> bool {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
                true
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets to avoid stuck keys.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
                true
            }

            InputEvent::PointerMoved(p) => {
                self.pointer_pos = Some(*p);
                true
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                true
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => self.keys_down.insert(*key),
                    KeyState::Released => self.keys_down.remove(key),
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, pos, modifiers }) => {
                self.pointer_pos = Some(*pos);
                self.modifiers = *modifiers;
                match state {
                    MouseButtonState::Pressed => self.buttons_down.insert(*button),
                    MouseButtonState::Released => self.buttons_down.remove(button),
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
