use serde::{Deserialize, Serialize};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyE,
    KeyB,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Shift,
    Backslash,
    MouseLeft,
    MouseRight,
}

/// Input source sampled once per tick by a camera controller
pub trait InputSource {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Mouse movement accumulated since the previous tick, in pixels
    fn mouse_delta(&self) -> (f32, f32);

    /// Whether a mouse drag is in progress
    fn is_dragging(&self) -> bool;

    fn invert_x(&self) -> bool {
        false
    }

    fn invert_y(&self) -> bool {
        false
    }

    /// Check if any of `buttons` is down
    fn any_down(&self, buttons: &[Button]) -> bool {
        buttons.iter().any(|&button| self.is_down(button))
    }
}
