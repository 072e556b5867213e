use std::collections::HashSet;

use crate::traits::{Button, InputSource};

/// Plain-data input for one tick, for scripted runs and tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pressed: HashSet<Button>,
    mouse_delta: (f32, f32),
    dragging: bool,
    invert_x: bool,
    invert_y: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pressed(buttons: &[Button]) -> Self {
        Self {
            pressed: buttons.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn press(&mut self, button: Button) {
        self.pressed.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed.remove(&button);
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn set_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta = (dx, dy);
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn set_invert(&mut self, invert_x: bool, invert_y: bool) {
        self.invert_x = invert_x;
        self.invert_y = invert_y;
    }
}

impl InputSource for InputSnapshot {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn invert_x(&self) -> bool {
        self.invert_x
    }

    fn invert_y(&self) -> bool {
        self.invert_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut input = InputSnapshot::new();
        input.press(Button::KeyW);
        assert!(input.is_down(Button::KeyW));
        input.release(Button::KeyW);
        assert!(!input.is_down(Button::KeyW));
    }

    #[test]
    fn test_with_pressed() {
        let input = InputSnapshot::with_pressed(&[Button::Space, Button::Shift]);
        assert!(input.is_down(Button::Space));
        assert!(input.is_down(Button::Shift));
        assert!(!input.is_down(Button::KeyA));
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputSnapshot::with_pressed(&[Button::KeyA, Button::KeyD]);
        input.release_all();
        assert!(!input.any_down(&[Button::KeyA, Button::KeyD]));
    }

    #[test]
    fn test_mouse_and_flags() {
        let mut input = InputSnapshot::new();
        input.set_mouse_delta(3.0, -4.0);
        input.set_dragging(true);
        input.set_invert(true, false);
        assert_eq!(input.mouse_delta(), (3.0, -4.0));
        assert!(input.is_dragging());
        assert!(input.invert_x());
        assert!(!input.invert_y());
    }
}
