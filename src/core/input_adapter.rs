use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Button, InputSource};

/// Adapter that bridges Winit events to the InputSource trait
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Currently pressed buttons
    pressed: HashSet<Button>,
    /// Last cursor position (relative to window)
    cursor_position: Option<(f32, f32)>,
    /// Mouse movement delta since last reset
    mouse_delta: (f32, f32),
    /// Raw device motion is used instead of cursor motion (pointer lock)
    pointer_locked: bool,
    invert_x: bool,
    invert_y: bool,
}

impl WinitInput {
    /// Create a new adapter with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::mouse_button_to_button(*button) {
                    self.set_button(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved((position.x as f32, position.y as f32));
            }
            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused
                self.pressed.clear();
            }
            _ => {}
        }
    }

    /// Process raw device motion; only used while the pointer is locked
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.pointer_locked {
                self.mouse_delta.0 += delta.0 as f32;
                self.mouse_delta.1 += delta.1 as f32;
            }
        }
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed.insert(button);
            }
            ElementState::Released => {
                self.pressed.remove(&button);
            }
        }
    }

    fn cursor_moved(&mut self, new_pos: (f32, f32)) {
        if let Some(old_pos) = self.cursor_position {
            if !self.pointer_locked && self.is_dragging() {
                self.mouse_delta.0 += new_pos.0 - old_pos.0;
                self.mouse_delta.1 += new_pos.1 - old_pos.1;
            }
        }
        self.cursor_position = Some(new_pos);
    }

    /// Reset per-tick state (mouse delta).
    /// Call this after the camera has sampled the input for the tick.
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }

    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer_locked = locked;
    }

    pub fn set_invert(&mut self, invert_x: bool, invert_y: bool) {
        self.invert_x = invert_x;
        self.invert_y = invert_y;
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyB => Some(Button::KeyB),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Backslash | KeyCode::IntlBackslash => Some(Button::Backslash),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl InputSource for WinitInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn is_dragging(&self) -> bool {
        self.pressed.contains(&Button::MouseLeft)
    }

    fn invert_x(&self) -> bool {
        self.invert_x
    }

    fn invert_y(&self) -> bool {
        self.invert_y
    }
}
