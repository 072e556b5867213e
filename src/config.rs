//! Controller tuning parameters.
//!
//! Every field has a default, so a JSON file only needs the values it wants
//! to override. Distances are world units, times are seconds.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::traits::Button;

/// Multipliers applied to the speed cap while a modifier key is held
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedCapModifiers {
    pub fast: f32,
    pub slow: f32,
}

impl Default for SpeedCapModifiers {
    fn default() -> Self {
        Self { fast: 5.0, slow: 0.2 }
    }
}

/// Per-tick decay factors; 0 stops at once, values near 1 glide
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragFactors {
    /// Planar velocity decay when no direction key is held
    pub movement: f32,
    /// Look inertia after the mouse button is released
    pub mouse_look_slow: f32,
    /// Look inertia while dragging
    pub mouse_look_fast: f32,
}

impl Default for DragFactors {
    fn default() -> Self {
        Self {
            movement: 0.8,
            mouse_look_slow: 0.8,
            mouse_look_fast: 0.0,
        }
    }
}

/// Which buttons drive which action; any listed button triggers it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<Button>,
    pub backward: Vec<Button>,
    pub left: Vec<Button>,
    pub right: Vec<Button>,
    pub jump: Vec<Button>,
    pub fly: Vec<Button>,
    pub fast: Vec<Button>,
    pub slow: Vec<Button>,
    pub reset: Vec<Button>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![Button::KeyW, Button::ArrowUp],
            backward: vec![Button::KeyS, Button::ArrowDown],
            left: vec![Button::KeyA, Button::ArrowLeft],
            right: vec![Button::KeyD, Button::ArrowRight],
            jump: vec![Button::Space],
            fly: vec![Button::KeyE],
            fast: vec![Button::Shift],
            slow: vec![Button::Backslash],
            reset: vec![Button::KeyB],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Vertical acceleration (units/s², negative pulls down)
    pub gravity: f32,
    /// Upward velocity set by a jump (units/s)
    pub jump_speed: f32,
    /// Most negative vertical velocity reachable by falling (units/s)
    pub terminal_velocity: f32,
    /// Ascent speed cap while flying (units/s)
    pub max_fly_speed: f32,
    /// Velocity added per tick while the fly key is held (units/s)
    pub fly_acceleration: f32,

    /// Eye height above the ground
    pub player_height: f32,
    /// Body radius used by wall clearance checks
    pub player_radius: f32,
    /// How far below the eye the ground probe looks
    pub ground_probe_max_distance: f32,
    /// Reject planar moves that would push the body into steep geometry
    pub wall_collision: bool,

    /// Planar speed cap per axis (units/s)
    pub speed_cap: f32,
    pub speed_cap_modifiers: SpeedCapModifiers,
    /// Fraction of the current cap added per tick while a direction is held
    pub acceleration_ratio: f32,
    /// Below this planar speed a decaying axis snaps to zero
    pub low_speed_threshold: f32,
    /// Global multiplier on planar displacement
    pub move_speed_mult: f32,

    /// Mouse pixels per radian of look rotation
    pub mouse_look_speed: f32,
    /// Longest tick the controller integrates; larger `dt` is clamped (seconds)
    pub max_tick_seconds: f32,
    pub drag: DragFactors,

    pub bindings: KeyBindings,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            gravity: -800.0,
            jump_speed: 400.0,
            terminal_velocity: -1000.0,
            max_fly_speed: 300.0,
            fly_acceleration: 30.0,
            player_height: 100.0,
            player_radius: 30.0,
            ground_probe_max_distance: 500.0,
            wall_collision: false,
            speed_cap: 1000.0,
            speed_cap_modifiers: SpeedCapModifiers::default(),
            acceleration_ratio: 0.2,
            low_speed_threshold: 1.0,
            move_speed_mult: 1.0,
            mouse_look_speed: 500.0,
            max_tick_seconds: 0.1,
            drag: DragFactors::default(),
            bindings: KeyBindings::default(),
        }
    }
}

impl ControllerConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse controller config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read controller config: {:?}", path))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid controller config: {:?}", path))
    }

    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("gravity", self.gravity),
            ("jump_speed", self.jump_speed),
            ("terminal_velocity", self.terminal_velocity),
            ("max_fly_speed", self.max_fly_speed),
            ("fly_acceleration", self.fly_acceleration),
            ("player_height", self.player_height),
            ("player_radius", self.player_radius),
            ("ground_probe_max_distance", self.ground_probe_max_distance),
            ("speed_cap", self.speed_cap),
            ("speed_cap_modifiers.fast", self.speed_cap_modifiers.fast),
            ("speed_cap_modifiers.slow", self.speed_cap_modifiers.slow),
            ("acceleration_ratio", self.acceleration_ratio),
            ("low_speed_threshold", self.low_speed_threshold),
            ("move_speed_mult", self.move_speed_mult),
            ("mouse_look_speed", self.mouse_look_speed),
            ("max_tick_seconds", self.max_tick_seconds),
            ("drag.movement", self.drag.movement),
            ("drag.mouse_look_slow", self.drag.mouse_look_slow),
            ("drag.mouse_look_fast", self.drag.mouse_look_fast),
        ];
        for (name, value) in scalars {
            ensure!(value.is_finite(), "{} must be finite, got {}", name, value);
        }

        ensure!(self.gravity <= 0.0, "gravity must not point upward, got {}", self.gravity);
        ensure!(
            self.terminal_velocity < 0.0,
            "terminal_velocity must be negative, got {}",
            self.terminal_velocity
        );

        let positives = [
            ("jump_speed", self.jump_speed),
            ("max_fly_speed", self.max_fly_speed),
            ("fly_acceleration", self.fly_acceleration),
            ("player_height", self.player_height),
            ("player_radius", self.player_radius),
            ("ground_probe_max_distance", self.ground_probe_max_distance),
            ("speed_cap", self.speed_cap),
            ("speed_cap_modifiers.fast", self.speed_cap_modifiers.fast),
            ("speed_cap_modifiers.slow", self.speed_cap_modifiers.slow),
            ("acceleration_ratio", self.acceleration_ratio),
            ("low_speed_threshold", self.low_speed_threshold),
            ("move_speed_mult", self.move_speed_mult),
            ("mouse_look_speed", self.mouse_look_speed),
            ("max_tick_seconds", self.max_tick_seconds),
        ];
        for (name, value) in positives {
            ensure!(value > 0.0, "{} must be positive, got {}", name, value);
        }

        let drags = [
            ("drag.movement", self.drag.movement),
            ("drag.mouse_look_slow", self.drag.mouse_look_slow),
            ("drag.mouse_look_fast", self.drag.mouse_look_fast),
        ];
        for (name, value) in drags {
            ensure!((0.0..1.0).contains(&value), "{} must be in [0, 1), got {}", name, value);
        }

        Ok(())
    }

    /// Speed cap after applying the held modifier
    pub fn speed_cap_for(&self, modifier: SpeedModifier) -> f32 {
        match modifier {
            SpeedModifier::Normal => self.speed_cap,
            SpeedModifier::Fast => self.speed_cap * self.speed_cap_modifiers.fast,
            SpeedModifier::Slow => self.speed_cap * self.speed_cap_modifiers.slow,
        }
    }
}

/// Speed modifier held this tick; slow takes precedence over fast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpeedModifier {
    #[default]
    Normal,
    Fast,
    Slow,
}

impl SpeedModifier {
    pub fn from_keys(fast: bool, slow: bool) -> Self {
        match (fast, slow) {
            (_, true) => SpeedModifier::Slow,
            (true, false) => SpeedModifier::Fast,
            (false, false) => SpeedModifier::Normal,
        }
    }
}
