//! Physics-driven first-person camera.
//!
//! Each tick integrates planar movement and vertical physics against the
//! collision meshes, applies mouse look and keeps the camera upright.

use glam::{Mat4, Vec2, Vec3};
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::Arc;

use crate::collision::{blocks_movement, ground_height_or_fallback, BodyShape, MeshCollider};
use crate::config::{ControllerConfig, SpeedModifier};
use crate::orientation::{self, MouseLook};
use crate::physics::movement::{self, MovementIntent, PlanarVelocity};
use crate::physics::vertical::{self, VerticalInput, VerticalState};
use crate::traits::{CameraController, CameraUpdateResult, InputSource};

/// Vertical motion state, derived from the physics flags every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MotionState {
    Grounded,
    Airborne,
    Flying,
}

impl MotionState {
    pub fn from_vertical(state: &VerticalState) -> Self {
        if state.is_fly_mode {
            MotionState::Flying
        } else if state.is_grounded {
            MotionState::Grounded
        } else {
            MotionState::Airborne
        }
    }
}

pub struct PhysicsCameraController {
    config: ControllerConfig,
    world_matrix: Mat4,
    meshes: Arc<[MeshCollider]>,
    planar: PlanarVelocity,
    vertical: VerticalState,
    mouse_look: MouseLook,
    linear_velocity: Vec3,
    /// Next update reports an important change regardless of motion
    force_update: bool,
}

impl PhysicsCameraController {
    /// `config` must pass [`ControllerConfig::validate`]; configs from
    /// [`ControllerConfig::load`] always do.
    pub fn new(config: ControllerConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "Invalid controller config: {:?}", config.validate());
        Self {
            config,
            world_matrix: Mat4::IDENTITY,
            meshes: Arc::from(Vec::new()),
            planar: PlanarVelocity::ZERO,
            vertical: VerticalState::default(),
            mouse_look: MouseLook::new(),
            linear_velocity: Vec3::ZERO,
            force_update: false,
        }
    }

    /// Replace the collision meshes, e.g. after a scene load
    pub fn set_mesh_source(&mut self, meshes: impl Into<Arc<[MeshCollider]>>) {
        self.meshes = meshes.into();
        let triangles: usize = self.meshes.iter().map(MeshCollider::triangle_count).sum();
        info!("Collision source set: {} meshes, {} triangles", self.meshes.len(), triangles);
    }

    pub fn meshes(&self) -> &[MeshCollider] {
        &self.meshes
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn set_world_matrix(&mut self, world_matrix: Mat4) {
        self.world_matrix = world_matrix;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.world_matrix.w_axis = position.extend(1.0);
    }

    pub fn vertical_state(&self) -> VerticalState {
        self.vertical
    }

    pub fn planar_velocity(&self) -> PlanarVelocity {
        self.planar
    }

    pub fn motion_state(&self) -> MotionState {
        MotionState::from_vertical(&self.vertical)
    }

    /// Displacement applied during the last tick
    pub fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    fn sanitize_dt(&self, dt: f32) -> f32 {
        if !(dt.is_finite() && dt >= 0.0) {
            warn!("Ignoring invalid tick duration {}", dt);
            return 0.0;
        }
        if dt > self.config.max_tick_seconds {
            warn!("Clamping tick duration {} to {}", dt, self.config.max_tick_seconds);
            return self.config.max_tick_seconds;
        }
        dt
    }

    fn sanitize_mouse_delta((dx, dy): (f32, f32)) -> Vec2 {
        let delta = Vec2::new(dx, dy);
        if delta.is_finite() {
            delta
        } else {
            warn!("Ignoring non-finite mouse delta ({}, {})", dx, dy);
            Vec2::ZERO
        }
    }

    fn movement_intent(&self, input: &dyn InputSource) -> MovementIntent {
        let bindings = &self.config.bindings;
        MovementIntent::from_keys(
            input.any_down(&bindings.forward),
            input.any_down(&bindings.backward),
            input.any_down(&bindings.left),
            input.any_down(&bindings.right),
            SpeedModifier::from_keys(input.any_down(&bindings.fast), input.any_down(&bindings.slow)),
        )
    }

    fn body_shape(&self) -> BodyShape {
        BodyShape {
            height: self.config.player_height,
            radius: self.config.player_radius,
        }
    }

    fn tick(&mut self, input: &dyn InputSource, dt: f32) -> CameraUpdateResult {
        let dt = self.sanitize_dt(dt);
        let mut changed = false;

        if input.any_down(&self.config.bindings.reset) {
            self.reset_state();
        }
        let mut important = std::mem::take(&mut self.force_update);

        // Planar velocity
        let step = movement::integrate(self.planar, self.movement_intent(input), &self.config);
        self.planar = step.velocity;
        important |= step.stopped;

        // Vertical physics, probed at the position before this tick's move
        let position = self.world_matrix.w_axis.truncate();
        let ground_height = ground_height_or_fallback(position, &self.meshes, self.config.ground_probe_max_distance);
        let previous_state = self.motion_state();
        let outcome = vertical::step(
            self.vertical,
            &self.config,
            VerticalInput {
                height: position.y,
                ground_height,
                fly_held: input.any_down(&self.config.bindings.fly),
                jump_held: input.any_down(&self.config.bindings.jump),
                dt,
            },
        );
        self.vertical = outcome.state;
        if outcome.jumped {
            debug!("Jump from ground at {:.2}", ground_height);
        }
        let motion_state = self.motion_state();
        if motion_state != previous_state {
            debug!("Motion state {:?} -> {:?} at height {:.2}", previous_state, motion_state, outcome.height);
        }

        // Translation
        let mut new_position = Vec3::new(position.x, outcome.height, position.z);
        let planar_offset = movement::displacement(self.planar, &self.world_matrix, &self.config, dt);
        if planar_offset != Vec3::ZERO {
            let candidate = new_position + planar_offset;
            if self.config.wall_collision && blocks_movement(candidate, &self.meshes, self.body_shape()) {
                debug!("Planar move blocked at {:?}", candidate);
            } else {
                new_position = candidate;
            }
        }
        self.linear_velocity = new_position - position;
        self.world_matrix.w_axis = new_position.extend(1.0);
        changed |= new_position != position;

        // Mouse look
        let delta = Self::sanitize_mouse_delta(input.mouse_delta());
        self.mouse_look
            .accumulate(delta, self.config.mouse_look_speed, input.invert_x(), input.invert_y());
        let look_drag = if input.is_dragging() {
            self.config.drag.mouse_look_fast
        } else {
            self.config.drag.mouse_look_slow
        };
        changed |= self.mouse_look.apply(&mut self.world_matrix, look_drag);

        orientation::stabilize(&mut self.world_matrix);

        if important {
            CameraUpdateResult::ImportantChange
        } else if changed {
            CameraUpdateResult::Changed
        } else {
            CameraUpdateResult::Unchanged
        }
    }

    fn reset_state(&mut self) {
        self.world_matrix = Mat4::IDENTITY;
        self.planar = PlanarVelocity::ZERO;
        self.vertical = VerticalState::default();
        self.mouse_look.clear();
        self.linear_velocity = Vec3::ZERO;
        self.force_update = true;
        info!("Camera reset");
    }
}

impl CameraController for PhysicsCameraController {
    fn update(&mut self, input: &dyn InputSource, delta_time: f32) -> CameraUpdateResult {
        self.tick(input, delta_time)
    }

    fn world_matrix(&self) -> Mat4 {
        self.world_matrix
    }

    fn reset(&mut self) {
        self.reset_state();
    }
}
