//! Gravity, jump and fly integration along the world Y axis.

use crate::config::ControllerConfig;

/// Vertical motion state carried between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VerticalState {
    pub vertical_velocity: f32,
    pub is_grounded: bool,
    pub is_fly_mode: bool,
}

/// Everything one vertical step needs from the outside world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalInput {
    /// Current eye height
    pub height: f32,
    /// Ground height probed at the current horizontal position
    pub ground_height: f32,
    pub fly_held: bool,
    pub jump_held: bool,
    /// Elapsed time in seconds
    pub dt: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalOutcome {
    pub state: VerticalState,
    /// New eye height
    pub height: f32,
    /// A jump impulse was applied this step
    pub jumped: bool,
}

/// Advance vertical motion by one tick.
///
/// Single step, no sub-stepping: a large `dt` can carry the camera through a
/// floor thinner than one step's travel.
pub fn step(state: VerticalState, config: &ControllerConfig, input: VerticalInput) -> VerticalOutcome {
    let mut velocity = state.vertical_velocity;
    let is_fly_mode = input.fly_held;

    if is_fly_mode {
        velocity = (velocity + config.fly_acceleration).min(config.max_fly_speed);
    } else {
        velocity += config.gravity * input.dt;
        velocity = velocity.max(config.terminal_velocity);
    }

    let candidate = input.height + velocity * input.dt;
    let min_height = input.ground_height + config.player_height;

    if candidate <= min_height && !is_fly_mode {
        if input.jump_held {
            return VerticalOutcome {
                state: VerticalState {
                    vertical_velocity: config.jump_speed,
                    is_grounded: false,
                    is_fly_mode,
                },
                height: min_height,
                jumped: true,
            };
        }

        VerticalOutcome {
            state: VerticalState {
                vertical_velocity: 0.0,
                is_grounded: true,
                is_fly_mode,
            },
            height: min_height,
            jumped: false,
        }
    } else {
        VerticalOutcome {
            state: VerticalState {
                vertical_velocity: velocity,
                is_grounded: false,
                is_fly_mode,
            },
            height: candidate,
            jumped: false,
        }
    }
}
