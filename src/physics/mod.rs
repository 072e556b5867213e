pub mod movement;
pub mod vertical;

pub use movement::{MovementIntent, MovementStep, PlanarVelocity};
pub use vertical::{VerticalInput, VerticalOutcome, VerticalState};
