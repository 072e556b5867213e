pub mod camera;
pub mod cli;
pub mod collision;
pub mod config;
pub mod core;
pub mod loaders;
pub mod math;
pub mod orientation;
pub mod physics;
pub mod traits;

pub use camera::{MotionState, PhysicsCameraController};
pub use collision::MeshCollider;
pub use config::ControllerConfig;
pub use traits::{Button, CameraController, CameraUpdateResult, InputSource};
