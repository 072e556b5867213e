use anyhow::{Context, Result};
use clap::Parser;
use glam::{Vec2, Vec3};
use log::{debug, info};
use serde::Serialize;

use physics_camera::cli::Cli;
use physics_camera::core::InputSnapshot;
use physics_camera::loaders::load_gltf_colliders;
use physics_camera::{
    CameraController, CameraUpdateResult, ControllerConfig, MeshCollider, MotionState, PhysicsCameraController,
};

/// Final report printed after a run
#[derive(Debug, Serialize)]
struct SimulationSummary {
    ticks: u32,
    final_position: [f32; 3],
    vertical_velocity: f32,
    motion_state: MotionState,
    changed_ticks: u32,
    important_ticks: u32,
}

fn load_meshes(cli: &Cli) -> Result<Vec<MeshCollider>> {
    match &cli.mesh {
        Some(path) => load_gltf_colliders(path),
        None => {
            let extent = Vec2::splat(cli.floor_half_extent);
            Ok(vec![MeshCollider::flat_quad(-extent, extent, 0.0)])
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ControllerConfig::load(path)?,
        None => ControllerConfig::default(),
    };
    let meshes = load_meshes(&cli).context("Failed to prepare collision meshes")?;

    let mut camera = PhysicsCameraController::new(config);
    camera.set_mesh_source(meshes);
    camera.set_position(Vec3::new(0.0, cli.start_height, 0.0));

    let jump_key = camera.config().bindings.jump.first().copied();
    let forward_key = camera.config().bindings.forward.first().copied();

    let mut input = InputSnapshot::new();
    if let (true, Some(key)) = (cli.walk, forward_key) {
        input.press(key);
    }

    info!("Simulating {} ticks at dt = {:.4}s", cli.ticks, cli.dt);

    let mut changed_ticks = 0;
    let mut important_ticks = 0;
    for tick in 0..cli.ticks {
        if let Some(key) = jump_key {
            if cli.jump_at == Some(tick) {
                input.press(key);
            } else {
                input.release(key);
            }
        }

        let result = camera.update(&input, cli.dt);
        match result {
            CameraUpdateResult::ImportantChange => important_ticks += 1,
            CameraUpdateResult::Changed => changed_ticks += 1,
            CameraUpdateResult::Unchanged => {}
        }

        debug!(
            "tick {:>4}: {:?} pos = {:?} vy = {:.2} state = {:?}",
            tick,
            result,
            camera.position(),
            camera.vertical_state().vertical_velocity,
            camera.motion_state()
        );
    }

    let summary = SimulationSummary {
        ticks: cli.ticks,
        final_position: camera.position().to_array(),
        vertical_velocity: camera.vertical_state().vertical_velocity,
        motion_state: camera.motion_state(),
        changed_ticks,
        important_ticks,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
