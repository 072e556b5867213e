use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use physics_camera::collision::{blocks_movement, probe_ground, BodyShape, MeshCollider};
use physics_camera::core::InputSnapshot;
use physics_camera::{Button, CameraController, ControllerConfig, PhysicsCameraController};

/// Grid of `side * side` tiles, each a separate two-triangle mesh at a varying height
fn tile_grid(side: usize, tile_size: f32) -> Vec<MeshCollider> {
    let mut meshes = Vec::with_capacity(side * side);
    for i in 0..side {
        for j in 0..side {
            let min = Vec2::new(i as f32 * tile_size, j as f32 * tile_size);
            let height = ((i * 7 + j * 13) % 5) as f32 * 10.0;
            meshes.push(MeshCollider::flat_quad(min, min + Vec2::splat(tile_size), height));
        }
    }
    meshes
}

/// Probe points spread over the grid
fn probe_points(side: usize, tile_size: f32, count: usize) -> Vec<Vec3> {
    let extent = side as f32 * tile_size;
    (0..count)
        .map(|k| {
            let t = k as f32 * 0.618_034;
            Vec3::new((t * 37.0) % extent, 150.0, (t * 91.0) % extent)
        })
        .collect()
}

/// Benchmark: ground probe cost as the mesh count grows
fn bench_probe_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe_ground");

    for side in [4usize, 16, 64].iter() {
        let meshes = tile_grid(*side, 50.0);
        let points = probe_points(*side, 50.0, 64);

        group.bench_with_input(BenchmarkId::new("tiles", side * side), side, |b, _| {
            b.iter(|| {
                for p in &points {
                    black_box(probe_ground(black_box(*p), &meshes, 500.0));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark: single dense mesh versus many small meshes with the same triangle count
fn bench_mesh_layout(c: &mut Criterion) {
    let side = 32;
    let tiles = tile_grid(side, 50.0);

    let mut positions = Vec::new();
    for tile in &tiles {
        positions.extend(tile.triangles().flatten());
    }
    let merged = vec![MeshCollider::from_triangle_list(positions)];
    let points = probe_points(side, 50.0, 64);

    let mut group = c.benchmark_group("mesh_layout");

    group.bench_function("separate_meshes", |b| {
        b.iter(|| {
            for p in &points {
                black_box(probe_ground(black_box(*p), &tiles, 500.0));
            }
        })
    });

    group.bench_function("merged_mesh", |b| {
        b.iter(|| {
            for p in &points {
                black_box(probe_ground(black_box(*p), &merged, 500.0));
            }
        })
    });

    group.finish();
}

/// Benchmark: wall clearance check on the same grid
fn bench_wall_probe(c: &mut Criterion) {
    let meshes = tile_grid(32, 50.0);
    let body = BodyShape {
        height: 100.0,
        radius: 30.0,
    };

    c.bench_function("blocks_movement_32x32", |b| {
        b.iter(|| black_box(blocks_movement(black_box(Vec3::new(800.0, 150.0, 800.0)), &meshes, body)))
    });
}

/// Benchmark: one full controller tick while walking over the grid
fn bench_controller_tick(c: &mut Criterion) {
    let mut camera = PhysicsCameraController::new(ControllerConfig::default());
    camera.set_mesh_source(tile_grid(32, 50.0));
    camera.set_position(Vec3::new(800.0, 150.0, 800.0));
    let input = InputSnapshot::with_pressed(&[Button::KeyW, Button::KeyD]);

    c.bench_function("controller_tick_32x32", |b| {
        b.iter(|| {
            camera.set_position(Vec3::new(800.0, 150.0, 800.0));
            black_box(camera.update(&input, black_box(1.0 / 60.0)))
        })
    });
}

criterion_group!(
    benches,
    bench_probe_scaling,
    bench_mesh_layout,
    bench_wall_probe,
    bench_controller_tick
);
criterion_main!(benches);
