/*
 * Flock Viewer Benchmarks
 *
 * Measures the two per-frame costs of the viewer: advancing the flock by one
 * timestep (O(n²) neighbor scan) and refitting the camera to the current
 * positions.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::Rng;

use flockview::camera::Camera;
use flockview::flock::{Flock, FlockParams};
use flockview::simulation::Simulation;

fn bench_flock_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_step");

    for num_boids in [50usize, 200, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut flock = Flock::new(FlockParams::default());
            flock.setup(n);

            b.iter(|| {
                flock.step(black_box(1.0 / 60.0));
            });
        });
    }

    group.finish();
}

fn bench_camera_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_fit");

    for count in [50, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut rng = rand::thread_rng();
            let positions: Vec<Point2> = (0..n)
                .map(|_| pt2(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)))
                .collect();
            let window_rect = Rect::from_w_h(720.0, 720.0);

            b.iter(|| {
                let camera = Camera::fit(black_box(&positions), window_rect, 0.5);
                black_box(camera.zoom);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flock_step, bench_camera_fit);
criterion_main!(benches);
