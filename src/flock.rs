/*
 * Flock Module
 *
 * This module defines the Boid struct and the Flock engine that drives it.
 * Each boid follows three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * The Flock implements the Simulation trait so the viewer never depends on
 * the internals here. Neighbor lookup is a plain O(n²) scan; the default
 * population is small enough that nothing fancier is warranted.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::simulation::Simulation;

// Parameters for the flocking behavior. Distances are in simulation units,
// speeds in units per second, steering forces in units per second squared.
#[derive(Clone)]
pub struct FlockParams {
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub spawn_extent: f32,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            separation_radius: 25.0,
            alignment_radius: 50.0,
            cohesion_radius: 50.0,
            max_speed: 40.0,
            max_force: 100.0,
            spawn_extent: 200.0,
        }
    }
}

#[derive(Clone)]
pub struct Boid {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_speed: f32,
    pub max_force: f32,
}

impl Boid {
    pub fn new(x: f32, y: f32, max_speed: f32, max_force: f32) -> Self {
        let mut rng = rand::thread_rng();

        // Random initial velocity at half cruising speed
        let vx = rng.gen_range(-1.0..1.0);
        let vy = rng.gen_range(-1.0..1.0);
        let velocity = vec2(vx, vy).normalize_or_zero() * (max_speed * 0.5);

        Self {
            position: pt2(x, y),
            velocity,
            acceleration: Vec2::ZERO,
            max_speed,
            max_force,
        }
    }

    // Apply a steering force to the boid
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    // Integrate the boid's state over `dt` seconds
    pub fn update(&mut self, dt: f32) {
        // Update velocity
        self.velocity += self.acceleration * dt;

        // Limit speed
        if self.velocity.length() > self.max_speed {
            self.velocity = self.velocity.normalize() * self.max_speed;
        }

        // Update position
        self.position += self.velocity * dt;

        // Reset acceleration
        self.acceleration = Vec2::ZERO;
    }

    // Heading angle derived from the current velocity direction
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    // Calculate separation force (avoid crowding neighbors)
    fn separation(&self, boids: &[Boid], perception_radius: f32) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in boids {
            let d = self.position.distance(other.position);

            // If this is not the same boid and it's within perception radius
            if d > 0.0 && d < perception_radius {
                // Calculate vector pointing away from neighbor
                let mut diff = self.position - other.position;
                diff = diff.normalize() / d; // Weight by distance
                steering += diff;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            if steering.length() > 0.0 {
                // Implement Reynolds: Steering = Desired - Velocity
                steering = steering.normalize() * self.max_speed - self.velocity;

                if steering.length() > self.max_force {
                    steering = steering.normalize() * self.max_force;
                }
            }
        }

        steering
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    fn alignment(&self, boids: &[Boid], perception_radius: f32) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in boids {
            let d = self.position.distance(other.position);

            if d > 0.0 && d < perception_radius {
                steering += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            if steering.length() > 0.0 {
                // Implement Reynolds: Steering = Desired - Velocity
                steering = steering.normalize() * self.max_speed - self.velocity;

                if steering.length() > self.max_force {
                    steering = steering.normalize() * self.max_force;
                }
            }
        }

        steering
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    fn cohesion(&self, boids: &[Boid], perception_radius: f32) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in boids {
            let d = self.position.distance(other.position);

            if d > 0.0 && d < perception_radius {
                steering += Vec2::new(other.position.x, other.position.y);
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            // Create desired velocity towards target
            let desired = steering - Vec2::new(self.position.x, self.position.y);

            if desired.length() > 0.0 {
                // Scale to maximum speed
                let desired = desired.normalize() * self.max_speed;

                // Implement Reynolds: Steering = Desired - Velocity
                let mut steering = desired - self.velocity;

                if steering.length() > self.max_force {
                    steering = steering.normalize() * self.max_force;
                }

                return steering;
            }
        }

        Vec2::ZERO
    }

    // Apply all flocking behaviors against the given snapshot of the flock
    pub fn flock(&mut self, boids: &[Boid], params: &FlockParams) {
        let separation = self.separation(boids, params.separation_radius) * params.separation_weight;
        let alignment = self.alignment(boids, params.alignment_radius) * params.alignment_weight;
        let cohesion = self.cohesion(boids, params.cohesion_radius) * params.cohesion_weight;

        self.apply_force(separation);
        self.apply_force(alignment);
        self.apply_force(cohesion);
    }
}

// The default simulation engine: a vector of boids plus behavior parameters.
pub struct Flock {
    pub boids: Vec<Boid>,
    pub params: FlockParams,
}

impl Flock {
    pub fn new(params: FlockParams) -> Self {
        Self {
            boids: Vec::new(),
            params,
        }
    }
}

impl Simulation for Flock {
    fn setup(&mut self, nboids: usize) {
        let mut rng = rand::thread_rng();
        let half = self.params.spawn_extent / 2.0;

        self.boids.clear();
        self.boids.reserve(nboids);
        for _ in 0..nboids {
            let x = rng.gen_range(-half..half);
            let y = rng.gen_range(-half..half);
            self.boids
                .push(Boid::new(x, y, self.params.max_speed, self.params.max_force));
        }
    }

    fn positions(&self) -> Vec<Point2> {
        self.boids.iter().map(|boid| boid.position).collect()
    }

    fn step(&mut self, dt: f32) {
        // Steering is computed against a snapshot so that every boid sees the
        // same flock state within one step
        let snapshot = self.boids.clone();

        for boid in &mut self.boids {
            boid.flock(&snapshot, &self.params);
            boid.update(dt);
        }
    }

    fn headings(&self) -> Option<Vec<f32>> {
        Some(self.boids.iter().map(|boid| boid.heading()).collect())
    }

    fn len(&self) -> usize {
        self.boids.len()
    }
}
