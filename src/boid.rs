/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid follows three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * plus a fourth, behavior-dependent rule reacting to the repulsion point.
 */

use glam::Vec2;
use rand::Rng;

use crate::audio::random_unit_vector;
use crate::behavior::Behavior;
use crate::color::Rgba;
use crate::obstacle::Obstacle;
use crate::params::EngineParams;

#[derive(Clone, Debug)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_force: f32,
    pub max_speed: f32,
    pub behavior: Behavior,
    pub color: Rgba,
}

impl Boid {
    pub fn new<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        params: &EngineParams,
        rng: &mut R,
    ) -> Self {
        let behavior = Behavior::sample(rng, params.extrovert_chance, params.introvert_chance);
        let color = Rgba::for_behavior(behavior, rng);

        // Random initial velocity
        let launch_speed = rng.gen_range(params.launch_speed_min..params.launch_speed_max);
        let velocity = random_unit_vector(rng) * launch_speed;

        Self {
            position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
            velocity,
            acceleration: Vec2::ZERO,
            max_force: rng.gen_range(params.max_force_min..params.max_force_max),
            max_speed: rng.gen_range(params.max_speed_min..params.max_speed_max),
            behavior,
            color,
        }
    }

    // Apply a force to the boid
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    // Update the boid's position based on its velocity and acceleration.
    // Position moves before velocity absorbs the acceleration, so a force
    // applied this tick first shows up in next tick's motion.
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.velocity += self.acceleration;

        // Limit speed
        if self.velocity.length() > self.max_speed {
            self.velocity = self.velocity.normalize() * self.max_speed;
        }
    }

    // Wrap the boid around the canvas edges. A coordinate past the extent
    // snaps to 0 and a negative coordinate snaps to the extent; an overshoot
    // beyond twice the extent is left for the next tick.
    pub fn wrap_edges(&mut self, width: f32, height: f32) {
        if self.position.x > width {
            self.position.x = 0.0;
        } else if self.position.x < 0.0 {
            self.position.x = width;
        }

        if self.position.y > height {
            self.position.y = 0.0;
        } else if self.position.y < 0.0 {
            self.position.y = height;
        }
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    pub fn alignment(&self, boids: &[Boid], perception_radius: f32) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in boids {
            let d = self.position.distance(other.position);

            // If this is not the same boid and it's within perception radius
            if d > 0.0 && d < perception_radius {
                steering += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            // A zero average heading stays zero when scaled, but the
            // velocity subtraction and clamp still apply, so a moving boid
            // among resting neighbors brakes toward their heading.
            if steering.length() > 0.0 {
                steering = steering.normalize() * self.max_speed;
            }

            // Implement Reynolds: Steering = Desired - Velocity
            steering -= self.velocity;

            if steering.length() > self.max_force {
                steering = steering.normalize() * self.max_force;
            }
        }

        steering
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    pub fn cohesion(&self, boids: &[Boid], perception_radius: f32) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in boids {
            let d = self.position.distance(other.position);

            // If this is not the same boid and it's within perception radius
            if d > 0.0 && d < perception_radius {
                steering += other.position;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            // Create desired velocity towards the average position; when
            // that average coincides with the boid's own position the
            // desired vector stays zero but the subtraction and clamp
            // still apply
            let mut desired = steering - self.position;

            if desired.length() > 0.0 {
                // Scale to maximum speed
                desired = desired.normalize() * self.max_speed;
            }

            // Implement Reynolds: Steering = Desired - Velocity
            let mut steering = desired - self.velocity;

            if steering.length() > self.max_force {
                steering = steering.normalize() * self.max_force;
            }

            return steering;
        }

        Vec2::ZERO
    }

    // Calculate separation force (avoid crowding neighbors)
    pub fn separation(&self, boids: &[Boid], perception_radius: f32) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in boids {
            let d = self.position.distance(other.position);

            // If this is not the same boid and it's within perception radius
            if d > 0.0 && d < perception_radius {
                // Calculate vector pointing away from neighbor, weighted by distance
                let diff = (self.position - other.position) / d;
                steering += diff;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            // Symmetric neighbors can cancel to a zero average, which stays
            // zero when scaled; the subtraction and clamp still apply
            if steering.length() > 0.0 {
                steering = steering.normalize() * self.max_speed;
            }

            // Implement Reynolds: Steering = Desired - Velocity
            steering -= self.velocity;

            if steering.length() > self.max_force {
                steering = steering.normalize() * self.max_force;
            }
        }

        steering
    }

    // Calculate the reaction to the repulsion point. The desired speed is
    // scaled by the behavior's avoidance factor, so extroverts (negative
    // factor) are pulled toward the obstacle while introverts are flung away.
    pub fn avoid(&self, obstacle: &Obstacle, clearance: f32) -> Vec2 {
        let d = self.position.distance(obstacle.position);

        if d < obstacle.radius + clearance {
            let factor = self.behavior.avoidance_factor();
            let away = (self.position - obstacle.position).normalize_or_zero();

            // Implement Reynolds: Steering = Desired - Velocity
            let mut steering = away * (self.max_speed * factor) - self.velocity;

            if steering.length() > self.max_force {
                steering = steering.normalize() * self.max_force;
            }

            return steering;
        }

        Vec2::ZERO
    }
}
