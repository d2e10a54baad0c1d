/*
 * Flock Module
 *
 * This module owns the boid collection and drives the simulation tick.
 * A tick runs in two phases: first every boid's steering forces are
 * computed against a snapshot of the flock taken at the start of the tick,
 * then every boid is integrated, wrapped at the canvas edges and biased by
 * the audio sample. The two phases keep steering from ever reading an
 * already-integrated neighbor.
 */

use glam::Vec2;
use rand::Rng;

use crate::boid::Boid;
use crate::color::Rgba;
use crate::obstacle::Obstacle;
use crate::params::EngineParams;

pub struct Flock {
    pub boids: Vec<Boid>,
    pub width: f32,
    pub height: f32,
    pub params: EngineParams,
}

impl Flock {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_params(width, height, EngineParams::default())
    }

    pub fn with_params(width: f32, height: f32, params: EngineParams) -> Self {
        Self {
            boids: Vec::new(),
            width,
            height,
            params,
        }
    }

    // Append freshly created boids; the flock only ever grows.
    pub fn spawn<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.boids.reserve(count);
        for _ in 0..count {
            self.boids
                .push(Boid::new(self.width, self.height, &self.params, rng));
        }
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    // Advance the simulation by one tick. The obstacle and audio sample are
    // this tick's readings from the hand tracker and the spectral analyzer;
    // either may be absent, which simply disables the corresponding term.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        obstacle: Option<&Obstacle>,
        audio_energy: Option<f32>,
        rng: &mut R,
    ) {
        // Phase 1: compute all accelerations against the pre-tick state
        let snapshot = self.boids.clone();

        for boid in &mut self.boids {
            boid.acceleration = Vec2::ZERO;

            let alignment = boid.alignment(&snapshot, self.params.alignment_radius);
            let cohesion = boid.cohesion(&snapshot, self.params.cohesion_radius);
            let separation = boid.separation(&snapshot, self.params.separation_radius);

            boid.apply_force(alignment);
            boid.apply_force(cohesion);
            boid.apply_force(separation);

            if let Some(obstacle) = obstacle {
                let avoidance = boid.avoid(obstacle, self.params.obstacle_clearance);
                boid.apply_force(avoidance);
            }
        }

        // Phase 2: integrate, wrap, and apply the audio bias
        for boid in &mut self.boids {
            boid.update();
            boid.wrap_edges(self.width, self.height);

            if let Some(energy) = audio_energy {
                boid.velocity = self.params.audio.bias_velocity(boid.velocity, energy, rng);

                // The bias may blend toward a speed above the boid's cap
                if boid.velocity.length() > boid.max_speed {
                    boid.velocity = boid.velocity.normalize() * boid.max_speed;
                }
            }
        }
    }

    // Per-boid render output in insertion order; the only data the external
    // renderer consumes.
    pub fn render_states(&self) -> impl Iterator<Item = (Vec2, Rgba)> + '_ {
        self.boids.iter().map(|b| (b.position, b.color))
    }
}

#[cfg(test)]
mod tests {
    use super::Flock;
    use crate::behavior::Behavior;
    use crate::boid::Boid;
    use crate::color::Rgba;
    use crate::obstacle::Obstacle;
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_boid(x: f32, y: f32) -> Boid {
        Boid {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            max_force: 0.5,
            max_speed: 5.0,
            behavior: Behavior::Normal,
            color: Rgba::new(0, 0, 0, 255),
        }
    }

    #[test]
    fn spawn_appends_without_touching_existing_boids() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut flock = Flock::new(500.0, 500.0);

        flock.spawn(100, &mut rng);
        assert_eq!(flock.len(), 100);

        let first_position = flock.boids[0].position;
        flock.spawn(100, &mut rng);
        assert_eq!(flock.len(), 200);
        assert_eq!(flock.boids[0].position, first_position);
    }

    #[test]
    fn speed_cap_holds_over_many_ticks_with_all_inputs() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut flock = Flock::new(500.0, 500.0);
        flock.spawn(50, &mut rng);

        let obstacle = Obstacle::at(250.0, 250.0);
        for tick in 0..100 {
            let energy = -100.0 + tick as f32;
            flock.step(Some(&obstacle), Some(energy), &mut rng);

            for boid in &flock.boids {
                assert!(
                    boid.velocity.length() <= boid.max_speed + 1.0e-4,
                    "speed {} exceeds cap {}",
                    boid.velocity.length(),
                    boid.max_speed
                );
                assert!(boid.position.x.is_finite() && boid.position.y.is_finite());
            }
        }
    }

    #[test]
    fn lone_boid_travels_in_a_straight_line() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut flock = Flock::new(500.0, 500.0);

        let mut boid = fixed_boid(100.0, 100.0);
        boid.velocity = Vec2::new(1.0, 2.0);
        flock.boids.push(boid);

        for tick in 1..=20 {
            flock.step(None, None, &mut rng);
            let b = &flock.boids[0];
            assert_eq!(b.velocity, Vec2::new(1.0, 2.0));
            assert_eq!(b.acceleration, Vec2::ZERO);
            assert_eq!(
                b.position,
                Vec2::new(100.0 + tick as f32, 100.0 + 2.0 * tick as f32)
            );
        }
    }

    #[test]
    fn positions_stay_inside_the_wrap_band() {
        let mut rng = StdRng::seed_from_u64(24);
        let mut flock = Flock::new(500.0, 500.0);
        flock.spawn(30, &mut rng);

        for _ in 0..200 {
            flock.step(None, Some(-20.0), &mut rng);
        }

        // Hard wrap allows at most one frame of overshoot, which is bounded
        // by the per-boid speed cap.
        for boid in &flock.boids {
            assert!(boid.position.x >= -boid.max_speed);
            assert!(boid.position.x <= 500.0 + boid.max_speed);
            assert!(boid.position.y >= -boid.max_speed);
            assert!(boid.position.y <= 500.0 + boid.max_speed);
        }
    }

    #[test]
    fn steering_reads_pre_tick_neighbor_state() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut flock = Flock::new(500.0, 500.0);

        let mut a = fixed_boid(100.0, 100.0);
        a.velocity = Vec2::new(3.0, 0.0);
        let b = fixed_boid(110.0, 100.0);
        flock.boids.push(a);
        flock.boids.push(b);

        flock.step(None, None, &mut rng);

        // Boid b aligns against a's pre-tick velocity (3, 0): the alignment
        // desired vector is (5, 0), clamped to max_force 0.5 on the x axis.
        let b = &flock.boids[1];
        assert!(b.velocity.x > 0.0);
        assert_eq!(b.velocity.y, 0.0);
    }

    #[test]
    fn render_states_expose_position_and_color_in_order() {
        let mut flock = Flock::new(500.0, 500.0);
        flock.boids.push(fixed_boid(1.0, 2.0));
        flock.boids.push(fixed_boid(3.0, 4.0));

        let states: Vec<_> = flock.render_states().collect();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].0, Vec2::new(1.0, 2.0));
        assert_eq!(states[1].0, Vec2::new(3.0, 4.0));
    }
}
