/*
 * Audio Mapping Module
 *
 * The external spectral analyzer delivers one frequency-bin magnitude per
 * tick, roughly in [-100, 0] dB. This module maps that sample to a target
 * speed and blends each boid's velocity a fixed fraction of the way toward
 * a random direction at that speed, so louder input makes the flock
 * jitterier. Non-finite samples are ignored so NaN never enters the
 * simulation state.
 */

use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioMapping {
    pub energy_min: f32,
    pub energy_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    // Linear interpolation factor applied per tick
    pub blend: f32,
}

impl Default for AudioMapping {
    fn default() -> Self {
        Self {
            energy_min: -100.0,
            energy_max: 0.0,
            speed_min: 2.0,
            speed_max: 40.0,
            blend: 0.1,
        }
    }
}

impl AudioMapping {
    // Linear map from the energy domain to the speed range, clamped at the
    // domain ends.
    pub fn target_speed(&self, energy: f32) -> f32 {
        let energy = energy.clamp(self.energy_min, self.energy_max);
        let t = (energy - self.energy_min) / (self.energy_max - self.energy_min);
        self.speed_min + t * (self.speed_max - self.speed_min)
    }

    // Blend velocity toward a random direction at the mapped speed.
    // Returns the input unchanged for non-finite samples.
    pub fn bias_velocity<R: Rng + ?Sized>(
        &self,
        velocity: Vec2,
        energy: f32,
        rng: &mut R,
    ) -> Vec2 {
        if !energy.is_finite() {
            return velocity;
        }

        let target = random_unit_vector(rng) * self.target_speed(energy);
        velocity + (target - velocity) * self.blend
    }
}

// Unit vector at a uniformly random heading.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec2::new(angle.cos(), angle.sin())
}
