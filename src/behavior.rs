/*
 * Behavior Module
 *
 * Each boid is assigned one of three personality variants at creation:
 * most boids are Normal, a small fraction are Extroverts that seek out
 * the repulsion point, and a small fraction are Introverts that flee it.
 * The variant is immutable for the boid's lifetime and drives both the
 * avoidance factor and the color policy.
 */

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    Normal,
    Extrovert,
    Introvert,
}

impl Behavior {
    // Sample a variant against the creation-time probability thresholds.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        extrovert_chance: f32,
        introvert_chance: f32,
    ) -> Self {
        let roll: f32 = rng.gen_range(0.0..1.0);

        if roll < extrovert_chance {
            Behavior::Extrovert
        } else if roll < extrovert_chance + introvert_chance {
            Behavior::Introvert
        } else {
            Behavior::Normal
        }
    }

    // Multiplier applied to the obstacle-avoidance desired speed.
    // A negative factor reverses the force, turning avoidance into attraction.
    pub fn avoidance_factor(self) -> f32 {
        match self {
            Behavior::Normal => 1.0,
            Behavior::Extrovert => -2.0,
            Behavior::Introvert => 100.0,
        }
    }
}
