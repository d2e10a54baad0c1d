/*
 * Color Module
 *
 * Render-only RGBA color carried by each boid. The color is chosen once at
 * creation based on the boid's behavior variant and has no simulation
 * semantics; the external renderer is its only consumer.
 */

use crate::behavior::Behavior;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    // Behavior-keyed color policy: extroverts are warm yellows, introverts
    // near-white, normal boids cyan/green. Alpha is kept low so overlapping
    // boids blend on the canvas.
    pub fn for_behavior<R: Rng + ?Sized>(behavior: Behavior, rng: &mut R) -> Self {
        let a = rng.gen_range(2..150);
        match behavior {
            Behavior::Extrovert => Self::new(
                rng.gen_range(200..255),
                rng.gen_range(200..255),
                rng.gen_range(0..10),
                a,
            ),
            Behavior::Introvert => Self::new(
                rng.gen_range(240..255),
                rng.gen_range(240..255),
                rng.gen_range(240..255),
                a,
            ),
            Behavior::Normal => Self::new(
                rng.gen_range(0..10),
                rng.gen_range(0..255),
                rng.gen_range(0..255),
                a,
            ),
        }
    }
}
