/*
 * Engine Parameters Module
 *
 * This module defines the EngineParams struct that contains all the
 * tunables for the flocking engine: perception radii of 100/60/50 for
 * alignment/cohesion/separation, 10% extroverts, 10% introverts, and
 * per-boid force/speed limits drawn from fixed ranges at creation.
 */

use crate::audio::AudioMapping;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineParams {
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_radius: f32,
    // Boids react to an obstacle inside obstacle.radius + obstacle_clearance.
    pub obstacle_clearance: f32,
    pub extrovert_chance: f32,
    pub introvert_chance: f32,
    // Per-boid limits, drawn uniformly once at creation
    pub max_force_min: f32,
    pub max_force_max: f32,
    pub max_speed_min: f32,
    pub max_speed_max: f32,
    // Magnitude of the initial velocity, drawn uniformly once at creation
    pub launch_speed_min: f32,
    pub launch_speed_max: f32,
    pub audio: AudioMapping,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            alignment_radius: 100.0,
            cohesion_radius: 60.0,
            separation_radius: 50.0,
            obstacle_clearance: 100.0,
            extrovert_chance: 0.1,
            introvert_chance: 0.1,
            max_force_min: 0.2,
            max_force_max: 0.8,
            max_speed_min: 2.0,
            max_speed_max: 6.0,
            launch_speed_min: 2.0,
            launch_speed_max: 4.0,
            audio: AudioMapping::default(),
        }
    }
}
