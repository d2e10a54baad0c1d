/*
 * Audio-Reactive Flocking Engine - Module Definitions
 *
 * This file defines the module structure for the flocking engine.
 * The engine owns a flock of boids and advances it one tick at a time,
 * steering each boid by alignment, cohesion, separation and avoidance of
 * an externally supplied repulsion point, then biasing its velocity with
 * an externally supplied audio-energy sample.
 */

// Re-export key components for easier access
pub use audio::AudioMapping;
pub use behavior::Behavior;
pub use boid::Boid;
pub use color::Rgba;
pub use flock::Flock;
pub use obstacle::Obstacle;
pub use params::EngineParams;

// Define modules
pub mod audio;
pub mod behavior;
pub mod boid;
pub mod color;
pub mod flock;
pub mod obstacle;
pub mod params;

// Constants
pub const CANVAS_WIDTH: f32 = 500.0;
pub const CANVAS_HEIGHT: f32 = 500.0;
