/*
 * Obstacle Module
 *
 * A single repulsion point supplied per tick by the external hand tracker,
 * mapped into canvas coordinates. The engine never owns it; a tick with no
 * detected hand simply runs without an avoidance term.
 */

use glam::Vec2;

pub const DEFAULT_OBSTACLE_RADIUS: f32 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub position: Vec2,
    pub radius: f32,
}

impl Obstacle {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), DEFAULT_OBSTACLE_RADIUS)
    }
}
