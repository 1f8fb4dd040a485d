//! Block-wall collision detection and response

use crate::types::Body;
use super::{Contact, reflect};

/// Immovable vertical wall. Bodies must stay at or right of `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub x: f32,
}

impl Wall {
    #[must_use]
    pub const fn new(x: f32) -> Self {
        Self { x }
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Detect a predicted left edge that has passed through the wall
#[must_use]
pub fn detect_wall_collision(candidate_x: f32, wall: &Wall) -> Option<Contact> {
    if candidate_x < wall.x {
        Some(Contact {
            depth: wall.x - candidate_x,
        })
    } else {
        None
    }
}

/// Snap the prediction onto the wall and bounce the body back.
///
/// Returns the clamped candidate position.
pub fn resolve_wall_collision(body: &mut Body, wall: &Wall, _contact: &Contact) -> f32 {
    body.velocity.x = reflect(body.velocity.x);
    wall.x
}
