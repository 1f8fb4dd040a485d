//! # Position Prediction
//!
//! Explicit Euler over a single fixed step. No forces act on the blocks, so
//! velocity is constant between collisions and only x is integrated.

use crate::types::Body;

/// Candidate x position of `body` after `dt` seconds.
#[must_use]
pub fn predict_x(body: &Body, dt: f32) -> f32 {
    body.position.x + body.velocity.x * dt
}
