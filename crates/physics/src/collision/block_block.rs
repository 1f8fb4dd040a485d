//! Block-block collision detection and response
//!
//! The small block is always the left one; construction refuses any other
//! ordering, so only the small block's right edge against the large block's
//! left edge needs checking.

use crate::types::Body;
use super::{Contact, resolve_elastic};

/// Detect the large block's predicted left edge entering the small block
#[must_use]
pub fn detect_block_collision(small: &Body, small_x: f32, large_x: f32) -> Option<Contact> {
    let small_right = small_x + small.width();
    if large_x < small_right {
        Some(Contact {
            depth: small_right - large_x,
        })
    } else {
        None
    }
}

/// Push the large block's prediction back to the small block's surface and
/// exchange velocities elastically.
///
/// Returns the clamped candidate position of the large block.
pub fn resolve_block_collision(
    small: &mut Body,
    large: &mut Body,
    small_x: f32,
    _contact: &Contact,
) -> f32 {
    let (v1, v2) = resolve_elastic(
        small.mass(),
        small.velocity.x,
        large.mass(),
        large.velocity.x,
    );
    small.velocity.x = v1;
    large.velocity.x = v2;

    small_x + small.width()
}
