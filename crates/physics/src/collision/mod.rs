//! # Collision Detection and Response
//!
//! Detection works on the predicted positions of the current step, never on
//! the committed ones. Each `detect_*` function reports a [`Contact`] when
//! the prediction penetrates, and the matching `resolve_*` function clamps
//! the prediction back to the touching surface and updates velocities.

mod wall;
mod block_block;
mod response;

pub use wall::*;
pub use block_block::*;
pub use response::*;

/// Penetration found while checking a predicted position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Overlap along x, always positive.
    pub depth: f32,
}
