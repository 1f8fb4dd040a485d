//! # Block Simulation Core
//!
//! [`BlockSim`] owns the two blocks, the wall and the fixed-step clock.
//! [`BlockSim::step`] advances exactly one fixed timestep; [`BlockSim::advance`]
//! feeds wall-clock time through the accumulator and runs however many
//! steps are due.
//!
//! Each step runs in a fixed order:
//!
//! 1. predict both x positions with explicit Euler,
//! 2. clamp the small block against the wall and reflect it,
//! 3. clamp the large block against the small block and exchange velocities
//!    elastically,
//! 4. commit the predicted positions.
//!
//! The wall is checked first because it can move the small block's predicted
//! right edge, which is the boundary used by the block-block check.

use std::time::Duration;

use crate::collision::{
    detect_block_collision, detect_wall_collision, resolve_block_collision,
    resolve_wall_collision, Wall,
};
use crate::error::PhysicsError;
use crate::integrator::predict_x;
use crate::timestep::FixedTimestep;
use crate::types::Body;

/// Read-only copy of the simulation handed to presenters once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub small: Body,
    pub large: Body,
    pub wall_x: f32,
    pub collision_count: u64,
    pub steps: u64,
    pub elapsed: Duration,
    /// Leftover accumulator time as a fraction of one step.
    pub alpha: f64,
}

/// Two blocks and a wall, advanced in fixed increments.
///
/// Build one with [`crate::BlockSimBuilder`] or [`BlockSim::classic`].
#[derive(Debug, Clone)]
pub struct BlockSim {
    pub(crate) small: Body,
    pub(crate) large: Body,
    pub(crate) wall: Wall,
    pub(crate) timestep: FixedTimestep,
    pub(crate) collision_count: u64,
    pub(crate) steps: u64,
    pub(crate) elapsed: Duration,
}

impl BlockSim {
    /// Advance the simulation by exactly one fixed timestep.
    pub fn step(&mut self) {
        let dt = self.timestep.dt().as_secs_f32();

        let mut small_x = predict_x(&self.small, dt);
        let mut large_x = predict_x(&self.large, dt);

        if let Some(contact) = detect_wall_collision(small_x, &self.wall) {
            small_x = resolve_wall_collision(&mut self.small, &self.wall, &contact);
            self.collision_count += 1;
            tracing::debug!(
                collisions = self.collision_count,
                step = self.steps,
                depth = contact.depth,
                "small block hit the wall"
            );
        }

        if let Some(contact) = detect_block_collision(&self.small, small_x, large_x) {
            large_x = resolve_block_collision(&mut self.small, &mut self.large, small_x, &contact);
            self.collision_count += 1;
            tracing::debug!(
                collisions = self.collision_count,
                step = self.steps,
                depth = contact.depth,
                small_vx = self.small.velocity.x,
                large_vx = self.large.velocity.x,
                "blocks collided"
            );
        }

        self.small.position.x = small_x;
        self.large.position.x = large_x;

        self.steps += 1;
        self.elapsed = self.elapsed.saturating_add(self.timestep.dt());
    }

    /// Run `steps` fixed steps directly, bypassing the accumulator.
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Feed `frame_delta` of wall-clock time through the accumulator and
    /// run every step that becomes due. Returns the number of steps run.
    ///
    /// At most `max_steps_per_frame` steps run per call, or `u32::MAX`
    /// without a cap; see [`FixedTimestep::accumulate`].
    pub fn advance(&mut self, frame_delta: Duration) -> u32 {
        let due = self.timestep.accumulate(frame_delta);
        for _ in 0..due {
            self.step();
        }
        due
    }

    /// [`advance`](Self::advance) for a delta in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidFrameDelta`] for a negative or
    /// non-finite delta. The simulation is left untouched in that case.
    pub fn advance_secs(&mut self, frame_delta: f64) -> Result<u32, PhysicsError> {
        let delta = Duration::try_from_secs_f64(frame_delta)
            .map_err(|_| PhysicsError::InvalidFrameDelta(frame_delta))?;
        Ok(self.advance(delta))
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            small: self.small,
            large: self.large,
            wall_x: self.wall.x,
            collision_count: self.collision_count,
            steps: self.steps,
            elapsed: self.elapsed,
            alpha: self.timestep.alpha(),
        }
    }

    /// The light block next to the wall.
    #[must_use]
    pub fn small(&self) -> &Body {
        &self.small
    }

    /// The heavy block on the right.
    #[must_use]
    pub fn large(&self) -> &Body {
        &self.large
    }

    #[must_use]
    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    #[must_use]
    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }

    /// Fixed steps executed since construction.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time since construction.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn fixed_dt(&self) -> Duration {
        self.timestep.dt()
    }

    #[must_use]
    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    /// Total momentum along x.
    #[must_use]
    pub fn momentum(&self) -> f32 {
        self.small.momentum() + self.large.momentum()
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        self.small.kinetic_energy() + self.large.kinetic_energy()
    }

    /// True once no further collision can happen: the small block is not
    /// heading for the wall and the large block is not slower than it.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        let small_vx = self.small.velocity.x;
        small_vx >= 0.0 && self.large.velocity.x >= small_vx
    }
}
