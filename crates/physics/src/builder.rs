//! # Simulation Builder
//!
//! Collects the scenario (two blocks, wall, timestep) and checks every
//! construction invariant before a [`BlockSim`] exists, so the stepper never
//! sees NaNs, non-positive masses or blocks in the wrong order.

use std::time::Duration;

use crate::collision::Wall;
use crate::error::{ConfigError, PhysicsError};
use crate::simulation::BlockSim;
use crate::timestep::FixedTimestep;
use crate::types::{Body, Vec2};

/// Default fixed timestep, 0.5 ms.
pub const DEFAULT_FIXED_DT: Duration = Duration::from_micros(500);

#[derive(Debug, Clone)]
pub struct BlockSimBuilder {
    small: Option<Body>,
    large: Option<Body>,
    wall: Wall,
    fixed_dt: Duration,
    max_steps_per_frame: Option<u32>,
}

impl Default for BlockSimBuilder {
    fn default() -> Self {
        Self {
            small: None,
            large: None,
            wall: Wall::default(),
            fixed_dt: DEFAULT_FIXED_DT,
            max_steps_per_frame: None,
        }
    }
}

impl BlockSimBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The light block, placed between the wall and the large block.
    #[must_use]
    pub fn small(mut self, body: Body) -> Self {
        self.small = Some(body);
        self
    }

    /// The heavy block, placed right of the small block.
    #[must_use]
    pub fn large(mut self, body: Body) -> Self {
        self.large = Some(body);
        self
    }

    #[must_use]
    pub fn wall_x(mut self, x: f32) -> Self {
        self.wall = Wall::new(x);
        self
    }

    #[must_use]
    pub fn fixed_dt(mut self, dt: Duration) -> Self {
        self.fixed_dt = dt;
        self
    }

    #[must_use]
    pub fn max_steps_per_frame(mut self, cap: u32) -> Self {
        self.max_steps_per_frame = Some(cap);
        self
    }

    /// Validate the scenario and create the simulation.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfiguration`] when a block is
    /// missing, a value is not finite, the small block starts behind the
    /// wall, the blocks overlap or are swapped, the timestep is zero or the
    /// step cap is zero.
    pub fn build(self) -> Result<BlockSim, PhysicsError> {
        let small = self.small.ok_or(ConfigError::MissingBody("small"))?;
        let large = self.large.ok_or(ConfigError::MissingBody("large"))?;

        check_finite(&small, "small body position", "small body velocity")?;
        check_finite(&large, "large body position", "large body velocity")?;
        if !self.wall.x.is_finite() {
            return Err(ConfigError::NonFinite("wall position").into());
        }

        if small.position.x < self.wall.x {
            return Err(ConfigError::BehindWall {
                body_x: small.position.x,
                wall_x: self.wall.x,
            }
            .into());
        }
        if large.position.x < small.right() {
            return Err(ConfigError::BodiesOutOfOrder {
                small_right: small.right(),
                large_x: large.position.x,
            }
            .into());
        }

        let mut timestep = FixedTimestep::new(self.fixed_dt)?;
        if let Some(cap) = self.max_steps_per_frame {
            timestep = timestep.with_max_steps(cap)?;
        }

        tracing::debug!(
            small_x = small.position.x,
            large_x = large.position.x,
            wall_x = self.wall.x,
            fixed_dt = ?self.fixed_dt,
            "block simulation built"
        );

        Ok(BlockSim {
            small,
            large,
            wall: self.wall,
            timestep,
            collision_count: 0,
            steps: 0,
            elapsed: Duration::ZERO,
        })
    }
}

fn check_finite(
    body: &Body,
    position: &'static str,
    velocity: &'static str,
) -> Result<(), ConfigError> {
    if !body.position.is_finite() {
        return Err(ConfigError::NonFinite(position));
    }
    if !body.velocity.is_finite() {
        return Err(ConfigError::NonFinite(velocity));
    }
    Ok(())
}

impl BlockSim {
    /// The 1:100 scenario in a 256x144 viewport: a light 24-wide block at
    /// rest and a heavy 32-wide block sliding toward it at 100 units/s.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the values are fixed and valid.
    pub fn classic() -> Result<Self, PhysicsError> {
        classic_builder()?.build()
    }
}

/// Builder preloaded with the classic scenario, for callers that want to
/// tweak a few values before building.
///
/// # Errors
///
/// Propagates body validation errors, which cannot occur for these values.
pub fn classic_builder() -> Result<BlockSimBuilder, ConfigError> {
    let small = Body::new(Vec2::new(116.0, 120.0), Vec2::ZERO, 24.0, 1.0)?;
    let large = Body::new(Vec2::new(224.0, 112.0), Vec2::new(-100.0, 0.0), 32.0, 100.0)?;
    Ok(BlockSimBuilder::new().small(small).large(large))
}
