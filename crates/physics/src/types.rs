//! Value types shared by the stepper, the collision routines and the
//! presenter-facing snapshot.

use crate::error::ConfigError;

/// Plain (x, y) pair in simulation space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A square block that only moves along the x axis.
///
/// `position` is the top-left corner. `width` doubles as the collision
/// extent and `mass` only matters when two blocks collide. Both are fixed
/// for the lifetime of the body and are validated by [`Body::new`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    width: f32,
    mass: f32,
}

impl Body {
    /// Create a body, rejecting a non-positive or non-finite width or mass.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveWidth`] or
    /// [`ConfigError::NonPositiveMass`] when the corresponding value is not
    /// a finite number greater than zero.
    pub fn new(position: Vec2, velocity: Vec2, width: f32, mass: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::NonPositiveWidth(width));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::NonPositiveMass(mass));
        }
        Ok(Self {
            position,
            velocity,
            width,
            mass,
        })
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    /// Momentum along the axis of motion.
    #[must_use]
    pub fn momentum(&self) -> f32 {
        self.mass * self.velocity.x
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.x * self.velocity.x
    }
}
