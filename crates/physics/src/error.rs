use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("frame delta must be finite and non-negative, got {0}")]
    InvalidFrameDelta(f64),
}

/// Construction-time invariant violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("body mass must be positive, got {0}")]
    NonPositiveMass(f32),
    #[error("body width must be positive, got {0}")]
    NonPositiveWidth(f32),
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    #[error("large body at x={large_x} overlaps or sits left of the small body's right edge at x={small_right}")]
    BodiesOutOfOrder { small_right: f32, large_x: f32 },
    #[error("small body at x={body_x} starts behind the wall at x={wall_x}")]
    BehindWall { body_x: f32, wall_x: f32 },
    #[error("fixed timestep must be positive, got {0:?}")]
    NonPositiveTimestep(Duration),
    #[error("max steps per frame must be at least 1")]
    ZeroStepCap,
    #[error("missing {0} body")]
    MissingBody(&'static str),
}
