#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Blocks Physics Engine
//!
//! A fixed-timestep collision simulator for two square blocks sliding along
//! one axis next to an immovable wall.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`Body`] and [`Vec2`] in the [`types`] module. Width and
//!     mass are validated on construction and never change.
//! -   **Simulation:** [`BlockSim`] in the [`simulation`] module owns both
//!     blocks and the wall. [`BlockSim::step`] advances exactly one fixed
//!     timestep; [`BlockSim::advance`] turns wall-clock frame time into a
//!     whole number of steps through a [`FixedTimestep`] accumulator.
//! -   **Collisions:** the [`collision`] module detects penetration of the
//!     predicted positions and resolves it. Block impacts are perfectly
//!     elastic, see [`resolve_elastic`].
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use physics::BlockSim;
//!
//! let mut sim = BlockSim::classic()?;
//! let steps = sim.advance(Duration::from_millis(16));
//! assert_eq!(steps, 32);
//! let frame = sim.snapshot();
//! assert!(frame.large.position.x >= frame.small.right());
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod types;
pub mod error;
pub mod integrator;
pub mod collision;
pub mod timestep;
pub mod simulation;
pub mod builder;

pub use builder::{classic_builder, BlockSimBuilder, DEFAULT_FIXED_DT};
pub use collision::{reflect, resolve_elastic, Contact, Wall};
pub use error::{ConfigError, PhysicsError};
pub use simulation::{BlockSim, Snapshot};
pub use timestep::FixedTimestep;
pub use types::{Body, Vec2};
