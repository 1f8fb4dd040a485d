#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Blocks Runtime
//!
//! Drives the [`physics`] simulation from a wall clock. The [`app`] module
//! owns the frame loop, [`presenter`] defines the seam to whatever shows
//! the frames, and [`config`] loads scenarios and command-line options.

pub mod app;
pub mod config;
pub mod presenter;
pub mod watcher;

pub use app::{run, RunOptions, RunSummary};
pub use config::{BodyConfig, Cli, ScenarioConfig, ScenarioOverrides};
pub use presenter::{HeadlessPresenter, Input, Presenter};
