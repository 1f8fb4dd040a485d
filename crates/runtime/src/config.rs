//! Scenario files and command-line options.
//!
//! A scenario is a small JSON document. Every field is optional and falls
//! back to the classic 1:100 setup:
//!
//! ```json
//! {
//!   "fixed_dt": 0.0005,
//!   "wall_x": 0.0,
//!   "max_steps_per_frame": null,
//!   "small": { "position": [116.0, 120.0], "velocity": [0.0, 0.0], "width": 24.0, "mass": 1.0 },
//!   "large": { "position": [224.0, 112.0], "velocity": [-100.0, 0.0], "width": 32.0, "mass": 100.0 }
//! }
//! ```
//!
//! Command-line flags override whatever the file says.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use physics::{BlockSim, BlockSimBuilder, Body, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "blocks", about = "Two blocks, one wall, perfectly elastic collisions")]
pub struct Cli {
    /// JSON scenario file; the classic 1:100 scenario is used when omitted.
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Fixed physics timestep in seconds.
    #[arg(long)]
    pub fixed_dt: Option<f64>,

    /// Drop backlog beyond this many steps in a single frame.
    #[arg(long)]
    pub max_steps_per_frame: Option<u32>,

    /// Stop after presenting this many frames.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Target presentation rate.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    /// Stop once no further collision can happen.
    #[arg(long)]
    pub until_settled: bool,

    /// Log the frame state every N frames (0 disables).
    #[arg(long, default_value_t = 60)]
    pub log_every: u64,

    /// Rebuild the simulation whenever the scenario file changes.
    #[arg(long, requires = "scenario")]
    pub watch: bool,
}

impl Cli {
    /// Load the scenario file (or the classic defaults) and apply flag
    /// overrides on top.
    ///
    /// # Errors
    ///
    /// Fails if the scenario file cannot be read or parsed.
    pub fn scenario_config(&self) -> Result<ScenarioConfig> {
        let config = match &self.scenario {
            Some(path) => ScenarioConfig::load(path)?,
            None => ScenarioConfig::default(),
        };
        Ok(self.overrides().apply(config))
    }

    /// The scenario fields set on the command line.
    #[must_use]
    pub fn overrides(&self) -> ScenarioOverrides {
        ScenarioOverrides {
            fixed_dt: self.fixed_dt,
            max_steps_per_frame: self.max_steps_per_frame,
        }
    }
}

/// Scenario fields that take precedence over the file, both at startup and
/// on every reload.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioOverrides {
    pub fixed_dt: Option<f64>,
    pub max_steps_per_frame: Option<u32>,
}

impl ScenarioOverrides {
    #[must_use]
    pub fn apply(&self, mut config: ScenarioConfig) -> ScenarioConfig {
        if let Some(dt) = self.fixed_dt {
            config.fixed_dt = dt;
        }
        if let Some(cap) = self.max_steps_per_frame {
            config.max_steps_per_frame = Some(cap);
        }
        config
    }
}

/// Initial state of one block.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub position: [f32; 2], // top-left corner
    #[serde(default)]
    pub velocity: [f32; 2],
    pub width: f32,
    pub mass: f32,
}

impl BodyConfig {
    fn to_body(&self) -> Result<Body> {
        let [x, y] = self.position;
        let [vx, vy] = self.velocity;
        Ok(Body::new(Vec2::new(x, y), Vec2::new(vx, vy), self.width, self.mass)?)
    }
}

/// Everything needed to build a [`BlockSim`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub fixed_dt: f64, // seconds
    pub wall_x: f32,
    pub max_steps_per_frame: Option<u32>,
    pub small: BodyConfig,
    pub large: BodyConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            fixed_dt: physics::DEFAULT_FIXED_DT.as_secs_f64(),
            wall_x: 0.0,
            max_steps_per_frame: None,
            small: BodyConfig {
                position: [116.0, 120.0],
                velocity: [0.0, 0.0],
                width: 24.0,
                mass: 1.0,
            },
            large: BodyConfig {
                position: [224.0, 112.0],
                velocity: [-100.0, 0.0],
                width: 32.0,
                mass: 100.0,
            },
        }
    }
}

impl ScenarioConfig {
    /// # Errors
    ///
    /// Fails if the file cannot be opened or is not a valid scenario.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    /// # Errors
    ///
    /// Fails if `json` is not a valid scenario.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse scenario")
    }

    /// Validate the scenario and create the simulation.
    ///
    /// # Errors
    ///
    /// Fails on any construction invariant violation, see
    /// [`BlockSimBuilder::build`].
    pub fn build(&self) -> Result<BlockSim> {
        let fixed_dt = Duration::try_from_secs_f64(self.fixed_dt).map_err(|_| {
            anyhow!(
                "fixed_dt must be a non-negative number of seconds, got {}",
                self.fixed_dt
            )
        })?;

        let mut builder = BlockSimBuilder::new()
            .small(self.small.to_body().context("invalid small body")?)
            .large(self.large.to_body().context("invalid large body")?)
            .wall_x(self.wall_x)
            .fixed_dt(fixed_dt);
        if let Some(cap) = self.max_steps_per_frame {
            builder = builder.max_steps_per_frame(cap);
        }
        Ok(builder.build()?)
    }
}
