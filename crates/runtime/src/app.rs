//! # Frame Loop
//!
//! Drives a [`BlockSim`] from a [`Presenter`]. Every frame:
//!
//! 1. sample the presenter clock and compute the elapsed frame time,
//! 2. feed it through the fixed-step accumulator, running zero or more
//!    physics steps to completion,
//! 3. hand the resulting snapshot to the presenter,
//! 4. poll for quit or reload.
//!
//! Stepping and presentation are strictly interleaved on one thread, so the
//! presenter only ever sees the state between step batches.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use physics::BlockSim;

use crate::config::{ScenarioConfig, ScenarioOverrides};
use crate::presenter::{Input, Presenter};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop once no further collision can happen.
    pub until_settled: bool,
    /// Scenario file to rebuild from on [`Input::Reload`].
    pub scenario: Option<PathBuf>,
    /// Command-line values re-applied on top of the reloaded file.
    pub overrides: ScenarioOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub steps: u64,
    pub collisions: u64,
    pub elapsed: Duration,
    pub settled: bool,
}

/// Run the frame loop until the presenter asks to quit or, with
/// `until_settled`, until the blocks can no longer collide.
///
/// # Errors
///
/// Returns any error produced by the presenter.
pub fn run<P: Presenter>(
    sim: &mut BlockSim,
    presenter: &mut P,
    options: &RunOptions,
) -> Result<RunSummary> {
    tracing::info!(
        "Starting frame loop with fixed dt = {:?}...",
        sim.fixed_dt()
    );

    let mut frames = 0_u64;
    let mut last_time = presenter.now_seconds();
    let mut last_collisions = sim.collision_count();

    loop {
        let now = presenter.now_seconds();
        let frame_delta = (now - last_time).max(0.0);
        last_time = now;

        let steps = sim.advance_secs(frame_delta)?;
        tracing::trace!(frame = frames, steps, "Advanced simulation");

        let frame = sim.snapshot();
        if frame.collision_count != last_collisions {
            tracing::info!("{} collisions", frame.collision_count);
            last_collisions = frame.collision_count;
        }

        presenter.present(&frame)?;
        frames += 1;

        if options.until_settled && sim.is_settled() {
            tracing::info!(
                "Simulation settled after {} collisions.",
                sim.collision_count()
            );
            break;
        }

        match presenter.poll_input() {
            Input::Continue => {}
            Input::Quit => break,
            Input::Reload => {
                if let Some(path) = &options.scenario {
                    reload(sim, path, &options.overrides);
                    last_collisions = sim.collision_count();
                }
            }
        }
    }

    let summary = RunSummary {
        frames,
        steps: sim.steps(),
        collisions: sim.collision_count(),
        elapsed: sim.elapsed(),
        settled: sim.is_settled(),
    };
    tracing::info!(
        frames = summary.frames,
        steps = summary.steps,
        collisions = summary.collisions,
        "Frame loop finished after {:?} of simulated time.",
        summary.elapsed
    );
    Ok(summary)
}

/// Swap in a freshly built simulation. A broken file keeps the current one.
fn reload(sim: &mut BlockSim, path: &Path, overrides: &ScenarioOverrides) {
    match ScenarioConfig::load(path).and_then(|config| overrides.apply(config).build()) {
        Ok(fresh) => {
            tracing::info!("Reloaded scenario from {:?}.", path);
            *sim = fresh;
        }
        Err(e) => {
            tracing::error!("Failed to reload scenario {:?}: {e:?}", path);
        }
    }
}
