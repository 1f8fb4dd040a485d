//! # Presenter Seam
//!
//! The frame loop only talks to its environment through [`Presenter`]: a
//! monotonic clock, an input poll and a per-frame hook that receives a
//! read-only [`Snapshot`]. Windowing and drawing live behind this trait and
//! never touch the simulation directly.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use physics::Snapshot;

use crate::watcher::ScenarioWatcher;

/// What the presenter wants the loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Continue,
    Quit,
    /// The scenario changed; rebuild the simulation from it.
    Reload,
}

pub trait Presenter {
    /// Seconds since an arbitrary fixed origin. Must never go backwards.
    fn now_seconds(&self) -> f64;

    fn poll_input(&mut self) -> Input;

    /// Show one frame.
    ///
    /// # Errors
    ///
    /// Implementations report failures of their output surface here; the
    /// frame loop stops and propagates them.
    fn present(&mut self, frame: &Snapshot) -> Result<()>;
}

/// Presenter without a display: paces frames to a target rate and logs the
/// frame state through `tracing`.
pub struct HeadlessPresenter {
    origin: Instant,
    frame_duration: Duration,
    frame_budget: Option<u64>,
    log_every: u64,
    frames: u64,
    last_present: Option<Instant>,
    watcher: Option<ScenarioWatcher>,
}

impl HeadlessPresenter {
    /// # Errors
    ///
    /// Fails if `fps` is not a positive finite number.
    pub fn new(fps: f64, frame_budget: Option<u64>, log_every: u64) -> Result<Self> {
        if !(fps.is_finite() && fps > 0.0) {
            bail!("fps must be a positive number, got {fps}");
        }
        Ok(Self {
            origin: Instant::now(),
            frame_duration: Duration::from_secs_f64(1.0 / fps),
            frame_budget,
            log_every,
            frames: 0,
            last_present: None,
            watcher: None,
        })
    }

    /// Report [`Input::Reload`] whenever `watcher` sees a change.
    #[must_use]
    pub fn with_watcher(mut self, watcher: ScenarioWatcher) -> Self {
        self.watcher = Some(watcher);
        self
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presenter for HeadlessPresenter {
    fn now_seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn poll_input(&mut self) -> Input {
        if self
            .frame_budget
            .is_some_and(|budget| self.frames >= budget)
        {
            return Input::Quit;
        }
        if self.watcher.as_ref().is_some_and(ScenarioWatcher::changed) {
            return Input::Reload;
        }
        Input::Continue
    }

    fn present(&mut self, frame: &Snapshot) -> Result<()> {
        self.frames += 1;

        if self.log_every > 0 && self.frames % self.log_every == 0 {
            tracing::info!(
                frame = self.frames,
                collisions = frame.collision_count,
                small_x = frame.small.position.x,
                small_vx = frame.small.velocity.x,
                large_x = frame.large.position.x,
                large_vx = frame.large.velocity.x,
                alpha = frame.alpha,
                "Frame presented"
            );
        }

        // Frame rate limiting
        if let Some(last) = self.last_present {
            let frame_time = last.elapsed();
            if frame_time < self.frame_duration {
                std::thread::sleep(self.frame_duration - frame_time);
            }
        }
        self.last_present = Some(Instant::now());
        Ok(())
    }
}
