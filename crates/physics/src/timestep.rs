//! # Fixed Timestep Accumulator
//!
//! Converts irregular frame deltas into a whole number of fixed physics
//! steps. Leftover time below one step is carried into the next call.
//!
//! Time is accumulated as a [`Duration`], i.e. in integer nanoseconds, so
//! feeding one long delta or several short ones that add up to the same
//! total always yields the same number of steps.

use std::time::Duration;

use crate::error::ConfigError;

const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    dt: Duration,
    accumulator: Duration,
    /// Upper bound on steps per call; `None` means unbounded catch-up.
    max_steps: Option<u32>,
}

impl FixedTimestep {
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveTimestep`] for a zero `dt`.
    pub fn new(dt: Duration) -> Result<Self, ConfigError> {
        if dt.is_zero() {
            return Err(ConfigError::NonPositiveTimestep(dt));
        }
        Ok(Self {
            dt,
            accumulator: Duration::ZERO,
            max_steps: None,
        })
    }

    /// Cap the number of steps a single [`accumulate`](Self::accumulate)
    /// call may report. Whole steps beyond the cap are dropped, which makes
    /// simulated time fall behind wall-clock time after a long stall.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroStepCap`] when `cap` is zero.
    pub fn with_max_steps(mut self, cap: u32) -> Result<Self, ConfigError> {
        if cap == 0 {
            return Err(ConfigError::ZeroStepCap);
        }
        self.max_steps = Some(cap);
        Ok(self)
    }

    /// Add frame time to the accumulator and return the number of fixed
    /// steps that are now due. The accumulator keeps only the remainder.
    ///
    /// The result never exceeds the configured cap, or `u32::MAX` when no
    /// cap is set (a stall of about 24.8 days at the default 0.5 ms step).
    /// Whole steps beyond that limit are dropped with a warning.
    pub fn accumulate(&mut self, frame_dt: Duration) -> u32 {
        self.accumulator = self.accumulator.saturating_add(frame_dt);

        let dt = self.dt.as_nanos();
        let backlog = self.accumulator.as_nanos();
        let due = backlog / dt;
        self.accumulator = duration_from_nanos(backlog % dt);

        let limit = self.max_steps.unwrap_or(u32::MAX);
        if due > u128::from(limit) {
            tracing::warn!(
                due = %due,
                limit,
                capped = self.max_steps.is_some(),
                "fixed-step backlog exceeds per-call limit, dropping excess simulation time"
            );
            return limit;
        }
        // `due <= limit`, which fits in u32
        u32::try_from(due).unwrap_or(limit)
    }

    /// Fraction of a step left in the accumulator, in `[0, 1)`.
    ///
    /// Presenters can use this to interpolate between the previous and the
    /// current state.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.accumulator.as_secs_f64() / self.dt.as_secs_f64()
    }

    #[must_use]
    pub fn dt(&self) -> Duration {
        self.dt
    }

    #[must_use]
    pub fn accumulated(&self) -> Duration {
        self.accumulator
    }

    #[must_use]
    pub fn max_steps(&self) -> Option<u32> {
        self.max_steps
    }
}

#[allow(clippy::cast_possible_truncation)]
fn duration_from_nanos(nanos: u128) -> Duration {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
