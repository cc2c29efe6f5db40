//! Rollout driver: the generic stepping loop.
//!
//! The driver owns an environment handle and walks a three-state machine:
//! `Idle → Stepping → Terminated`. Each outer iteration samples a fresh
//! action batch, holds it for a fixed number of physics steps so the
//! controller can converge, and records one observation. Termination (by
//! iteration count or cancellation) flushes the observation sink and
//! releases the environment.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use robot_sampler::{ActionSource, EmptyRobotError};

use crate::env::{EnvironmentError, ObservationSink, SimEnvironment, SinkError};

/// Lifecycle state of a [`RolloutDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Created, environment not yet reset.
    Idle,
    /// Reset done, iterating.
    Stepping,
    /// Finished (normally or by failure); environment released.
    Terminated,
}

impl std::fmt::Display for DriverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Stepping => write!(f, "stepping"),
            Self::Terminated => write!(f, "terminated"),
        }
    }
}

/// Errors from driving a rollout.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The rollout configuration is malformed.
    #[error("invalid rollout configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: &'static str,
    },

    /// `run` was called on a driver that is not idle.
    #[error("rollout driver is {0}, expected idle")]
    NotIdle(DriverState),

    /// The environment failed during reset or step.
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    /// The action source could not produce a batch.
    #[error(transparent)]
    Sampler(#[from] EmptyRobotError),

    /// The observation sink failed to persist.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Rollout shape: batch width, outer iterations, hold count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolloutConfig {
    /// Number of environment replicas per batch.
    pub num_envs: usize,
    /// Number of outer iterations (one action batch each).
    pub iterations: usize,
    /// Physics steps each sampled target is held for before resampling.
    pub hold_steps: usize,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            num_envs: 1,
            iterations: 15,
            hold_steps: 30,
        }
    }
}

impl RolloutConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ControlError> {
        if self.num_envs == 0 {
            return Err(ControlError::InvalidConfig {
                reason: "num_envs must be at least 1",
            });
        }
        if self.iterations == 0 {
            return Err(ControlError::InvalidConfig {
                reason: "iterations must be at least 1",
            });
        }
        if self.hold_steps == 0 {
            return Err(ControlError::InvalidConfig {
                reason: "hold_steps must be at least 1",
            });
        }
        Ok(())
    }
}

/// Cooperative cancellation flag, checked once per outer iteration.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create an unset token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. The driver finishes its current iteration,
    /// then terminates normally (sink flushed, environment released).
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Running per-joint minimum/maximum of commanded targets.
///
/// Diagnostic only: the driver reports these, it never acts on them.
#[derive(Debug, Clone, PartialEq)]
pub struct JointExtremes {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl JointExtremes {
    /// Create extremes over the given number of joints.
    #[must_use]
    pub fn new(num_joints: usize) -> Self {
        Self {
            min: vec![f64::INFINITY; num_joints],
            max: vec![f64::NEG_INFINITY; num_joints],
        }
    }

    /// Fold one replica's target vector into the running extremes.
    pub fn record(&mut self, targets: &[f64]) {
        for (index, &value) in targets.iter().enumerate().take(self.min.len()) {
            if value < self.min[index] {
                self.min[index] = value;
            }
            if value > self.max[index] {
                self.max[index] = value;
            }
        }
    }

    /// Per-joint minima seen so far.
    #[must_use]
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// Per-joint maxima seen so far.
    #[must_use]
    pub fn max(&self) -> &[f64] {
        &self.max
    }
}

/// Summary of a completed rollout.
#[derive(Debug, Clone, PartialEq)]
pub struct RolloutReport {
    /// Outer iterations that ran to completion.
    pub iterations_run: usize,
    /// Observations handed to the sink (initial reset included).
    pub observations_recorded: usize,
    /// Per-joint target extremes, when at least one batch was sampled.
    pub extremes: Option<JointExtremes>,
}

/// Drives a [`SimEnvironment`] with batches from an
/// [`ActionSource`], recording observations into an [`ObservationSink`].
pub struct RolloutDriver<E: SimEnvironment> {
    env: E,
    config: RolloutConfig,
    state: DriverState,
    cancel: CancelToken,
}

impl<E: SimEnvironment> RolloutDriver<E> {
    /// Create an idle driver over an environment handle.
    pub fn new(env: E, config: RolloutConfig) -> Self {
        Self {
            env,
            config,
            state: DriverState::Idle,
            cancel: CancelToken::new(),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// A handle that cancels this driver from another thread.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The wrapped environment.
    #[must_use]
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Run the rollout to completion.
    ///
    /// Resets the environment, then for each iteration: takes a fresh batch
    /// from `source`, submits it `hold_steps` times, and records the final
    /// observation of the hold window. On success the sink is flushed and
    /// the environment released.
    ///
    /// # Errors
    ///
    /// Any environment, sampler, or sink failure terminates the rollout and
    /// is returned after a best-effort release of the environment; a failure
    /// of the release itself is logged, never allowed to mask the original
    /// error.
    pub fn run<A, S>(&mut self, source: &mut A, sink: &mut S) -> Result<RolloutReport, ControlError>
    where
        A: ActionSource,
        S: ObservationSink<Observation = E::Observation>,
    {
        if self.state != DriverState::Idle {
            return Err(ControlError::NotIdle(self.state));
        }
        self.config.validate()?;

        let (observation, _info) = match self.env.reset() {
            Ok(initial) => initial,
            Err(err) => return Err(self.abort(err.into())),
        };
        self.state = DriverState::Stepping;
        sink.add(observation);
        let mut observations_recorded = 1;

        let mut extremes: Option<JointExtremes> = None;
        let mut iterations_run = 0;

        for iteration in 0..self.config.iterations {
            if self.cancel.is_cancelled() {
                tracing::info!("rollout cancelled after {iterations_run} iterations");
                break;
            }

            let batch = match source.next_batch(self.config.num_envs) {
                Ok(batch) => batch,
                Err(err) => return Err(self.abort(err.into())),
            };

            let running = extremes.get_or_insert_with(|| JointExtremes::new(batch.num_joints()));
            for row in &batch.targets {
                running.record(row);
            }
            tracing::debug!("iteration {iteration}: q = {:?}", batch.targets.first());
            tracing::debug!(
                "iteration {iteration}: q_min = {:?}, q_max = {:?}",
                running.min(),
                running.max()
            );

            let mut last_observation = None;
            for _ in 0..self.config.hold_steps {
                match self.env.step(&batch.actions) {
                    Ok(outcome) => {
                        self.env.refresh_render();
                        last_observation = Some(outcome.observation);
                    }
                    Err(err) => return Err(self.abort(err.into())),
                }
            }
            if let Some(observation) = last_observation {
                sink.add(observation);
                observations_recorded += 1;
            }
            iterations_run += 1;
        }

        // Terminated: flush buffered observations, then release the handle.
        self.state = DriverState::Terminated;
        if let Err(save_err) = sink.save() {
            if let Err(close_err) = self.env.close() {
                tracing::warn!("failed to release environment after sink error: {close_err}");
            }
            return Err(save_err.into());
        }
        self.env.close()?;

        Ok(RolloutReport {
            iterations_run,
            observations_recorded,
            extremes,
        })
    }

    /// Enter `Terminated` on a failure: release the environment best-effort
    /// and hand the original error back unchanged.
    fn abort(&mut self, err: ControlError) -> ControlError {
        self.state = DriverState::Terminated;
        if let Err(close_err) = self.env.close() {
            tracing::warn!("failed to release environment during error unwind: {close_err}");
        }
        err
    }
}
