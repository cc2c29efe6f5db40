//! Generic control loop over simulation-environment backends.
//!
//! This crate owns the seams to the external world and the state machine
//! that drives them:
//!
//! - [`SimEnvironment`] - what a physics backend adapter must provide
//!   (`reset` / `step` / `refresh_render` / `close`)
//! - [`ObservationSink`] - where recorded observations go (`add` / `save`)
//! - [`RolloutDriver`] - Idle → Stepping → Terminated loop that samples
//!   actions, holds each target for a fixed number of physics steps, and
//!   records one observation per outer iteration
//! - [`SimBackend`] - the fixed set of supported backend identifiers
//!
//! The driver never interprets observations; they flow through opaquely from
//! the environment to the sink. Its only bookkeeping is a per-joint min/max
//! running over the commanded targets, reported for diagnostics.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod backend;
mod driver;
mod env;

pub use backend::{SimBackend, UnknownBackendError};
pub use driver::{
    CancelToken, ControlError, DriverState, JointExtremes, RolloutConfig, RolloutDriver,
    RolloutReport,
};
pub use env::{EnvironmentError, ObservationSink, SimEnvironment, SinkError, StepOutcome};
