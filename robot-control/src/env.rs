//! Seams to the external collaborators: simulation backends and
//! observation sinks.

use thiserror::Error;

use robot_types::EnvAction;

/// A failure reported by a simulation backend.
///
/// Backends surface their own error types; adapters wrap them here so the
/// driver can propagate them without knowing the backend.
#[derive(Debug, Error)]
#[error("environment error: {message}")]
pub struct EnvironmentError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl EnvironmentError {
    /// Create an error from a message alone.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping a backend-reported cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// A failure reported by an observation sink.
#[derive(Debug, Error)]
#[error("observation sink error: {message}")]
pub struct SinkError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SinkError {
    /// Create an error from a message alone.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Result of one environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome<Obs, Info> {
    /// Observation after the step.
    pub observation: Obs,
    /// Per-replica reward.
    pub reward: Vec<f64>,
    /// Per-replica success flag.
    pub success: Vec<bool>,
    /// Per-replica time-out flag.
    pub time_out: Vec<bool>,
    /// Backend-specific extra data.
    pub info: Info,
}

/// A batched simulation environment.
///
/// Implemented by backend adapters, not by this crate. `step` takes one
/// [`EnvAction`] per replica; replicas are processed as a data batch inside
/// a single call, never as separate tasks. These calls (and the sink's) are
/// the only blocking points of the control loop.
pub trait SimEnvironment {
    /// Observation produced by `reset` and `step`. Opaque to the driver.
    type Observation;
    /// Backend-specific extra data carried alongside observations.
    type Info;

    /// Reset every replica, returning the initial observation.
    fn reset(&mut self) -> Result<(Self::Observation, Self::Info), EnvironmentError>;

    /// Advance physics by one step under the given per-replica actions.
    fn step(
        &mut self,
        actions: &[EnvAction],
    ) -> Result<StepOutcome<Self::Observation, Self::Info>, EnvironmentError>;

    /// Refresh any attached renderer. Purely cosmetic; must not fail.
    fn refresh_render(&mut self);

    /// Release the environment and its resources.
    fn close(&mut self) -> Result<(), EnvironmentError>;
}

/// Accumulates observations and persists them on demand.
///
/// Implementations typically buffer rendered frames and encode them into a
/// video artifact when `save` is called.
pub trait ObservationSink {
    /// Observation type accepted by this sink.
    type Observation;

    /// Append one observation to the buffer.
    fn add(&mut self, observation: Self::Observation);

    /// Persist everything buffered so far.
    fn save(&mut self) -> Result<(), SinkError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn environment_error_display() {
        let err = EnvironmentError::new("PhysX solver diverged");
        assert!(err.to_string().contains("PhysX"));
        assert!(std::error::Error::source(&err).is_none());

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "socket closed");
        let err = EnvironmentError::with_source("step failed", io);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn sink_error_display() {
        let err = SinkError::new("encoder rejected frame");
        assert!(err.to_string().contains("encoder"));
    }
}
