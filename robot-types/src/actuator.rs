//! Actuator parameters and joint ranges.
//!
//! One [`ActuatorCfg`] describes the control unit driving a single joint:
//! PD gain terms, velocity/torque limits, and whether the joint belongs to a
//! gripper mechanism.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Control parameters for one actuated joint.
///
/// `stiffness` and `damping` are the position- and velocity-control gains a
/// backend should apply when servoing this joint; `velocity_limit` is always
/// required, `torque_limit` only where the hardware specifies one.
///
/// # Example
///
/// ```
/// use robot_types::ActuatorCfg;
///
/// let shoulder = ActuatorCfg::new(3.15).with_gains(1e5, 1e4);
/// let gripper = ActuatorCfg::new(0.2).end_effector();
///
/// assert!(shoulder.torque_limit.is_none());
/// assert!(gripper.is_ee);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActuatorCfg {
    /// Position-control gain (non-negative).
    pub stiffness: f64,
    /// Velocity-control gain (non-negative).
    pub damping: f64,
    /// Maximum joint velocity magnitude (must be positive).
    pub velocity_limit: f64,
    /// Maximum effort magnitude, if the hardware specifies one (positive).
    pub torque_limit: Option<f64>,
    /// True when this actuator drives a gripper/end-effector joint.
    pub is_ee: bool,
}

impl ActuatorCfg {
    /// Create an actuator with the given velocity limit and zero gains.
    #[must_use]
    pub fn new(velocity_limit: f64) -> Self {
        Self {
            stiffness: 0.0,
            damping: 0.0,
            velocity_limit,
            torque_limit: None,
            is_ee: false,
        }
    }

    /// Set the PD gain terms.
    #[must_use]
    pub fn with_gains(mut self, stiffness: f64, damping: f64) -> Self {
        self.stiffness = stiffness;
        self.damping = damping;
        self
    }

    /// Set the torque limit.
    #[must_use]
    pub fn with_torque_limit(mut self, torque_limit: f64) -> Self {
        self.torque_limit = Some(torque_limit);
        self
    }

    /// Mark this actuator as driving a gripper/end-effector joint.
    #[must_use]
    pub fn end_effector(mut self) -> Self {
        self.is_ee = true;
        self
    }
}

/// Position limits for a joint: angle for revolute, distance for prismatic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointRange {
    /// Minimum position.
    pub lower: f64,
    /// Maximum position.
    pub upper: f64,
}

impl JointRange {
    /// Create a range with the given bounds.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Check if a position lies within the range (inclusive).
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.lower && position <= self.upper
    }

    /// Clamp a position into the range.
    #[must_use]
    pub fn clamp(&self, position: f64) -> f64 {
        position.clamp(self.lower, self.upper)
    }

    /// Width of the range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// The range as a `(lower, upper)` pair.
    #[must_use]
    pub fn as_pair(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// True when both bounds are finite and ordered.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower <= self.upper
    }
}

/// How a backend should drive a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ControlMode {
    /// Servo towards a target position.
    Position,
    /// Apply a commanded effort (torque/force) directly.
    Effort,
}

impl ControlMode {
    /// Check if this is position control.
    #[must_use]
    pub fn is_position(self) -> bool {
        matches!(self, Self::Position)
    }

    /// Check if this is effort control.
    #[must_use]
    pub fn is_effort(self) -> bool {
        matches!(self, Self::Effort)
    }
}

impl std::fmt::Display for ControlMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position => write!(f, "position"),
            Self::Effort => write!(f, "effort"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn actuator_builders() {
        let cfg = ActuatorCfg::new(3.1415)
            .with_gains(1000.0, 100.0)
            .with_torque_limit(30.0);

        assert_eq!(cfg.stiffness, 1000.0);
        assert_eq!(cfg.damping, 100.0);
        assert_eq!(cfg.velocity_limit, 3.1415);
        assert_eq!(cfg.torque_limit, Some(30.0));
        assert!(!cfg.is_ee);

        let gripper = ActuatorCfg::new(0.2).end_effector();
        assert!(gripper.is_ee);
    }

    #[test]
    fn joint_range() {
        let range = JointRange::new(-2.618, 2.618);

        assert!(range.contains(0.0));
        assert!(range.contains(-2.618));
        assert!(!range.contains(3.0));
        assert_relative_eq!(range.span(), 5.236, epsilon = 1e-12);
        assert_relative_eq!(range.clamp(10.0), 2.618, epsilon = 1e-12);
        assert_eq!(range.as_pair(), (-2.618, 2.618));
        assert!(range.is_valid());
    }

    #[test]
    fn joint_range_validity() {
        assert!(!JointRange::new(1.0, -1.0).is_valid());
        assert!(!JointRange::new(f64::NEG_INFINITY, 0.0).is_valid());
        assert!(!JointRange::new(0.0, f64::NAN).is_valid());
        // A degenerate range is legal: the joint is pinned.
        assert!(JointRange::new(0.5, 0.5).is_valid());
    }

    #[test]
    fn control_mode_predicates() {
        assert!(ControlMode::Position.is_position());
        assert!(!ControlMode::Position.is_effort());
        assert!(ControlMode::Effort.is_effort());
        assert_eq!(ControlMode::Position.to_string(), "position");
        assert_eq!(ControlMode::Effort.to_string(), "effort");
    }
}
