//! Error types for robot description validation and lookup.

use thiserror::Error;

/// Errors detected while validating a robot declaration.
///
/// All of these are raised eagerly at [`RobotDescriptor`](crate::RobotDescriptor)
/// construction time so that no partially-valid descriptor ever reaches a
/// sampler or a control loop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    /// The declaration has no name.
    #[error("robot declaration has an empty name")]
    EmptyName,

    /// A joint name appears twice within one table.
    #[error("robot '{robot}': duplicate joint '{joint}' in {table}")]
    DuplicateJoint {
        /// The robot being validated.
        robot: String,
        /// The repeated joint name.
        joint: String,
        /// Which table contains the duplicate.
        table: &'static str,
    },

    /// A joint is present in one table but missing from another.
    #[error("robot '{robot}': joint '{joint}' is in {present} but missing from {missing}")]
    KeySetMismatch {
        /// The robot being validated.
        robot: String,
        /// The joint that is not fully specified.
        joint: String,
        /// The table where the joint appears.
        present: &'static str,
        /// The table where the joint is missing.
        missing: &'static str,
    },

    /// `num_joints` disagrees with the number of actuated joints.
    #[error("robot '{robot}': num_joints is {declared} but {actuated} joints are actuated")]
    JointCountMismatch {
        /// The robot being validated.
        robot: String,
        /// The declared `num_joints`.
        declared: usize,
        /// The number of entries in the control-type table.
        actuated: usize,
    },

    /// The declaration actuates no joints at all.
    #[error("robot '{robot}' declares no actuated joints")]
    NoJoints {
        /// The robot being validated.
        robot: String,
    },

    /// A joint range is inverted or not finite.
    #[error("robot '{robot}': joint '{joint}' has invalid limits [{lower}, {upper}]")]
    InvalidLimits {
        /// The robot being validated.
        robot: String,
        /// The joint with bad limits.
        joint: String,
        /// Declared lower bound.
        lower: f64,
        /// Declared upper bound.
        upper: f64,
    },

    /// A default position falls outside its joint's limits.
    #[error(
        "robot '{robot}': default position {value} for joint '{joint}' \
         is outside [{lower}, {upper}]"
    )]
    DefaultOutOfRange {
        /// The robot being validated.
        robot: String,
        /// The joint with the out-of-range default.
        joint: String,
        /// The declared default position.
        value: f64,
        /// Lower limit for the joint.
        lower: f64,
        /// Upper limit for the joint.
        upper: f64,
    },

    /// An actuator velocity limit is zero, negative, or not finite.
    #[error("robot '{robot}': actuator '{joint}' velocity limit must be positive, got {value}")]
    InvalidVelocityLimit {
        /// The robot being validated.
        robot: String,
        /// The joint whose actuator is invalid.
        joint: String,
        /// The offending value.
        value: f64,
    },

    /// An actuator torque limit is zero, negative, or not finite.
    #[error("robot '{robot}': actuator '{joint}' torque limit must be positive, got {value}")]
    InvalidTorqueLimit {
        /// The robot being validated.
        robot: String,
        /// The joint whose actuator is invalid.
        joint: String,
        /// The offending value.
        value: f64,
    },

    /// An actuator gain is negative or not finite.
    #[error("robot '{robot}': actuator '{joint}' {gain} must be non-negative, got {value}")]
    InvalidGain {
        /// The robot being validated.
        robot: String,
        /// The joint whose actuator is invalid.
        joint: String,
        /// Which gain term is invalid (`"stiffness"` or `"damping"`).
        gain: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Gripper open/close poses are missing, empty, or of unequal length.
    #[error(
        "robot '{robot}': gripper open pose has {open_len} values \
         but close pose has {close_len}"
    )]
    GripperPoseMismatch {
        /// The robot being validated.
        robot: String,
        /// Length of `gripper_open_q` (0 when absent).
        open_len: usize,
        /// Length of `gripper_close_q` (0 when absent).
        close_len: usize,
    },

    /// Gripper poses are declared but no actuator carries the end-effector flag.
    #[error("robot '{robot}': gripper poses declared but no actuator is flagged as end-effector")]
    GripperWithoutEndEffector {
        /// The robot being validated.
        robot: String,
    },

    /// A declared value is NaN or infinite where a finite real is required.
    #[error("robot '{robot}': {field} for joint '{joint}' is not finite")]
    NonFiniteValue {
        /// The robot being validated.
        robot: String,
        /// The joint carrying the value.
        joint: String,
        /// Which field is non-finite.
        field: &'static str,
    },
}

/// A joint name was looked up on a descriptor that does not define it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown joint: {0}")]
pub struct UnknownJointError(pub String);
