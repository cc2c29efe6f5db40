//! Core types for normalized robot descriptions.
//!
//! This crate provides the data contract that lets one generic control loop
//! drive arbitrary robot morphologies across heterogeneous physics backends:
//!
//! - [`ActuatorCfg`] - Per-joint control parameters (gains, limits, gripper flag)
//! - [`RobotSpec`] - One robot model's raw declaration (ordered joint tables)
//! - [`RobotDescriptor`] - The validated, immutable form of a [`RobotSpec`]
//! - [`RobotCommand`] / [`EnvAction`] - The wire shape submitted to backends
//! - [`SchemaError`] - Everything that can be wrong with a declaration
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no physics, no asset loading, no
//! I/O. They're the common language between:
//!
//! - Simulation backends (MuJoCo, Isaac, SAPIEN, ... adapters)
//! - Action samplers and control policies
//! - Rollout drivers collecting observations
//!
//! A [`RobotDescriptor`] is constructed once, validated eagerly, and never
//! mutated afterwards; it can be shared read-only across any number of
//! environment replicas without synchronization.
//!
//! # Example
//!
//! ```
//! use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotDescriptor, RobotSpec};
//!
//! let spec = RobotSpec {
//!     name: "one_dof".into(),
//!     num_joints: 1,
//!     fix_base_link: true,
//!     actuators: vec![("hinge".into(), ActuatorCfg::new(2.0))],
//!     joint_limits: vec![("hinge".into(), JointRange::new(-1.0, 1.0))],
//!     default_joint_positions: vec![("hinge".into(), 0.0)],
//!     control_type: vec![("hinge".into(), ControlMode::Position)],
//!     ..RobotSpec::default()
//! };
//!
//! let robot = RobotDescriptor::try_from(spec).expect("valid declaration");
//! assert_eq!(robot.joint_names(), ["hinge"]);
//! assert_eq!(robot.limits_as_pairs(), [(-1.0, 1.0)]);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn, clippy::missing_errors_doc)]

mod action;
mod actuator;
mod descriptor;
mod error;

pub use action::{ActionBatch, EnvAction, RobotCommand};
pub use actuator::{ActuatorCfg, ControlMode, JointRange};
pub use descriptor::{RobotDescriptor, RobotSpec};
pub use error::{SchemaError, UnknownJointError};

/// Result type for schema validation.
pub type Result<T> = std::result::Result<T, SchemaError>;
