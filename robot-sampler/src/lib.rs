//! Random joint-target sampling.
//!
//! An [`ActionSampler`] draws joint targets uniformly within each joint's
//! declared limits, for a batch of independent environment replicas, and
//! shapes them into the wire-contract [`ActionBatch`](robot_types::ActionBatch).
//! Sampling is reproducible: the same seed, descriptor, and batch size
//! always produce identical output.
//!
//! # Example
//!
//! ```
//! use robot_sampler::ActionSampler;
//! use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotDescriptor, RobotSpec};
//!
//! let spec = RobotSpec {
//!     name: "one_dof".into(),
//!     num_joints: 1,
//!     actuators: vec![("hinge".into(), ActuatorCfg::new(2.0))],
//!     joint_limits: vec![("hinge".into(), JointRange::new(-1.0, 1.0))],
//!     default_joint_positions: vec![("hinge".into(), 0.0)],
//!     control_type: vec![("hinge".into(), ControlMode::Position)],
//!     ..RobotSpec::default()
//! };
//! let robot = RobotDescriptor::try_from(spec).expect("valid");
//!
//! let mut sampler = ActionSampler::with_seed(42);
//! let batch = sampler.sample_batch(&robot, 4).expect("non-empty robot");
//! assert_eq!(batch.num_envs(), 4);
//! assert!(batch.targets.iter().all(|row| (-1.0..=1.0).contains(&row[0])));
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod sampler;
mod source;

pub use sampler::{ActionSampler, EmptyRobotError};
pub use source::{ActionSource, RandomActionSource};
