//! Action wire types.
//!
//! This is the wire contract between the control core and every simulator
//! backend: one mapping per environment replica, shaped as
//! `{ robot_name: { "dof_pos_target": { joint_name: value } } }`.
//! Backend adapters must accept exactly this shape.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-robot command: joint name → target position.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotCommand {
    /// Target joint positions, keyed by joint name.
    pub dof_pos_target: HashMap<String, f64>,
}

impl RobotCommand {
    /// Create a command from joint targets.
    #[must_use]
    pub fn new(dof_pos_target: HashMap<String, f64>) -> Self {
        Self { dof_pos_target }
    }
}

/// One replica's action: robot name → command.
pub type EnvAction = HashMap<String, RobotCommand>;

/// A batch of sampled joint targets together with its wire rendition.
///
/// `targets` is replica-major, one value per actuated joint in the robot's
/// canonical joint order; `actions` is the same data keyed by joint name,
/// one [`EnvAction`] per replica. Binding order to name happens in exactly
/// one place (the sampler), so the two views always correspond.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionBatch {
    /// Sampled numeric targets: `targets[replica][joint_index]`.
    pub targets: Vec<Vec<f64>>,
    /// Wire-shaped actions, one per replica.
    pub actions: Vec<EnvAction>,
}

impl ActionBatch {
    /// Number of replicas in the batch.
    #[must_use]
    pub fn num_envs(&self) -> usize {
        self.targets.len()
    }

    /// Number of joints per replica (0 for an empty batch).
    #[must_use]
    pub fn num_joints(&self) -> usize {
        self.targets.first().map_or(0, Vec::len)
    }
}
