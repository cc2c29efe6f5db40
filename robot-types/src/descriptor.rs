//! Robot declarations and their validated descriptor form.
//!
//! A [`RobotSpec`] is the raw, per-robot data table: every field public,
//! ordered joint tables, no guarantees. [`RobotDescriptor`] is what the rest
//! of the system works with: constructed through `TryFrom`, validated
//! eagerly, immutable afterwards.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::actuator::{ActuatorCfg, ControlMode, JointRange};
use crate::error::{SchemaError, UnknownJointError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw declaration of one robot model.
///
/// The four joint tables are ordered association lists: declaration order is
/// preserved into [`RobotDescriptor::joint_names`], which downstream code
/// zips against externally-produced joint-value vectors.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotSpec {
    /// Unique robot identifier.
    pub name: String,
    /// Number of independently actuated joints.
    pub num_joints: usize,
    /// Whether the base link is fixed to the world.
    pub fix_base_link: bool,
    /// USD scene description, when available.
    pub usd_path: Option<PathBuf>,
    /// URDF description, when available.
    pub urdf_path: Option<PathBuf>,
    /// MJCF description, when available.
    pub mjcf_path: Option<PathBuf>,
    /// Whether gravity acts on this robot.
    pub enabled_gravity: bool,
    /// Whether self-collisions are simulated.
    pub enabled_self_collisions: bool,
    /// Kinematic link treated as the end-effector frame.
    pub ee_body_name: String,
    /// Joint name → actuator parameters.
    pub actuators: Vec<(String, ActuatorCfg)>,
    /// Joint name → position limits. May contain limits-only entries for
    /// mirrored (mimic) joints that are not independently actuated.
    pub joint_limits: Vec<(String, JointRange)>,
    /// Joint name → default position.
    pub default_joint_positions: Vec<(String, f64)>,
    /// Joint name → control mode. Declaration order here defines the
    /// canonical joint order of the descriptor.
    pub control_type: Vec<(String, ControlMode)>,
    /// Joint values of the fully-open gripper pose, per mirrored finger.
    pub gripper_open_q: Option<Vec<f64>>,
    /// Joint values of the fully-closed gripper pose, per mirrored finger.
    pub gripper_close_q: Option<Vec<f64>>,
}

/// Validated, immutable description of one robot model.
///
/// Constructed once from a [`RobotSpec`]; every invariant of the schema is
/// checked at construction, so holders never need to re-validate. A
/// descriptor may be shared read-only across any number of environment
/// replicas.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotDescriptor {
    name: String,
    num_joints: usize,
    fix_base_link: bool,
    usd_path: Option<PathBuf>,
    urdf_path: Option<PathBuf>,
    mjcf_path: Option<PathBuf>,
    enabled_gravity: bool,
    enabled_self_collisions: bool,
    ee_body_name: String,
    /// Canonical joint order: `control_type` declaration order.
    joint_order: Vec<String>,
    actuators: HashMap<String, ActuatorCfg>,
    joint_limits: HashMap<String, JointRange>,
    default_joint_positions: HashMap<String, f64>,
    control_type: HashMap<String, ControlMode>,
    /// Limits-only joints (mirrored gripper fingers etc.), declaration order.
    mimic_joints: Vec<String>,
    gripper_open_q: Option<Vec<f64>>,
    gripper_close_q: Option<Vec<f64>>,
}

/// Build a lookup map from an ordered table, rejecting duplicate keys.
fn index_table<T>(
    robot: &str,
    table: &'static str,
    entries: Vec<(String, T)>,
) -> Result<(Vec<String>, HashMap<String, T>), SchemaError> {
    let mut order = Vec::with_capacity(entries.len());
    let mut map = HashMap::with_capacity(entries.len());
    for (joint, value) in entries {
        if map.insert(joint.clone(), value).is_some() {
            return Err(SchemaError::DuplicateJoint {
                robot: robot.to_string(),
                joint,
                table,
            });
        }
        order.push(joint);
    }
    Ok((order, map))
}

/// Require that every joint of `reference` appears in `keys`.
fn require_subset(
    robot: &str,
    reference: &[String],
    present: &'static str,
    keys: &HashSet<&str>,
    missing: &'static str,
) -> Result<(), SchemaError> {
    for joint in reference {
        if !keys.contains(joint.as_str()) {
            return Err(SchemaError::KeySetMismatch {
                robot: robot.to_string(),
                joint: joint.clone(),
                present,
                missing,
            });
        }
    }
    Ok(())
}

impl TryFrom<RobotSpec> for RobotDescriptor {
    type Error = SchemaError;

    fn try_from(spec: RobotSpec) -> Result<Self, SchemaError> {
        if spec.name.is_empty() {
            return Err(SchemaError::EmptyName);
        }
        let robot = spec.name.clone();

        let (joint_order, control_type) =
            index_table(&robot, "control_type", spec.control_type)?;
        if joint_order.is_empty() {
            return Err(SchemaError::NoJoints { robot });
        }
        if spec.num_joints != joint_order.len() {
            return Err(SchemaError::JointCountMismatch {
                robot,
                declared: spec.num_joints,
                actuated: joint_order.len(),
            });
        }

        let (actuator_order, actuators) = index_table(&robot, "actuators", spec.actuators)?;
        let (limit_order, joint_limits) =
            index_table(&robot, "joint_limits", spec.joint_limits)?;
        let (default_order, default_joint_positions) = index_table(
            &robot,
            "default_joint_positions",
            spec.default_joint_positions,
        )?;

        // The control-type table is the authoritative actuated set: actuators
        // and defaults must match it exactly, limits may be a superset.
        let actuated: HashSet<&str> = joint_order.iter().map(String::as_str).collect();
        let actuator_keys: HashSet<&str> = actuator_order.iter().map(String::as_str).collect();
        let default_keys: HashSet<&str> = default_order.iter().map(String::as_str).collect();
        let limit_keys: HashSet<&str> = limit_order.iter().map(String::as_str).collect();

        require_subset(&robot, &joint_order, "control_type", &actuator_keys, "actuators")?;
        require_subset(&robot, &actuator_order, "actuators", &actuated, "control_type")?;
        require_subset(
            &robot,
            &joint_order,
            "control_type",
            &default_keys,
            "default_joint_positions",
        )?;
        require_subset(
            &robot,
            &default_order,
            "default_joint_positions",
            &actuated,
            "control_type",
        )?;
        require_subset(&robot, &joint_order, "control_type", &limit_keys, "joint_limits")?;

        let mimic_joints: Vec<String> = limit_order
            .iter()
            .filter(|joint| !actuated.contains(joint.as_str()))
            .cloned()
            .collect();

        for (joint, range) in &joint_limits {
            if !range.is_valid() {
                return Err(SchemaError::InvalidLimits {
                    robot,
                    joint: joint.clone(),
                    lower: range.lower,
                    upper: range.upper,
                });
            }
        }

        for (joint, value) in &default_joint_positions {
            if !value.is_finite() {
                return Err(SchemaError::NonFiniteValue {
                    robot,
                    joint: joint.clone(),
                    field: "default position",
                });
            }
            // Subset checks above guarantee the limit entry exists.
            if let Some(range) = joint_limits.get(joint) {
                if !range.contains(*value) {
                    return Err(SchemaError::DefaultOutOfRange {
                        robot,
                        joint: joint.clone(),
                        value: *value,
                        lower: range.lower,
                        upper: range.upper,
                    });
                }
            }
        }

        for (joint, cfg) in &actuators {
            if !(cfg.velocity_limit.is_finite() && cfg.velocity_limit > 0.0) {
                return Err(SchemaError::InvalidVelocityLimit {
                    robot,
                    joint: joint.clone(),
                    value: cfg.velocity_limit,
                });
            }
            if let Some(torque) = cfg.torque_limit {
                if !(torque.is_finite() && torque > 0.0) {
                    return Err(SchemaError::InvalidTorqueLimit {
                        robot,
                        joint: joint.clone(),
                        value: torque,
                    });
                }
            }
            if !(cfg.stiffness.is_finite() && cfg.stiffness >= 0.0) {
                return Err(SchemaError::InvalidGain {
                    robot,
                    joint: joint.clone(),
                    gain: "stiffness",
                    value: cfg.stiffness,
                });
            }
            if !(cfg.damping.is_finite() && cfg.damping >= 0.0) {
                return Err(SchemaError::InvalidGain {
                    robot,
                    joint: joint.clone(),
                    gain: "damping",
                    value: cfg.damping,
                });
            }
        }

        match (&spec.gripper_open_q, &spec.gripper_close_q) {
            (None, None) => {}
            (open, close) => {
                let open_len = open.as_ref().map_or(0, Vec::len);
                let close_len = close.as_ref().map_or(0, Vec::len);
                if open_len != close_len || open_len == 0 {
                    return Err(SchemaError::GripperPoseMismatch {
                        robot,
                        open_len,
                        close_len,
                    });
                }
                if !actuators.values().any(|cfg| cfg.is_ee) {
                    return Err(SchemaError::GripperWithoutEndEffector { robot });
                }
            }
        }

        Ok(Self {
            name: robot,
            num_joints: spec.num_joints,
            fix_base_link: spec.fix_base_link,
            usd_path: spec.usd_path,
            urdf_path: spec.urdf_path,
            mjcf_path: spec.mjcf_path,
            enabled_gravity: spec.enabled_gravity,
            enabled_self_collisions: spec.enabled_self_collisions,
            ee_body_name: spec.ee_body_name,
            joint_order,
            actuators,
            joint_limits,
            default_joint_positions,
            control_type,
            mimic_joints,
            gripper_open_q: spec.gripper_open_q,
            gripper_close_q: spec.gripper_close_q,
        })
    }
}

impl RobotDescriptor {
    /// Unique robot identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of independently actuated joints.
    #[must_use]
    pub fn num_joints(&self) -> usize {
        self.num_joints
    }

    /// Whether the base link is fixed to the world.
    #[must_use]
    pub fn fix_base_link(&self) -> bool {
        self.fix_base_link
    }

    /// USD scene description, when available.
    #[must_use]
    pub fn usd_path(&self) -> Option<&PathBuf> {
        self.usd_path.as_ref()
    }

    /// URDF description, when available.
    #[must_use]
    pub fn urdf_path(&self) -> Option<&PathBuf> {
        self.urdf_path.as_ref()
    }

    /// MJCF description, when available.
    #[must_use]
    pub fn mjcf_path(&self) -> Option<&PathBuf> {
        self.mjcf_path.as_ref()
    }

    /// Whether gravity acts on this robot.
    #[must_use]
    pub fn enabled_gravity(&self) -> bool {
        self.enabled_gravity
    }

    /// Whether self-collisions are simulated.
    #[must_use]
    pub fn enabled_self_collisions(&self) -> bool {
        self.enabled_self_collisions
    }

    /// Kinematic link treated as the end-effector frame.
    #[must_use]
    pub fn ee_body_name(&self) -> &str {
        &self.ee_body_name
    }

    /// Actuated joint names in canonical order.
    ///
    /// The order is the declaration order of the control-type table and is
    /// stable for the lifetime of the descriptor; callers zip it against
    /// externally-produced joint-value vectors.
    #[must_use]
    pub fn joint_names(&self) -> &[String] {
        &self.joint_order
    }

    /// `(lower, upper)` limit pairs aligned with [`Self::joint_names`].
    #[must_use]
    pub fn limits_as_pairs(&self) -> Vec<(f64, f64)> {
        self.joint_order
            .iter()
            .filter_map(|joint| self.joint_limits.get(joint).map(JointRange::as_pair))
            .collect()
    }

    /// Position limits for one joint (mimic joints included).
    pub fn joint_range(&self, joint: &str) -> Result<&JointRange, UnknownJointError> {
        self.joint_limits
            .get(joint)
            .ok_or_else(|| UnknownJointError(joint.to_string()))
    }

    /// Actuator parameters for one actuated joint.
    pub fn actuator(&self, joint: &str) -> Result<&ActuatorCfg, UnknownJointError> {
        self.actuators
            .get(joint)
            .ok_or_else(|| UnknownJointError(joint.to_string()))
    }

    /// Control mode for one actuated joint.
    pub fn control_mode(&self, joint: &str) -> Result<ControlMode, UnknownJointError> {
        self.control_type
            .get(joint)
            .copied()
            .ok_or_else(|| UnknownJointError(joint.to_string()))
    }

    /// Default position for one actuated joint.
    pub fn default_position(&self, joint: &str) -> Result<f64, UnknownJointError> {
        self.default_joint_positions
            .get(joint)
            .copied()
            .ok_or_else(|| UnknownJointError(joint.to_string()))
    }

    /// Default positions aligned with [`Self::joint_names`].
    #[must_use]
    pub fn default_pose(&self) -> Vec<f64> {
        self.joint_order
            .iter()
            .filter_map(|joint| self.default_joint_positions.get(joint).copied())
            .collect()
    }

    /// True iff the joint's actuator carries the end-effector flag.
    #[must_use]
    pub fn is_gripper_joint(&self, joint: &str) -> bool {
        self.actuators.get(joint).is_some_and(|cfg| cfg.is_ee)
    }

    /// Limits-only joints mirrored by some actuated joint (not sampled).
    #[must_use]
    pub fn mimic_joints(&self) -> &[String] {
        &self.mimic_joints
    }

    /// Fully-open gripper pose, when the robot has a gripper.
    #[must_use]
    pub fn gripper_open_q(&self) -> Option<&[f64]> {
        self.gripper_open_q.as_deref()
    }

    /// Fully-closed gripper pose, when the robot has a gripper.
    #[must_use]
    pub fn gripper_close_q(&self) -> Option<&[f64]> {
        self.gripper_close_q.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    /// Three joints whose declaration order differs from alphabetical order,
    /// so ordering bugs cannot hide behind sorted maps.
    fn arm_spec() -> RobotSpec {
        RobotSpec {
            name: "test_arm".into(),
            num_joints: 3,
            fix_base_link: true,
            mjcf_path: Some(PathBuf::from("assets/test_arm.xml")),
            ee_body_name: "tool0".into(),
            actuators: vec![
                ("shoulder".into(), ActuatorCfg::new(2.175).with_gains(1e5, 1e4)),
                ("elbow".into(), ActuatorCfg::new(2.175)),
                ("gripper".into(), ActuatorCfg::new(0.2).end_effector()),
            ],
            joint_limits: vec![
                ("shoulder".into(), JointRange::new(-2.618, 2.618)),
                ("elbow".into(), JointRange::new(-2.697, 0.0)),
                ("gripper".into(), JointRange::new(0.0, 0.044)),
                ("finger_mirror".into(), JointRange::new(-0.044, 0.0)),
            ],
            default_joint_positions: vec![
                ("shoulder".into(), 0.0),
                ("elbow".into(), -0.785),
                ("gripper".into(), 0.044),
            ],
            control_type: vec![
                ("shoulder".into(), ControlMode::Position),
                ("elbow".into(), ControlMode::Position),
                ("gripper".into(), ControlMode::Position),
            ],
            gripper_open_q: Some(vec![0.044, 0.044]),
            gripper_close_q: Some(vec![0.0, 0.0]),
            ..RobotSpec::default()
        }
    }

    #[test]
    fn valid_spec_builds() {
        let robot = RobotDescriptor::try_from(arm_spec()).expect("should validate");

        assert_eq!(robot.name(), "test_arm");
        assert_eq!(robot.num_joints(), 3);
        assert!(robot.fix_base_link());
        assert_eq!(robot.ee_body_name(), "tool0");
        assert_eq!(robot.mimic_joints(), ["finger_mirror"]);
        assert_eq!(robot.gripper_open_q(), Some(&[0.044, 0.044][..]));
    }

    #[test]
    fn joint_order_is_declaration_order() {
        let robot = RobotDescriptor::try_from(arm_spec()).expect("should validate");

        // "shoulder" > "elbow" > "gripper" alphabetically would reorder; the
        // descriptor must keep declaration order instead.
        assert_eq!(robot.joint_names(), ["shoulder", "elbow", "gripper"]);
        assert_eq!(
            robot.limits_as_pairs(),
            [(-2.618, 2.618), (-2.697, 0.0), (0.0, 0.044)]
        );
        assert_eq!(robot.default_pose(), [0.0, -0.785, 0.044]);

        // Stable across repeated calls on the same instance.
        let first: Vec<String> = robot.joint_names().to_vec();
        assert_eq!(robot.joint_names(), first.as_slice());
    }

    #[test]
    fn accessors() {
        let robot = RobotDescriptor::try_from(arm_spec()).expect("should validate");

        assert_eq!(robot.actuator("shoulder").unwrap().stiffness, 1e5);
        assert_eq!(
            robot.control_mode("elbow").unwrap(),
            ControlMode::Position
        );
        assert_eq!(robot.default_position("gripper").unwrap(), 0.044);
        assert_eq!(robot.joint_range("finger_mirror").unwrap().lower, -0.044);

        assert!(robot.is_gripper_joint("gripper"));
        assert!(!robot.is_gripper_joint("shoulder"));
        assert!(!robot.is_gripper_joint("no_such_joint"));

        let err = robot.actuator("wrist_9").unwrap_err();
        assert_eq!(err, UnknownJointError("wrist_9".into()));
    }

    #[test]
    fn rejects_empty_name() {
        let spec = RobotSpec {
            name: String::new(),
            ..arm_spec()
        };
        assert_eq!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::EmptyName
        );
    }

    #[test]
    fn rejects_missing_actuator() {
        let mut spec = arm_spec();
        spec.actuators.retain(|(joint, _)| joint != "elbow");
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::KeySetMismatch { joint, missing: "actuators", .. } if joint == "elbow"
        ));
    }

    #[test]
    fn rejects_actuator_without_control_type() {
        let mut spec = arm_spec();
        spec.actuators
            .push(("extra".into(), ActuatorCfg::new(1.0)));
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::KeySetMismatch { joint, missing: "control_type", .. } if joint == "extra"
        ));
    }

    #[test]
    fn rejects_missing_limits() {
        let mut spec = arm_spec();
        spec.joint_limits.retain(|(joint, _)| joint != "gripper");
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::KeySetMismatch { joint, missing: "joint_limits", .. } if joint == "gripper"
        ));
    }

    #[test]
    fn rejects_duplicate_joint() {
        let mut spec = arm_spec();
        spec.control_type
            .push(("elbow".into(), ControlMode::Effort));
        spec.num_joints = 4;
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::DuplicateJoint { joint, table: "control_type", .. } if joint == "elbow"
        ));
    }

    #[test]
    fn rejects_joint_count_mismatch() {
        let mut spec = arm_spec();
        spec.num_joints = 8;
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::JointCountMismatch { declared: 8, actuated: 3, .. }
        ));
    }

    #[test]
    fn rejects_empty_joint_set() {
        let spec = RobotSpec {
            name: "ghost".into(),
            ..RobotSpec::default()
        };
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::NoJoints { .. }
        ));
    }

    #[test]
    fn rejects_inverted_limits() {
        let mut spec = arm_spec();
        spec.joint_limits[0].1 = JointRange::new(1.0, -1.0);
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::InvalidLimits { .. }
        ));
    }

    #[test]
    fn rejects_unbounded_limits() {
        let mut spec = arm_spec();
        spec.joint_limits[0].1 = JointRange::new(f64::NEG_INFINITY, f64::INFINITY);
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::InvalidLimits { .. }
        ));
    }

    #[test]
    fn rejects_default_out_of_range() {
        let mut spec = arm_spec();
        spec.default_joint_positions[1] = ("elbow".into(), 1.5);
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::DefaultOutOfRange { joint, .. } if joint == "elbow"
        ));
    }

    #[test]
    fn rejects_non_positive_velocity_limit() {
        let mut spec = arm_spec();
        spec.actuators[0].1 = ActuatorCfg::new(0.0);
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::InvalidVelocityLimit { value, .. } if value == 0.0
        ));
    }

    #[test]
    fn rejects_non_positive_torque_limit() {
        let mut spec = arm_spec();
        spec.actuators[0].1 = ActuatorCfg::new(1.0).with_torque_limit(-5.0);
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::InvalidTorqueLimit { value, .. } if value == -5.0
        ));
    }

    #[test]
    fn rejects_negative_gain() {
        let mut spec = arm_spec();
        spec.actuators[0].1 = ActuatorCfg::new(1.0).with_gains(-1.0, 0.0);
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::InvalidGain { gain: "stiffness", .. }
        ));
    }

    #[test]
    fn rejects_gripper_pose_length_mismatch() {
        let mut spec = arm_spec();
        spec.gripper_close_q = Some(vec![0.0]);
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::GripperPoseMismatch { open_len: 2, close_len: 1, .. }
        ));
    }

    #[test]
    fn rejects_lone_gripper_pose() {
        let mut spec = arm_spec();
        spec.gripper_close_q = None;
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::GripperPoseMismatch { close_len: 0, .. }
        ));
    }

    #[test]
    fn rejects_gripper_pose_without_ee_actuator() {
        let mut spec = arm_spec();
        spec.actuators[2].1 = ActuatorCfg::new(0.2); // is_ee cleared
        assert!(matches!(
            RobotDescriptor::try_from(spec).unwrap_err(),
            SchemaError::GripperWithoutEndEffector { .. }
        ));
    }

    #[test]
    fn gripperless_robot_is_fine() {
        let mut spec = arm_spec();
        spec.gripper_open_q = None;
        spec.gripper_close_q = None;
        spec.actuators[2].1 = ActuatorCfg::new(0.2);
        let robot = RobotDescriptor::try_from(spec).expect("should validate");
        assert!(robot.gripper_open_q().is_none());
    }
}
