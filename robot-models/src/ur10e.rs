//! Universal Robots UR10e.
//!
//! 6-DOF industrial arm with higher payload capacity than the UR5e, designed
//! for heavy-duty applications. Stiffer gains to match the larger payload.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the Universal Robots UR10e.
#[must_use]
pub fn ur10e() -> RobotSpec {
    RobotSpec {
        name: "ur10e".into(),
        num_joints: 6,
        fix_base_link: true,
        usd_path: Some(PathBuf::from(
            "roboverse_data/robots/Universal_Robots_UR10e/usd/ur10e.usd",
        )),
        urdf_path: Some(PathBuf::from(
            "roboverse_data/robots/Universal_Robots_UR10e/urdf/ur_description/urdf/ur10e.urdf",
        )),
        mjcf_path: Some(PathBuf::from(
            "roboverse_data/robots/Universal_Robots_UR10e/mjcf/ur10e.xml",
        )),
        enabled_gravity: false,
        enabled_self_collisions: false,
        ee_body_name: "tool0".into(),
        actuators: vec![
            ("shoulder_pan_joint".into(), ActuatorCfg::new(2.094).with_gains(2e5, 2e4)),
            ("shoulder_lift_joint".into(), ActuatorCfg::new(2.094).with_gains(2e5, 2e4)),
            ("elbow_joint".into(), ActuatorCfg::new(3.142).with_gains(1.5e5, 1e4)),
            ("wrist_1_joint".into(), ActuatorCfg::new(6.283).with_gains(1e5, 8e3)),
            ("wrist_2_joint".into(), ActuatorCfg::new(6.283).with_gains(8e4, 6e3)),
            ("wrist_3_joint".into(), ActuatorCfg::new(6.283).with_gains(5e4, 4e3)),
        ],
        // Same joint ranges as the rest of the UR series (radians).
        joint_limits: vec![
            ("shoulder_pan_joint".into(), JointRange::new(-6.28318, 6.28318)),
            ("shoulder_lift_joint".into(), JointRange::new(-6.28318, 6.28318)),
            ("elbow_joint".into(), JointRange::new(-3.14159, 3.14159)),
            ("wrist_1_joint".into(), JointRange::new(-6.28318, 6.28318)),
            ("wrist_2_joint".into(), JointRange::new(-6.28318, 6.28318)),
            ("wrist_3_joint".into(), JointRange::new(-6.28318, 6.28318)),
        ],
        default_joint_positions: vec![
            ("shoulder_pan_joint".into(), 0.0),
            ("shoulder_lift_joint".into(), -1.5708),
            ("elbow_joint".into(), 0.0),
            ("wrist_1_joint".into(), -1.5708),
            ("wrist_2_joint".into(), 0.0),
            ("wrist_3_joint".into(), 0.0),
        ],
        control_type: vec![
            ("shoulder_pan_joint".into(), ControlMode::Position),
            ("shoulder_lift_joint".into(), ControlMode::Position),
            ("elbow_joint".into(), ControlMode::Position),
            ("wrist_1_joint".into(), ControlMode::Position),
            ("wrist_2_joint".into(), ControlMode::Position),
            ("wrist_3_joint".into(), ControlMode::Position),
        ],
        gripper_open_q: None,
        gripper_close_q: None,
    }
}
