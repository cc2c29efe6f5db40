//! Koch v1.1 low-cost robot arm, 6-DOF with a single-servo pinch gripper.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the Koch v1.1 arm.
#[must_use]
pub fn koch() -> RobotSpec {
    RobotSpec {
        name: "koch_1".into(),
        num_joints: 6,
        fix_base_link: true,
        mjcf_path: Some(PathBuf::from(
            "roboverse_data/robots/Koch_v1.1_Low-Cost_Robot/mjcf/low_cost_robot_arm.xml",
        )),
        enabled_gravity: false,
        enabled_self_collisions: false,
        ee_body_name: "tool0".into(),
        actuators: vec![
            ("base_rotation".into(), ActuatorCfg::new(2.175)),
            ("pitch".into(), ActuatorCfg::new(2.175)),
            ("elbow".into(), ActuatorCfg::new(2.175)),
            ("wrist_pitch".into(), ActuatorCfg::new(2.175)),
            ("wrist_roll".into(), ActuatorCfg::new(2.61)),
            ("gripper".into(), ActuatorCfg::new(0.2).end_effector()),
        ],
        joint_limits: vec![
            ("base_rotation".into(), JointRange::new(-2.618, 2.618)),
            ("pitch".into(), JointRange::new(-2.059, 2.0944)),
            ("elbow".into(), JointRange::new(-2.697, 0.0)),
            ("wrist_pitch".into(), JointRange::new(-0.19198, 3.927)),
            ("wrist_roll".into(), JointRange::new(-1.22, 1.22)),
            ("gripper".into(), JointRange::new(0.0, 0.035)),
        ],
        default_joint_positions: vec![
            ("base_rotation".into(), 0.0),
            ("pitch".into(), -0.785398),
            ("elbow".into(), 0.0),
            // Vendor home pose pitches past the modeled stop; clamped to it.
            ("wrist_pitch".into(), -0.19198),
            ("wrist_roll".into(), 0.0),
            ("gripper".into(), 0.0),
        ],
        control_type: vec![
            ("base_rotation".into(), ControlMode::Position),
            ("pitch".into(), ControlMode::Position),
            ("elbow".into(), ControlMode::Position),
            ("wrist_pitch".into(), ControlMode::Position),
            ("wrist_roll".into(), ControlMode::Position),
            ("gripper".into(), ControlMode::Position),
        ],
        // Two mirrored finger pads driven by one servo.
        gripper_open_q: Some(vec![0.035, 0.035]),
        gripper_close_q: Some(vec![0.0, 0.0]),
        ..RobotSpec::default()
    }
}
