//! Siasun SO-ARM100, 6-DOF hobby-class arm with an integrated jaw.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the SO-ARM100.
#[must_use]
pub fn so_arm100() -> RobotSpec {
    RobotSpec {
        name: "so_arm100".into(),
        num_joints: 6,
        fix_base_link: true,
        mjcf_path: Some(PathBuf::from(
            "roboverse_data/robots/Siasun_SO-ARM100/mjcf/so_arm100.xml",
        )),
        enabled_gravity: false,
        enabled_self_collisions: false,
        ee_body_name: "tool0".into(),
        actuators: vec![
            ("Rotation".into(), ActuatorCfg::new(2.175)),
            ("Pitch".into(), ActuatorCfg::new(2.175)),
            ("Elbow".into(), ActuatorCfg::new(2.175)),
            ("Wrist_Pitch".into(), ActuatorCfg::new(2.175)),
            ("Wrist_Roll".into(), ActuatorCfg::new(2.61)),
            ("Jaw".into(), ActuatorCfg::new(2.61)),
        ],
        joint_limits: vec![
            ("Rotation".into(), JointRange::new(-2.618, 2.618)),
            ("Pitch".into(), JointRange::new(-2.059, 2.0944)),
            ("Elbow".into(), JointRange::new(-2.697, 0.0)),
            ("Wrist_Pitch".into(), JointRange::new(-0.19198, 3.927)),
            ("Wrist_Roll".into(), JointRange::new(-1.22, 1.22)),
            ("Jaw".into(), JointRange::new(-1.69297, 3.14159)),
        ],
        default_joint_positions: vec![
            ("Rotation".into(), 0.0),
            ("Pitch".into(), -0.785398),
            ("Elbow".into(), 0.0),
            // Vendor home pose pitches past the modeled stop; clamped to it.
            ("Wrist_Pitch".into(), -0.19198),
            ("Wrist_Roll".into(), 0.0),
            ("Jaw".into(), 1.570796),
        ],
        control_type: vec![
            ("Rotation".into(), ControlMode::Position),
            ("Pitch".into(), ControlMode::Position),
            ("Elbow".into(), ControlMode::Position),
            ("Wrist_Pitch".into(), ControlMode::Position),
            ("Wrist_Roll".into(), ControlMode::Position),
            ("Jaw".into(), ControlMode::Position),
        ],
        gripper_open_q: None,
        gripper_close_q: None,
        ..RobotSpec::default()
    }
}
