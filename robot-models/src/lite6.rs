//! UFactory Lite6, 6-DOF desktop arm.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the UFactory Lite6.
#[must_use]
pub fn lite6() -> RobotSpec {
    RobotSpec {
        name: "lite6".into(),
        num_joints: 6,
        fix_base_link: true,
        mjcf_path: Some(PathBuf::from(
            "roboverse_data/robots/UFactory_Lite6/mjcf/lite6.xml",
        )),
        enabled_gravity: false,
        enabled_self_collisions: false,
        ee_body_name: "tool0".into(),
        actuators: vec![
            ("joint1".into(), ActuatorCfg::new(2.175)),
            ("joint2".into(), ActuatorCfg::new(2.175)),
            ("joint3".into(), ActuatorCfg::new(2.175)),
            ("joint4".into(), ActuatorCfg::new(2.175)),
            ("joint5".into(), ActuatorCfg::new(2.61)),
            ("joint6".into(), ActuatorCfg::new(2.61)),
        ],
        joint_limits: vec![
            ("joint1".into(), JointRange::new(-6.28319, 6.28319)),
            ("joint2".into(), JointRange::new(-2.61799, 2.61799)),
            ("joint3".into(), JointRange::new(-0.061087, 5.23599)),
            ("joint4".into(), JointRange::new(-6.28319, 6.28319)),
            ("joint5".into(), JointRange::new(-2.1642, 2.1642)),
            ("joint6".into(), JointRange::new(-6.28319, 6.28319)),
        ],
        default_joint_positions: vec![
            ("joint1".into(), 0.0),
            ("joint2".into(), -0.785398),
            ("joint3".into(), 0.0),
            ("joint4".into(), -2.356194),
            ("joint5".into(), 0.0),
            ("joint6".into(), 1.570796),
        ],
        control_type: vec![
            ("joint1".into(), ControlMode::Position),
            ("joint2".into(), ControlMode::Position),
            ("joint3".into(), ControlMode::Position),
            ("joint4".into(), ControlMode::Position),
            ("joint5".into(), ControlMode::Position),
            ("joint6".into(), ControlMode::Position),
        ],
        gripper_open_q: None,
        gripper_close_q: None,
        ..RobotSpec::default()
    }
}
