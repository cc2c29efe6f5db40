//! YAM ("Yet Another Manipulator"), 6-DOF arm plus one gripper finger joint.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the YAM arm.
#[must_use]
pub fn yam() -> RobotSpec {
    RobotSpec {
        name: "yam".into(),
        num_joints: 7,
        fix_base_link: true,
        mjcf_path: Some(PathBuf::from(
            "roboverse_data/robots/Yet_Another_Manipulator_YAM/mjcf/yam.xml",
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
            ("left_finger".into(), ActuatorCfg::new(0.2).end_effector()),
        ],
        joint_limits: vec![
            ("joint1".into(), JointRange::new(-2.61799, 3.05433)),
            ("joint2".into(), JointRange::new(0.0, 3.66519)),
            ("joint3".into(), JointRange::new(0.0, 3.66519)),
            ("joint4".into(), JointRange::new(-1.5708, 1.5708)),
            ("joint5".into(), JointRange::new(-1.5708, 1.5708)),
            ("joint6".into(), JointRange::new(-2.0944, 2.0944)),
            ("left_finger".into(), JointRange::new(-0.00205, 0.037524)),
        ],
        // Vendor home pose values outside the modeled stops are clamped.
        default_joint_positions: vec![
            ("joint1".into(), 0.0),
            ("joint2".into(), 0.0),
            ("joint3".into(), 0.0),
            ("joint4".into(), -1.5708),
            ("joint5".into(), 0.0),
            ("joint6".into(), 1.570796),
            ("left_finger".into(), 0.0),
        ],
        control_type: vec![
            ("joint1".into(), ControlMode::Position),
            ("joint2".into(), ControlMode::Position),
            ("joint3".into(), ControlMode::Position),
            ("joint4".into(), ControlMode::Position),
            ("joint5".into(), ControlMode::Position),
            ("joint6".into(), ControlMode::Position),
            ("left_finger".into(), ControlMode::Position),
        ],
        gripper_open_q: Some(vec![0.037524, 0.037524]),
        gripper_close_q: Some(vec![-0.00205, -0.00205]),
        ..RobotSpec::default()
    }
}
