//! ARX Robotics L5 arm, 7 actuated joints with a mirrored-finger gripper.
//!
//! The second finger (`joint8`) mechanically mirrors the driven `gripper`
//! joint, so it appears in the limits table only and is not independently
//! actuated.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the ARX L5.
#[must_use]
pub fn arx_l5() -> RobotSpec {
    RobotSpec {
        name: "arx_l5".into(),
        num_joints: 7,
        fix_base_link: true,
        mjcf_path: Some(PathBuf::from(
            "roboverse_data/robots/ARX_Robotics_L5_Arm/mjcf/arx_l5.xml",
        )),
        enabled_gravity: false,
        enabled_self_collisions: false,
        ee_body_name: "tool0".into(),
        actuators: vec![
            ("joint1".into(), ActuatorCfg::new(2.175).with_gains(1e5, 1e4)),
            ("joint2".into(), ActuatorCfg::new(2.175).with_gains(1e4, 1e3)),
            ("joint3".into(), ActuatorCfg::new(2.175).with_gains(1e5, 5e3)),
            ("joint4".into(), ActuatorCfg::new(2.175).with_gains(1e5, 1e4)),
            ("joint5".into(), ActuatorCfg::new(2.61).with_gains(400.0, 50.0)),
            ("joint6".into(), ActuatorCfg::new(2.61).with_gains(250.0, 50.0)),
            ("gripper".into(), ActuatorCfg::new(0.2).with_gains(1000.0, 100.0).end_effector()),
        ],
        joint_limits: vec![
            ("joint1".into(), JointRange::new(-3.14, 3.14)),
            ("joint2".into(), JointRange::new(0.0, 3.14)),
            ("joint3".into(), JointRange::new(0.0, 3.14)),
            ("joint4".into(), JointRange::new(-1.7, 1.7)),
            ("joint5".into(), JointRange::new(-1.7, 1.7)),
            ("joint6".into(), JointRange::new(-3.14, 3.14)),
            ("gripper".into(), JointRange::new(0.0, 0.044)),
            // Mirrored finger, driven through the gripper linkage.
            ("joint8".into(), JointRange::new(-0.044, 0.0)),
        ],
        // Vendor home pose values outside the modeled stops are clamped.
        default_joint_positions: vec![
            ("joint1".into(), 0.0),
            ("joint2".into(), 0.0),
            ("joint3".into(), 0.0),
            ("joint4".into(), -1.7),
            ("joint5".into(), 0.0),
            ("joint6".into(), 1.570796),
            ("gripper".into(), 0.044),
        ],
        control_type: vec![
            ("joint1".into(), ControlMode::Position),
            ("joint2".into(), ControlMode::Position),
            ("joint3".into(), ControlMode::Position),
            ("joint4".into(), ControlMode::Position),
            ("joint5".into(), ControlMode::Position),
            ("joint6".into(), ControlMode::Position),
            ("gripper".into(), ControlMode::Position),
        ],
        gripper_open_q: Some(vec![-0.044, 0.044]),
        gripper_close_q: Some(vec![0.0, 0.0]),
        ..RobotSpec::default()
    }
}
