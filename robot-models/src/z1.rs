//! Unitree Z1.
//!
//! 6-DOF lightweight research arm. Gains and torque caps from the vendor
//! MJCF; the shoulder joint carries the highest torque budget.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the Unitree Z1.
#[must_use]
pub fn z1() -> RobotSpec {
    RobotSpec {
        name: "z1".into(),
        num_joints: 6,
        fix_base_link: true,
        usd_path: Some(PathBuf::from(
            "roboverse_data/robots/Unitree_Z1_Robotic_Arm/usd/z1.usd",
        )),
        urdf_path: Some(PathBuf::from(
            "roboverse_data/robots/Unitree_Z1_Robotic_Arm/urdf/z1.urdf",
        )),
        mjcf_path: Some(PathBuf::from(
            "roboverse_data/robots/Unitree_Z1_Robotic_Arm/mjcf/z1.xml",
        )),
        enabled_gravity: false,
        enabled_self_collisions: false,
        ee_body_name: "link06".into(),
        actuators: vec![
            ("joint1".into(), ActuatorCfg::new(3.1415).with_gains(1000.0, 100.0).with_torque_limit(30.0)),
            // Higher torque for the shoulder.
            ("joint2".into(), ActuatorCfg::new(3.1415).with_gains(1500.0, 150.0).with_torque_limit(60.0)),
            ("joint3".into(), ActuatorCfg::new(3.1415).with_gains(1000.0, 100.0).with_torque_limit(30.0)),
            ("joint4".into(), ActuatorCfg::new(3.1415).with_gains(1000.0, 100.0).with_torque_limit(30.0)),
            ("joint5".into(), ActuatorCfg::new(3.1415).with_gains(1000.0, 100.0).with_torque_limit(30.0)),
            ("joint6".into(), ActuatorCfg::new(3.1415).with_gains(1000.0, 100.0).with_torque_limit(30.0)),
        ],
        joint_limits: vec![
            ("joint1".into(), JointRange::new(-2.61799, 2.61799)),
            ("joint2".into(), JointRange::new(0.0, 2.96706)),
            ("joint3".into(), JointRange::new(-2.87979, 0.0)),
            ("joint4".into(), JointRange::new(-1.51844, 1.51844)),
            ("joint5".into(), JointRange::new(-1.3439, 1.3439)),
            ("joint6".into(), JointRange::new(-2.79253, 2.79253)),
        ],
        default_joint_positions: vec![
            ("joint1".into(), 0.0),
            ("joint2".into(), 0.785),
            ("joint3".into(), -0.261),
            ("joint4".into(), -0.523),
            ("joint5".into(), 0.0),
            ("joint6".into(), 0.0),
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
    }
}
