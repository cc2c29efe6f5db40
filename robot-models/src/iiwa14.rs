//! KUKA LBR IIWA 14 R820.
//!
//! 7-DOF lightweight arm designed for human-robot collaboration with a 14 kg
//! payload capacity. Gains follow the gainprm/bias settings of the vendor
//! MJCF default classes.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the KUKA LBR IIWA 14.
#[must_use]
pub fn iiwa14() -> RobotSpec {
    RobotSpec {
        name: "iiwa14".into(),
        num_joints: 7,
        fix_base_link: true,
        usd_path: Some(PathBuf::from(
            "roboverse_data/robots/KUKA_LBR_IIWA14/usd/iiwa.usd",
        )),
        urdf_path: Some(PathBuf::from(
            "roboverse_data/robots/KUKA_LBR_IIWA14/urdf/iiwa.urdf",
        )),
        mjcf_path: Some(PathBuf::from(
            "roboverse_data/robots/KUKA_LBR_IIWA14/mjcf/iiwa14.xml",
        )),
        enabled_gravity: false,
        enabled_self_collisions: false,
        ee_body_name: "link7".into(),
        actuators: vec![
            ("joint1".into(), ActuatorCfg::new(1.48).with_gains(2000.0, 200.0)),
            ("joint2".into(), ActuatorCfg::new(1.48).with_gains(2000.0, 200.0)),
            ("joint3".into(), ActuatorCfg::new(1.75).with_gains(2000.0, 200.0)),
            ("joint4".into(), ActuatorCfg::new(1.31).with_gains(2000.0, 200.0)),
            ("joint5".into(), ActuatorCfg::new(2.27).with_gains(2000.0, 200.0)),
            ("joint6".into(), ActuatorCfg::new(2.36).with_gains(2000.0, 200.0)),
            ("joint7".into(), ActuatorCfg::new(2.36).with_gains(2000.0, 200.0)),
        ],
        // Joint limits from the vendor MJCF (radians).
        joint_limits: vec![
            ("joint1".into(), JointRange::new(-2.96706, 2.96706)),
            ("joint2".into(), JointRange::new(-2.0944, 2.0944)),
            ("joint3".into(), JointRange::new(-3.05433, 3.05433)),
            ("joint4".into(), JointRange::new(-2.0944, 2.0944)),
            ("joint5".into(), JointRange::new(-2.96706, 2.96706)),
            ("joint6".into(), JointRange::new(-2.0944, 2.0944)),
            ("joint7".into(), JointRange::new(-3.05433, 3.05433)),
        ],
        // Home position from the MJCF keyframe.
        default_joint_positions: vec![
            ("joint1".into(), 0.0),
            ("joint2".into(), 0.785398),
            ("joint3".into(), 0.0),
            ("joint4".into(), -1.5708),
            ("joint5".into(), 0.0),
            ("joint6".into(), 0.0),
            ("joint7".into(), 0.0),
        ],
        control_type: vec![
            ("joint1".into(), ControlMode::Position),
            ("joint2".into(), ControlMode::Position),
            ("joint3".into(), ControlMode::Position),
            ("joint4".into(), ControlMode::Position),
            ("joint5".into(), ControlMode::Position),
            ("joint6".into(), ControlMode::Position),
            ("joint7".into(), ControlMode::Position),
        ],
        gripper_open_q: None,
        gripper_close_q: None,
    }
}
