//! Kinova Gen3.
//!
//! 7-DOF lightweight collaborative arm. Large actuators drive the main arm
//! joints, small actuators the wrist.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the Kinova Gen3.
#[must_use]
pub fn gen3() -> RobotSpec {
    RobotSpec {
        name: "gen3".into(),
        num_joints: 7,
        fix_base_link: true,
        usd_path: Some(PathBuf::from("roboverse_data/robots/Kinova_Gen3/usd/gen3.usd")),
        urdf_path: Some(PathBuf::from("roboverse_data/robots/Kinova_Gen3/urdf/gen3.urdf")),
        mjcf_path: Some(PathBuf::from("roboverse_data/robots/Kinova_Gen3/mjcf/gen3.xml")),
        enabled_gravity: false,
        enabled_self_collisions: false,
        ee_body_name: "bracelet_link".into(),
        actuators: vec![
            ("joint_1".into(), ActuatorCfg::new(1.3963).with_gains(2000.0, 100.0).with_torque_limit(105.0)),
            ("joint_2".into(), ActuatorCfg::new(1.3963).with_gains(2000.0, 100.0).with_torque_limit(105.0)),
            ("joint_3".into(), ActuatorCfg::new(1.3963).with_gains(2000.0, 100.0).with_torque_limit(105.0)),
            ("joint_4".into(), ActuatorCfg::new(1.3963).with_gains(2000.0, 100.0).with_torque_limit(105.0)),
            ("joint_5".into(), ActuatorCfg::new(1.2218).with_gains(500.0, 50.0).with_torque_limit(52.0)),
            ("joint_6".into(), ActuatorCfg::new(1.2218).with_gains(500.0, 50.0).with_torque_limit(52.0)),
            ("joint_7".into(), ActuatorCfg::new(1.2218).with_gains(500.0, 50.0).with_torque_limit(52.0)),
        ],
        // Odd-numbered joints are continuous; bounded here at one full turn
        // so that uniform target sampling stays well-defined.
        joint_limits: vec![
            ("joint_1".into(), JointRange::new(-6.28319, 6.28319)),
            ("joint_2".into(), JointRange::new(-2.41, 2.41)),
            ("joint_3".into(), JointRange::new(-6.28319, 6.28319)),
            ("joint_4".into(), JointRange::new(-2.66, 2.66)),
            ("joint_5".into(), JointRange::new(-6.28319, 6.28319)),
            ("joint_6".into(), JointRange::new(-2.23, 2.23)),
            ("joint_7".into(), JointRange::new(-6.28319, 6.28319)),
        ],
        // Home position from the MJCF keyframe.
        default_joint_positions: vec![
            ("joint_1".into(), 0.0),
            ("joint_2".into(), 0.262),
            ("joint_3".into(), 3.142),
            ("joint_4".into(), -2.269),
            ("joint_5".into(), 0.0),
            ("joint_6".into(), 0.960),
            ("joint_7".into(), 1.571),
        ],
        control_type: vec![
            ("joint_1".into(), ControlMode::Position),
            ("joint_2".into(), ControlMode::Position),
            ("joint_3".into(), ControlMode::Position),
            ("joint_4".into(), ControlMode::Position),
            ("joint_5".into(), ControlMode::Position),
            ("joint_6".into(), ControlMode::Position),
            ("joint_7".into(), ControlMode::Position),
        ],
        gripper_open_q: None,
        gripper_close_q: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use robot_types::RobotDescriptor;

    #[test]
    fn gen3_torque_limits() {
        let robot = RobotDescriptor::try_from(gen3()).expect("should validate");
        assert_eq!(robot.actuator("joint_1").unwrap().torque_limit, Some(105.0));
        assert_eq!(robot.actuator("joint_7").unwrap().torque_limit, Some(52.0));
    }
}
