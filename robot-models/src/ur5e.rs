//! Universal Robots UR5e.
//!
//! 6-DOF industrial arm with medium payload capacity, widely used for
//! collaborative applications and automation tasks.

use std::path::PathBuf;

use robot_types::{ActuatorCfg, ControlMode, JointRange, RobotSpec};

/// Declaration for the Universal Robots UR5e.
#[must_use]
pub fn ur5e() -> RobotSpec {
    RobotSpec {
        name: "ur5e".into(),
        num_joints: 6,
        fix_base_link: true,
        usd_path: Some(PathBuf::from(
            "roboverse_data/robots/Universal_Robots_UR5e/usd/ur5e.usd",
        )),
        urdf_path: Some(PathBuf::from(
            "roboverse_data/robots/Universal_Robots_UR5e/urdf/ur_description/urdf/ur5e.urdf",
        )),
        mjcf_path: Some(PathBuf::from(
            "roboverse_data/robots/Universal_Robots_UR5e/mjcf/ur5e.xml",
        )),
        enabled_gravity: false,
        enabled_self_collisions: false,
        ee_body_name: "tool0".into(),
        actuators: vec![
            ("shoulder_pan_joint".into(), ActuatorCfg::new(3.15).with_gains(1e5, 1e4)),
            ("shoulder_lift_joint".into(), ActuatorCfg::new(3.15).with_gains(1e5, 1e4)),
            ("elbow_joint".into(), ActuatorCfg::new(3.15).with_gains(1e5, 5e3)),
            ("wrist_1_joint".into(), ActuatorCfg::new(6.28).with_gains(1e5, 1e4)),
            ("wrist_2_joint".into(), ActuatorCfg::new(6.28).with_gains(400.0, 50.0)),
            ("wrist_3_joint".into(), ActuatorCfg::new(6.28).with_gains(250.0, 50.0)),
        ],
        // Actual UR5e joint limits (radians).
        joint_limits: vec![
            ("shoulder_pan_joint".into(), JointRange::new(-6.28318, 6.28318)),
            ("shoulder_lift_joint".into(), JointRange::new(-6.28318, 6.28318)),
            ("elbow_joint".into(), JointRange::new(-3.14159, 3.14159)),
            ("wrist_1_joint".into(), JointRange::new(-6.28318, 6.28318)),
            ("wrist_2_joint".into(), JointRange::new(-6.28318, 6.28318)),
            ("wrist_3_joint".into(), JointRange::new(-6.28318, 6.28318)),
        ],
        // Standard home position: shoulder lift and wrist 1 at -90 degrees.
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
        // No gripper on the bare UR5e.
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
    fn ur5e_table() {
        let robot = RobotDescriptor::try_from(ur5e()).expect("should validate");

        assert_eq!(robot.num_joints(), 6);
        assert_eq!(robot.joint_names()[0], "shoulder_pan_joint");
        assert_eq!(robot.ee_body_name(), "tool0");
        assert_eq!(robot.actuator("elbow_joint").unwrap().damping, 5e3);
        assert!(robot.mimic_joints().is_empty());
        assert!(robot.gripper_open_q().is_none());
    }
}
