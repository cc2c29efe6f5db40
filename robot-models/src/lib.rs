//! Built-in robot declarations.
//!
//! One module per robot model; each exports a single function producing the
//! raw [`RobotSpec`] data table. The tables carry real hardware values
//! (joint limits in radians, velocity limits in rad/s, PD gains matched to
//! the vendor model files) and are validated into
//! [`robot_types::RobotDescriptor`]s by the registry.

#![deny(clippy::unwrap_used, clippy::expect_used)]

use robot_types::RobotSpec;

pub mod arx_l5;
pub mod gen3;
pub mod iiwa14;
pub mod koch;
pub mod lite6;
pub mod so_arm100;
pub mod ur10e;
pub mod ur5e;
pub mod yam;
pub mod z1;

/// Constructor for one robot declaration.
pub type SpecFn = fn() -> RobotSpec;

/// Every built-in robot, keyed by its descriptor name.
pub const BUILTIN: &[(&str, SpecFn)] = &[
    ("arx_l5", arx_l5::arx_l5),
    ("gen3", gen3::gen3),
    ("iiwa14", iiwa14::iiwa14),
    ("koch_1", koch::koch),
    ("lite6", lite6::lite6),
    ("so_arm100", so_arm100::so_arm100),
    ("ur10e", ur10e::ur10e),
    ("ur5e", ur5e::ur5e),
    ("yam", yam::yam),
    ("z1", z1::z1),
];

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use robot_types::RobotDescriptor;

    #[test]
    fn every_builtin_validates() {
        for (name, construct) in BUILTIN {
            let spec = construct();
            assert_eq!(spec.name, *name, "table key must match declared name");
            let robot = RobotDescriptor::try_from(spec)
                .unwrap_or_else(|err| panic!("{name}: {err}"));
            assert_eq!(robot.num_joints(), robot.joint_names().len());
        }
    }

    #[test]
    fn builtin_names_are_unique() {
        let mut names: Vec<&str> = BUILTIN.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN.len());
    }

    #[test]
    fn defaults_lie_within_limits() {
        for (name, construct) in BUILTIN {
            let robot = RobotDescriptor::try_from(construct()).unwrap();
            let limits = robot.limits_as_pairs();
            for (position, (lower, upper)) in robot.default_pose().iter().zip(&limits) {
                assert!(
                    *position >= *lower && *position <= *upper,
                    "{name}: default {position} outside [{lower}, {upper}]"
                );
            }
        }
    }

    #[test]
    fn velocity_limits_are_positive() {
        for (_, construct) in BUILTIN {
            let robot = RobotDescriptor::try_from(construct()).unwrap();
            for joint in robot.joint_names() {
                assert!(robot.actuator(joint).unwrap().velocity_limit > 0.0);
            }
        }
    }
}
