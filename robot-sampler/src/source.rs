//! Action sources: where a control loop gets its next batch from.

use std::sync::Arc;

use robot_types::{ActionBatch, RobotDescriptor};

use crate::sampler::{ActionSampler, EmptyRobotError};

/// Produces one action batch per control iteration.
///
/// The rollout driver is generic over this trait so that tests can substitute
/// a scripted source for the random sampler.
pub trait ActionSource {
    /// Produce the next batch of actions for `num_envs` replicas.
    fn next_batch(&mut self, num_envs: usize) -> Result<ActionBatch, EmptyRobotError>;
}

/// Random targets for one robot: a descriptor paired with a sampler.
#[derive(Debug, Clone)]
pub struct RandomActionSource {
    robot: Arc<RobotDescriptor>,
    sampler: ActionSampler,
}

impl RandomActionSource {
    /// Create a source drawing random targets for the given robot.
    #[must_use]
    pub fn new(robot: Arc<RobotDescriptor>, sampler: ActionSampler) -> Self {
        Self { robot, sampler }
    }

    /// The robot this source samples for.
    #[must_use]
    pub fn robot(&self) -> &RobotDescriptor {
        &self.robot
    }
}

impl ActionSource for RandomActionSource {
    fn next_batch(&mut self, num_envs: usize) -> Result<ActionBatch, EmptyRobotError> {
        self.sampler.sample_batch(&self.robot, num_envs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use robot_types::RobotDescriptor;

    #[test]
    fn random_source_samples_its_robot() {
        let robot = Arc::new(
            RobotDescriptor::try_from(robot_models::ur5e::ur5e()).expect("should validate"),
        );
        let mut source =
            RandomActionSource::new(Arc::clone(&robot), ActionSampler::with_seed(17));

        let batch = source.next_batch(3).unwrap();
        assert_eq!(batch.num_envs(), 3);
        assert_eq!(batch.num_joints(), 6);
        assert!(batch.actions[0].contains_key("ur5e"));

        // Successive batches advance the RNG stream.
        let next = source.next_batch(3).unwrap();
        assert_ne!(batch.targets, next.targets);
    }
}
