//! This module is used for tests.
use crate::record::{Record, RecordValue};
use crate::util::{goal_distance, goal_distances};
use crate::{
    BatchGoalDict, BatchGoalRewardEnv, GoalDict, GoalEnv, GoalEnvConfig, GoalKey, RewardType,
};
use log::debug;
use ndarray::{array, Array1, Array2};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Side length of the square the point and its goals live in.
const BOUND: f32 = 1.0;

/// A 2-D point that moves by its action, clamped to a square.
///
/// Deterministic for a given seed, which makes it suitable for testing the
/// goal-sampling and reward contracts.
pub struct PointGoalEnv {
    config: GoalEnvConfig,
    position: Array1<f32>,
    state_goal: Array1<f32>,
    rng: StdRng,
}

impl PointGoalEnv {
    /// Builds the environment with a given random seed.
    pub fn new(config: GoalEnvConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let state_goal = array![
            rng.gen_range(-BOUND..BOUND),
            rng.gen_range(-BOUND..BOUND)
        ];
        Self {
            config,
            position: Array1::zeros(2),
            state_goal,
            rng,
        }
    }

    /// Moves the point back to the origin, replaces the desired goal and
    /// returns the initial observation.
    pub fn reset(&mut self) -> GoalDict {
        self.position = Array1::zeros(2);
        self.state_goal = self.sample_position();
        debug!("reset: goal = {:?}", self.state_goal);
        self.observe()
    }

    /// Advances the simulation. Call before [`GoalEnv::step`].
    pub fn simulate(&mut self, act: &Array1<f32>) {
        self.position = (&self.position + act).mapv(|x| x.clamp(-BOUND, BOUND));
    }

    fn sample_position(&mut self) -> Array1<f32> {
        array![
            self.rng.gen_range(-BOUND..BOUND),
            self.rng.gen_range(-BOUND..BOUND)
        ]
    }
}

impl GoalEnv for PointGoalEnv {
    type Act = Array1<f32>;

    fn config(&self) -> &GoalEnvConfig {
        &self.config
    }

    fn state_goal(&self) -> &Array1<f32> {
        &self.state_goal
    }

    fn observe(&self) -> GoalDict {
        GoalDict::from_slice(&[
            (GoalKey::Observation, self.position.clone()),
            (GoalKey::AchievedGoal, self.position.clone()),
            (GoalKey::DesiredGoal, self.state_goal.clone()),
        ])
    }

    fn get_goal(&self) -> GoalDict {
        GoalDict::from_slice(&[
            (GoalKey::DesiredGoal, self.state_goal.clone()),
            (GoalKey::StateDesiredGoal, self.state_goal.clone()),
        ])
    }

    fn sample_goals(&mut self, batch_size: usize) -> BatchGoalDict {
        let mut goals = Array2::zeros((batch_size, 2));
        for i in 0..batch_size {
            let g = self.sample_position();
            goals.row_mut(i).assign(&g);
        }
        BatchGoalDict::from_slice(&[
            (GoalKey::DesiredGoal, goals.clone()),
            (GoalKey::StateDesiredGoal, goals),
        ])
    }

    fn get_diagnostics(&self) -> Record {
        Record::from_slice(&[(
            "final_distance",
            RecordValue::Scalar(goal_distance(&self.position, &self.state_goal)),
        )])
    }
}

impl BatchGoalRewardEnv for PointGoalEnv {
    fn compute_rewards(&self, _actions: &Array2<f32>, obs: &BatchGoalDict) -> Array1<f32> {
        let achieved = obs
            .get(GoalKey::AchievedGoal)
            .expect("observation batch does not contain achieved goals");
        let desired = obs
            .get(GoalKey::DesiredGoal)
            .expect("observation batch does not contain desired goals");
        let d = goal_distances(achieved, desired);
        match self.config.reward_type {
            RewardType::Sparse => d.mapv(|d| {
                if d > self.config.distance_threshold {
                    -1.0
                } else {
                    0.0
                }
            }),
            RewardType::Dense => -d,
        }
    }
}
