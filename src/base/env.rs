//! Environment interfaces.
use super::config::{GoalEnvConfig, RewardType};
use super::goal::{BatchGoalDict, GoalDict, GoalKey};
use super::step::{GoalInfo, GoalStep};
use super::Act;
use crate::record::{Record, RecordValue};
use crate::util::goal_distance;
use log::trace;
use ndarray::{Array1, Array2, Axis};

/// A goal-conditioned environment.
///
/// The reset/step loop and the simulation itself are owned by the caller;
/// this trait reads the environment's current observation, desired goal and
/// configuration and layers goal sampling, success detection and
/// distance-based rewards on top of them.
///
/// Implementors provide [`GoalEnv::get_goal`] and [`GoalEnv::sample_goals`];
/// the remaining methods have default implementations built on those.
pub trait GoalEnv {
    /// Action of the environment.
    type Act: Act;

    /// Reward and threshold configuration.
    fn config(&self) -> &GoalEnvConfig;

    /// The desired goal the environment currently holds.
    fn state_goal(&self) -> &Array1<f32>;

    /// Returns the current observation.
    ///
    /// The observation must contain at least [`GoalKey::AchievedGoal`].
    fn observe(&self) -> GoalDict;

    /// Returns the current desired-goal dictionary.
    fn get_goal(&self) -> GoalDict;

    /// Samples `batch_size` independent goals as batched arrays, keyed
    /// identically to [`GoalEnv::get_goal`].
    fn sample_goals(&mut self, batch_size: usize) -> BatchGoalDict;

    /// Performs an environment step.
    ///
    /// The simulation is expected to have been advanced by the caller before
    /// this is called. `is_terminated` of the returned step is always
    /// `false`; episode truncation is owned by the caller. The returned
    /// [`Record`] carries the reward and the success indicator.
    fn step(&mut self, act: &Self::Act) -> (GoalStep<Self>, Record)
    where
        Self: Sized,
    {
        let obs = self.observe();
        let achieved_goal = obs
            .get(GoalKey::AchievedGoal)
            .expect("observation does not contain an achieved goal");
        let is_success = self.is_success(achieved_goal, self.state_goal());
        let reward = self.distance_reward(achieved_goal, self.state_goal());
        trace!("step: reward = {}, is_success = {}", reward, is_success);
        let record = Record::from_slice(&[
            ("reward", RecordValue::Scalar(reward)),
            ("is_success", RecordValue::Scalar(is_success)),
        ]);
        let step = GoalStep::new(obs, act.clone(), reward, false, GoalInfo { is_success });
        (step, record)
    }

    /// Scalar reward derived from the distance between an achieved and a
    /// desired goal vector.
    ///
    /// Sparse mode: 0.0 when the distance is within `distance_threshold`
    /// (inclusive), -1.0 otherwise. Dense mode: the negative distance.
    ///
    /// The inclusive comparison here differs from the strict one in
    /// [`GoalEnv::is_success`]: a distance exactly at the threshold earns
    /// reward 0.0 but does not count as a success.
    fn distance_reward(&self, achieved_goal: &Array1<f32>, desired_goal: &Array1<f32>) -> f32 {
        let d = goal_distance(achieved_goal, desired_goal);
        match self.config().reward_type {
            RewardType::Sparse => {
                if d > self.config().distance_threshold {
                    -1.0
                } else {
                    0.0
                }
            }
            RewardType::Dense => -d,
        }
    }

    /// Success indicator: 1.0 when the distance between the two goal vectors
    /// is strictly below `distance_threshold`, 0.0 otherwise.
    fn is_success(&self, achieved_goal: &Array1<f32>, desired_goal: &Array1<f32>) -> f32 {
        let d = goal_distance(achieved_goal, desired_goal);
        if d < self.config().distance_threshold {
            1.0
        } else {
            0.0
        }
    }

    /// Samples a single goal.
    fn sample_goal(&mut self) -> GoalDict {
        let goals = self.sample_goals(1);
        goals.unbatchify(0)
    }

    /// Episode statistics to save.
    ///
    /// Empty by default; environments override this to report their own
    /// summaries.
    fn get_diagnostics(&self) -> Record {
        Record::empty()
    }
}

/// Vectorized reward computation over batches of transitions.
///
/// This is a separate capability from [`GoalEnv`] so that support for
/// batched rewards is visible in the type system: environments that cannot
/// compute rewards from observation batches simply do not implement it, and
/// calling [`compute_rewards`](Self::compute_rewards) on them is a compile
/// error rather than a silent no-op.
pub trait BatchGoalRewardEnv: GoalEnv {
    /// Computes one reward per row of `actions` and `obs`.
    fn compute_rewards(&self, actions: &Array2<f32>, obs: &BatchGoalDict) -> Array1<f32>;

    /// Computes the reward of a single transition through the batched path.
    ///
    /// The action and observation are lifted into a batch of size one,
    /// passed to [`compute_rewards`](Self::compute_rewards) and the single
    /// resulting reward is returned.
    fn compute_reward(&self, action: &Array1<f32>, obs: &GoalDict) -> f32 {
        let actions = action.clone().insert_axis(Axis(0));
        let rewards = self.compute_rewards(&actions, &obs.to_batch());
        rewards[0]
    }
}
