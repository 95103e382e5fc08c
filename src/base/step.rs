//! Environment step.
use super::env::GoalEnv;
use super::goal::GoalDict;

/// Additional information to `Obs` and `Act`.
pub trait Info {}

impl Info for () {}

/// Success information attached to every [`GoalStep`].
#[derive(Clone, Debug)]
pub struct GoalInfo {
    /// 1.0 if the achieved goal is strictly within the distance threshold,
    /// 0.0 otherwise.
    pub is_success: f32,
}

impl Info for GoalInfo {}

/// An action, observation and reward tuple emitted at every interaction
/// step of a [`GoalEnv`].
pub struct GoalStep<E: GoalEnv> {
    /// Action.
    pub act: E::Act,

    /// Observation.
    pub obs: GoalDict,

    /// Reward.
    pub reward: f32,

    /// Always `false`: episode-length handling and truncation are owned by
    /// the caller, not by the environment.
    pub is_terminated: bool,

    /// Success information.
    pub info: GoalInfo,
}

impl<E: GoalEnv> GoalStep<E> {
    /// Constructs a [`GoalStep`] object.
    pub fn new(
        obs: GoalDict,
        act: E::Act,
        reward: f32,
        is_terminated: bool,
        info: GoalInfo,
    ) -> Self {
        GoalStep {
            act,
            obs,
            reward,
            is_terminated,
            info,
        }
    }

    /// Whether the episode ended with this step.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.is_terminated
    }
}
