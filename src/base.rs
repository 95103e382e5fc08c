//! Core interfaces for goal-conditioned environments.
mod config;
mod env;
mod goal;
mod step;
use ndarray::Array1;
use std::fmt::Debug;

pub use config::{GoalEnvConfig, RewardType};
pub use env::{BatchGoalRewardEnv, GoalEnv};
pub use goal::{BatchGoalDict, GoalDict, GoalKey};
pub use step::{GoalInfo, GoalStep, Info};

/// A set of actions of an environment.
pub trait Act: Clone + Debug {
    /// Returns the number of actions in the object.
    fn len(&self) -> usize;
}

impl Act for Array1<f32> {
    fn len(&self) -> usize {
        self.len()
    }
}
