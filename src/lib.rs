#![warn(missing_docs)]
//! Interfaces for goal-conditioned reinforcement learning environments.
//!
//! The central trait is [`GoalEnv`], which layers goal sampling, success
//! detection and distance-based rewards on top of an environment whose
//! simulation loop is owned by the caller. Environments that can compute
//! rewards over whole batches of transitions additionally implement
//! [`BatchGoalRewardEnv`].
//!
//! Goals and observations are dictionaries mapping [`GoalKey`]s to
//! [`ndarray`] arrays; [`BatchGoalDict`] carries a leading batch dimension.
pub mod dummy;
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{
    Act, BatchGoalDict, BatchGoalRewardEnv, GoalDict, GoalEnv, GoalEnvConfig, GoalInfo, GoalKey,
    GoalStep, Info, RewardType,
};
