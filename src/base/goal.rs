//! Goal dictionaries.
use crate::error::GoalEnvError;
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The components a goal dictionary can carry.
///
/// The key set is closed: every environment of this family describes its
/// goals and observations with some subset of these components.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum GoalKey {
    /// The raw observation vector.
    Observation,

    /// The goal-relevant projection of the current observation.
    AchievedGoal,

    /// The goal the agent is currently trying to reach.
    DesiredGoal,

    /// The observation in the underlying state space.
    StateObservation,

    /// The achieved goal in the underlying state space.
    StateAchievedGoal,

    /// The desired goal in the underlying state space.
    StateDesiredGoal,

    /// The proprioceptive part of the observation.
    ProprioObservation,

    /// The achieved goal in proprioceptive space.
    ProprioAchievedGoal,

    /// The desired goal in proprioceptive space.
    ProprioDesiredGoal,
}

impl GoalKey {
    /// The conventional snake_case name of the component.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Observation => "observation",
            Self::AchievedGoal => "achieved_goal",
            Self::DesiredGoal => "desired_goal",
            Self::StateObservation => "state_observation",
            Self::StateAchievedGoal => "state_achieved_goal",
            Self::StateDesiredGoal => "state_desired_goal",
            Self::ProprioObservation => "proprio_observation",
            Self::ProprioAchievedGoal => "proprio_achieved_goal",
            Self::ProprioDesiredGoal => "proprio_desired_goal",
        }
    }
}

impl fmt::Display for GoalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dictionary of goal components.
///
/// Used both for goals and for single observations; an observation passed to
/// [`GoalEnv::step`] must contain at least [`GoalKey::AchievedGoal`].
///
/// [`GoalEnv::step`]: crate::GoalEnv::step
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GoalDict(HashMap<GoalKey, Array1<f32>>);

impl GoalDict {
    /// Creates an empty dictionary.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a dictionary from a slice of key-value pairs.
    pub fn from_slice(s: &[(GoalKey, Array1<f32>)]) -> Self {
        Self(s.iter().cloned().collect())
    }

    /// Inserts a component.
    pub fn insert(&mut self, k: GoalKey, v: Array1<f32>) {
        self.0.insert(k, v);
    }

    /// Gets a reference to the component under the given key.
    pub fn get(&self, k: GoalKey) -> Option<&Array1<f32>> {
        self.0.get(&k)
    }

    /// Gets a reference to the component under the given key.
    ///
    /// # Errors
    ///
    /// Returns [`GoalEnvError::GoalKeyError`] if the key is missing.
    pub fn try_get(&self, k: GoalKey) -> Result<&Array1<f32>, GoalEnvError> {
        self.0.get(&k).ok_or(GoalEnvError::GoalKeyError(k))
    }

    /// Returns an iterator over the keys in the dictionary.
    pub fn keys(&self) -> impl Iterator<Item = &GoalKey> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs in the dictionary.
    pub fn iter(&self) -> impl Iterator<Item = (&GoalKey, &Array1<f32>)> {
        self.0.iter()
    }

    /// The number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lifts every component into a batch of size one.
    pub fn to_batch(&self) -> BatchGoalDict {
        BatchGoalDict(
            self.0
                .iter()
                .map(|(k, v)| (*k, v.clone().insert_axis(Axis(0))))
                .collect(),
        )
    }
}

/// A dictionary of batched goal components.
///
/// Every value is an array of shape `(batch_size, z)` where `z` depends on
/// the key. Single dictionaries are extracted by batch index with
/// [`BatchGoalDict::unbatchify`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct BatchGoalDict(HashMap<GoalKey, Array2<f32>>);

impl BatchGoalDict {
    /// Creates an empty dictionary.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a dictionary from a slice of key-value pairs.
    pub fn from_slice(s: &[(GoalKey, Array2<f32>)]) -> Self {
        Self(s.iter().cloned().collect())
    }

    /// Inserts a batched component.
    pub fn insert(&mut self, k: GoalKey, v: Array2<f32>) {
        self.0.insert(k, v);
    }

    /// Gets a reference to the batched component under the given key.
    pub fn get(&self, k: GoalKey) -> Option<&Array2<f32>> {
        self.0.get(&k)
    }

    /// Gets a reference to the batched component under the given key.
    ///
    /// # Errors
    ///
    /// Returns [`GoalEnvError::GoalKeyError`] if the key is missing.
    pub fn try_get(&self, k: GoalKey) -> Result<&Array2<f32>, GoalEnvError> {
        self.0.get(&k).ok_or(GoalEnvError::GoalKeyError(k))
    }

    /// The number of rows of the batched components.
    pub fn batch_size(&self) -> usize {
        self.0.values().next().map(|v| v.nrows()).unwrap_or(0)
    }

    /// Extracts the dictionary at batch index `i`.
    pub fn unbatchify(&self, i: usize) -> GoalDict {
        GoalDict(
            self.0
                .iter()
                .map(|(k, v)| (*k, v.row(i).to_owned()))
                .collect(),
        )
    }

    /// Alias of [`BatchGoalDict::unbatchify`].
    pub fn batchify(&self, i: usize) -> GoalDict {
        self.unbatchify(i)
    }

    /// Returns an iterator over the keys in the dictionary.
    pub fn keys(&self) -> impl Iterator<Item = &GoalKey> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs in the dictionary.
    pub fn iter(&self) -> impl Iterator<Item = (&GoalKey, &Array2<f32>)> {
        self.0.iter()
    }

    /// The number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
