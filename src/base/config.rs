//! Configuration of goal-conditioned environments.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// How scalar rewards are derived from the goal distance.
///
/// Deserialization recognizes the string `"sparse"`; any other string
/// selects the dense reward.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum RewardType {
    /// 0.0 within the distance threshold (inclusive), -1.0 beyond it.
    Sparse,

    /// The negative goal distance.
    Dense,
}

impl From<String> for RewardType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "sparse" => Self::Sparse,
            _ => Self::Dense,
        }
    }
}

impl From<RewardType> for String {
    fn from(v: RewardType) -> Self {
        match v {
            RewardType::Sparse => "sparse".to_string(),
            RewardType::Dense => "dense".to_string(),
        }
    }
}

/// Configuration of a [`GoalEnv`](crate::GoalEnv).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GoalEnvConfig {
    /// How scalar rewards are derived from the goal distance.
    pub reward_type: RewardType,

    /// Distance below which the goal counts as reached.
    pub distance_threshold: f32,
}

impl Default for GoalEnvConfig {
    fn default() -> Self {
        Self {
            reward_type: RewardType::Sparse,
            distance_threshold: 0.05,
        }
    }
}

impl GoalEnvConfig {
    /// Sets the reward type.
    pub fn reward_type(mut self, v: RewardType) -> Self {
        self.reward_type = v;
        self
    }

    /// Sets the distance threshold.
    pub fn distance_threshold(mut self, v: f32) -> Self {
        self.distance_threshold = v;
        self
    }

    /// Constructs [`GoalEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`GoalEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
