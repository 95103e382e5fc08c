//! Types for recording environment diagnostics.
//!
//! A [`Record`] is a container of key-value pairs produced alongside every
//! environment step and by [`GoalEnv::get_diagnostics`]. Keys keep their
//! insertion order, so a record can be flushed to a log or a metrics sink
//! without scrambling the summary.
//!
//! ```rust
//! use goal_env::record::{Record, RecordValue};
//!
//! // following values are obtained with some process in reality
//! let reward = -1f32;
//! let is_success = 0f32;
//!
//! let mut record = Record::empty();
//! record.insert("reward", RecordValue::Scalar(reward));
//! record.insert("is_success", RecordValue::Scalar(is_success));
//! ```
//!
//! [`GoalEnv::get_diagnostics`]: crate::GoalEnv::get_diagnostics
use crate::error::GoalEnvError;
use chrono::prelude::{DateTime, Local};

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone)]
pub enum RecordValue {
    /// A single floating-point value, typically a metric.
    Scalar(f32),

    /// A timestamp with local timezone.
    DateTime(DateTime<Local>),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),

    /// A text value.
    String(String),
}

/// An ordered container of key-value pairs of various data types.
///
/// Inserting an existing key replaces its value in place; otherwise keys are
/// kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Record(Vec<(String, RecordValue)>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(vec![(name.into(), RecordValue::Scalar(value))])
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys in the record, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        let k = k.into();
        match self.0.iter_mut().find(|kv| kv.0 == k) {
            Some(kv) => kv.1 = v,
            None => self.0.push((k, v)),
        }
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, RecordValue)> {
        self.0.iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.iter().find(|(key, _)| key.as_str() == k).map(|(_, v)| v)
    }

    /// Merges another record into this one in place.
    ///
    /// If both records contain the same key, the value from the other record
    /// overwrites the value from this record.
    pub fn merge_inplace(&mut self, record: Record) {
        for (k, v) in record.0 {
            self.insert(k, v);
        }
    }

    /// Gets a scalar value from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not a
    /// scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, GoalEnvError> {
        match self.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(GoalEnvError::RecordValueTypeError("Scalar".to_string())),
            None => Err(GoalEnvError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not a
    /// 1-dimensional array.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, GoalEnvError> {
        match self.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(GoalEnvError::RecordValueTypeError("Array1".to_string())),
            None => Err(GoalEnvError::RecordKeyError(k.to_string())),
        }
    }

    /// The number of key-value pairs in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
