//! Errors in the library.
use crate::GoalKey;
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum GoalEnvError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// A goal dictionary does not contain the requested key.
    #[error("Missing goal key: {0}")]
    GoalKeyError(GoalKey),
}
