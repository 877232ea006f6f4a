use thiserror::Error;

use crate::drill_engine::models::Operation;

/// Contract violations raised before a problem ever reaches a learner.
///
/// A wrong digit is never an error; it is an `Incorrect` verdict.
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Unknown level id: {0}")]
    UnknownLevel(String),
    #[error("Divisor must be non-zero")]
    ZeroDivisor,
    #[error("{operation} of {left} and {right} overflows u64")]
    Overflow { operation: Operation, left: u64, right: u64 },
    #[error("Invalid level '{id}': {reason}")]
    InvalidLevel { id: String, reason: String },
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
