//! Error types for the schedule engine.

use thiserror::Error;

/// Errors that can occur in schedule expansion and projection.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A cadence symbol the engine does not know. Rules are validated
    /// upstream, so hitting this means the caller bypassed validation.
    #[error("Unsupported recurrence type: {0}")]
    UnsupportedRecurrence(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
