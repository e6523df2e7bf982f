//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The grade is not a finite value on the grading scale.
    #[error("invalid grade {0}, expected a value between 0 and 10")]
    InvalidGrade(f64),

    /// The rectangle has a negative or non-finite extent.
    #[error("invalid rectangle extent {width}x{height}")]
    InvalidRect {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

/// Error returned while parsing task statuses from persistence or the UI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing activity types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity type: {0}")]
pub struct ParseActivityTypeError(pub String);
