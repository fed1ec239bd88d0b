//! Error types for the attendance tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions in the tracker shell. The payroll calculator
//! itself is total over its domain and never produces an error.

use thiserror::Error;

/// The main error type for the attendance tracker.
///
/// All fallible operations in the store, editor, and import boundary return
/// this error type, making it easy to handle errors consistently throughout
/// the application.
///
/// # Example
///
/// ```
/// use attendance_tracker::error::TrackerError;
///
/// let error = TrackerError::ProfileNotFound {
///     id: "missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Profile not found: missing");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Persisted state could not be read or parsed.
    #[error("Failed to load state from '{path}': {message}")]
    StateLoad {
        /// The path of the state file.
        path: String,
        /// A description of the load failure.
        message: String,
    },

    /// Persisted state could not be written.
    #[error("Failed to persist state to '{path}': {message}")]
    StatePersist {
        /// The path of the state file.
        path: String,
        /// A description of the write failure.
        message: String,
    },

    /// No profile exists with the given id.
    #[error("Profile not found: {id}")]
    ProfileNotFound {
        /// The profile id that was not found.
        id: String,
    },

    /// A month key did not match the `YYYY-MM` form or named an impossible month.
    #[error("Invalid month key: {key}")]
    InvalidMonthKey {
        /// The rejected month key.
        key: String,
    },

    /// A profile setting failed editor validation.
    #[error("Invalid profile field '{field}': {message}")]
    InvalidProfileField {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record failed editor validation.
    #[error("Invalid attendance for {date}: {message}")]
    InvalidAttendance {
        /// The date key of the rejected record.
        date: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// An imported profile document was malformed or failed validation.
    #[error("Import rejected: {message}")]
    ImportRejected {
        /// A description of why the document was rejected.
        message: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
