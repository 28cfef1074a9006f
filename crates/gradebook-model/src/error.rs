//! Error types for roster operations.

use thiserror::Error;

/// Errors surfaced by roster operations.
///
/// All variants are recoverable and reported synchronously to the caller;
/// none are fatal to the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// Add attempted with a blank name.
    #[error("student name must not be empty")]
    EmptyName,

    /// Add attempted for a name already on the roster (case-insensitive).
    #[error("student '{name}' already exists")]
    DuplicateName { name: String },

    /// Modify/delete referenced a name absent from the roster.
    #[error("student '{name}' not found")]
    NotFound { name: String },

    /// Modify attempted after the per-student budget was exhausted.
    #[error("modification limit of {limit} reached for '{name}'")]
    LimitReached { name: String, limit: u32 },

    /// Grade outside the range allowed by the active grading policy.
    #[error("grade {grade} is outside the allowed range {min} to {max}")]
    InvalidGrade { grade: f64, min: f64, max: f64 },
}

/// Errors from validating a grading policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    /// Minimum grade exceeds the maximum.
    #[error("minimum grade {min} exceeds maximum grade {max}")]
    InvertedRange { min: f64, max: f64 },

    /// Pass threshold falls outside the grade range.
    #[error("pass threshold {threshold} is outside the grade range {min} to {max}")]
    ThresholdOutOfRange { threshold: f64, min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, RosterError>;
