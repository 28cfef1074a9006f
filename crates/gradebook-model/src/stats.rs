use serde::{Deserialize, Serialize};

/// Aggregate grade figures for the whole roster.
///
/// All fields are 0.0 for an empty roster so display code only needs a
/// presence check, never an error path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GradeStats {
    /// Arithmetic mean of all grades.
    pub average: f64,
    /// Highest grade on the roster.
    pub high: f64,
    /// Lowest grade on the roster.
    pub low: f64,
}

/// Pass/fail tally under the active grading policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StandingCounts {
    pub passed: usize,
    pub failed: usize,
}

impl StandingCounts {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}
