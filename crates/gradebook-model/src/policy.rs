//! Grading scale configuration.
//!
//! The valid grade range and the pass threshold are configuration, not
//! hard-coded policy. Two presets cover the common scales: a 0-100
//! percentage scale and a 1-5 scale with a pass mark of 3.

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::student::Standing;

/// Valid grade range plus the pass threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradingPolicy {
    /// Lowest grade a student can hold (inclusive).
    pub min_grade: f64,
    /// Highest grade a student can hold (inclusive).
    pub max_grade: f64,
    /// Grades at or above this value count as passing.
    pub pass_threshold: f64,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self::percent()
    }
}

impl GradingPolicy {
    /// Percentage scale: 0.0-100.0, pass at 60.0.
    pub fn percent() -> Self {
        Self {
            min_grade: 0.0,
            max_grade: 100.0,
            pass_threshold: 60.0,
        }
    }

    /// Five-point scale: 1.0-5.0, pass at 3.0.
    pub fn five_point() -> Self {
        Self {
            min_grade: 1.0,
            max_grade: 5.0,
            pass_threshold: 3.0,
        }
    }

    #[must_use]
    pub fn with_pass_threshold(mut self, threshold: f64) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Check internal consistency: range must not be inverted and the
    /// threshold must fall inside the range.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.min_grade > self.max_grade {
            return Err(PolicyError::InvertedRange {
                min: self.min_grade,
                max: self.max_grade,
            });
        }
        if self.pass_threshold < self.min_grade || self.pass_threshold > self.max_grade {
            return Err(PolicyError::ThresholdOutOfRange {
                threshold: self.pass_threshold,
                min: self.min_grade,
                max: self.max_grade,
            });
        }
        Ok(())
    }

    /// Range membership, inclusive at both ends.
    pub fn contains(&self, grade: f64) -> bool {
        grade >= self.min_grade && grade <= self.max_grade
    }

    /// Classify a grade against the pass threshold.
    pub fn classify(&self, grade: f64) -> Standing {
        if grade >= self.pass_threshold {
            Standing::Passed
        } else {
            Standing::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_presets() {
        assert!(GradingPolicy::percent().validate().is_ok());
        assert!(GradingPolicy::five_point().validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let policy = GradingPolicy {
            min_grade: 10.0,
            max_grade: 5.0,
            pass_threshold: 7.0,
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::InvertedRange {
                min: 10.0,
                max: 5.0
            })
        );
    }

    #[test]
    fn validate_rejects_threshold_outside_range() {
        let policy = GradingPolicy::percent().with_pass_threshold(120.0);
        assert_eq!(
            policy.validate(),
            Err(PolicyError::ThresholdOutOfRange {
                threshold: 120.0,
                min: 0.0,
                max: 100.0
            })
        );
    }
}
