use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// A single roster entry: a student's name and current grade.
///
/// Names are stored verbatim as entered; identity comparisons elsewhere
/// fold case. Construction rejects blank names, so a `Student` is always
/// well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub grade: f64,
}

impl Student {
    /// Build a record, rejecting empty or whitespace-only names.
    pub fn new(name: impl Into<String>, grade: f64) -> Result<Self, RosterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        Ok(Self { name, grade })
    }
}

/// Pass/fail standing of a grade under the active policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standing {
    Passed,
    Failed,
}

impl Standing {
    /// Canonical display string, also used for the CSV status column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Standing::Passed => "Passed",
            Standing::Failed => "Failed",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Standing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passed" => Ok(Standing::Passed),
            "failed" => Ok(Standing::Failed),
            _ => Err(format!("unknown standing: {}", s)),
        }
    }
}
