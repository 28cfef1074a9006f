//! The in-memory roster store.
//!
//! `RosterStore` owns all session state: the ordered student records and the
//! per-student modification tally. It is single-threaded by design; callers
//! that need multiple sessions instantiate one store per session.

use std::collections::HashMap;

use tracing::{debug, info};

use gradebook_model::{
    GradeStats, GradingPolicy, Result, RosterError, Standing, StandingCounts, Student,
};

/// Maximum number of grade updates allowed per student.
pub const MODIFICATION_LIMIT: u32 = 3;

/// Result of a grade update that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyOutcome {
    /// Grade changed; this many modification attempts remain.
    Updated { remaining: u32 },
    /// The new grade equals the stored one; nothing was recorded and the
    /// attempt tally is untouched.
    Unchanged,
}

/// In-memory roster for one interactive session.
///
/// Records keep insertion order, which is also the display and iteration
/// order. No two records ever share a case-folded name. The attempt tally
/// is keyed by case-folded name and holds an entry only for students that
/// have had at least one successful modification; deleting a student drops
/// the entry entirely, so re-adding the same name restarts the budget.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    students: Vec<Student>,
    attempts: HashMap<String, u32>,
    policy: GradingPolicy,
}

/// Case-insensitive identity used for name comparisons and tally keys.
fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

impl RosterStore {
    /// Create an empty store governed by the given policy.
    pub fn new(policy: GradingPolicy) -> Self {
        Self {
            students: Vec::new(),
            attempts: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> GradingPolicy {
        self.policy
    }

    /// All records in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Index of the student whose name matches `name` case-insensitively.
    ///
    /// Linear scan, first match wins; the uniqueness invariant guarantees
    /// at most one match. Every other operation uses this as its
    /// precondition check.
    pub fn find(&self, name: &str) -> Option<usize> {
        let folded = fold_name(name);
        self.students
            .iter()
            .position(|student| fold_name(&student.name) == folded)
    }

    /// Look up a record by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&Student> {
        self.find(name).map(|index| &self.students[index])
    }

    /// Append a new record at the end of the roster.
    ///
    /// Rejects blank names, grades outside the policy range, and names
    /// already present (case-insensitive). Leaves the attempt tally
    /// untouched.
    pub fn add(&mut self, name: &str, grade: f64) -> Result<()> {
        let student = Student::new(name, grade)?;
        self.check_grade(grade)?;
        if self.find(name).is_some() {
            return Err(RosterError::DuplicateName {
                name: name.to_string(),
            });
        }
        debug!(name = %student.name, grade, "student added");
        self.students.push(student);
        Ok(())
    }

    /// Update a student's grade in place, spending one modification attempt.
    ///
    /// A new grade exactly equal to the stored one is a no-op: it reports
    /// [`ModifyOutcome::Unchanged`] and does not touch the tally. Only an
    /// applied change counts against the budget; rejected grades and
    /// no-ops never do.
    pub fn modify(&mut self, name: &str, new_grade: f64) -> Result<ModifyOutcome> {
        let index = self.find(name).ok_or_else(|| RosterError::NotFound {
            name: name.to_string(),
        })?;
        self.check_grade(new_grade)?;

        let key = fold_name(name);
        let used = self.attempts.get(&key).copied().unwrap_or(0);
        if used >= MODIFICATION_LIMIT {
            return Err(RosterError::LimitReached {
                name: name.to_string(),
                limit: MODIFICATION_LIMIT,
            });
        }

        let student = &mut self.students[index];
        if new_grade == student.grade {
            debug!(name = %student.name, grade = new_grade, "grade unchanged");
            return Ok(ModifyOutcome::Unchanged);
        }

        let old_grade = student.grade;
        student.grade = new_grade;
        let count = used + 1;
        self.attempts.insert(key, count);
        let remaining = MODIFICATION_LIMIT - count;
        info!(name = %self.students[index].name, old_grade, new_grade, remaining, "grade updated");
        Ok(ModifyOutcome::Updated { remaining })
    }

    /// Remove a student and their attempt-tally entry.
    ///
    /// Remaining records keep their relative order. Returns the removed
    /// record so callers can name it in confirmation messages.
    pub fn delete(&mut self, name: &str) -> Result<Student> {
        let index = self.find(name).ok_or_else(|| RosterError::NotFound {
            name: name.to_string(),
        })?;
        let student = self.students.remove(index);
        self.attempts.remove(&fold_name(name));
        info!(name = %student.name, "student deleted");
        Ok(student)
    }

    /// Clear the roster and the attempt tally unconditionally.
    pub fn reset_all(&mut self) {
        info!(students = self.students.len(), "roster reset");
        self.students.clear();
        self.attempts.clear();
    }

    /// Successful modifications recorded against `name`.
    pub fn attempts_used(&self, name: &str) -> u32 {
        self.attempts.get(&fold_name(name)).copied().unwrap_or(0)
    }

    /// Modification attempts still available for `name`.
    pub fn attempts_remaining(&self, name: &str) -> u32 {
        MODIFICATION_LIMIT.saturating_sub(self.attempts_used(name))
    }

    /// Average, highest, and lowest grade across the roster.
    ///
    /// An empty roster yields all zeros rather than an error, so display
    /// code never special-cases emptiness beyond a presence check.
    pub fn stats(&self) -> GradeStats {
        if self.students.is_empty() {
            return GradeStats::default();
        }
        let mut total = 0.0;
        let mut high = f64::NEG_INFINITY;
        let mut low = f64::INFINITY;
        for student in &self.students {
            total += student.grade;
            high = high.max(student.grade);
            low = low.min(student.grade);
        }
        GradeStats {
            average: total / self.students.len() as f64,
            high,
            low,
        }
    }

    /// Pass/fail tally of the whole roster under the active policy.
    pub fn standing_counts(&self) -> StandingCounts {
        let mut counts = StandingCounts::default();
        for student in &self.students {
            match self.classify(student) {
                Standing::Passed => counts.passed += 1,
                Standing::Failed => counts.failed += 1,
            }
        }
        counts
    }

    /// Standing of one record under the active policy.
    pub fn classify(&self, student: &Student) -> Standing {
        self.policy.classify(student.grade)
    }

    /// Records whose name contains `term`, case-insensitively, in roster
    /// order. A blank term returns the full roster.
    pub fn search(&self, term: &str) -> Vec<&Student> {
        let needle = fold_name(term.trim());
        if needle.is_empty() {
            return self.students.iter().collect();
        }
        self.students
            .iter()
            .filter(|student| fold_name(&student.name).contains(&needle))
            .collect()
    }

    fn check_grade(&self, grade: f64) -> Result<()> {
        if !self.policy.contains(grade) {
            return Err(RosterError::InvalidGrade {
                grade,
                min: self.policy.min_grade,
                max: self.policy.max_grade,
            });
        }
        Ok(())
    }
}
