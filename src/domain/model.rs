use std::fmt;

use crate::utils::error::{Result, ValidationError};
use crate::utils::validation;

pub const GRADE_MIN: i64 = 0;
pub const GRADE_MAX: i64 = 100;

/// A single student record. Invariants hold from construction onward:
/// positive id, non-blank trimmed name, every grade in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: u32,
    name: String,
    grades: Vec<u8>,
}

impl Student {
    pub fn new(id: i64, name: &str, grades: &[i64]) -> Result<Self, ValidationError> {
        let id = validation::validate_student_id(id)?;
        let name = validation::validate_student_name(name)?;
        let grades = validation::validate_grades(grades)?;

        Ok(Self { id, name, grades })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    /// Replaces the whole grade list. The candidate sequence is validated
    /// up front; on failure the current grades stay untouched.
    pub fn set_grades(&mut self, new_grades: &[i64]) -> Result<(), ValidationError> {
        let validated = validation::validate_grades(new_grades)?;
        self.grades = validated;
        Ok(())
    }

    /// Arithmetic mean of the current grades, `0.0` when there are none.
    /// Recomputed on every call since grades can be replaced.
    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.grades.iter().map(|&g| u64::from(g)).sum();
        sum as f64 / self.grades.len() as f64
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student(id={}, name='{}', avg={:.2})",
            self.id,
            self.name,
            self.average_grade()
        )
    }
}

/// Snapshot summary of a roster at a point in time. Recomputed on demand,
/// never mutated; best/worst borrow from the roster it was derived from.
#[derive(Debug, Clone)]
pub struct GroupStats<'a> {
    pub count: usize,
    pub overall_average: f64,
    pub best_student: Option<&'a Student>,
    pub worst_student: Option<&'a Student>,
}
