//! Pure functions over a slice of students. Inputs are never mutated;
//! every function returns a fresh value.

use crate::domain::model::{GroupStats, Student};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    ById,
    ByName,
    ByAverage,
    /// Identity ordering: callers get back a copy in the original order.
    Unsorted,
}

impl SortStrategy {
    /// Maps a user-supplied token to a strategy. Unknown tokens fall back
    /// to `Unsorted` instead of failing.
    pub fn from_token(token: &str) -> Self {
        match token {
            "id" => Self::ById,
            "name" => Self::ByName,
            "avg" => Self::ByAverage,
            _ => Self::Unsorted,
        }
    }
}

pub fn compute_group_stats(students: &[Student]) -> GroupStats<'_> {
    if students.is_empty() {
        return GroupStats {
            count: 0,
            overall_average: 0.0,
            best_student: None,
            worst_student: None,
        };
    }

    let mut grade_sum: u64 = 0;
    let mut grade_count: u64 = 0;
    for student in students {
        for &grade in student.grades() {
            grade_sum += u64::from(grade);
            grade_count += 1;
        }
    }

    // Mean over the flattened grades of everyone, not the mean of averages.
    let overall_average = if grade_count == 0 {
        0.0
    } else {
        grade_sum as f64 / grade_count as f64
    };

    // Strict comparisons keep the first-encountered record on ties.
    let mut best = &students[0];
    let mut worst = &students[0];
    for student in &students[1..] {
        if student.average_grade() > best.average_grade() {
            best = student;
        }
        if student.average_grade() < worst.average_grade() {
            worst = student;
        }
    }

    GroupStats {
        count: students.len(),
        overall_average,
        best_student: Some(best),
        worst_student: Some(worst),
    }
}

pub fn sort_students(students: &[Student], strategy: SortStrategy) -> Vec<Student> {
    let mut sorted = students.to_vec();
    match strategy {
        SortStrategy::ById => sorted.sort_by_key(Student::id),
        SortStrategy::ByName => sorted.sort_by(|a, b| a.name().cmp(b.name())),
        SortStrategy::ByAverage => sorted.sort_by(|a, b| {
            // Descending by average; equal averages fall back to ascending
            // name so the order stays deterministic.
            b.average_grade()
                .total_cmp(&a.average_grade())
                .then_with(|| a.name().cmp(b.name()))
        }),
        SortStrategy::Unsorted => {}
    }
    sorted
}

/// First `n` of the by-average ordering. `n <= 0` yields nothing; `n`
/// beyond the roster size yields the whole sorted roster.
pub fn top_students(students: &[Student], n: i64) -> Vec<Student> {
    if n <= 0 {
        return Vec::new();
    }
    let mut sorted = sort_students(students, SortStrategy::ByAverage);
    if (n as u64) < sorted.len() as u64 {
        sorted.truncate(n as usize);
    }
    sorted
}
