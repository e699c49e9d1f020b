use crate::domain::model::Student;
use crate::utils::error::{AppError, Result};

/// Ordered collection of students owned by a single session. Ids are unique
/// within a roster; the roster enforces that, not the record itself.
///
/// Failed operations leave the roster unchanged.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records loaded from an external source as-is; duplicate ids in
    /// the source are accepted, matching load semantics.
    pub fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn into_students(self) -> Vec<Student> {
        self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn add(&mut self, student: Student) -> Result<()> {
        if self.students.iter().any(|s| s.id() == student.id()) {
            return Err(AppError::DuplicateId { id: student.id() });
        }
        self.students.push(student);
        Ok(())
    }

    /// Removes the student with the given id and returns it.
    pub fn remove(&mut self, id: u32) -> Result<Student> {
        match self.students.iter().position(|s| s.id() == id) {
            Some(idx) => Ok(self.students.remove(idx)),
            None => Err(AppError::StudentNotFound { id }),
        }
    }

    /// Replaces the grade list of the student with the given id.
    pub fn replace_grades(&mut self, id: u32, grades: &[i64]) -> Result<()> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(AppError::StudentNotFound { id })?;
        student.set_grades(grades)?;
        Ok(())
    }
}
