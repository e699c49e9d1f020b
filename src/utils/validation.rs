use crate::domain::model::{GRADE_MAX, GRADE_MIN};
use crate::utils::error::{Result, ValidationError};

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Student ids are positive and must fit the stored `u32`.
pub fn validate_student_id(value: i64) -> Result<u32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::InvalidId { value });
    }
    u32::try_from(value).map_err(|_| ValidationError::InvalidId { value })
}

/// Names are stored trimmed and must not be blank.
pub fn validate_student_name(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(trimmed.to_string())
}

pub fn validate_grade(value: i64) -> Result<u8, ValidationError> {
    if !(GRADE_MIN..=GRADE_MAX).contains(&value) {
        return Err(ValidationError::GradeOutOfRange { value });
    }
    Ok(value as u8)
}

/// Validates the whole sequence; any bad grade rejects all of it.
pub fn validate_grades(values: &[i64]) -> Result<Vec<u8>, ValidationError> {
    values.iter().map(|&v| validate_grade(v)).collect()
}

pub fn validate_path(field_name: &str, path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ValidationError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path contains null bytes".to_string(),
        });
    }

    Ok(())
}
