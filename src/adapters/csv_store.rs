use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::domain::model::Student;
use crate::utils::error::{DataSourceError, Result};

/// Loads a roster from a CSV file laid out as `id,name[,grade]*`.
///
/// Rows whose first cell is not all decimal digits are skipped as header or
/// comment rows. Any parse or validation failure on a data row aborts the
/// whole load; no partial roster is returned.
pub fn load_students(path: impl AsRef<Path>) -> Result<Vec<Student>, DataSourceError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataSourceError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let mut students = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let record = row?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);

        let first = record.get(0).unwrap_or("");
        if first.is_empty() || !first.bytes().all(|b| b.is_ascii_digit()) {
            // Indistinguishable from a malformed id; skipped on purpose.
            tracing::debug!("skipping header row at line {}", line);
            continue;
        }

        students.push(parse_row(&record, line)?);
    }

    tracing::info!("loaded {} students from {}", students.len(), path.display());
    Ok(students)
}

fn parse_row(record: &StringRecord, row: usize) -> Result<Student, DataSourceError> {
    if record.len() < 2 {
        return Err(DataSourceError::MalformedRow {
            row,
            reason: "expected at least id and name columns".to_string(),
        });
    }

    let id: i64 = record[0].parse().map_err(|_| DataSourceError::MalformedRow {
        row,
        reason: format!("invalid id: {:?}", &record[0]),
    })?;
    let name = &record[1];

    // Remaining cells are grades; empty cells are padding, not zeros.
    let mut grades = Vec::new();
    for cell in record.iter().skip(2) {
        if cell.is_empty() {
            continue;
        }
        let grade: i64 = cell.parse().map_err(|_| DataSourceError::MalformedRow {
            row,
            reason: format!("invalid grade: {cell:?}"),
        })?;
        grades.push(grade);
    }

    Student::new(id, name, &grades)
        .map_err(|source| DataSourceError::InvalidRecord { row, source })
}

/// Saves the roster as `id,name,grade1..gradeK` with `K` the maximum grade
/// count in the roster; shorter rows are padded with empty cells so columns
/// stay aligned. An empty roster writes the two-column header alone.
///
/// The file is written to a temporary sibling and renamed into place, so a
/// failed save never leaves a truncated roster behind.
pub fn save_students(path: impl AsRef<Path>, students: &[Student]) -> Result<(), DataSourceError> {
    let path = path.as_ref();
    let max_grades = students.iter().map(|s| s.grades().len()).max().unwrap_or(0);

    let mut header = vec!["id".to_string(), "name".to_string()];
    header.extend((1..=max_grades).map(|i| format!("grade{i}")));

    let mut tmp = open_scratch_file(path)?;
    {
        let mut writer = WriterBuilder::new().from_writer(&mut tmp);
        writer.write_record(&header)?;

        for student in students {
            let mut row = vec![student.id().to_string(), student.name().to_string()];
            row.extend(student.grades().iter().map(u8::to_string));
            row.resize(2 + max_grades, String::new());
            writer.write_record(&row)?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| DataSourceError::Io(e.error))?;

    tracing::info!("saved {} students to {}", students.len(), path.display());
    Ok(())
}

#[derive(Debug, Serialize)]
struct TopReportRow<'a> {
    id: u32,
    name: &'a str,
    average: String,
    grades_str: String,
}

/// Writes the top-N report: `id,name,average,grades_str` with the average
/// fixed to two decimals and grades space-joined. Export-only; there is no
/// loader for this format.
pub fn export_top_report(
    path: impl AsRef<Path>,
    students: &[Student],
) -> Result<(), DataSourceError> {
    let path = path.as_ref();

    let mut tmp = open_scratch_file(path)?;
    {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(&mut tmp);
        writer.write_record(["id", "name", "average", "grades_str"])?;

        for student in students {
            let grades: Vec<String> = student.grades().iter().map(u8::to_string).collect();
            writer.serialize(TopReportRow {
                id: student.id(),
                name: student.name(),
                average: format!("{:.2}", student.average_grade()),
                grades_str: grades.join(" "),
            })?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| DataSourceError::Io(e.error))?;

    tracing::info!(
        "exported {} students to {}",
        students.len(),
        path.display()
    );
    Ok(())
}

/// Temporary file in the destination directory, created along with any
/// missing parent directories.
fn open_scratch_file(path: &Path) -> Result<NamedTempFile, DataSourceError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    Ok(NamedTempFile::new_in(dir)?)
}
