//! CSV export of the roster.
//!
//! The report is a pure read over the store: UTF-8, comma-delimited, one
//! header row, then one row per student in roster order with the derived
//! pass/fail column.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use gradebook_store::RosterStore;

use crate::error::ReportError;

/// Conventional file name the exported roster is delivered under.
pub const REPORT_FILE_NAME: &str = "reporte_estudiantes.csv";

/// Render a grade for report output.
///
/// Integral values drop the fractional part (`80` rather than `80.0`);
/// fractional values render as-is.
pub fn format_grade(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Serialize the roster as CSV bytes: `name,grade,status` header, then one
/// row per student in insertion order.
pub fn export_csv(store: &RosterStore) -> Result<Vec<u8>, ReportError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut buffer);
        writer.write_record(["name", "grade", "status"])?;
        for student in store.students() {
            let standing = store.classify(student);
            writer.write_record([
                student.name.as_str(),
                format_grade(student.grade).as_str(),
                standing.as_str(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

/// Write the CSV report into `dir` under [`REPORT_FILE_NAME`] and return
/// the full path.
pub fn write_report(store: &RosterStore, dir: &Path) -> Result<PathBuf, ReportError> {
    let path = dir.join(REPORT_FILE_NAME);
    let bytes = export_csv(store)?;
    fs::write(&path, bytes).map_err(|source| ReportError::FileWrite {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), students = store.len(), "report written");
    Ok(path)
}
