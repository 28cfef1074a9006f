pub mod csv_export;
pub mod error;

pub use csv_export::{REPORT_FILE_NAME, export_csv, format_grade, write_report};
pub use error::ReportError;
