use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV serialization failed.
    #[error("failed to serialize report: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the in-memory writer failed.
    #[error("failed to render report: {0}")]
    Render(#[from] std::io::Error),

    /// Writing the report file failed.
    #[error("failed to write report to {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
