use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to write report to {path}: {source}")]
pub struct ReportWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Domain interface for persisting rendered reports.
pub trait ReportWriter: Send {
    /// Persist a per-file report keyed by the file's display name.
    fn write_file_report(&self, file_name: &str, contents: &str)
        -> Result<PathBuf, ReportWriteError>;

    /// Persist the run-wide summary, replacing any previous one.
    fn write_aggregate_report(&self, contents: &str) -> Result<PathBuf, ReportWriteError>;
}

/// Domain interface for keeping the raw transcript of a scanned file.
pub trait TranscriptWriter: Send {
    fn write_transcript(&self, source: &Path, text: &str) -> Result<PathBuf, ReportWriteError>;
}
