use std::fs;
use std::path::{Path, PathBuf};

use crate::reporting::domain::report_writer::{ReportWriteError, ReportWriter, TranscriptWriter};
use crate::shared::constants::{AGGREGATE_REPORT_FILENAME, FILE_REPORT_SUFFIX};

/// Writes reports as UTF-8 text files inside a dedicated directory.
///
/// Per-file reports are named `<display name>.txt`; the summary always goes
/// to `parolacce.txt`. The directory is created on first write.
pub struct FsReportWriter {
    reports_dir: PathBuf,
}

impl FsReportWriter {
    pub fn new(reports_dir: &Path) -> Self {
        Self {
            reports_dir: reports_dir.to_path_buf(),
        }
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, ReportWriteError> {
        let path = self.reports_dir.join(file_name);
        fs::create_dir_all(&self.reports_dir).map_err(|e| ReportWriteError {
            path: self.reports_dir.clone(),
            source: e,
        })?;
        fs::write(&path, contents).map_err(|e| ReportWriteError {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}

impl ReportWriter for FsReportWriter {
    fn write_file_report(
        &self,
        file_name: &str,
        contents: &str,
    ) -> Result<PathBuf, ReportWriteError> {
        self.write(&format!("{file_name}{FILE_REPORT_SUFFIX}"), contents)
    }

    fn write_aggregate_report(&self, contents: &str) -> Result<PathBuf, ReportWriteError> {
        self.write(AGGREGATE_REPORT_FILENAME, contents)
    }
}

/// Saves a transcript next to its source file, swapping the extension for `.txt`.
pub struct SiblingTranscriptWriter;

impl TranscriptWriter for SiblingTranscriptWriter {
    fn write_transcript(&self, source: &Path, text: &str) -> Result<PathBuf, ReportWriteError> {
        let path = source.with_extension("txt");
        fs::write(&path, text).map_err(|e| ReportWriteError {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}
