use std::path::PathBuf;

use thiserror::Error;

/// Invalid run configuration, detected before any file is scanned.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid match mode '{0}': expected 'exact' or 'substring'")]
    InvalidMatchMode(String),
    #[error("invalid log format '{0}': expected 'text' or 'json'")]
    InvalidLogFormat(String),
    #[error("settings file not found: {0}")]
    SettingsNotFound(PathBuf),
    #[error("failed to read settings from {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },
    #[error("MP3 folder not found at {0}")]
    FolderNotFound(PathBuf),
    #[error("speech model not found at {0}")]
    ModelNotFound(PathBuf),
}
