use std::path::PathBuf;

use thiserror::Error;

use crate::shared::download::DownloadError;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("dictionary file not found at {0}")]
    NotFound(PathBuf),
    #[error("failed to read dictionary {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary at {0} contains no words")]
    Empty(PathBuf),
    #[error("failed to download dictionary: {0}")]
    Download(#[from] DownloadError),
    #[error("failed to open {path} in an editor: {source}")]
    Editor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
