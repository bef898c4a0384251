use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("download failed for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Fetch `url` into `dest`.
///
/// The body is written to `<dest>.part` first and renamed on success, so a
/// failed download never leaves a truncated file at `dest`.
pub fn download(url: &str, dest: &Path, progress: Option<ProgressFn>) -> Result<(), DownloadError> {
    let request_err = |e: reqwest::Error| DownloadError::Request {
        url: url.to_string(),
        source: e,
    };

    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(request_err)?;

    let total = response.content_length().unwrap_or(0);
    let bytes = response.bytes().map_err(request_err)?;

    let temp_path = dest.with_extension("part");
    let write_err = |e: std::io::Error| DownloadError::Write {
        path: temp_path.clone(),
        source: e,
    };
    let mut file = fs::File::create(&temp_path).map_err(write_err)?;

    // Report progress in chunks to avoid excessive callbacks
    let chunk_size = 1024 * 1024;
    let mut downloaded: u64 = 0;
    for chunk in bytes.chunks(chunk_size) {
        if let Err(e) = file.write_all(chunk) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_err(e));
        }
        downloaded += chunk.len() as u64;
        if let Some(ref cb) = progress {
            cb(downloaded, total);
        }
    }

    file.flush().map_err(write_err)?;
    drop(file);

    fs::rename(&temp_path, dest).map_err(|e| DownloadError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_download_invalid_url_returns_error() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("words.txt");
        let result = download("http://invalid.nonexistent.example.com/words", &dest, None);
        assert!(matches!(result, Err(DownloadError::Request { .. })));
    }

    #[test]
    fn test_download_atomic_no_partial_on_failure() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("model.bin");
        let _ = download("http://invalid.nonexistent.example.com/model", &dest, None);
        assert!(!dest.exists());
        assert!(!dest.with_extension("part").exists());
    }

    #[test]
    #[ignore] // Requires network access
    fn test_download_to_file_reports_progress() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("robots.txt");

        let progress_called = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = progress_called.clone();

        let result = download(
            "https://www.google.com/robots.txt",
            &dest,
            Some(Box::new(move |_downloaded, _total| {
                flag.store(true, std::sync::atomic::Ordering::Relaxed);
            })),
        );
        assert!(result.is_ok(), "download failed: {:?}", result.err());
        assert!(!fs::read(&dest).unwrap().is_empty());
        assert!(progress_called.load(std::sync::atomic::Ordering::Relaxed));
    }
}
