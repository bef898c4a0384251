use std::path::Path;

use crate::dictionary::domain::dictionary_error::DictionaryError;
use crate::shared::download::download;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded,
    /// The destination already existed and `force` was not set.
    AlreadyPresent,
}

/// Fetch the bad word list from `url` into `dest`.
pub fn download_dictionary(
    url: &str,
    dest: &Path,
    force: bool,
) -> Result<DownloadOutcome, DictionaryError> {
    if dest.exists() && !force {
        log::info!(
            "Dictionary already exists at {}. Use --force to overwrite.",
            dest.display()
        );
        return Ok(DownloadOutcome::AlreadyPresent);
    }

    download(url, dest, None)?;
    log::info!("Dictionary downloaded successfully to {}", dest.display());
    Ok(DownloadOutcome::Downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const BAD_URL: &str = "http://invalid.nonexistent.example.com/words.txt";

    #[test]
    fn test_existing_file_is_kept_without_force() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("badwords-it.txt");
        fs::write(&dest, "mine\n").unwrap();

        let outcome = download_dictionary(BAD_URL, &dest, false).unwrap();
        assert_eq!(outcome, DownloadOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "mine\n");
    }

    #[test]
    fn test_force_attempts_download_and_keeps_file_on_failure() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("badwords-it.txt");
        fs::write(&dest, "mine\n").unwrap();

        let result = download_dictionary(BAD_URL, &dest, true);
        assert!(matches!(result, Err(DictionaryError::Download(_))));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "mine\n");
    }

    #[test]
    #[ignore] // Requires network access
    fn test_download_default_dictionary() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("badwords-it.txt");
        let outcome =
            download_dictionary(crate::shared::constants::DEFAULT_DICT_URL, &dest, false).unwrap();
        assert_eq!(outcome, DownloadOutcome::Downloaded);
        assert!(!fs::read_to_string(&dest).unwrap().is_empty());
    }
}
