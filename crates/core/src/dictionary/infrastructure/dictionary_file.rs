use std::fs;
use std::path::Path;

use crate::dictionary::domain::dictionary_error::DictionaryError;
use crate::scanning::domain::word_set::WordSet;

/// Load the bad word list from a UTF-8 text file, one word per line.
///
/// A missing file or a file with no usable words is an error.
pub fn load_word_set(path: &Path) -> Result<WordSet, DictionaryError> {
    if !path.exists() {
        return Err(DictionaryError::NotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(|e| DictionaryError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let words = WordSet::parse(&contents);
    if words.is_empty() {
        return Err(DictionaryError::Empty(path.to_path_buf()));
    }
    let unmatchable = words.unmatchable();
    if !unmatchable.is_empty() {
        log::warn!(
            "{} dictionary entries contain accents or punctuation and will never match: {}",
            unmatchable.len(),
            unmatchable.join(", ")
        );
    }
    log::debug!("Loaded {} bad words from {}", words.len(), path.display());
    Ok(words)
}
