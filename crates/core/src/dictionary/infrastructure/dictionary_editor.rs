use std::path::Path;

use crate::dictionary::domain::dictionary_error::DictionaryError;

/// Open the dictionary with the platform's default application for text files.
pub fn edit_dictionary(path: &Path) -> Result<(), DictionaryError> {
    if !path.exists() {
        return Err(DictionaryError::NotFound(path.to_path_buf()));
    }
    open::that(path).map_err(|e| DictionaryError::Editor {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("Opened {} in the default editor", path.display());
    Ok(())
}
