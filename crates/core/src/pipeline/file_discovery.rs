use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::shared::constants::AUDIO_EXTENSIONS;

/// List the audio files in `folder`, descending into subfolders when
/// `recursive` is set. Symlinked directories are not followed. The result is
/// sorted by path so discovery order is stable across runs.
pub fn discover_audio_files(folder: &Path, recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(folder).follow_links(false);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_audio_file(path) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
