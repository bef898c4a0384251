use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Moves offending files out of the scanned folder.
pub trait Quarantine: Send {
    /// Move `path` into quarantine and return its new location.
    fn quarantine(&self, path: &Path) -> io::Result<PathBuf>;
}

pub struct FsQuarantine {
    dir: PathBuf,
}

impl FsQuarantine {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Quarantine for FsQuarantine {
    fn quarantine(&self, path: &Path) -> io::Result<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no file name", path.display()),
            )
        })?;
        fs::create_dir_all(&self.dir)?;
        let dest = self.dir.join(file_name);

        // rename fails across filesystems; fall back to copy + remove
        if fs::rename(path, &dest).is_err() {
            fs::copy(path, &dest)?;
            fs::remove_file(path)?;
        }
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_moves_file_into_created_dir() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("rude.mp3");
        fs::write(&source, b"audio").unwrap();
        let quarantine = FsQuarantine::new(&tmp.path().join("quarantine"));

        let dest = quarantine.quarantine(&source).unwrap();
        assert_eq!(dest, tmp.path().join("quarantine").join("rude.mp3"));
        assert!(!source.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"audio");
    }

    #[test]
    fn test_missing_source_is_error() {
        let tmp = TempDir::new().unwrap();
        let quarantine = FsQuarantine::new(tmp.path());
        assert!(quarantine.quarantine(&tmp.path().join("ghost.mp3")).is_err());
    }
}
