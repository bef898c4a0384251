use std::path::{Path, PathBuf};

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_segment::AudioSegment;

pub type SendError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of decoding one file: `Ok(None)` when it has no audio stream.
pub type DecodeResult = Result<Option<AudioSegment>, SendError>;

/// Abstracts how files are decoded before transcription.
///
/// Implementations must deliver every file, in the given order, to
/// `on_decoded` on the calling thread, so whatever the callback owns is only
/// ever touched by one thread.
pub trait ScanExecutor: Send {
    fn execute(
        &self,
        reader: Box<dyn AudioReader>,
        files: &[PathBuf],
        sample_rate: u32,
        on_decoded: &mut dyn FnMut(&Path, DecodeResult),
    ) -> Result<(), Box<dyn std::error::Error>>;
}

/// Decodes each file just before it is handed to the callback.
pub struct SequentialScanExecutor;

impl ScanExecutor for SequentialScanExecutor {
    fn execute(
        &self,
        reader: Box<dyn AudioReader>,
        files: &[PathBuf],
        sample_rate: u32,
        on_decoded: &mut dyn FnMut(&Path, DecodeResult),
    ) -> Result<(), Box<dyn std::error::Error>> {
        for path in files {
            let decoded = reader
                .read_audio(path, sample_rate)
                .map_err(|e| -> SendError { e.to_string().into() });
            on_decoded(path, decoded);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubReader;

    impl AudioReader for StubReader {
        fn read_audio(
            &self,
            path: &Path,
            sample_rate: u32,
        ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>> {
            match path.to_str() {
                Some("broken.mp3") => Err("corrupt header".into()),
                Some("silent.mp3") => Ok(None),
                _ => Ok(Some(AudioSegment::new(vec![0.0; 4], sample_rate, 1))),
            }
        }
    }

    #[test]
    fn test_delivers_every_file_in_order() {
        let files: Vec<PathBuf> = ["a.mp3", "broken.mp3", "silent.mp3"]
            .iter()
            .map(PathBuf::from)
            .collect();
        let mut seen = Vec::new();
        SequentialScanExecutor
            .execute(Box::new(StubReader), &files, 16000, &mut |path, decoded| {
                let kind = match decoded {
                    Ok(Some(seg)) => format!("audio@{}", seg.sample_rate()),
                    Ok(None) => "none".to_string(),
                    Err(e) => format!("err:{e}"),
                };
                seen.push((path.to_path_buf(), kind));
            })
            .unwrap();

        assert_eq!(
            seen,
            vec![
                (PathBuf::from("a.mp3"), "audio@16000".to_string()),
                (PathBuf::from("broken.mp3"), "err:corrupt header".to_string()),
                (PathBuf::from("silent.mp3"), "none".to_string()),
            ]
        );
    }
}
