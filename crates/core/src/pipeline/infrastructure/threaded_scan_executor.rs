use std::path::{Path, PathBuf};

use crate::audio::domain::audio_reader::AudioReader;
use crate::pipeline::scan_executor::{DecodeResult, ScanExecutor, SendError};

const DEFAULT_CHANNEL_CAPACITY: usize = 2;

/// Decodes audio on a dedicated thread while the caller transcribes.
///
/// Layout: `reader thread → bounded channel → caller [transcribe/match/report]`
///
/// Decoding the next file overlaps with recognition of the current one. The
/// channel is bounded so at most a couple of decoded files sit in memory.
pub struct ThreadedScanExecutor {
    channel_capacity: usize,
}

impl ThreadedScanExecutor {
    pub fn new() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    pub fn with_capacity(channel_capacity: usize) -> Self {
        Self {
            channel_capacity: channel_capacity.max(1),
        }
    }
}

impl Default for ThreadedScanExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanExecutor for ThreadedScanExecutor {
    fn execute(
        &self,
        reader: Box<dyn AudioReader>,
        files: &[PathBuf],
        sample_rate: u32,
        on_decoded: &mut dyn FnMut(&Path, DecodeResult),
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (decoded_tx, decoded_rx) =
            crossbeam_channel::bounded::<(PathBuf, DecodeResult)>(self.channel_capacity);

        let reader_handle = spawn_reader(reader, files.to_vec(), sample_rate, decoded_tx);

        for (path, decoded) in decoded_rx {
            on_decoded(&path, decoded);
        }

        match reader_handle.join() {
            Ok(()) => Ok(()),
            Err(_) => Err("Decoder thread panicked".into()),
        }
    }
}

fn spawn_reader(
    reader: Box<dyn AudioReader>,
    files: Vec<PathBuf>,
    sample_rate: u32,
    decoded_tx: crossbeam_channel::Sender<(PathBuf, DecodeResult)>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        for path in files {
            let decoded = reader
                .read_audio(&path, sample_rate)
                .map_err(|e| -> SendError { e.to_string().into() });
            if decoded_tx.send((path, decoded)).is_err() {
                break;
            }
        }
    })
}
