use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;

/// Speech recognizer using whisper.cpp via whisper-rs.
///
/// The model is loaded once at construction and reused for every file in the
/// run. Expects 16 kHz mono audio.
pub struct WhisperRecognizer {
    model_path: PathBuf,
    language: String,
    ctx: WhisperContext,
}

impl WhisperRecognizer {
    pub fn new(model_path: &Path, language: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !model_path.exists() {
            return Err(format!("Whisper model not found at: {}", model_path.display()).into());
        }
        let ctx = WhisperContext::new_with_params(
            model_path.to_str().ok_or("Invalid model path")?,
            WhisperContextParameters::default(),
        )
        .map_err(|e| format!("Failed to load Whisper model: {e}"))?;

        Ok(Self {
            model_path: model_path.to_path_buf(),
            language: language.to_string(),
            ctx,
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn transcribe(&self, audio: &AudioSegment) -> Result<String, Box<dyn std::error::Error>> {
        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| format!("Failed to create Whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some(&self.language));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state
            .full(params, audio.samples())
            .map_err(|e| format!("Whisper inference failed: {e}"))?;

        // Segment text is decoded whole: a multi-byte character may span
        // several BPE tokens that are not valid UTF-8 on their own.
        let mut segments = Vec::new();
        for seg_idx in 0..state.full_n_segments() {
            let Some(segment) = state.get_segment(seg_idx) else {
                continue;
            };
            match segment.to_str_lossy() {
                Ok(text) => segments.push(text.into_owned()),
                Err(e) => log::debug!("Skipping undecodable segment {seg_idx}: {e}"),
            }
        }

        Ok(assemble_transcript(&segments))
    }
}

/// Join segment texts, dropping non-speech annotations such as `[Musica]`
/// and collapsing whitespace.
fn assemble_transcript<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .flat_map(|s| s.as_ref().split_whitespace())
        .filter(|word| !is_annotation(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_annotation(word: &str) -> bool {
    (word.starts_with('[') && word.ends_with(']')) || (word.starts_with("<|") && word.ends_with("|>"))
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
