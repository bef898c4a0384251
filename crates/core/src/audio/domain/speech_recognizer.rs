use super::audio_segment::AudioSegment;

/// Domain interface for speech-to-text transcription.
///
/// Implementations run inference on mono audio and return the recognized text.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, audio: &AudioSegment) -> Result<String, Box<dyn std::error::Error>>;
}
