/// Decoded PCM audio, interleaved when `channels > 1`, samples in [-1.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSegment {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioSegment {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Single-channel audio, the layout the recognizer consumes.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(samples, sample_rate, 1)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Playback length in seconds; 0 for a malformed rate or channel count.
    pub fn duration(&self) -> f64 {
        let per_second = self.sample_rate as f64 * self.channels as f64;
        if per_second == 0.0 {
            return 0.0;
        }
        self.samples.len() as f64 / per_second
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::one_minute_speech(vec![0.0; 16000 * 60], 16000, 1, 60.0)]
    #[case::stereo_source(vec![0.0; 44100 * 2], 44100, 2, 1.0)]
    #[case::half_second(vec![0.0; 8000], 16000, 1, 0.5)]
    #[case::no_rate(vec![0.0; 10], 0, 1, 0.0)]
    #[case::no_channels(vec![0.0; 10], 16000, 0, 0.0)]
    fn test_duration(
        #[case] samples: Vec<f32>,
        #[case] rate: u32,
        #[case] channels: u16,
        #[case] expected: f64,
    ) {
        assert_eq!(AudioSegment::new(samples, rate, channels).duration(), expected);
    }

    #[test]
    fn test_mono_is_single_channel() {
        let seg = AudioSegment::mono(vec![0.25, -0.25], 16000);
        assert_eq!(seg.channels(), 1);
        assert_eq!(seg.sample_rate(), 16000);
        assert_eq!(seg.samples(), &[0.25, -0.25]);
    }

    #[test]
    fn test_empty_decode_result() {
        assert!(AudioSegment::mono(Vec::new(), 16000).is_empty());
        assert!(!AudioSegment::mono(vec![0.0], 16000).is_empty());
    }
}
