use std::path::Path;

use ffmpeg_next::format::{sample, Sample};
use ffmpeg_next::software::resampling;
use ffmpeg_next::util::frame::audio::Audio;
use ffmpeg_next::{codec, decoder, media, ChannelLayout, Packet};

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_segment::AudioSegment;

/// Decodes MP3 (and anything else ffmpeg understands) into mono f32 PCM.
pub struct FfmpegAudioReader;

impl AudioReader for FfmpegAudioReader {
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;
        let mut input = ffmpeg_next::format::input(path)?;

        let Some(stream) = input.streams().best(media::Type::Audio) else {
            return Ok(None);
        };
        let stream_index = stream.index();
        let mut mono = MonoDecoder::open(stream.parameters(), target_sample_rate)?;

        for (stream, packet) in input.packets() {
            if stream.index() == stream_index {
                mono.feed(&packet)?;
            }
        }
        let samples = mono.finish()?;

        log::debug!(
            "Decoded {} samples at {target_sample_rate} Hz from {}",
            samples.len(),
            path.display()
        );
        Ok(Some(AudioSegment::mono(samples, target_sample_rate)))
    }
}

/// Audio decoder chained to a mono resampler, accumulating samples.
struct MonoDecoder {
    decoder: decoder::Audio,
    resampler: resampling::Context,
    decoded: Audio,
    resampled: Audio,
    samples: Vec<f32>,
}

impl MonoDecoder {
    fn open(
        parameters: codec::Parameters,
        target_sample_rate: u32,
    ) -> Result<Self, ffmpeg_next::Error> {
        let decoder = codec::context::Context::from_parameters(parameters)?
            .decoder()
            .audio()?;
        let resampler = resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            Sample::F32(sample::Type::Planar),
            ChannelLayout::MONO,
            target_sample_rate,
        )?;
        Ok(Self {
            decoder,
            resampler,
            decoded: Audio::empty(),
            resampled: Audio::empty(),
            samples: Vec::new(),
        })
    }

    fn feed(&mut self, packet: &Packet) -> Result<(), ffmpeg_next::Error> {
        self.decoder.send_packet(packet)?;
        self.drain()
    }

    fn drain(&mut self) -> Result<(), ffmpeg_next::Error> {
        while self.decoder.receive_frame(&mut self.decoded).is_ok() {
            self.resampler.run(&self.decoded, &mut self.resampled)?;
            append_plane(&self.resampled, &mut self.samples);
        }
        Ok(())
    }

    /// Flush decoder and resampler, returning every sample decoded.
    fn finish(mut self) -> Result<Vec<f32>, ffmpeg_next::Error> {
        self.decoder.send_eof()?;
        self.drain()?;

        // the resampler may still hold a tail of buffered input
        if let Ok(Some(delay)) = self.resampler.flush(&mut self.resampled) {
            if delay.output > 0 {
                append_plane(&self.resampled, &mut self.samples);
            }
        }
        Ok(self.samples)
    }
}

/// Append the first (mono) plane of a resampled f32 frame.
fn append_plane(frame: &Audio, out: &mut Vec<f32>) {
    let count = frame.samples();
    if count == 0 {
        return;
    }
    let bytes = frame.data(0);
    // SAFETY: the resampler outputs planar f32, so plane 0 holds `count` floats
    let floats = unsafe { std::slice::from_raw_parts(bytes.as_ptr() as *const f32, count) };
    out.extend_from_slice(floats);
}
