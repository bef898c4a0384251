use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::pipeline::quarantine::Quarantine;
use crate::pipeline::scan_executor::{DecodeResult, ScanExecutor};
use crate::pipeline::scan_logger::ScanLogger;
use crate::reporting::domain::aggregate_report::render_aggregate_report;
use crate::reporting::domain::file_report::render_file_report;
use crate::reporting::domain::report_writer::{ReportWriteError, ReportWriter, TranscriptWriter};
use crate::reporting::domain::scan_results::{FileResult, ScanResults};
use crate::scanning::domain::bad_word_matcher::BadWordMatcher;
use crate::scanning::domain::match_mode::MatchMode;
use crate::scanning::domain::word_set::WordSet;
use crate::shared::constants::WHISPER_SAMPLE_RATE;

/// Outcome of a completed scan.
#[derive(Debug)]
pub struct ScanSummary {
    /// Files with at least one match, in discovery order.
    pub results: ScanResults,
    pub total_files: usize,
    /// Display names of files that could not be decoded or transcribed.
    pub failed_files: Vec<String>,
    pub quarantined: Vec<PathBuf>,
    pub report_errors: Vec<ReportWriteError>,
    pub aggregate_report: Option<PathBuf>,
}

/// Optional side effects of a scan.
#[derive(Default)]
pub struct ScanOutputs {
    pub transcript_writer: Option<Box<dyn TranscriptWriter>>,
    pub quarantine: Option<Box<dyn Quarantine>>,
}

/// Transcribes each file, matches bad words, writes per-file reports, and
/// finishes with the aggregate report once every file has been seen.
pub struct ScanFilesUseCase {
    reader: Box<dyn AudioReader>,
    recognizer: Box<dyn SpeechRecognizer>,
    executor: Box<dyn ScanExecutor>,
    report_writer: Box<dyn ReportWriter>,
    outputs: ScanOutputs,
    words: WordSet,
    mode: MatchMode,
}

/// Mutable state of one run. Only the executor's callback touches it.
struct RunState {
    total_files: usize,
    processed: usize,
    results: ScanResults,
    failed_files: Vec<String>,
    quarantined: Vec<PathBuf>,
    report_errors: Vec<ReportWriteError>,
}

impl ScanFilesUseCase {
    pub fn new(
        reader: Box<dyn AudioReader>,
        recognizer: Box<dyn SpeechRecognizer>,
        executor: Box<dyn ScanExecutor>,
        report_writer: Box<dyn ReportWriter>,
        outputs: ScanOutputs,
        words: WordSet,
        mode: MatchMode,
    ) -> Self {
        Self {
            reader,
            recognizer,
            executor,
            report_writer,
            outputs,
            words,
            mode,
        }
    }

    pub fn run(
        self,
        files: &[PathBuf],
        logger: &mut dyn ScanLogger,
    ) -> Result<ScanSummary, Box<dyn std::error::Error>> {
        let Self {
            reader,
            recognizer,
            executor,
            report_writer,
            outputs,
            words,
            mode,
        } = self;

        logger.info(&format!(
            "Scanning {} files for {} bad words ({mode} match)",
            files.len(),
            words.len()
        ));

        let mut state = RunState {
            total_files: files.len(),
            processed: 0,
            results: ScanResults::new(),
            failed_files: Vec::new(),
            quarantined: Vec::new(),
            report_errors: Vec::new(),
        };
        let ctx = FileContext {
            recognizer: &*recognizer,
            report_writer: &*report_writer,
            outputs: &outputs,
            words: &words,
            mode,
        };

        let mut decode_started = Instant::now();
        executor.execute(
            reader,
            files,
            WHISPER_SAMPLE_RATE,
            &mut |path: &Path, decoded: DecodeResult| {
                logger.timing("decode", elapsed_ms(decode_started));
                ctx.process_file(path, decoded, &mut state, &mut *logger);
                state.processed += 1;
                logger.progress(state.processed, state.total_files);
                decode_started = Instant::now();
            },
        )?;

        let aggregate = render_aggregate_report(&state.results, state.total_files);
        let aggregate_report = match report_writer.write_aggregate_report(&aggregate) {
            Ok(path) => {
                logger.info(&format!("Generated aggregated report at {}", path.display()));
                Some(path)
            }
            Err(e) => {
                log::error!("{e}");
                state.report_errors.push(e);
                None
            }
        };

        logger.summary();

        Ok(ScanSummary {
            results: state.results,
            total_files: state.total_files,
            failed_files: state.failed_files,
            quarantined: state.quarantined,
            report_errors: state.report_errors,
            aggregate_report,
        })
    }
}

struct FileContext<'a> {
    recognizer: &'a dyn SpeechRecognizer,
    report_writer: &'a dyn ReportWriter,
    outputs: &'a ScanOutputs,
    words: &'a WordSet,
    mode: MatchMode,
}

impl FileContext<'_> {
    fn process_file(
        &self,
        path: &Path,
        decoded: DecodeResult,
        state: &mut RunState,
        logger: &mut dyn ScanLogger,
    ) {
        let name = display_name(path);
        logger.info(&format!("Processing {name}..."));

        let audio = match decoded {
            Ok(Some(audio)) if !audio.is_empty() => audio,
            Ok(_) => {
                log::warn!("{name} has no audio, skipping");
                return;
            }
            Err(e) => {
                log::error!("Failed to decode {name}: {e}");
                state.failed_files.push(name);
                return;
            }
        };

        log::debug!("Transcribing {name} ({:.1}s of audio)", audio.duration());
        let started = Instant::now();
        let transcript = match self.recognizer.transcribe(&audio) {
            Ok(text) => text,
            Err(e) => {
                log::error!("Failed to transcribe {name}: {e}");
                state.failed_files.push(name);
                return;
            }
        };
        logger.timing("transcribe", elapsed_ms(started));

        if transcript.trim().is_empty() {
            log::info!("No speech recognized in {name}");
            return;
        }
        log::debug!("Transcript of {name}: {transcript}");

        if let Some(ref writer) = self.outputs.transcript_writer {
            match writer.write_transcript(path, &transcript) {
                Ok(saved) => log::info!("Transcription saved to {}", saved.display()),
                Err(e) => log::error!("{e}"),
            }
        }

        let started = Instant::now();
        let counts = BadWordMatcher::find_matches(&transcript, self.words, self.mode);
        logger.timing("match", elapsed_ms(started));

        let Some(report) = render_file_report(&name, &counts) else {
            log::debug!("{name} is clean");
            return;
        };
        log::warn!("{name}: {} bad words found", counts.total());
        state.results.insert(FileResult::new(name.clone(), counts));

        match self.report_writer.write_file_report(&name, &report) {
            Ok(saved) => log::info!("Generated per-file report for {name} at {}", saved.display()),
            Err(e) => {
                log::error!("{e}");
                state.report_errors.push(e);
            }
        }

        if let Some(ref quarantine) = self.outputs.quarantine {
            match quarantine.quarantine(path) {
                Ok(dest) => {
                    log::info!("Moved {name} to {}", dest.display());
                    state.quarantined.push(dest);
                }
                Err(e) => log::error!("Failed to quarantine {name}: {e}"),
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
