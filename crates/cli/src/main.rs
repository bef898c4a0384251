mod logging;
mod settings;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use badwords_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use badwords_core::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use badwords_core::dictionary::infrastructure::dictionary_downloader::download_dictionary;
use badwords_core::dictionary::infrastructure::dictionary_editor::edit_dictionary;
use badwords_core::dictionary::infrastructure::dictionary_file::load_word_set;
use badwords_core::pipeline::file_discovery::discover_audio_files;
use badwords_core::pipeline::infrastructure::threaded_scan_executor::ThreadedScanExecutor;
use badwords_core::pipeline::quarantine::FsQuarantine;
use badwords_core::pipeline::scan_executor::{ScanExecutor, SequentialScanExecutor};
use badwords_core::pipeline::scan_files_use_case::{ScanFilesUseCase, ScanOutputs};
use badwords_core::pipeline::scan_logger::StdoutScanLogger;
use badwords_core::reporting::infrastructure::fs_report_writer::{
    FsReportWriter, SiblingTranscriptWriter,
};
use badwords_core::shared::config_error::ConfigError;
use badwords_core::shared::constants::{WHISPER_MODEL_NAME, WHISPER_MODEL_URL};
use badwords_core::shared::model_resolver;

use settings::{FileSettings, Options};

/// Transcribe MP3 files and report the bad words spoken in them.
#[derive(Parser, Debug)]
#[command(name = "badwordschecker", version)]
pub struct Cli {
    /// Folder containing MP3 files (default: current directory).
    mp3_folder: Option<PathBuf>,

    /// Download the bad word list and exit (default path: the --dict path).
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    download_dict: Option<Option<PathBuf>>,

    /// Overwrite an existing dictionary when downloading.
    #[arg(long)]
    force: bool,

    /// Bad word list, one word per line.
    #[arg(long, value_name = "PATH")]
    dict: Option<PathBuf>,

    /// URL the dictionary is downloaded from.
    #[arg(long, value_name = "URL")]
    dict_url: Option<String>,

    /// Open the dictionary in the system editor and exit.
    #[arg(long)]
    edit_dict: bool,

    /// Match mode: exact or substring.
    #[arg(long)]
    match_mode: Option<String>,

    /// Move files containing bad words into this folder.
    #[arg(long, value_name = "DIR")]
    quarantine: Option<PathBuf>,

    /// Scan subfolders too.
    #[arg(long)]
    recursive: bool,

    /// Enable debug logging.
    #[arg(long)]
    verbose: bool,

    /// Log format: text or json.
    #[arg(long)]
    log_format: Option<String>,

    /// Whisper model file (downloaded to the cache when omitted).
    #[arg(long, value_name = "PATH")]
    model_path: Option<PathBuf>,

    /// Spoken language passed to the recognizer.
    #[arg(long)]
    language: Option<String>,

    /// Folder for per-file and summary reports.
    #[arg(long, value_name = "DIR")]
    reports_dir: Option<PathBuf>,

    /// Do not save transcripts next to the MP3 files.
    #[arg(long)]
    no_save_transcripts: bool,

    /// Decode and transcribe on a single thread.
    #[arg(long)]
    sequential: bool,

    /// Settings file (default: ./badwordschecker.json, then the user config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let file_settings = FileSettings::load(cli.config.as_deref())?;
    let opts = Options::resolve(&cli, file_settings)?;

    logging::init(opts.verbose, opts.log_format);

    if let Some(dest) = &opts.download_dict {
        download_dictionary(&opts.dict_url, dest, opts.force)?;
        return Ok(());
    }

    if opts.edit_dict {
        edit_dictionary(&opts.dict)?;
        return Ok(());
    }

    run_scan(&opts)
}

fn run_scan(opts: &Options) -> Result<(), Box<dyn std::error::Error>> {
    if !opts.mp3_folder.is_dir() {
        return Err(ConfigError::FolderNotFound(opts.mp3_folder.clone()).into());
    }

    let words = load_word_set(&opts.dict)?;
    log::info!("Loaded {} bad words from {}", words.len(), opts.dict.display());

    let files = discover_audio_files(&opts.mp3_folder, opts.recursive)?;
    if files.is_empty() {
        log::info!("No MP3 files found in {}", opts.mp3_folder.display());
        return Ok(());
    }
    log::info!("Found {} MP3 files", files.len());

    let model_path = resolve_model(opts.model_path.as_deref())?;
    log::info!("Loading speech model from {}", model_path.display());
    let recognizer = WhisperRecognizer::new(&model_path, &opts.language)?;

    let executor: Box<dyn ScanExecutor> = if opts.sequential {
        Box::new(SequentialScanExecutor)
    } else {
        Box::new(ThreadedScanExecutor::new())
    };

    let mut outputs = ScanOutputs::default();
    if opts.save_transcripts {
        outputs.transcript_writer = Some(Box::new(SiblingTranscriptWriter));
    }
    if let Some(dir) = &opts.quarantine {
        outputs.quarantine = Some(Box::new(FsQuarantine::new(dir)));
    }

    let use_case = ScanFilesUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(recognizer),
        executor,
        Box::new(FsReportWriter::new(&opts.reports_dir)),
        outputs,
        words,
        opts.match_mode,
    );

    let mut logger = StdoutScanLogger::new();
    let summary = use_case.run(&files, &mut logger)?;

    if !summary.failed_files.is_empty() {
        log::warn!(
            "{} files could not be processed: {}",
            summary.failed_files.len(),
            summary.failed_files.join(", ")
        );
    }
    if !summary.quarantined.is_empty() {
        log::info!("Quarantined {} files", summary.quarantined.len());
    }
    log::info!("Processing complete.");
    Ok(())
}

fn resolve_model(explicit: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::ModelNotFound(path.to_path_buf()).into());
        }
        return Ok(path.to_path_buf());
    }

    log::info!("Resolving model: {WHISPER_MODEL_NAME}");
    let path = model_resolver::resolve(
        WHISPER_MODEL_NAME,
        WHISPER_MODEL_URL,
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();
    Ok(path)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech model... {pct}%");
    } else {
        eprint!("\rDownloading speech model... {downloaded} bytes");
    }
}
