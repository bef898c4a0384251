pub const DEFAULT_DICT_URL: &str =
    "https://raw.githubusercontent.com/napolux/paroleitaliane/master/paroleitaliane/parole_proibite.txt";
pub const DEFAULT_DICT_PATH: &str = "badwords-it.txt";

pub const DEFAULT_REPORTS_DIR: &str = "parolacce";
pub const AGGREGATE_REPORT_FILENAME: &str = "parolacce.txt";
pub const FILE_REPORT_SUFFIX: &str = ".txt";

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3"];

/// Multilingual model; the English-only variants cannot transcribe Italian.
pub const WHISPER_MODEL_NAME: &str = "ggml-base.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.bin";
pub const WHISPER_SAMPLE_RATE: u32 = 16000;
pub const DEFAULT_LANGUAGE: &str = "it";
