use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use badwords_core::scanning::domain::match_mode::MatchMode;
use badwords_core::shared::config_error::ConfigError;
use badwords_core::shared::constants::{
    DEFAULT_DICT_PATH, DEFAULT_DICT_URL, DEFAULT_LANGUAGE, DEFAULT_REPORTS_DIR,
};

use crate::logging::LogFormat;
use crate::Cli;

pub const SETTINGS_FILENAME: &str = "badwordschecker.json";

/// Values read from a `badwordschecker.json` settings file. Every key is optional.
///
/// Keys carry the names of the former `badwordschecker.ini` options, without
/// the `[options]`/`[dictionary]` sections. The INI file itself is not read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub dict: Option<PathBuf>,
    pub dict_url: Option<String>,
    pub match_mode: Option<String>,
    pub quarantine: Option<PathBuf>,
    pub recursive: Option<bool>,
    pub verbose: Option<bool>,
    pub force: Option<bool>,
    pub log_format: Option<String>,
    pub model_path: Option<PathBuf>,
    pub language: Option<String>,
    pub reports_dir: Option<PathBuf>,
    pub save_transcripts: Option<bool>,
}

impl FileSettings {
    /// Load settings from `explicit` if given, otherwise from the first
    /// settings file found in the working directory or the user config
    /// directory. No file at all yields empty settings.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::SettingsNotFound(path.to_path_buf()));
            }
            return Self::from_path(path);
        }

        match search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::SettingsRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ConfigError::SettingsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SETTINGS_FILENAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("BadWordsChecker").join(SETTINGS_FILENAME));
    }
    paths
}

/// Effective options for a run: CLI flag, then settings file, then default.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub mp3_folder: PathBuf,
    pub download_dict: Option<PathBuf>,
    pub edit_dict: bool,
    pub dict: PathBuf,
    pub dict_url: String,
    pub match_mode: MatchMode,
    pub quarantine: Option<PathBuf>,
    pub recursive: bool,
    pub verbose: bool,
    pub force: bool,
    pub log_format: LogFormat,
    pub model_path: Option<PathBuf>,
    pub language: String,
    pub reports_dir: PathBuf,
    pub save_transcripts: bool,
    pub sequential: bool,
}

impl Options {
    pub fn resolve(cli: &Cli, file: FileSettings) -> Result<Self, ConfigError> {
        let dict = cli
            .dict
            .clone()
            .or(file.dict)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DICT_PATH));

        let match_mode = match cli.match_mode.as_ref().or(file.match_mode.as_ref()) {
            Some(mode) => mode.parse()?,
            None => MatchMode::default(),
        };
        let log_format = match cli.log_format.as_ref().or(file.log_format.as_ref()) {
            Some(format) => format.parse()?,
            None => LogFormat::default(),
        };

        // `--download-dict` without a value targets the configured dictionary
        let download_dict = cli
            .download_dict
            .as_ref()
            .map(|dest| dest.clone().unwrap_or_else(|| dict.clone()));

        Ok(Self {
            mp3_folder: cli.mp3_folder.clone().unwrap_or_else(|| PathBuf::from(".")),
            download_dict,
            edit_dict: cli.edit_dict,
            dict,
            dict_url: cli
                .dict_url
                .clone()
                .or(file.dict_url)
                .unwrap_or_else(|| DEFAULT_DICT_URL.to_string()),
            match_mode,
            quarantine: cli.quarantine.clone().or(file.quarantine),
            recursive: flag(cli.recursive, file.recursive, false),
            verbose: flag(cli.verbose, file.verbose, false),
            force: flag(cli.force, file.force, false),
            log_format,
            model_path: cli.model_path.clone().or(file.model_path),
            language: cli
                .language
                .clone()
                .or(file.language)
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            reports_dir: cli
                .reports_dir
                .clone()
                .or(file.reports_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_DIR)),
            save_transcripts: !cli.no_save_transcripts && file.save_transcripts.unwrap_or(true),
            sequential: cli.sequential,
        })
    }
}

/// A flag given on the command line wins; an absent flag defers to the file.
fn flag(cli: bool, file: Option<bool>, default: bool) -> bool {
    cli || file.unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("badwordschecker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_flags_or_file() {
        let opts = Options::resolve(&cli(&[]), FileSettings::default()).unwrap();
        assert_eq!(opts.mp3_folder, PathBuf::from("."));
        assert_eq!(opts.dict, PathBuf::from("badwords-it.txt"));
        assert_eq!(opts.dict_url, DEFAULT_DICT_URL);
        assert_eq!(opts.match_mode, MatchMode::Exact);
        assert_eq!(opts.log_format, LogFormat::Text);
        assert_eq!(opts.reports_dir, PathBuf::from("parolacce"));
        assert_eq!(opts.language, "it");
        assert!(opts.save_transcripts);
        assert!(!opts.recursive && !opts.verbose && !opts.force);
        assert!(opts.quarantine.is_none());
        assert!(opts.download_dict.is_none());
    }

    #[test]
    fn test_file_values_apply_when_flags_absent() {
        let file = FileSettings {
            match_mode: Some("substring".into()),
            recursive: Some(true),
            quarantine: Some(PathBuf::from("q")),
            save_transcripts: Some(false),
            ..Default::default()
        };
        let opts = Options::resolve(&cli(&[]), file).unwrap();
        assert_eq!(opts.match_mode, MatchMode::Substring);
        assert!(opts.recursive);
        assert_eq!(opts.quarantine, Some(PathBuf::from("q")));
        assert!(!opts.save_transcripts);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileSettings {
            match_mode: Some("substring".into()),
            dict: Some(PathBuf::from("from_file.txt")),
            verbose: Some(false),
            ..Default::default()
        };
        let opts = Options::resolve(
            &cli(&["--match-mode", "exact", "--dict", "cli.txt", "--verbose"]),
            file,
        )
        .unwrap();
        assert_eq!(opts.match_mode, MatchMode::Exact);
        assert_eq!(opts.dict, PathBuf::from("cli.txt"));
        assert!(opts.verbose);
    }

    #[test]
    fn test_invalid_match_mode_is_config_error() {
        let result = Options::resolve(&cli(&["--match-mode", "fuzzy"]), FileSettings::default());
        assert!(matches!(result, Err(ConfigError::InvalidMatchMode(_))));

        let file = FileSettings {
            match_mode: Some("EXACT".into()),
            ..Default::default()
        };
        assert!(Options::resolve(&cli(&[]), file).is_err());
    }

    #[test]
    fn test_download_dict_without_value_uses_dict_path() {
        let opts = Options::resolve(
            &cli(&["--dict", "mine.txt", "--download-dict"]),
            FileSettings::default(),
        )
        .unwrap();
        assert_eq!(opts.download_dict, Some(PathBuf::from("mine.txt")));

        let opts =
            Options::resolve(&cli(&["--download-dict", "other.txt"]), FileSettings::default())
                .unwrap();
        assert_eq!(opts.download_dict, Some(PathBuf::from("other.txt")));
    }

    #[test]
    fn test_load_explicit_settings_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.json");
        fs::write(&path, r#"{"match_mode": "substring", "recursive": true}"#).unwrap();

        let settings = FileSettings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.match_mode.as_deref(), Some("substring"));
        assert_eq!(settings.recursive, Some(true));
        assert!(settings.dict.is_none());
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = FileSettings::load(Some(tmp.path().join("absent.json").as_path()));
        assert!(matches!(result, Err(ConfigError::SettingsNotFound(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, r#"{"matchmode": "exact"}"#).unwrap();

        let result = FileSettings::from_path(&path);
        assert!(matches!(result, Err(ConfigError::SettingsParse { .. })));
    }

    #[test]
    fn test_keys_migrated_from_ini_are_accepted() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(SETTINGS_FILENAME);
        fs::write(
            &path,
            r#"{
                "force": true,
                "match_mode": "substring",
                "quarantine": "quarantena",
                "recursive": true,
                "verbose": false,
                "log_format": "json",
                "model_path": "models/ggml-base.bin",
                "dict": "custom.txt",
                "dict_url": "http://example.com/dict.txt"
            }"#,
        )
        .unwrap();

        let opts = Options::resolve(&cli(&[]), FileSettings::from_path(&path).unwrap()).unwrap();
        assert!(opts.force && opts.recursive && !opts.verbose);
        assert_eq!(opts.match_mode, MatchMode::Substring);
        assert_eq!(opts.log_format, LogFormat::Json);
        assert_eq!(opts.dict, PathBuf::from("custom.txt"));
        assert_eq!(opts.dict_url, "http://example.com/dict.txt");
        assert_eq!(opts.quarantine, Some(PathBuf::from("quarantena")));
        assert_eq!(opts.model_path, Some(PathBuf::from("models/ggml-base.bin")));
    }
}
