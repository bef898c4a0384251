use std::fmt;
use std::io::Write;
use std::str::FromStr;

use badwords_core::shared::config_error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Install the global logger, writing to stdout.
///
/// `RUST_LOG` still takes precedence over the level implied by `verbose`.
pub fn init(verbose: bool, format: LogFormat) {
    let level = if verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    builder.target(env_logger::Target::Stdout);

    match format {
        LogFormat::Text => builder.format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "{timestamp} - {} - {} - {}",
                record.target(),
                record.level(),
                record.args()
            )
        }),
        LogFormat::Json => builder.format(|buf, record| {
            let timestamp = buf.timestamp().to_string();
            let line = json_line(
                &timestamp,
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{line}")
        }),
    };

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}

fn json_line(timestamp: &str, level: log::Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "timestamp": timestamp,
        "level": level.as_str(),
        "target": target,
        "message": message,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }

    #[test]
    fn test_json_line_is_one_object_per_line() {
        let line = json_line(
            "2024-01-01T00:00:00Z",
            log::Level::Warn,
            "badwords_core::pipeline",
            "a \"quoted\"\nmessage",
        );
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "badwords_core::pipeline");
        assert_eq!(value["message"], "a \"quoted\"\nmessage");
        assert_eq!(value["timestamp"], "2024-01-01T00:00:00Z");
    }
}
