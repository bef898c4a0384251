use std::fmt;
use std::str::FromStr;

use crate::shared::config_error::ConfigError;

/// How a bad word is compared against transcript tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The token must equal the bad word.
    #[default]
    Exact,
    /// The bad word must appear somewhere inside the token.
    Substring,
}

impl MatchMode {
    pub const ALL: &[MatchMode] = &[MatchMode::Exact, MatchMode::Substring];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Substring => "substring",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MatchMode::Exact),
            "substring" => Ok(MatchMode::Substring),
            other => Err(ConfigError::InvalidMatchMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact("exact", MatchMode::Exact)]
    #[case::substring("substring", MatchMode::Substring)]
    fn test_parse_valid(#[case] input: &str, #[case] expected: MatchMode) {
        assert_eq!(input.parse::<MatchMode>().unwrap(), expected);
    }

    #[rstest]
    #[case::uppercase("Exact")]
    #[case::unknown("fuzzy")]
    #[case::empty("")]
    fn test_parse_invalid_is_config_error(#[case] input: &str) {
        let err = input.parse::<MatchMode>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMatchMode(ref m) if m == input));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mode in MatchMode::ALL {
            assert_eq!(mode.to_string().parse::<MatchMode>().unwrap(), *mode);
        }
    }

    #[test]
    fn test_default_is_exact() {
        assert_eq!(MatchMode::default(), MatchMode::Exact);
    }
}
