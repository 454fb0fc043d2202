//! Output mode selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How arithmetic results are returned to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Native numbers
    #[default]
    Default,
    /// Textual representation of every result
    Stringify,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Default => "default",
            OutputMode::Stringify => "stringify",
        }
    }

    pub fn is_stringify(&self) -> bool {
        matches!(self, OutputMode::Stringify)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(OutputMode::Default),
            "stringify" => Ok(OutputMode::Stringify),
            other => Err(format!(
                "Invalid output mode '{}': expected 'default' or 'stringify'",
                other
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("stringify".parse::<OutputMode>().unwrap(), OutputMode::Stringify);
        assert_eq!("Default".parse::<OutputMode>().unwrap(), OutputMode::Default);
        assert!("json".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(OutputMode::default(), OutputMode::Default);
        assert!(!OutputMode::default().is_stringify());
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&OutputMode::Stringify).unwrap();
        assert_eq!(json, "\"stringify\"");
        let mode: OutputMode = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(mode, OutputMode::Default);
    }
}
