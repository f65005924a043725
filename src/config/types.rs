use crate::catalog::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Root settings file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Catalog file with alternating name/score lines
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Default output format for `list`, `show`, `search` and `compare`
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            format: OutputFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.data_file, PathBuf::from("cpu_ranking.txt"));
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml_ng::from_str("format: json\n").unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.data_file, PathBuf::from("cpu_ranking.txt"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<Settings, _> = serde_yaml_ng::from_str("data_fiel: x.txt\n");
        assert!(result.is_err());
    }
}
