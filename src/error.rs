use thiserror::Error;

/// Failures while reading a catalog data file.
///
/// All of these are fatal at startup: nothing works without a catalog.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("catalog data is truncated: every CPU name needs a score line")]
    TruncatedInput,

    #[error("line {0}: score is not a base-10 integer")]
    InvalidScore(usize),

    #[error("line {0}: CPU name is empty")]
    EmptyName(usize),

    #[error("catalog source {origin} is unavailable: {cause}")]
    SourceUnavailable {
        origin: String,
        #[source]
        cause: std::io::Error,
    },
}

/// Reasons a comparison did not complete. Recoverable; shown as advisory text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Please select two CPUs to compare.")]
    SelectionIncomplete,

    #[error("CPU '{0}' was not found in the catalog.")]
    UnknownCpu(String),
}

#[derive(Error, Debug)]
pub enum CpuCompareError {
    #[error("Catalog error: {0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Compare(#[from] CompareError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings YAML: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CpuCompareError>;
