use serde::Serialize;
use std::fmt;

/// One row of the ranking: a CPU name and its benchmark score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuEntry {
    pub name: String,
    pub score: i64,
}

impl CpuEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for CpuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.score)
    }
}
