//! Score comparison between two catalog entries.

use crate::catalog::{CpuCatalog, CpuEntry};
use crate::error::CompareError;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Which of the two CPUs scored higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    FirstHigher,
    SecondHigher,
    Equal,
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Outcome::FirstHigher,
            Ordering::Less => Outcome::SecondHigher,
            Ordering::Equal => Outcome::Equal,
        }
    }
}

/// A completed comparison with both resolved entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub outcome: Outcome,
    pub first: CpuEntry,
    pub second: CpuEntry,
}

impl ComparisonResult {
    /// `first.score - second.score`; widened so extreme scores cannot overflow.
    pub fn difference(&self) -> i128 {
        i128::from(self.first.score) - i128::from(self.second.score)
    }

    /// The entry with the higher score, if the scores differ.
    pub fn winner(&self) -> Option<&CpuEntry> {
        match self.outcome {
            Outcome::FirstHigher => Some(&self.first),
            Outcome::SecondHigher => Some(&self.second),
            Outcome::Equal => None,
        }
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::FirstHigher => write!(
                f,
                "{} has a higher score than {}.",
                self.first.name, self.second.name
            ),
            Outcome::SecondHigher => write!(
                f,
                "{} has a higher score than {}.",
                self.second.name, self.first.name
            ),
            Outcome::Equal => write!(f, "Both CPUs have the same score."),
        }
    }
}

/// Resolve both names in `catalog` and compare their scores.
///
/// Empty names fail with [`CompareError::SelectionIncomplete`] before any
/// lookup. Lookup is exact and first-match (see [`CpuCatalog::find`]);
/// `first` is resolved before `second`, so when both are unknown the error
/// names `first`.
pub fn compare(
    catalog: &CpuCatalog,
    first: &str,
    second: &str,
) -> Result<ComparisonResult, CompareError> {
    if first.is_empty() || second.is_empty() {
        return Err(CompareError::SelectionIncomplete);
    }

    let first = resolve(catalog, first)?;
    let second = resolve(catalog, second)?;
    let outcome = Outcome::from(first.score.cmp(&second.score));

    tracing::debug!(
        first = %first.name,
        second = %second.name,
        ?outcome,
        "Compared CPU scores"
    );

    Ok(ComparisonResult {
        outcome,
        first: first.clone(),
        second: second.clone(),
    })
}

fn resolve<'a>(catalog: &'a CpuCatalog, name: &str) -> Result<&'a CpuEntry, CompareError> {
    catalog
        .find(name)
        .ok_or_else(|| CompareError::UnknownCpu(name.to_string()))
}
