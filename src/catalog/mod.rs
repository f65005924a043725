//! CPU ranking catalog
//!
//! The catalog is the in-memory list of CPU names and benchmark scores read
//! from a flat text file. The file alternates lines:
//!
//! ```text
//! AMD Ryzen 9 7950X
//! 63421
//! Intel Core i9-13900K
//! 59623
//! ```
//!
//! A catalog is built once and never mutated. If the file changes, load a
//! new catalog.

mod entry;
mod loader;

pub use entry::CpuEntry;

use crate::error::ParseError;
use std::io::BufRead;
use std::path::Path;

/// Default catalog file name, looked up relative to the settings file.
pub const DEFAULT_DATA_FILE: &str = "cpu_ranking.txt";

/// Ordered, read-only list of CPU entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuCatalog {
    entries: Vec<CpuEntry>,
}

impl CpuCatalog {
    /// Load a catalog from a data file on disk.
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let text = std::fs::read_to_string(path).map_err(|cause| {
            ParseError::SourceUnavailable {
                origin: path.display().to_string(),
                cause,
            }
        })?;
        tracing::debug!(path = %path.display(), "Loading CPU catalog");
        Self::parse(&text)
    }

    /// Load a catalog from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|cause| ParseError::SourceUnavailable {
                origin: "reader".to_string(),
                cause,
            })?;
        Self::from_lines(&lines)
    }

    /// Parse catalog text already held in memory.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(&lines)
    }

    fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, ParseError> {
        let entries = loader::parse_pairs(lines)?;
        loader::warn_on_duplicates(&entries);
        tracing::info!(entries = entries.len(), "CPU catalog loaded");
        Ok(Self { entries })
    }

    /// Resolve a CPU by exact, case-sensitive name.
    ///
    /// Scans in file order and returns the first match, so when a name is
    /// duplicated only its first entry is ever visible here.
    pub fn find(&self, name: &str) -> Option<&CpuEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Entry at a table row.
    pub fn get(&self, index: usize) -> Option<&CpuEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CpuEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CpuEntry> {
        self.entries.iter()
    }

    /// CPU names in file order; the candidate set for selectors.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CpuCatalog {
    type Item = &'a CpuEntry;
    type IntoIter = std::slice::Iter<'a, CpuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
