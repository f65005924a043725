//! Line-pair parser for the ranking file format.

use super::CpuEntry;
use crate::error::ParseError;
use std::collections::HashSet;

/// Turn alternating name/score lines into entries.
///
/// An odd number of non-blank lines is always `TruncatedInput`. Blank lines
/// at the very end are dropped; anywhere else they count as lines. Line
/// numbers in errors are 1-based.
pub(super) fn parse_pairs<S: AsRef<str>>(lines: &[S]) -> Result<Vec<CpuEntry>, ParseError> {
    let non_blank = lines
        .iter()
        .filter(|line| !line.as_ref().trim().is_empty())
        .count();
    if non_blank % 2 != 0 {
        return Err(ParseError::TruncatedInput);
    }

    let significant = lines
        .iter()
        .rposition(|line| !line.as_ref().trim().is_empty())
        .map_or(0, |last| last + 1);
    let lines = &lines[..significant];

    if lines.len() % 2 != 0 {
        return Err(ParseError::TruncatedInput);
    }

    let mut entries = Vec::with_capacity(lines.len() / 2);
    for (pair, chunk) in lines.chunks_exact(2).enumerate() {
        let name_line = pair * 2 + 1;
        let name = chunk[0].as_ref().trim();
        if name.is_empty() {
            return Err(ParseError::EmptyName(name_line));
        }
        let score = chunk[1]
            .as_ref()
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidScore(name_line + 1))?;
        entries.push(CpuEntry::new(name, score));
    }
    Ok(entries)
}

/// Duplicate names are kept, but only the first is reachable through `find`.
pub(super) fn warn_on_duplicates(entries: &[CpuEntry]) {
    let mut seen = HashSet::with_capacity(entries.len());
    for (row, entry) in entries.iter().enumerate() {
        if !seen.insert(entry.name.as_str()) {
            tracing::warn!(
                name = %entry.name,
                row,
                "Duplicate CPU name in catalog; lookups use the first entry"
            );
        }
    }
}
