//! Searchable selection over catalog names.
//!
//! Filtering is a case-insensitive "contains" match that keeps candidate
//! order. An empty query shows nothing at all: suggestions only appear once
//! the user has typed something.

use crate::catalog::CpuCatalog;

/// Candidates whose lowercase form contains the lowercase query.
///
/// Returns an empty list for an empty query. Order follows `candidates`,
/// with no deduplication and no limit.
pub fn filter<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|candidate| candidate.to_lowercase().contains(&query_lower))
        .collect()
}

/// A fixed candidate set that can be filtered by any number of queries.
///
/// Holds no query state; committing a pick is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct FilterableSelector {
    candidates: Vec<String>,
}

impl FilterableSelector {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    /// Selector over every name in the catalog, in file order.
    pub fn from_catalog(catalog: &CpuCatalog) -> Self {
        Self::new(catalog.names())
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn filter(&self, query: &str) -> Vec<&str> {
        let matches = filter(&self.candidates, query);
        tracing::trace!(query, matches = matches.len(), "Filtered selector candidates");
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names() -> Vec<String> {
        [
            "AMD Ryzen 9 7950X",
            "AMD Ryzen 7 7700X",
            "Intel Core i9-13900K",
            "Intel Core i5-13600K",
            "Apple M2",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_empty_query_shows_nothing() {
        assert!(filter(&names(), "").is_empty());
    }

    #[test]
    fn test_case_insensitive_contains() {
        assert_eq!(filter(&["Ryzen 9"], "ryzen"), vec!["Ryzen 9"]);
        assert_eq!(
            filter(&names(), "13"),
            vec!["Intel Core i9-13900K", "Intel Core i5-13600K"]
        );
    }

    #[test]
    fn test_matches_inside_the_name_not_just_prefix() {
        assert_eq!(filter(&names(), "7700"), vec!["AMD Ryzen 7 7700X"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        assert!(filter(&names(), "snapdragon").is_empty());
    }

    #[test]
    fn test_full_name_self_match_includes_superstrings() {
        let candidates = vec!["Core i7", "Core i7-12700", "Xeon"];
        assert_eq!(filter(&candidates, "Core i7"), vec!["Core i7", "Core i7-12700"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let candidates = vec!["Dup", "Other", "Dup"];
        assert_eq!(filter(&candidates, "dup"), vec!["Dup", "Dup"]);
    }

    #[test]
    fn test_longer_query_narrows_results() {
        let candidates = names();
        let queries = ["a", "am", "amd", "amd ryzen", "amd ryzen 9"];
        for pair in queries.windows(2) {
            let wider = filter(&candidates, pair[0]);
            let narrower = filter(&candidates, pair[1]);
            assert!(narrower.iter().all(|name| wider.contains(name)));
        }
    }

    #[test]
    fn test_selector_is_stateless() {
        let selector = FilterableSelector::new(names());
        let first = selector.filter("intel");
        let _ = selector.filter("apple");
        assert_eq!(selector.filter("intel"), first);
    }
}
