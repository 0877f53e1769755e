//! Search layer — keyword matching over the site catalog.
//!
//! Matching is plain case-insensitive substring containment against an
//! entry's title, description and keywords. There is no tokenization, no
//! fuzzy matching and no relevance ranking: results come back in catalog
//! order and every match is returned.
//!
//! A query whose trimmed form is empty is not a search at all. It evaluates
//! to [`SearchOutcome::Idle`], which callers must keep distinct from a search
//! that matched nothing.

use crate::{catalog::SearchCatalog, types::SearchEntry};

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of evaluating one query against a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No search is active (blank query).
    #[default]
    Idle,
    /// A search ran. `entries` may be empty.
    Matches {
        /// The raw query text the entries were filtered by.
        query: String,
        entries: Vec<SearchEntry>,
    },
}

impl SearchOutcome {
    /// Matching entries in catalog order; empty for [`SearchOutcome::Idle`].
    pub fn entries(&self) -> &[SearchEntry] {
        match self {
            SearchOutcome::Idle => &[],
            SearchOutcome::Matches { entries, .. } => entries,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SearchOutcome::Idle)
    }

    /// `true` only for a search that ran and matched nothing.
    pub fn is_no_match(&self) -> bool {
        matches!(self, SearchOutcome::Matches { entries, .. } if entries.is_empty())
    }

    /// The query this outcome was computed for, if a search ran.
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchOutcome::Idle => None,
            SearchOutcome::Matches { query, .. } => Some(query),
        }
    }
}

// ---------------------------------------------------------------------------
// Match surface
// ---------------------------------------------------------------------------

/// Lowercased copies of the fields an entry can match on, built once per
/// entry when the catalog is constructed.
#[derive(Debug, Clone)]
pub(crate) struct MatchSurface {
    title: String,
    description: String,
    keywords: Vec<String>,
}

impl MatchSurface {
    pub(crate) fn new(entry: &SearchEntry) -> Self {
        Self {
            title: entry.title.to_lowercase(),
            description: entry.description.to_lowercase(),
            keywords: entry.keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// `needle` must already be lowercase.
    pub(crate) fn contains(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.description.contains(needle)
            || self.keywords.iter().any(|k| k.contains(needle))
    }
}

// ---------------------------------------------------------------------------
// Query evaluation
// ---------------------------------------------------------------------------

/// Lowercase `query` for matching, or `None` when it is blank.
///
/// Only the emptiness check uses the trimmed text; surrounding whitespace in
/// a non-blank query stays part of the needle.
pub fn normalize(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Whether a single entry matches `query`. Blank queries match nothing.
pub fn matches(entry: &SearchEntry, query: &str) -> bool {
    normalize(query).is_some_and(|needle| MatchSurface::new(entry).contains(&needle))
}

/// Evaluate `query` against every entry of `catalog`.
pub fn evaluate(catalog: &SearchCatalog, query: &str) -> SearchOutcome {
    let Some(needle) = normalize(query) else {
        return SearchOutcome::Idle;
    };

    let entries: Vec<SearchEntry> = catalog
        .indexed()
        .filter(|indexed| indexed.surface.contains(&needle))
        .map(|indexed| indexed.entry.clone())
        .collect();

    tracing::debug!(query, matched = entries.len(), "search: evaluated");

    SearchOutcome::Matches {
        query: query.to_string(),
        entries,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn titles(outcome: &SearchOutcome) -> Vec<&str> {
        outcome.entries().iter().map(|e| e.title.as_str()).collect()
    }

    fn ocean() -> SearchEntry {
        SearchEntry {
            title: "Ocean Services".to_string(),
            path: "/services".to_string(),
            description: "international shipping".to_string(),
            keywords: vec!["freight".to_string()],
            category: Category::Service,
            is_download: false,
        }
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tabs_and_newlines("\t\n ")]
    fn blank_query_is_idle(#[case] query: &str) {
        let outcome = evaluate(&SearchCatalog::builtin(), query);
        assert!(outcome.is_idle());
        assert!(!outcome.is_no_match());
        assert!(outcome.entries().is_empty());
    }

    #[rstest]
    #[case::keyword("freight")]
    #[case::title("ocean")]
    #[case::description("shipping")]
    #[case::upper_title("OCEAN")]
    fn any_field_matches(#[case] query: &str) {
        assert!(matches(&ocean(), query));
    }

    #[test]
    fn blank_query_matches_no_entry() {
        assert!(!matches(&ocean(), " "));
    }

    #[test]
    fn no_match_is_not_idle() {
        let outcome = evaluate(&SearchCatalog::builtin(), "zzz");
        assert!(outcome.is_no_match());
        assert_eq!(outcome.query(), Some("zzz"));
    }

    #[test]
    fn freight_on_builtin_catalog() {
        let outcome = evaluate(&SearchCatalog::builtin(), "freight");
        assert_eq!(
            titles(&outcome),
            vec!["Logistics Services", "Freight Transportation"]
        );
    }

    #[test]
    fn multi_word_keyword_is_a_single_surface() {
        let outcome = evaluate(&SearchCatalog::builtin(), "who we");
        assert_eq!(titles(&outcome), vec!["About Us"]);
    }

    #[test]
    fn inner_whitespace_is_part_of_the_needle() {
        // "chain" alone appears once; " chain" still only in the phrase
        let outcome = evaluate(&SearchCatalog::builtin(), " chain");
        assert_eq!(titles(&outcome), vec!["Supply Chain Management"]);
    }

    #[test]
    fn non_alphanumeric_query_is_total() {
        let outcome = evaluate(&SearchCatalog::builtin(), "&");
        assert_eq!(titles(&outcome), vec!["Hypermedia & News"]);
        assert!(evaluate(&SearchCatalog::builtin(), "¿¡").is_no_match());
    }
}
