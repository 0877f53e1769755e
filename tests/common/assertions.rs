//! Domain-specific assertion macros for ketani harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! query and outcome that broke the expectation.

/// Assert that searching `$catalog` for `$query` yields exactly `$titles`,
/// in order.
///
/// ```rust
/// assert_titles!(catalog, "freight", ["Logistics Services"]);
/// ```
#[macro_export]
macro_rules! assert_titles {
    ($catalog:expr, $query:expr, [$($title:expr),* $(,)?]) => {{
        let outcome = $catalog.search($query);
        let actual: Vec<String> = outcome.entries().iter().map(|e| e.title.clone()).collect();
        let expected: Vec<String> = vec![$($title.to_string()),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_titles! failed for query {:?} (outcome: {:?})",
            $query, outcome
        );
    }};
}

/// Assert that an outcome is the idle state, not a zero-match search.
#[macro_export]
macro_rules! assert_idle {
    ($outcome:expr) => {{
        let outcome = &$outcome;
        if !outcome.is_idle() {
            panic!("assert_idle! failed: expected idle, got {:?}", outcome);
        }
    }};
}

/// Assert that an outcome is a completed search with zero matches.
#[macro_export]
macro_rules! assert_no_match {
    ($outcome:expr) => {{
        let outcome = &$outcome;
        if !outcome.is_no_match() {
            panic!("assert_no_match! failed: expected zero matches, got {:?}", outcome);
        }
    }};
}
