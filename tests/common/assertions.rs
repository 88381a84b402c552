//! Domain-specific assertion macros for filmdb harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which search or formatting rule was violated.

// ---------------------------------------------------------------------------
// Search result assertions
// ---------------------------------------------------------------------------

/// Assert that a search outcome lists exactly these titles, in order.
///
/// ```rust
/// assert_titles!(catalog.search_by_genre("crime").unwrap(), ["Heat"]);
/// ```
#[macro_export]
macro_rules! assert_titles {
    ($outcome:expr, [$($title:expr),* $(,)?]) => {{
        let outcome: &filmdb_core::SearchOutcome = &$outcome;
        let expected: Vec<String> = vec![$($title.to_string()),*];
        let actual = $crate::common::titles(outcome.documents());
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_titles! failed for outcome {:?}", outcome
        );
    }};
}

/// Assert that a search outcome found nothing.
#[macro_export]
macro_rules! assert_no_results {
    ($outcome:expr) => {{
        let outcome: &filmdb_core::SearchOutcome = &$outcome;
        if *outcome != filmdb_core::SearchOutcome::NoResults {
            panic!(
                "assert_no_results! failed: found {:?}",
                $crate::common::titles(outcome.documents())
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Formatter assertions
// ---------------------------------------------------------------------------

/// Assert that every line of formatted output is indented by a whole number
/// of levels and never deeper than one level past the previous line.
pub fn assert_indent_steps(formatted: &str) {
    let mut previous = 0usize;
    for (n, line) in formatted.lines().enumerate() {
        let indent = line.len() - line.trim_start_matches(' ').len();
        assert_eq!(
            indent % filmdb_core::format::INDENT_WIDTH,
            0,
            "line {n} has a partial indent: {line:?}"
        );
        assert!(
            n == 0 || indent <= previous + filmdb_core::format::INDENT_WIDTH,
            "line {n} jumps more than one level: {line:?}"
        );
        previous = indent;
    }
}

/// Assert that `formatted` parses back to the same JSON value as `compact`.
pub fn assert_same_structure(compact: &str, formatted: &str) {
    let before: serde_json::Value = serde_json::from_str(compact).expect("compact input parses");
    let after: serde_json::Value = serde_json::from_str(formatted)
        .unwrap_or_else(|e| panic!("formatted output does not parse ({e}):\n{formatted}"));
    pretty_assertions::assert_eq!(after, before);
}
