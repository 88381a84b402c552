//! Core types for filmdb-core.
//!
//! This module defines the small vocabulary shared by every layer: the
//! [`SearchField`] a user can search on, and the [`MatchMode`] that decides
//! how a search term is turned into a pattern.

use serde::Deserialize;

/// A stored film record. The schema is owned by the store; filmdb only
/// filters and displays it.
pub type Document = bson::Document;

/// Which film attribute a search runs against.
///
/// The actual document field name for each variant comes from
/// [`SearchConfig`](crate::config::SearchConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Genre,
    Actor,
}

impl SearchField {
    /// Title searches stop at the first match; the others list every match.
    pub fn is_single(self) -> bool {
        matches!(self, SearchField::Title)
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Genre => write!(f, "genre"),
            SearchField::Actor => write!(f, "actor"),
        }
    }
}

/// How a search term is spliced into the substring pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The term is escaped and always matched as a literal substring.
    #[default]
    Literal,
    /// The term is inserted verbatim, so pattern metacharacters keep their
    /// meaning. An invalid pattern fails the query.
    Pattern,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Literal => write!(f, "literal"),
            MatchMode::Pattern => write!(f, "pattern"),
        }
    }
}
