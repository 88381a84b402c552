//! Search operations: title, genre and actor lookups over a [`FilmStore`].
//!
//! [`FilmCatalog`] owns the store for the whole session together with the
//! connection flag recorded at startup. Every operation builds a fresh
//! [`SearchFilter`], runs it, and returns an explicit [`SearchOutcome`] or
//! [`SearchError`]; nothing is printed here.

use crate::config::SearchConfig;
use crate::filter::SearchFilter;
use crate::store::{FilmStore, StoreError};
use crate::types::{Document, SearchField};

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Title search found its first match.
    Single(Document),
    /// Genre or actor search found one or more films.
    Multiple(Vec<Document>),
    /// Nothing matched.
    NoResults,
}

impl SearchOutcome {
    pub fn documents(&self) -> &[Document] {
        match self {
            SearchOutcome::Single(doc) => std::slice::from_ref(doc),
            SearchOutcome::Multiple(docs) => docs,
            SearchOutcome::NoResults => &[],
        }
    }
}

/// Why a search produced no outcome.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The store did not answer at startup.
    #[error("no connection to the database")]
    NotConnected,
    #[error(transparent)]
    Query(#[from] StoreError),
}

/// Whether the store answered the startup ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Unreachable(String),
}

/// Session context: the store, how fields map onto it, and whether it is
/// reachable.
pub struct FilmCatalog<S> {
    store: S,
    search: SearchConfig,
    state: ConnectionState,
}

impl<S: FilmStore> FilmCatalog<S> {
    /// Ping the store once and record the result. The state is never
    /// re-checked.
    pub fn open(store: S, search: SearchConfig) -> Self {
        let state = match store.ping() {
            Ok(()) => {
                tracing::debug!("store answered ping");
                ConnectionState::Connected
            }
            Err(e) => {
                tracing::error!(error = %e, "store unreachable");
                ConnectionState::Unreachable(e.to_string())
            }
        };
        Self { store, search, state }
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn connection_state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Filter for `term` on `field`, built fresh for each call.
    pub fn filter_for(&self, field: SearchField, term: &str) -> SearchFilter {
        SearchFilter::new(self.search.field_name(field), term, self.search.match_mode)
    }

    /// Run a search. Title searches return at most one film; genre and
    /// actor searches return every match.
    pub fn search(&self, field: SearchField, term: &str) -> Result<SearchOutcome, SearchError> {
        if !self.is_connected() {
            return Err(SearchError::NotConnected);
        }

        let filter = self.filter_for(field, term);
        tracing::debug!(
            %field,
            field_name = filter.field(),
            pattern = %filter.pattern(),
            mode = %filter.mode(),
            "running search"
        );

        let outcome = if field.is_single() {
            match self.store.find_one(&filter)? {
                Some(doc) => SearchOutcome::Single(doc),
                None => SearchOutcome::NoResults,
            }
        } else {
            let docs = self.store.find(&filter)?;
            if docs.is_empty() {
                SearchOutcome::NoResults
            } else {
                SearchOutcome::Multiple(docs)
            }
        };

        tracing::debug!(%field, hits = outcome.documents().len(), "search finished");
        Ok(outcome)
    }

    pub fn search_by_title(&self, title: &str) -> Result<SearchOutcome, SearchError> {
        self.search(SearchField::Title, title)
    }

    pub fn search_by_genre(&self, genre: &str) -> Result<SearchOutcome, SearchError> {
        self.search(SearchField::Genre, genre)
    }

    pub fn search_by_actor(&self, actor: &str) -> Result<SearchOutcome, SearchError> {
        self.search(SearchField::Actor, actor)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
