//! Store: the seam between search operations and wherever films live.
//!
//! [`FilmStore`] is implemented by the MongoDB adapter in `filmdb-mongo` and
//! by [`MemoryStore`], an in-process collection used for offline runs and
//! tests. Stores only read; no operation mutates a document.

use crate::filter::SearchFilter;
use crate::types::Document;
use bson::Bson;
use std::path::Path;

/// Failures surfaced by a [`FilmStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or refused the connection.
    #[error("connection failed: {0}")]
    Connection(String),
    /// The store rejected or failed to run a query.
    #[error("query failed: {0}")]
    Query(String),
    /// The search term produced a pattern the store cannot compile.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// An offline data file could not be read or parsed.
    #[error("invalid film data: {0}")]
    Data(String),
}

/// Read access to a film collection.
pub trait FilmStore {
    /// Round-trip to the store to confirm it is reachable.
    fn ping(&self) -> Result<(), StoreError>;

    /// First document matching `filter`, if any.
    fn find_one(&self, filter: &SearchFilter) -> Result<Option<Document>, StoreError>;

    /// Every document matching `filter`, in store order.
    fn find(&self, filter: &SearchFilter) -> Result<Vec<Document>, StoreError>;
}

impl<S: FilmStore + ?Sized> FilmStore for Box<S> {
    fn ping(&self) -> Result<(), StoreError> {
        (**self).ping()
    }

    fn find_one(&self, filter: &SearchFilter) -> Result<Option<Document>, StoreError> {
        (**self).find_one(filter)
    }

    fn find(&self, filter: &SearchFilter) -> Result<Vec<Document>, StoreError> {
        (**self).find(filter)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Films held in memory, filtered with [`SearchFilter::matcher`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    films: Vec<Document>,
}

impl MemoryStore {
    pub fn new(films: Vec<Document>) -> Self {
        Self { films }
    }

    /// Parse a JSON array of film documents. Extended JSON such as
    /// `{"$oid": "..."}` is accepted.
    pub fn from_json_str(text: &str) -> Result<Self, StoreError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| StoreError::Data(e.to_string()))?;
        let serde_json::Value::Array(items) = value else {
            return Err(StoreError::Data("expected a JSON array of films".to_string()));
        };

        let films = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match Bson::try_from(item) {
                Ok(Bson::Document(doc)) => Ok(doc),
                Ok(other) => Err(StoreError::Data(format!(
                    "film {i} is not a document: {other}"
                ))),
                Err(e) => Err(StoreError::Data(format!("film {i}: {e}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(films))
    }

    /// Read [`MemoryStore::from_json_str`] input from a file.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Data(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn documents(&self) -> &[Document] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

impl FilmStore for MemoryStore {
    fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn find_one(&self, filter: &SearchFilter) -> Result<Option<Document>, StoreError> {
        let matcher = filter.matcher()?;
        Ok(self.films.iter().find(|doc| matcher.matches(doc)).cloned())
    }

    fn find(&self, filter: &SearchFilter) -> Result<Vec<Document>, StoreError> {
        let matcher = filter.matcher()?;
        Ok(self
            .films
            .iter()
            .filter(|doc| matcher.matches(doc))
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchMode;
    use bson::doc;
    use pretty_assertions::assert_eq;

    fn store() -> MemoryStore {
        MemoryStore::new(vec![
            doc! { "titel": "The Matrix", "genre": "Sci-Fi", "acteurs": ["Keanu Reeves"] },
            doc! { "titel": "John Wick", "genre": "Action", "acteurs": ["Keanu Reeves"] },
            doc! { "titel": "Heat", "genre": "Crime", "acteurs": ["Al Pacino", "Robert De Niro"] },
        ])
    }

    fn literal(field: &str, term: &str) -> SearchFilter {
        SearchFilter::new(field, term, MatchMode::Literal)
    }

    #[test]
    fn find_one_returns_first_match_in_store_order() {
        let found = store().find_one(&literal("acteurs", "keanu")).unwrap().unwrap();
        assert_eq!(found.get_str("titel").unwrap(), "The Matrix");
    }

    #[test]
    fn find_returns_every_match() {
        let titles: Vec<_> = store()
            .find(&literal("acteurs", "reeves"))
            .unwrap()
            .iter()
            .map(|d| d.get_str("titel").unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["The Matrix", "John Wick"]);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        assert!(store().find_one(&literal("titel", "xyz")).unwrap().is_none());
        assert!(store().find(&literal("genre", "western")).unwrap().is_empty());
    }

    #[test]
    fn bad_pattern_is_a_store_error() {
        let filter = SearchFilter::new("titel", "[", MatchMode::Pattern);
        assert!(matches!(
            store().find(&filter),
            Err(StoreError::InvalidPattern(_))
        ));
    }

    #[test]
    fn parses_extended_json_array() {
        let store = MemoryStore::from_json_str(
            r#"[{"_id":{"$oid":"65a1b2c3d4e5f60718293a4b"},"titel":"Heat"},{"titel":"Ronin"}]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 2);
        let heat = store.find_one(&literal("titel", "heat")).unwrap().unwrap();
        assert!(heat.get_object_id("_id").is_ok());
    }

    #[test]
    fn rejects_non_array_and_non_document_input() {
        assert!(matches!(
            MemoryStore::from_json_str(r#"{"titel":"Heat"}"#),
            Err(StoreError::Data(_))
        ));
        assert!(matches!(
            MemoryStore::from_json_str(r#"[1, 2]"#),
            Err(StoreError::Data(_))
        ));
        assert!(matches!(
            MemoryStore::from_json_str("not json"),
            Err(StoreError::Data(_))
        ));
    }

    #[test]
    fn missing_file_is_a_data_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            MemoryStore::from_json_file(&dir.path().join("films.json")),
            Err(StoreError::Data(_))
        ));
    }
}
