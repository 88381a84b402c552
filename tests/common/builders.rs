//! Test builders: ergonomic constructors for film documents and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use bson::{doc, Bson, Document};
use filmdb_core::config::SearchConfig;
use filmdb_core::{FilmCatalog, MatchMode, MemoryStore};

// ---------------------------------------------------------------------------
// FilmBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for film documents shaped like the `films_db.films`
/// collection (`titel`, `genre`, `acteurs`, `jaar`).
///
/// # Example
///
/// ```rust
/// let film = FilmBuilder::new("Heat")
///     .genre("Crime")
///     .actor("Al Pacino")
///     .year(1995)
///     .build();
/// ```
pub struct FilmBuilder {
    doc: Document,
    actors: Vec<Bson>,
}

impl FilmBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        let title: String = title.into();
        Self {
            doc: doc! { "titel": title },
            actors: Vec::new(),
        }
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.doc.insert("genre", Bson::String(genre.into()));
        self
    }

    pub fn actor(mut self, actor: impl Into<String>) -> Self {
        self.actors.push(Bson::String(actor.into()));
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.doc.insert("jaar", year);
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Bson>) -> Self {
        let key: String = key.into();
        let value: Bson = value.into();
        self.doc.insert(key, value);
        self
    }

    pub fn build(mut self) -> Document {
        if !self.actors.is_empty() {
            self.doc.insert("acteurs", Bson::Array(self.actors));
        }
        self.doc
    }
}

// ---------------------------------------------------------------------------
// Catalog helpers
// ---------------------------------------------------------------------------

/// A connected catalog over `films` with the default field mapping.
pub fn memory_catalog(films: Vec<Document>) -> FilmCatalog<MemoryStore> {
    FilmCatalog::open(MemoryStore::new(films), SearchConfig::default())
}

/// Same as [`memory_catalog`] with an explicit match mode.
pub fn memory_catalog_with_mode(
    films: Vec<Document>,
    mode: MatchMode,
) -> FilmCatalog<MemoryStore> {
    let search = SearchConfig {
        match_mode: mode,
        ..SearchConfig::default()
    };
    FilmCatalog::open(MemoryStore::new(films), search)
}

/// Titles of `docs`, in order.
pub fn titles(docs: &[Document]) -> Vec<String> {
    docs.iter()
        .map(|d| d.get_str("titel").unwrap_or_default().to_string())
        .collect()
}
