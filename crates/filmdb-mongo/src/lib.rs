//! filmdb-mongo: MongoDB store adapter for filmdb.
//!
//! [`MongoStore`] wraps the blocking `mongodb::sync` client. It is built once
//! in `main`, handed to [`filmdb_core::FilmCatalog`], and dropped when the
//! session ends. There is no process-wide driver state.

use bson::doc;
use filmdb_core::config::StoreConfig;
use filmdb_core::{Document, FilmStore, SearchFilter, StoreError};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::sync::{Client, Collection};

/// A film collection on a MongoDB server.
pub struct MongoStore {
    client: Client,
    database: String,
    films: Collection<Document>,
}

impl MongoStore {
    /// Build a client for `uri`. Only parses the connection string; the
    /// server is first contacted by [`FilmStore::ping`].
    pub fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).map_err(classify)?;
        let films = client.database(database).collection::<Document>(collection);
        tracing::debug!(database, collection, "mongo client created");
        Ok(Self {
            client,
            database: database.to_string(),
            films,
        })
    }

    pub fn from_config(cfg: &StoreConfig) -> Result<Self, StoreError> {
        Self::connect(&cfg.uri, &cfg.database, &cfg.collection)
    }
}

impl FilmStore for MongoStore {
    fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .run()
            .map(|_| ())
            .map_err(classify)
    }

    fn find_one(&self, filter: &SearchFilter) -> Result<Option<Document>, StoreError> {
        self.films
            .find_one(filter.to_document())
            .run()
            .map_err(classify)
    }

    fn find(&self, filter: &SearchFilter) -> Result<Vec<Document>, StoreError> {
        self.films
            .find(filter.to_document())
            .run()
            .map_err(classify)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(classify)
    }
}

/// Split driver errors into "could not reach the server" and everything
/// else.
fn classify(e: MongoError) -> StoreError {
    match e.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::Authentication { .. }
        | ErrorKind::InvalidArgument { .. } => StoreError::Connection(e.to_string()),
        _ => StoreError::Query(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
