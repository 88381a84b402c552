//! filmdb: interactive film database search.
//!
//! Search a MongoDB film collection by title, genre or actor and print every
//! match as indented JSON. The binary is a thin wrapper around [`session`],
//! which is exposed here so integration tests can drive a whole run against
//! an in-memory store.
//!
//! # Architecture
//!
//! ```text
//! main ──► session ──► Menu ──► FilmCatalog ──► FilmStore (Mongo | Memory)
//!                        │
//!                        └──► report ──► format
//! ```

use filmdb_core::config::{SearchConfig, StoreConfig};
use filmdb_core::search::ConnectionState;
use filmdb_core::{FilmCatalog, FilmStore, MemoryStore, StoreError};
use filmdb_menu::Menu;
use filmdb_mongo::MongoStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user chose exit or input ended.
    Clean,
    /// The store could not be opened or did not answer at startup.
    Unreachable,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Clean => 0,
            Exit::Unreachable => 1,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Where films are read from.
#[derive(Debug, Clone)]
pub enum Source {
    Mongo(StoreConfig),
    /// A JSON array of film documents, searched in memory.
    File(PathBuf),
}

/// Construct the store for `source`. Does not contact a server.
pub fn open_store(source: &Source) -> Result<Box<dyn FilmStore>, StoreError> {
    match source {
        Source::Mongo(cfg) => {
            tracing::info!(
                uri = %cfg.uri,
                database = %cfg.database,
                collection = %cfg.collection,
                "using mongodb"
            );
            Ok(Box::new(MongoStore::from_config(cfg)?))
        }
        Source::File(path) => {
            let store = MemoryStore::from_json_file(path)?;
            tracing::info!(
                path = %path.display(),
                films = store.len(),
                "using offline film data"
            );
            Ok(Box::new(store))
        }
    }
}

/// Ping the store, then run the menu until the user exits.
///
/// An unreachable store is reported on `err` and ends the session with
/// [`Exit::Unreachable`] before the menu is shown.
pub fn session<S, R, O, E>(
    store: S,
    search: SearchConfig,
    input: R,
    out: O,
    mut err: E,
) -> io::Result<Exit>
where
    S: FilmStore,
    R: BufRead,
    O: Write,
    E: Write,
{
    let catalog = FilmCatalog::open(store, search);
    if let ConnectionState::Unreachable(reason) = catalog.connection_state() {
        writeln!(err, "Database error: {reason}")?;
        writeln!(
            err,
            "Could not connect to the database. Check that MongoDB is running."
        )?;
        return Ok(Exit::Unreachable);
    }

    Menu::new(&catalog, input, out, &mut err).run()?;
    Ok(Exit::Clean)
}
