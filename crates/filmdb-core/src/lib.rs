//! filmdb-core: film database search core.
//!
//! This crate holds everything between the menu and the database driver:
//! the filter builder, the document formatter, the store seam and the
//! search operations.
//!
//! # Architecture
//!
//! ```text
//! Menu ──► Search ──► Filter ──► Store
//!   ▲                              │
//!   └────────── Format ◄───────────┘
//! ```
//!
//! Everything runs on the calling thread. A search blocks until the store
//! answers.

pub mod config;
pub mod filter;
pub mod format;
pub mod search;
pub mod store;
pub mod types;

pub use filter::SearchFilter;
pub use search::{FilmCatalog, SearchError, SearchOutcome};
pub use store::{FilmStore, MemoryStore, StoreError};
pub use types::{Document, MatchMode, SearchField};
