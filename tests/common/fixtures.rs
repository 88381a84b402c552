//! Static film data used across harnesses.

use bson::Document;
use filmdb_core::MemoryStore;

/// A small collection in the shape of `films_db.films`, as extended JSON.
pub const FILMS_JSON: &str = r#"[
  {"_id": {"$oid": "65a1b2c3d4e5f60718293a01"}, "titel": "The Matrix", "genre": "Sci-Fi", "jaar": 1999,
   "acteurs": ["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss"]},
  {"_id": {"$oid": "65a1b2c3d4e5f60718293a02"}, "titel": "The Matrix Reloaded", "genre": "Sci-Fi", "jaar": 2003,
   "acteurs": ["Keanu Reeves", "Carrie-Anne Moss"]},
  {"_id": {"$oid": "65a1b2c3d4e5f60718293a03"}, "titel": "Heat", "genre": "Crime", "jaar": 1995,
   "acteurs": ["Al Pacino", "Robert De Niro"]},
  {"_id": {"$oid": "65a1b2c3d4e5f60718293a04"}, "titel": "Mr. Nobody", "genre": "Drama", "jaar": 2009,
   "acteurs": ["Jared Leto"]},
  {"_id": {"$oid": "65a1b2c3d4e5f60718293a05"}, "titel": "Léon: The Professional", "genre": "Crime", "jaar": 1994,
   "acteurs": ["Jean Reno", "Natalie Portman"], "tagline": "If you want a job done well, {hire} a professional: \"Léon\"."}
]"#;

/// [`FILMS_JSON`] parsed into documents, in file order.
pub fn films() -> Vec<Document> {
    MemoryStore::from_json_str(FILMS_JSON)
        .expect("fixture films must parse")
        .documents()
        .to_vec()
}

/// Write [`FILMS_JSON`] into `dir` and return the file path.
pub fn films_file(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("films.json");
    std::fs::write(&path, FILMS_JSON).expect("write fixture file");
    path
}
