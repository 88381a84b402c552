//! Console rendering of search results.
//!
//! Results go to `out`, failures to `err`. Genre and actor searches always
//! print their heading, then either the films or a fixed "none found" line.

use filmdb_core::format::print_document;
use filmdb_core::{SearchError, SearchField, SearchOutcome};
use std::io::{self, Write};

pub fn report<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    field: SearchField,
    term: &str,
    result: Result<SearchOutcome, SearchError>,
) -> io::Result<()> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(SearchError::NotConnected) => {
            return writeln!(err, "No connection to the database");
        }
        Err(SearchError::Query(e)) => {
            tracing::warn!(%field, error = %e, "search failed");
            return writeln!(err, "Search error: {e}");
        }
    };

    match field {
        SearchField::Title => match &outcome {
            SearchOutcome::NoResults => writeln!(out, "No film found with title: {term}"),
            found => {
                writeln!(out, "\nFound film:")?;
                print_all(out, found)
            }
        },
        SearchField::Genre => {
            writeln!(out, "\nFilms in genre {term}:")?;
            print_or(out, &outcome, "No films found in this genre.")
        }
        SearchField::Actor => {
            writeln!(out, "\nFilms with actor {term}:")?;
            print_or(out, &outcome, "No films found with this actor.")
        }
    }
}

fn print_all<O: Write>(out: &mut O, outcome: &SearchOutcome) -> io::Result<()> {
    for doc in outcome.documents() {
        print_document(out, doc)?;
    }
    Ok(())
}

fn print_or<O: Write>(out: &mut O, outcome: &SearchOutcome, empty: &str) -> io::Result<()> {
    if outcome.documents().is_empty() {
        writeln!(out, "{empty}")
    } else {
        print_all(out, outcome)
    }
}
