//! The interactive menu loop.
//!
//! [`Menu::run`] prints the menu, reads a choice, reads a search term for
//! choices 1–3, dispatches to the [`FilmCatalog`] and reports the outcome,
//! until the user picks exit or input ends. Every failure short of an I/O
//! error on the console itself is reported and the loop continues.

use crate::choice::MenuChoice;
use crate::report::report;
use filmdb_core::{FilmCatalog, FilmStore};
use std::io::{self, BufRead, Write};

const MENU: &str = "\n=== Film Database Menu ===\n\
                    1. Search by title\n\
                    2. Search by genre\n\
                    3. Search by actor\n\
                    4. Exit\n\
                    Choice: ";

/// Where the loop is between two lines of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    AwaitingSearchTerm(filmdb_core::SearchField),
    Exit,
}

pub struct Menu<'c, S, R, O, E> {
    catalog: &'c FilmCatalog<S>,
    input: R,
    out: O,
    err: E,
    state: MenuState,
}

impl<'c, S, R, O, E> Menu<'c, S, R, O, E>
where
    S: FilmStore,
    R: BufRead,
    O: Write,
    E: Write,
{
    pub fn new(catalog: &'c FilmCatalog<S>, input: R, out: O, err: E) -> Self {
        Self {
            catalog,
            input,
            out,
            err,
            state: MenuState::AwaitingChoice,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Drive the loop to completion. Returns once the user exits or input
    /// reaches end of file.
    pub fn run(&mut self) -> io::Result<()> {
        while self.state != MenuState::Exit {
            self.step()?;
        }
        tracing::debug!("menu closed");
        Ok(())
    }

    /// Advance by one line of input.
    pub fn step(&mut self) -> io::Result<()> {
        match self.state {
            MenuState::AwaitingChoice => {
                self.show_menu()?;
                let Some(line) = self.read_line()? else {
                    self.state = MenuState::Exit;
                    return Ok(());
                };
                self.state = match MenuChoice::parse(&line) {
                    Ok(MenuChoice::Exit) => MenuState::Exit,
                    Ok(MenuChoice::Search(field)) => MenuState::AwaitingSearchTerm(field),
                    Err(e) => {
                        tracing::debug!(input = %line, error = ?e, "rejected menu input");
                        writeln!(self.err, "{e}")?;
                        MenuState::AwaitingChoice
                    }
                };
            }
            MenuState::AwaitingSearchTerm(field) => {
                write!(self.out, "Enter search term: ")?;
                self.out.flush()?;
                let Some(term) = self.read_line()? else {
                    self.state = MenuState::Exit;
                    return Ok(());
                };
                tracing::debug!(%field, term = %term, "dispatching search");
                let result = self.catalog.search(field, &term);
                report(&mut self.out, &mut self.err, field, &term, result)?;
                self.state = MenuState::AwaitingChoice;
            }
            MenuState::Exit => {}
        }
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.out.write_all(MENU.as_bytes())?;
        self.out.flush()
    }

    /// One line without its terminator, or `None` at end of input. Bytes
    /// that are not valid UTF-8 become U+FFFD.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
