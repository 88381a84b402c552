//! Filter builder: case-insensitive substring predicates over one field.
//!
//! A [`SearchFilter`] is built fresh for every search and consumed by the
//! store. It renders to the MongoDB query shape
//! `{ <field>: { "$regex": <pattern>, "$options": "i" } }` through
//! [`SearchFilter::to_document`], and can be evaluated in-process through
//! [`SearchFilter::matcher`] for stores that hold documents in memory.

use crate::types::{Document, MatchMode};
use bson::{doc, Bson};
use regex::{Regex, RegexBuilder};

/// "Field contains term, ignoring case." Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    field: String,
    term: String,
    mode: MatchMode,
}

impl SearchFilter {
    pub fn new(field: impl Into<String>, term: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            field: field.into(),
            term: term.into(),
            mode,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The unanchored pattern sent to the store. Case-insensitivity is
    /// carried separately as the `i` option.
    pub fn pattern(&self) -> String {
        match self.mode {
            MatchMode::Literal => regex::escape(&self.term),
            MatchMode::Pattern => format!(".*{}.*", self.term),
        }
    }

    /// MongoDB query document for this filter.
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        filter.insert(
            self.field.clone(),
            doc! { "$regex": self.pattern(), "$options": "i" },
        );
        filter
    }

    /// Compile the filter for in-process evaluation.
    ///
    /// Fails only in [`MatchMode::Pattern`] when the raw term is not a valid
    /// pattern.
    pub fn matcher(&self) -> Result<FilterMatcher<'_>, regex::Error> {
        let regex = RegexBuilder::new(&self.pattern())
            .case_insensitive(true)
            .build()?;
        Ok(FilterMatcher {
            field: &self.field,
            regex,
        })
    }
}

/// A compiled [`SearchFilter`], reusable across the documents of one query.
#[derive(Debug)]
pub struct FilterMatcher<'a> {
    field: &'a str,
    regex: Regex,
}

impl FilterMatcher<'_> {
    /// `true` when the document has the field and its value matches.
    ///
    /// Strings are tested directly, arrays match when any element does, and
    /// numbers, booleans and object ids are coerced to text. Missing fields,
    /// nulls and embedded documents never match.
    pub fn matches(&self, doc: &Document) -> bool {
        match doc.get(self.field) {
            Some(Bson::Array(items)) => items.iter().any(|item| self.scalar_matches(item)),
            Some(value) => self.scalar_matches(value),
            None => false,
        }
    }

    fn scalar_matches(&self, value: &Bson) -> bool {
        match value {
            Bson::String(s) | Bson::Symbol(s) => self.regex.is_match(s),
            Bson::Int32(n) => self.regex.is_match(&n.to_string()),
            Bson::Int64(n) => self.regex.is_match(&n.to_string()),
            Bson::Double(n) => self.regex.is_match(&n.to_string()),
            Bson::Boolean(b) => self.regex.is_match(&b.to_string()),
            Bson::ObjectId(id) => self.regex.is_match(&id.to_hex()),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
