//! Document formatter: renders a stored document as indented text.
//!
//! The document is first serialized to compact relaxed extended JSON
//! ([`canonical_json`]), then re-scanned one character at a time by
//! [`pretty`]. The scanner only ever inserts whitespace outside string
//! literals, so parsing the output yields the same document.
//!
//! # Rules (outside string literals)
//!
//! | Input        | Output                                          |
//! |--------------|-------------------------------------------------|
//! | `{` / `[`    | bracket, newline, indent one level deeper       |
//! | `}` / `]`    | newline, indent one level shallower, bracket    |
//! | `,`          | comma, newline, current indent                  |
//! | `:`          | colon, one space                                |
//! | anything else| unchanged                                       |
//!
//! One level is [`INDENT_WIDTH`] spaces. The level never drops below zero,
//! even for unbalanced input.

use crate::types::Document;
use bson::Bson;
use std::io::{self, Write};

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Outside,
    /// Inside a string literal. `escaped` is set right after a backslash.
    Quoted { escaped: bool },
}

/// Re-indent compact JSON text.
pub fn pretty(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut level: usize = 0;
    let mut state = Scan::Outside;

    for c in text.chars() {
        match state {
            Scan::Quoted { escaped: true } => {
                out.push(c);
                state = Scan::Quoted { escaped: false };
            }
            Scan::Quoted { escaped: false } => {
                out.push(c);
                match c {
                    '\\' => state = Scan::Quoted { escaped: true },
                    '"' => state = Scan::Outside,
                    _ => {}
                }
            }
            Scan::Outside => match c {
                '"' => {
                    out.push(c);
                    state = Scan::Quoted { escaped: false };
                }
                '{' | '[' => {
                    level += 1;
                    out.push(c);
                    out.push('\n');
                    push_indent(&mut out, level);
                }
                '}' | ']' => {
                    level = level.saturating_sub(1);
                    out.push('\n');
                    push_indent(&mut out, level);
                    out.push(c);
                }
                ',' => {
                    out.push(c);
                    out.push('\n');
                    push_indent(&mut out, level);
                }
                ':' => {
                    out.push(c);
                    out.push(' ');
                }
                _ => out.push(c),
            },
        }
    }

    out
}

fn push_indent(out: &mut String, level: usize) {
    out.extend(std::iter::repeat(' ').take(level * INDENT_WIDTH));
}

/// Write [`pretty`] output for `text` to `out`.
pub fn write_pretty<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(pretty(text).as_bytes())
}

/// Compact relaxed extended JSON for `doc`, fields in stored order.
pub fn canonical_json(doc: &Document) -> serde_json::Result<String> {
    let value = Bson::Document(doc.clone()).into_relaxed_extjson();
    serde_json::to_string(&value)
}

/// Print one document the way the console shows it: a blank line, the
/// indented body, then a newline.
pub fn print_document<W: Write>(out: &mut W, doc: &Document) -> io::Result<()> {
    let text = canonical_json(doc).map_err(io::Error::other)?;
    writeln!(out)?;
    write_pretty(out, &text)?;
    writeln!(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
