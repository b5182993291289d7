//! Markdown help-documentation rendering engine.
//!
//! Renders the constrained Markdown dialect used by the help
//! documentation store to HTML, and extracts a table-of-contents outline
//! from the headings. [`parse`] is pure and stateless: it takes one
//! document string and returns the markup plus the ordered outline.
//!
//! Inline content outside fenced code is not HTML-escaped, so input must
//! come from a trusted documentation source.

pub mod io;
pub mod parsing;

pub use io::{HelpDoc, SourceError, doc_ids, read_doc, scan_help_docs, validate_docs_dir};
pub use parsing::{ParseResult, TocEntry, parse};
