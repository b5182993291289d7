//! # Markdown Parsing
//!
//! Line-oriented parsing of the help-documentation Markdown dialect.
//!
//! ## Pipeline
//!
//! 1. **Block scanning** (`blocks`): a state machine walks the physical
//!    lines and produces an ordered, flat sequence of [`Block`]s
//! 2. **Inline transformation** (`inline`): code spans, images, links,
//!    and emphasis inside a single text fragment
//! 3. **Rendering** (`render`, `table`): each block becomes one HTML
//!    string, assembled in document order
//!
//! ## Modules
//!
//! - **`blocks`**: block scanner and per-kind line syntax
//! - **`inline`**: fixed-order inline span substitution
//! - **`table`**: table row handling and rendering
//! - **`slug`**: heading ids for TOC navigation
//! - **`escape`**: HTML escaping for fenced code content
//! - **`render`**: block-to-HTML emission
//!
//! ## Key invariants
//!
//! - Blocks never nest; emission order equals source order
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Every TOC entry id equals the id attribute on its heading element

pub mod blocks;
pub mod escape;
pub mod inline;
pub mod render;
pub mod slug;
pub mod table;

use serde::{Deserialize, Serialize};

use blocks::Block;

/// One heading in the document outline.
///
/// Entries appear in document order. Ids are not deduplicated: two
/// headings with the same text produce two identical entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level, 1 through [`TocEntry::MAX_LEVEL`].
    pub level: u8,
    /// Rendered heading text.
    pub text: String,
    /// Slug id, identical to the `id` attribute on the heading element.
    pub id: String,
}

impl TocEntry {
    /// Deepest heading level that appears in the outline.
    pub const MAX_LEVEL: u8 = 3;
}

/// The result of rendering one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// The rendered HTML, blocks joined with single newlines.
    pub markup: String,
    /// The heading outline, in document order.
    pub toc: Vec<TocEntry>,
}

/// Renders one Markdown document to HTML and extracts its outline.
///
/// Pure function: no state is retained between calls and the same input
/// always yields the same [`ParseResult`]. Malformed constructs degrade
/// to literal text rather than raising errors.
pub fn parse(input: &str) -> ParseResult {
    let blocks = blocks::scan(input);

    let mut toc = Vec::new();
    let mut parts = Vec::with_capacity(blocks.len());
    for block in &blocks {
        if let Block::Heading { level, text, id } = block
            && *level <= TocEntry::MAX_LEVEL
        {
            toc.push(TocEntry {
                level: *level,
                text: text.clone(),
                id: id.clone(),
            });
        }
        parts.push(render::block_html(block));
    }

    ParseResult {
        markup: parts.join("\n"),
        toc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_id_matches_toc_id() {
        let result = parse("## Receipt Layout");
        assert_eq!(result.toc.len(), 1);
        assert_eq!(result.toc[0].id, "receipt-layout");
        assert!(result.markup.contains(r#"<h2 id="receipt-layout">"#));
    }

    #[test]
    fn deep_headings_render_but_stay_out_of_toc() {
        let result = parse("#### Advanced\n##### Deeper\n###### Deepest");
        assert!(result.toc.is_empty());
        assert!(result.markup.contains(r#"<h4 id="advanced">"#));
        assert!(result.markup.contains(r#"<h6 id="deepest">"#));
    }

    #[test]
    fn blank_document_yields_empty_result() {
        let result = parse("\n\n\n");
        assert_eq!(result.markup, "");
        assert!(result.toc.is_empty());
    }

    #[test]
    fn parse_is_deterministic() {
        let input = "# One\n\ntext with **bold *and* nested***\n\n| a |\n| - |\n| b |";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn duplicate_headings_keep_duplicate_ids() {
        let result = parse("# Setup\n# Setup");
        assert_eq!(result.toc.len(), 2);
        assert_eq!(result.toc[0], result.toc[1]);
    }
}
