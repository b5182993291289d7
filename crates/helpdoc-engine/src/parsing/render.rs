//! Block-to-HTML emission.

use super::{blocks::Block, escape, inline, table};

/// Renders one block to its HTML string.
pub fn block_html(block: &Block) -> String {
    match block {
        Block::Heading { level, text, id } => {
            format!(r#"<h{level} id="{id}">{text}</h{level}>"#)
        }
        Block::Paragraph { text } => format!("<p>{text}</p>"),
        Block::CodeBlock { lines } => {
            format!(
                "<pre><code>{}</code></pre>",
                escape::escape_code(&lines.join("\n"))
            )
        }
        Block::Table { rows } => table::render(rows),
        Block::Blockquote { lines } => {
            let mut html = String::from("<blockquote>");
            // Each quoted physical line stays its own block, like
            // paragraphs outside the quote.
            for line in lines {
                html.push_str("<p>");
                html.push_str(&inline::transform(line));
                html.push_str("</p>");
            }
            html.push_str("</blockquote>");
            html
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let mut html = format!("<{tag}>");
            for item in items {
                html.push_str("<li>");
                html.push_str(&inline::transform(item));
                html.push_str("</li>");
            }
            html.push_str(&format!("</{tag}>"));
            html
        }
        Block::HorizontalRule => "<hr>".to_string(),
    }
}
